pub mod api;
pub mod components;
pub mod date_utils;
pub mod dialogs;
pub mod icons;
pub mod list_page;
pub mod rows;
pub mod table;
