//! Generic list table: column formatting, layout and row actions.

pub mod action;
pub mod cell;
pub mod column;
pub mod format;
pub mod layout;
pub mod status;
pub mod view;

/// One record of a fetched collection, shape depending on the endpoint
pub type Row = serde_json::Map<String, serde_json::Value>;

pub use action::RowAction;
pub use cell::{Cell, DisplayHint};
pub use column::{Column, ColumnKind};
pub use layout::RowOrder;
pub use view::DataTable;
