//! Room status create/edit form
//!
//! - model.rs: form fields and API calls
//! - view_model.rs: form state and commands
//! - view.rs: Leptos component

mod model;
mod view;
mod view_model;

pub use view::RoomStatusForm;
pub use view_model::RoomStatusFormViewModel;
