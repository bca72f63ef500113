//! Package create/edit form
//!
//! - model.rs: API calls
//! - view_model.rs: form state and commands
//! - view.rs: Leptos component

mod model;
mod view;
mod view_model;

pub use view::PackageForm;
pub use view_model::PackageFormViewModel;
