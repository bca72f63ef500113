//! Non-availability create form

mod view;

pub use view::NonAvailabilityForm;
