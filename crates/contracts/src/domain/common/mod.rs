//! Common types shared by all records

pub mod record_id;
pub mod record_status;

// Re-exports
pub use record_id::RecordId;
pub use record_status::{RecordStatus, StatusUpdate};
