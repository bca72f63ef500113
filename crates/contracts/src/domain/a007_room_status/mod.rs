pub mod dto;

pub use dto::{AvailabilityCounts, RoomStatusDto, ROOM_STATUS_FORM_FIELD};
