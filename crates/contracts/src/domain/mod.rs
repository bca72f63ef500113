pub mod a004_room;
pub mod a005_package;
pub mod a007_room_status;
pub mod a008_non_availability;
pub mod common;
