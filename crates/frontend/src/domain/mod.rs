pub mod a001_booking;
pub mod a002_payment;
pub mod a003_inquiry;
pub mod a004_room;
pub mod a005_package;
pub mod a006_agent;
pub mod a007_room_status;
pub mod a008_non_availability;
