pub mod dto;

pub use dto::NonAvailabilityDto;
