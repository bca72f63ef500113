pub mod dto;

pub use dto::PackageDto;
