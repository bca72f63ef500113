pub mod option;

pub use option::RoomOption;
