//! Column descriptors.
//!
//! Pages describe columns with the accessor strings the API field names
//! suggest (`"Room.room_name"`, `"status.available"`, `"BookedBy"` ...).
//! The accessor is classified once into a [`ColumnKind`] when the column is
//! built, so the formatter dispatches on an enum instead of comparing
//! strings per cell.

use super::cell::Cell;
use super::Row;
use std::fmt;
use std::sync::Arc;

/// Caller-supplied cell renderer
pub type CellRenderer = Arc<dyn Fn(&Row) -> Cell + Send + Sync>;

/// Field of the nested `Room` object
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoomField {
    Name,
    Type,
}

impl RoomField {
    pub fn key(&self) -> &'static str {
        match self {
            RoomField::Name => "room_name",
            RoomField::Type => "type",
        }
    }
}

/// Counter stored inside a room-status record
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusCount {
    Available,
    Booked,
}

impl StatusCount {
    /// Key inside the structured / JSON-encoded status
    pub fn key(&self) -> &'static str {
        match self {
            StatusCount::Available => "available",
            StatusCount::Booked => "booked",
        }
    }

    /// Label used in the human-readable `"Available: 3, Booked: 1"` form
    pub fn label(&self) -> &'static str {
        match self {
            StatusCount::Available => "Available",
            StatusCount::Booked => "Booked",
        }
    }
}

#[derive(Clone)]
pub enum ColumnKind {
    /// `Room.room_name` / `Room.type`
    RoomField(RoomField),
    /// `date`, shown as DD/MM/YYYY
    Date,
    /// `status.available` / `status.booked`
    StatusCount(StatusCount),
    /// Synthetic: who made the booking
    BookedBy,
    /// Booking status with a display hint
    Status,
    /// Payment status with a display hint
    PaymentStatus,
    /// `room_images`: gallery of uploaded images
    RoomImages,
    /// `idProof`: single uploaded image
    IdProof,
    /// Long text shortened in the cell, full value on hover
    Truncated(String),
    /// Direct field lookup
    Field(String),
    Custom(CellRenderer),
}

impl ColumnKind {
    pub fn from_accessor(accessor: &str) -> Self {
        match accessor {
            "Room.room_name" => ColumnKind::RoomField(RoomField::Name),
            "Room.type" => ColumnKind::RoomField(RoomField::Type),
            "date" => ColumnKind::Date,
            "status.available" => ColumnKind::StatusCount(StatusCount::Available),
            "status.booked" => ColumnKind::StatusCount(StatusCount::Booked),
            "BookedBy" => ColumnKind::BookedBy,
            "status" => ColumnKind::Status,
            "paymentStatus" => ColumnKind::PaymentStatus,
            "room_images" => ColumnKind::RoomImages,
            "idProof" => ColumnKind::IdProof,
            "description" => ColumnKind::Truncated("description".to_string()),
            other => ColumnKind::Field(other.to_string()),
        }
    }
}

impl fmt::Debug for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::RoomField(field) => f.debug_tuple("RoomField").field(field).finish(),
            ColumnKind::Date => f.write_str("Date"),
            ColumnKind::StatusCount(count) => f.debug_tuple("StatusCount").field(count).finish(),
            ColumnKind::BookedBy => f.write_str("BookedBy"),
            ColumnKind::Status => f.write_str("Status"),
            ColumnKind::PaymentStatus => f.write_str("PaymentStatus"),
            ColumnKind::RoomImages => f.write_str("RoomImages"),
            ColumnKind::IdProof => f.write_str("IdProof"),
            ColumnKind::Truncated(key) => f.debug_tuple("Truncated").field(key).finish(),
            ColumnKind::Field(key) => f.debug_tuple("Field").field(key).finish(),
            ColumnKind::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Column {
    pub header: String,
    pub kind: ColumnKind,
}

impl Column {
    /// Column from an accessor string, e.g. `Column::new("Booked", "status.booked")`
    pub fn new(header: impl Into<String>, accessor: &str) -> Self {
        Self {
            header: header.into(),
            kind: ColumnKind::from_accessor(accessor),
        }
    }

    /// Long-text column for a field other than `description`
    pub fn truncated(header: impl Into<String>, field: &str) -> Self {
        Self {
            header: header.into(),
            kind: ColumnKind::Truncated(field.to_string()),
        }
    }

    /// Column rendered by a caller-supplied function of the whole row
    pub fn custom<F>(header: impl Into<String>, render: F) -> Self
    where
        F: Fn(&Row) -> Cell + Send + Sync + 'static,
    {
        Self {
            header: header.into(),
            kind: ColumnKind::Custom(Arc::new(render)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_accessors_are_classified() {
        assert!(matches!(
            ColumnKind::from_accessor("Room.type"),
            ColumnKind::RoomField(RoomField::Type)
        ));
        assert!(matches!(
            ColumnKind::from_accessor("status.booked"),
            ColumnKind::StatusCount(StatusCount::Booked)
        ));
        assert!(matches!(ColumnKind::from_accessor("BookedBy"), ColumnKind::BookedBy));
        assert!(matches!(
            ColumnKind::from_accessor("description"),
            ColumnKind::Truncated(ref key) if key == "description"
        ));
    }

    #[test]
    fn test_other_dotted_paths_are_plain_fields() {
        // Only the two Room.* paths are resolved through nesting
        assert!(matches!(
            ColumnKind::from_accessor("Room.capacity"),
            ColumnKind::Field(ref key) if key == "Room.capacity"
        ));
        assert!(matches!(
            ColumnKind::from_accessor("Status"),
            ColumnKind::Field(ref key) if key == "Status"
        ));
    }
}
