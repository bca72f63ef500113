//! Formatted cell values produced by the column formatter.

/// Text shown when a field is missing or cannot be interpreted
pub const PLACEHOLDER: &str = "N/A";

/// Visual classification of a status value. Carries no meaning beyond styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayHint {
    Pending,
    Positive,
    Neutral,
}

impl DisplayHint {
    /// Booking status: `pending` vs `confirmed`/`success`
    pub fn for_booking_status(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "pending" => DisplayHint::Pending,
            "confirmed" | "success" => DisplayHint::Positive,
            _ => DisplayHint::Neutral,
        }
    }

    /// Payment status: `pending` vs `paid`
    pub fn for_payment_status(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "pending" => DisplayHint::Pending,
            "paid" => DisplayHint::Positive,
            _ => DisplayHint::Neutral,
        }
    }

    /// Badge variant understood by [`crate::shared::components::ui::Badge`]
    pub fn badge_variant(&self) -> &'static str {
        match self {
            DisplayHint::Pending => "error",
            DisplayHint::Positive => "success",
            DisplayHint::Neutral => "neutral",
        }
    }
}

/// What a single table cell displays
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    /// Renders nothing at all
    Empty,
    Text(String),
    /// Status text styled by its hint
    Hinted { text: String, hint: DisplayHint },
    /// Shortened text; `full` stays available as a tooltip
    Truncated { text: String, full: String },
    Image { url: String, alt: String },
    Gallery(Vec<String>),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    pub fn placeholder() -> Self {
        Cell::Text(PLACEHOLDER.to_string())
    }

    /// Plain text of the cell, used by tests and tooltips
    pub fn display_text(&self) -> String {
        match self {
            Cell::Empty | Cell::Gallery(_) => String::new(),
            Cell::Text(text) | Cell::Hinted { text, .. } | Cell::Truncated { text, .. } => {
                text.clone()
            }
            Cell::Image { alt, .. } => alt.clone(),
        }
    }

    pub fn hint(&self) -> Option<DisplayHint> {
        match self {
            Cell::Hinted { hint, .. } => Some(*hint),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_status_hint_ignores_case() {
        for value in ["Pending", "PENDING", "pending", " pending "] {
            assert_eq!(DisplayHint::for_booking_status(value), DisplayHint::Pending);
        }
        assert_eq!(DisplayHint::for_booking_status("Confirmed"), DisplayHint::Positive);
        assert_eq!(DisplayHint::for_booking_status("SUCCESS"), DisplayHint::Positive);
        assert_eq!(DisplayHint::for_booking_status("Cancelled"), DisplayHint::Neutral);
        assert_eq!(DisplayHint::for_booking_status(""), DisplayHint::Neutral);
    }

    #[test]
    fn test_payment_status_hint() {
        assert_eq!(DisplayHint::for_payment_status("Paid"), DisplayHint::Positive);
        assert_eq!(DisplayHint::for_payment_status("pending"), DisplayHint::Pending);
        // "confirmed" is a booking state, not a payment state
        assert_eq!(DisplayHint::for_payment_status("Confirmed"), DisplayHint::Neutral);
    }
}
