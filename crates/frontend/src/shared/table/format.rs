//! Column formatter: (column, row) -> [`Cell`].
//!
//! Every rule recovers from malformed input on its own. A field that cannot
//! be interpreted is logged and replaced by a placeholder; it never stops
//! the rest of the row or table from rendering.

use super::cell::{Cell, DisplayHint};
use super::column::{Column, ColumnKind, RoomField, StatusCount};
use super::status::{extract_count, StatusParseError};
use super::Row;
use crate::config::AppConfig;
use crate::shared::date_utils::format_day_month_year;
use serde_json::Value;

/// Characters of a long text shown before it is cut
pub const TRUNCATE_AT: usize = 60;

const USER_ID_FIELD: &str = "user_Id";
const AGENT_ID_FIELD: &str = "agentId";

pub fn format_cell(column: &Column, row: &Row, config: &AppConfig) -> Cell {
    match &column.kind {
        ColumnKind::RoomField(field) => room_field(row, *field),
        ColumnKind::Date => date(row, config),
        ColumnKind::StatusCount(count) => status_count(row, *count),
        ColumnKind::BookedBy => Cell::text(booked_by(row)),
        ColumnKind::Status => hinted(row.get("status"), DisplayHint::for_booking_status),
        ColumnKind::PaymentStatus => {
            hinted(row.get("paymentStatus"), DisplayHint::for_payment_status)
        }
        ColumnKind::RoomImages => room_images(row, config),
        ColumnKind::IdProof => id_proof(row, config),
        ColumnKind::Truncated(key) => truncated(row.get(key)),
        ColumnKind::Field(key) => plain(row.get(key)),
        ColumnKind::Custom(render) => render(row),
    }
}

/// JavaScript-style truthiness, which is what the API's optional fields rely on
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Text of a scalar value; `None` for null/absent
pub fn value_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(|item| value_text(Some(item)))
                .collect::<Vec<_>>()
                .join(", "),
        ),
        other @ Value::Object(_) => Some(other.to_string()),
    }
}

fn room_field(row: &Row, field: RoomField) -> Cell {
    let value = row
        .get("Room")
        .and_then(Value::as_object)
        .and_then(|room| room.get(field.key()));
    if !is_truthy(value) {
        return Cell::placeholder();
    }
    value_text(value).map(Cell::Text).unwrap_or_else(Cell::placeholder)
}

fn date(row: &Row, config: &AppConfig) -> Cell {
    let raw = row.get("date");
    match raw.and_then(|value| format_day_month_year(value, config.utc_offset())) {
        Some(formatted) => Cell::Text(formatted),
        None => {
            log::warn!("Error formatting date: {:?}", raw);
            Cell::placeholder()
        }
    }
}

fn status_count(row: &Row, count: StatusCount) -> Cell {
    match extract_count(row.get("status"), count) {
        Ok(n) => Cell::Text(n.to_string()),
        Err(StatusParseError::Missing) => {
            log::debug!("No status on row {:?}", row.get("id"));
            Cell::placeholder()
        }
        Err(e) => {
            log::warn!("Error parsing status: {}", e);
            Cell::placeholder()
        }
    }
}

/// "User" wins when both identifiers are present.
pub fn booked_by(row: &Row) -> &'static str {
    if is_truthy(row.get(USER_ID_FIELD)) {
        "User"
    } else if is_truthy(row.get(AGENT_ID_FIELD)) {
        "Agent"
    } else {
        "Unknown"
    }
}

fn hinted(value: Option<&Value>, classify: fn(&str) -> DisplayHint) -> Cell {
    match value {
        None | Some(Value::Null) => Cell::Empty,
        Some(Value::String(s)) => Cell::Hinted {
            text: s.clone(),
            hint: classify(s),
        },
        other => Cell::Hinted {
            text: value_text(other).unwrap_or_default(),
            hint: DisplayHint::Neutral,
        },
    }
}

fn room_images(row: &Row, config: &AppConfig) -> Cell {
    let identifiers = image_identifiers(row.get("room_images"));
    if identifiers.is_empty() {
        return Cell::Empty;
    }
    Cell::Gallery(
        identifiers
            .iter()
            .map(|identifier| config.asset_url(identifier))
            .collect(),
    )
}

fn id_proof(row: &Row, config: &AppConfig) -> Cell {
    match image_identifiers(row.get("idProof")).first() {
        Some(identifier) => Cell::Image {
            url: config.asset_url(identifier),
            alt: "IdProof Image".to_string(),
        },
        None => Cell::Empty,
    }
}

/// Image identifiers from an array, a JSON-encoded array or a bare file name
fn image_identifiers(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Vec::new();
            }
            if trimmed.starts_with('[') || trimmed.starts_with('"') {
                match serde_json::from_str::<Value>(trimmed) {
                    Ok(decoded) => return image_identifiers(Some(&decoded)),
                    Err(e) => {
                        log::warn!("Failed to parse image list {:?}: {}", trimmed, e);
                        return Vec::new();
                    }
                }
            }
            vec![trimmed.to_string()]
        }
        _ => Vec::new(),
    }
}

fn truncated(value: Option<&Value>) -> Cell {
    let Some(full) = value_text(value) else {
        return Cell::Empty;
    };
    if full.chars().count() <= TRUNCATE_AT {
        return Cell::Truncated {
            text: full.clone(),
            full,
        };
    }
    let head: String = full.chars().take(TRUNCATE_AT).collect();
    Cell::Truncated {
        text: format!("{}…", head.trim_end()),
        full,
    }
}

fn plain(value: Option<&Value>) -> Cell {
    match value_text(value) {
        Some(text) => Cell::Text(text),
        None => Cell::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use serde_json::json;

    fn row(value: Value) -> Row {
        value.as_object().cloned().unwrap()
    }

    fn config() -> AppConfig {
        AppConfig::new("http://localhost:3000")
    }

    fn cell(accessor: &str, value: Value) -> Cell {
        format_cell(&Column::new("H", accessor), &row(value), &config())
    }

    #[test]
    fn test_room_fields() {
        let with_room = json!({"Room": {"room_name": "Tree House", "type": "Deluxe"}});
        assert_eq!(cell("Room.room_name", with_room.clone()), Cell::text("Tree House"));
        assert_eq!(cell("Room.type", with_room), Cell::text("Deluxe"));

        for value in [json!({}), json!({"Room": null}), json!({"Room": "Tree House"})] {
            assert_eq!(cell("Room.room_name", value.clone()), Cell::placeholder());
            assert_eq!(cell("Room.type", value), Cell::placeholder());
        }
        assert_eq!(cell("Room.type", json!({"Room": {"type": ""}})), Cell::placeholder());
    }

    #[test]
    fn test_date() {
        assert_eq!(cell("date", json!({"date": "2024-03-15"})), Cell::text("15/03/2024"));
        assert_eq!(cell("date", json!({"date": "not a date"})), Cell::placeholder());
        assert_eq!(cell("date", json!({})), Cell::placeholder());
    }

    #[test]
    fn test_date_timestamp_in_viewer_offset() {
        let ist = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
        let column = Column::new("Date", "date");
        let record = row(json!({"date": "2024-04-30T18:30:00.000Z"}));

        let local = format_cell(&column, &record, &config().with_utc_offset(ist));
        assert_eq!(local, Cell::text("01/05/2024"));
        assert_eq!(format_cell(&column, &record, &config()), Cell::text("30/04/2024"));
    }

    #[test]
    fn test_status_counts_agree_across_shapes() {
        for status in [
            json!({"available": 3, "booked": 2}),
            json!("Available: 3, Booked: 2"),
            json!(r#"{"available":3,"booked":2}"#),
        ] {
            let value = json!({ "status": status });
            assert_eq!(cell("status.available", value.clone()), Cell::text("3"));
            assert_eq!(cell("status.booked", value), Cell::text("2"));
        }
        assert_eq!(cell("status.available", json!({"status": "sold out"})), Cell::placeholder());
        assert_eq!(cell("status.booked", json!({})), Cell::placeholder());
    }

    #[test]
    fn test_booked_by_precedence() {
        assert_eq!(cell("BookedBy", json!({"user_Id": 5, "agentId": 9})), Cell::text("User"));
        assert_eq!(cell("BookedBy", json!({"user_Id": "u1"})), Cell::text("User"));
        assert_eq!(cell("BookedBy", json!({"agentId": 9})), Cell::text("Agent"));
        assert_eq!(
            cell("BookedBy", json!({"user_Id": null, "agentId": "a7"})),
            Cell::text("Agent")
        );
        assert_eq!(cell("BookedBy", json!({"user_Id": "", "agentId": 0})), Cell::text("Unknown"));
        assert_eq!(cell("BookedBy", json!({})), Cell::text("Unknown"));
    }

    #[test]
    fn test_status_hints() {
        let pending = [
            cell("status", json!({"status": "Pending"})),
            cell("status", json!({"status": "PENDING"})),
            cell("status", json!({"status": "pending"})),
        ];
        for c in &pending {
            assert_eq!(c.hint(), Some(DisplayHint::Pending));
        }
        assert_eq!(pending[1].display_text(), "PENDING");

        assert_eq!(
            cell("status", json!({"status": "Success"})).hint(),
            Some(DisplayHint::Positive)
        );
        assert_eq!(cell("status", json!({"status": "Active"})).hint(), Some(DisplayHint::Neutral));
        assert_eq!(cell("status", json!({"status": true})).hint(), Some(DisplayHint::Neutral));
        assert_eq!(cell("status", json!({})), Cell::Empty);

        assert_eq!(
            cell("paymentStatus", json!({"paymentStatus": "PAID"})).hint(),
            Some(DisplayHint::Positive)
        );
    }

    #[test]
    fn test_room_images() {
        let expected = Cell::Gallery(vec![
            "http://localhost:3000/assets/images/a.jpg".to_string(),
            "http://localhost:3000/assets/images/b.jpg".to_string(),
        ]);
        assert_eq!(cell("room_images", json!({"room_images": ["a.jpg", "b.jpg"]})), expected);
        assert_eq!(cell("room_images", json!({"room_images": r#"["a.jpg","b.jpg"]"#})), expected);

        assert_eq!(cell("room_images", json!({"room_images": []})), Cell::Empty);
        assert_eq!(cell("room_images", json!({"room_images": null})), Cell::Empty);
        assert_eq!(cell("room_images", json!({"room_images": "[broken"})), Cell::Empty);
        assert_eq!(cell("room_images", json!({})), Cell::Empty);
    }

    #[test]
    fn test_id_proof() {
        assert_eq!(
            cell("idProof", json!({"idProof": "aadhaar.png"})),
            Cell::Image {
                url: "http://localhost:3000/assets/images/aadhaar.png".to_string(),
                alt: "IdProof Image".to_string(),
            }
        );
        assert_eq!(cell("idProof", json!({"idProof": ""})), Cell::Empty);
        assert_eq!(cell("idProof", json!({})), Cell::Empty);
    }

    #[test]
    fn test_long_description_keeps_full_value() {
        let long = "Riverside cottage with a private deck, hammock, \
                    outdoor shower and a view of the hills";
        let c = cell("description", json!({ "description": long }));
        match c {
            Cell::Truncated { text, full } => {
                assert_eq!(full, long);
                assert!(text.chars().count() <= TRUNCATE_AT + 1);
                assert!(text.ends_with('…'));
            }
            other => panic!("unexpected cell {other:?}"),
        }

        let short = cell("description", json!({"description": "Cosy"}));
        assert_eq!(
            short,
            Cell::Truncated {
                text: "Cosy".to_string(),
                full: "Cosy".to_string()
            }
        );
    }

    #[test]
    fn test_plain_fields() {
        assert_eq!(cell("name", json!({"name": "Asha"})), Cell::text("Asha"));
        assert_eq!(cell("amount", json!({"amount": 4500})), Cell::text("4500"));
        assert_eq!(
            cell("selected_packages", json!({"selected_packages": ["Safari", "Spa"]})),
            Cell::text("Safari, Spa")
        );
        assert_eq!(cell("name", json!({"name": null})), Cell::Empty);
        assert_eq!(cell("missing", json!({})), Cell::Empty);
    }

    #[test]
    fn test_custom_renderer_receives_row() {
        let column = Column::custom("Guests", |row: &Row| {
            let adults = row.get("adults").and_then(Value::as_u64).unwrap_or(0);
            let children = row.get("children").and_then(Value::as_u64).unwrap_or(0);
            Cell::Text((adults + children).to_string())
        });
        let c = format_cell(&column, &row(json!({"adults": 2, "children": 1})), &config());
        assert_eq!(c, Cell::text("3"));
    }
}
