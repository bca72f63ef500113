//! Helpers over fetched collections: id lookup, in-memory updates after a
//! mutating action, and normalisation of JSON-encoded fields.

use crate::shared::date_utils::{format_created_at, format_date_with_suffix, UNSET_DATE};
use crate::shared::table::Row;
use chrono::FixedOffset;
use contracts::domain::a004_room::RoomOption;
use contracts::domain::common::RecordId;
use serde_json::Value;
use std::collections::HashMap;

pub fn row_id(row: &Row) -> Option<RecordId> {
    row.get("id").and_then(RecordId::from_value)
}

fn has_id(row: &Row, id: &RecordId) -> bool {
    row.get("id").is_some_and(|value| id.matches(value))
}

/// Drop every row carrying `id`. Returns whether anything was removed.
pub fn remove_by_id(rows: &mut Vec<Row>, id: &RecordId) -> bool {
    let before = rows.len();
    rows.retain(|row| !has_id(row, id));
    rows.len() != before
}

/// Overwrite `field` on the row carrying `id`, leaving the others untouched
pub fn set_field_by_id(rows: &mut [Row], id: &RecordId, field: &str, value: Value) -> bool {
    let mut changed = false;
    for row in rows.iter_mut().filter(|row| has_id(row, id)) {
        row.insert(field.to_string(), value.clone());
        changed = true;
    }
    changed
}

/// Replace a JSON-encoded array field by the decoded array.
/// Anything that does not decode to an array becomes an empty one.
fn decode_array_field(row: &mut Row, field: &str) {
    let decoded = match row.get(field) {
        Some(Value::Array(_)) => return,
        Some(Value::String(raw)) => match serde_json::from_str::<Value>(raw) {
            Ok(Value::Array(items)) => items,
            Ok(_) | Err(_) => {
                log::warn!(
                    "Failed to decode {} for record {:?}: {}",
                    field,
                    row_id(row).map(|id| id.to_string()),
                    raw
                );
                Vec::new()
            }
        },
        _ => Vec::new(),
    };
    row.insert(field.to_string(), Value::Array(decoded));
}

fn amenity_list(value: Option<&Value>) -> Vec<String> {
    let decoded = match value {
        Some(Value::String(raw)) => serde_json::from_str::<Value>(raw).unwrap_or(Value::Null),
        Some(other) => other.clone(),
        None => Value::Null,
    };
    match decoded {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => s,
                other => other.to_string(),
            })
            .collect(),
        Value::String(single) => vec![single],
        _ => Vec::new(),
    }
}

/// Room records store images, package ids and amenities as JSON strings.
/// Decodes them and adds a comma separated `amenities_show` field.
pub fn normalize_room(mut row: Row) -> Row {
    decode_array_field(&mut row, "room_images");
    decode_array_field(&mut row, "package_ids");
    let amenities = amenity_list(row.get("amenities")).join(", ");
    row.insert("amenities_show".to_string(), Value::String(amenities));
    row
}

/// Human readable stay dates and creation time for an inquiry record
pub fn normalize_inquiry(mut row: Row, offset: FixedOffset) -> Row {
    for field in ["checkInDate", "checkOutDate"] {
        if let Some(Value::String(raw)) = row.get(field) {
            if raw != UNSET_DATE {
                let formatted = format_date_with_suffix(raw, offset);
                row.insert(field.to_string(), Value::String(formatted));
            }
        }
    }
    if let Some(Value::String(raw)) = row.get("createdAt") {
        let formatted = format_created_at(raw, offset);
        row.insert("createdAt".to_string(), Value::String(formatted));
    }
    row
}

/// Add `room_name` to each record by its `room_id`, using one room list
/// instead of a lookup per record. Unknown rooms are left without a name.
pub fn attach_room_names(rows: Vec<Row>, rooms: &[RoomOption]) -> Vec<Row> {
    let names: HashMap<&str, &str> = rooms
        .iter()
        .map(|room| (room.id.as_str(), room.room_name.as_str()))
        .collect();

    rows.into_iter()
        .map(|mut row| {
            let name = row
                .get("room_id")
                .and_then(RecordId::from_value)
                .and_then(|id| names.get(id.as_str()).map(|name| name.to_string()));
            if let Some(name) = name {
                row.insert("room_name".to_string(), Value::String(name));
            }
            row
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> Row {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_remove_by_id_matches_numeric_and_string_ids() {
        let mut rows = vec![
            row(json!({"id": 1, "name": "a"})),
            row(json!({"id": "2", "name": "b"})),
            row(json!({"name": "no id"})),
        ];

        assert!(remove_by_id(&mut rows, &RecordId::new("2")));
        assert!(remove_by_id(&mut rows, &RecordId::new("1")));
        assert!(!remove_by_id(&mut rows, &RecordId::new("1")));
        assert_eq!(rows, vec![row(json!({"name": "no id"}))]);
    }

    #[test]
    fn test_set_field_by_id_only_touches_target() {
        let mut rows = vec![
            row(json!({"id": 1, "status": "Active"})),
            row(json!({"id": 2, "status": "Active"})),
        ];

        assert!(set_field_by_id(&mut rows, &RecordId::new("2"), "status", json!("Inactive")));
        assert_eq!(rows[0]["status"], json!("Active"));
        assert_eq!(rows[1]["status"], json!("Inactive"));
        assert!(!set_field_by_id(&mut rows, &RecordId::new("9"), "status", json!("x")));
    }

    #[test]
    fn test_row_id() {
        assert_eq!(row_id(&row(json!({"id": 7}))), Some(RecordId::new("7")));
        assert_eq!(row_id(&row(json!({"id": null}))), None);
    }

    #[test]
    fn test_normalize_room() {
        let room = normalize_room(row(json!({
            "id": 3,
            "room_images": "[\"a.jpg\",\"b.jpg\"]",
            "package_ids": "not json",
            "amenities": "[\"Wifi\",\"Breakfast\"]"
        })));

        assert_eq!(room["room_images"], json!(["a.jpg", "b.jpg"]));
        assert_eq!(room["package_ids"], json!([]));
        assert_eq!(room["amenities_show"], json!("Wifi, Breakfast"));
    }

    #[test]
    fn test_normalize_room_single_amenity_and_missing_fields() {
        let room = normalize_room(row(json!({"id": 4, "amenities": "\"Pool\""})));
        assert_eq!(room["amenities_show"], json!("Pool"));
        assert_eq!(room["room_images"], json!([]));

        let bare = normalize_room(row(json!({"id": 5, "amenities": "{broken"})));
        assert_eq!(bare["amenities_show"], json!(""));
    }

    #[test]
    fn test_normalize_inquiry() {
        let utc = FixedOffset::east_opt(0).unwrap();
        let inquiry = normalize_inquiry(
            row(json!({
                "checkInDate": "2024-03-01",
                "checkOutDate": "00-00-0000",
                "createdAt": "2024-03-01T14:05:00Z"
            })),
            utc,
        );

        assert_eq!(inquiry["checkInDate"], json!("1st Mar 2024"));
        assert_eq!(inquiry["checkOutDate"], json!("00-00-0000"));
        assert_eq!(inquiry["createdAt"], json!("01-3-24, 02:05 PM"));
    }

    #[test]
    fn test_attach_room_names() {
        let rooms = vec![RoomOption {
            id: RecordId::new("1"),
            room_name: "Cottage".to_string(),
        }];
        let rows = attach_room_names(
            vec![
                row(json!({"id": 10, "room_id": 1})),
                row(json!({"id": 11, "room_id": "9"})),
            ],
            &rooms,
        );

        assert_eq!(rows[0]["room_name"], json!("Cottage"));
        assert!(rows[1].get("room_name").is_none());
    }
}
