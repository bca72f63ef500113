use crate::domain::common::RecordId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Room entry used by select boxes (`GET /admin/room` trimmed to id + name)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomOption {
    pub id: RecordId,
    pub room_name: String,
}

impl RoomOption {
    /// Extract options from the raw room list, skipping entries without an id
    pub fn from_records(records: &[serde_json::Map<String, Value>]) -> Vec<Self> {
        records
            .iter()
            .filter_map(|record| {
                let id = record.get("id").and_then(RecordId::from_value)?;
                let room_name = record
                    .get("room_name")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string();
                Some(Self { id, room_name })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_records() {
        let records = vec![
            json!({"id": 1, "room_name": "Cottage", "type": "Deluxe"}),
            json!({"room_name": "No id"}),
            json!({"id": "2"}),
        ];
        let records: Vec<_> = records
            .into_iter()
            .map(|v| v.as_object().cloned().unwrap())
            .collect();

        let options = RoomOption::from_records(&records);
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].id.as_str(), "1");
        assert_eq!(options[0].room_name, "Cottage");
        assert_eq!(options[1].room_name, "");
    }
}
