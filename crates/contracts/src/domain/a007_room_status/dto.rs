use serde::{Deserialize, Serialize};

/// Multipart field that carries the JSON-encoded [`RoomStatusDto`]
pub const ROOM_STATUS_FORM_FIELD: &str = "availability_data";

/// Available/booked cottage counts for one room on one day
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityCounts {
    pub available: Option<u32>,
    pub booked: Option<u32>,
}

impl AvailabilityCounts {
    pub fn is_complete(&self) -> bool {
        self.available.is_some() && self.booked.is_some()
    }
}

/// Body of `POST /admin/createRoomStatus` and `PUT /admin/updateRoomStatus/{id}`.
///
/// The API stores `status` as a JSON string, not as a nested object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomStatusDto {
    pub room_id: String,
    pub status: String,
    pub date: String,
}

impl RoomStatusDto {
    pub fn new(room_id: String, date: String, counts: AvailabilityCounts) -> Result<Self, String> {
        if room_id.trim().is_empty() || date.trim().is_empty() || !counts.is_complete() {
            return Err(
                "Please fill in all required fields (room, status, and date).".to_string(),
            );
        }
        let status = serde_json::to_string(&counts)
            .map_err(|e| format!("Failed to encode status: {}", e))?;
        Ok(Self {
            room_id,
            status,
            date,
        })
    }

    /// Value of the [`ROOM_STATUS_FORM_FIELD`] multipart field
    pub fn to_form_value(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| format!("Failed to encode room status: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_is_json_encoded_string() {
        let dto = RoomStatusDto::new(
            "4".into(),
            "2024-05-01".into(),
            AvailabilityCounts {
                available: Some(3),
                booked: Some(1),
            },
        )
        .unwrap();
        assert_eq!(dto.status, r#"{"available":3,"booked":1}"#);

        let encoded = dto.to_form_value().unwrap();
        let decoded: serde_json::Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded["status"], r#"{"available":3,"booked":1}"#);
    }

    #[test]
    fn test_incomplete_counts_rejected() {
        let err = RoomStatusDto::new(
            "4".into(),
            "2024-05-01".into(),
            AvailabilityCounts {
                available: Some(3),
                booked: None,
            },
        );
        assert!(err.is_err());
    }
}
