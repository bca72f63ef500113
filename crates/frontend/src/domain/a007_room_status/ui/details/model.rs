use crate::shared::api::ApiClient;
use crate::shared::date_utils::parse_calendar_date;
use crate::shared::list_page::record_path;
use crate::shared::table::column::StatusCount;
use crate::shared::table::status::extract_count;
use crate::shared::table::Row;
use chrono::FixedOffset;
use contracts::domain::a007_room_status::{
    AvailabilityCounts, RoomStatusDto, ROOM_STATUS_FORM_FIELD,
};
use contracts::domain::common::RecordId;
use serde_json::Value;
use web_sys::FormData;

const CREATE_ENDPOINT: &str = "/admin/createRoomStatus";
const UPDATE_ENDPOINT: &str = "/admin/updateRoomStatus";

/// Raw input values of the form. Counts stay strings until submit so a
/// half-typed number does not fight the input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomStatusFields {
    pub room_id: String,
    pub date: String,
    pub available: String,
    pub booked: String,
}

impl RoomStatusFields {
    /// Prefill from a `GET /admin/getRoomStatus` record, with the date as
    /// seen from `offset`
    pub fn from_row(row: &Row, offset: FixedOffset) -> Self {
        let room_id = row
            .get("room_id")
            .or_else(|| row.get("Room").and_then(|room| room.get("id")))
            .and_then(RecordId::from_value)
            .map(|id| id.to_string())
            .unwrap_or_default();
        let date = row
            .get("date")
            .and_then(|value| parse_calendar_date(value, offset))
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        let count = |which| {
            extract_count(row.get("status"), which)
                .map(|n| n.to_string())
                .unwrap_or_default()
        };

        Self {
            room_id,
            date,
            available: count(StatusCount::Available),
            booked: count(StatusCount::Booked),
        }
    }

    pub fn counts(&self) -> AvailabilityCounts {
        AvailabilityCounts {
            available: self.available.trim().parse().ok(),
            booked: self.booked.trim().parse().ok(),
        }
    }

    pub fn to_dto(&self) -> Result<RoomStatusDto, String> {
        RoomStatusDto::new(self.room_id.clone(), self.date.clone(), self.counts())
    }
}

fn form_data(dto: &RoomStatusDto) -> Result<FormData, String> {
    let form = FormData::new().map_err(|e| format!("Failed to create form data: {:?}", e))?;
    form.append_with_str(ROOM_STATUS_FORM_FIELD, &dto.to_form_value()?)
        .map_err(|e| format!("Failed to fill form data: {:?}", e))?;
    Ok(form)
}

/// Create a room status entry, or update it when `id` is set
pub async fn save_room_status(
    api: &ApiClient,
    id: Option<&RecordId>,
    dto: &RoomStatusDto,
) -> Result<Value, String> {
    let form = form_data(dto)?;
    match id {
        Some(id) => api.put_form(&record_path(UPDATE_ENDPOINT, id), form).await,
        None => api.post_form(CREATE_ENDPOINT, form).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Offset, Utc};
    use serde_json::json;

    fn row(value: Value) -> Row {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_from_row_reads_encoded_status() {
        let fields = RoomStatusFields::from_row(&row(json!({
            "id": 9,
            "room_id": 4,
            "date": "2024-05-01T00:00:00.000Z",
            "status": "{\"available\":3,\"booked\":1}",
            "Room": {"id": 4, "room_name": "Cottage"}
        })), Utc.fix());

        assert_eq!(
            fields,
            RoomStatusFields {
                room_id: "4".into(),
                date: "2024-05-01".into(),
                available: "3".into(),
                booked: "1".into(),
            }
        );
    }

    #[test]
    fn test_from_row_falls_back_to_nested_room() {
        let fields = RoomStatusFields::from_row(&row(json!({
            "date": "garbage",
            "status": "not json",
            "Room": {"id": "7"}
        })), Utc.fix());

        assert_eq!(fields.room_id, "7");
        assert_eq!(fields.date, "");
        assert_eq!(fields.available, "");
    }

    #[test]
    fn test_from_row_date_follows_offset() {
        let ist = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
        let record = row(json!({"room_id": 4, "date": "2024-04-30T18:30:00.000Z"}));

        assert_eq!(RoomStatusFields::from_row(&record, ist).date, "2024-05-01");
        assert_eq!(RoomStatusFields::from_row(&record, Utc.fix()).date, "2024-04-30");
    }

    #[test]
    fn test_to_dto_requires_both_counts() {
        let mut fields = RoomStatusFields {
            room_id: "4".into(),
            date: "2024-05-01".into(),
            available: "3".into(),
            booked: " ".into(),
        };
        assert!(fields.to_dto().is_err());

        fields.booked = "0".into();
        let dto = fields.to_dto().unwrap();
        assert_eq!(dto.status, r#"{"available":3,"booked":0}"#);
        assert_eq!(dto.room_id, "4");
    }
}
