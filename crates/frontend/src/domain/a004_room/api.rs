use crate::domain::a004_room::ui::list::ROOMS_ENDPOINT;
use crate::shared::api::ApiClient;
use contracts::domain::a004_room::RoomOption;

/// Rooms for select boxes
pub async fn fetch_room_options(api: &ApiClient) -> Result<Vec<RoomOption>, String> {
    let rows = api.get_rows(ROOMS_ENDPOINT).await?;
    Ok(RoomOption::from_records(&rows))
}
