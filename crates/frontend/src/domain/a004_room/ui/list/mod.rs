use crate::shared::api::use_api;
use crate::shared::components::PageHeader;
use crate::shared::list_page::{delete_record, DeleteMessages, ListContent, ListState};
use crate::shared::rows::normalize_room;
use crate::shared::table::{Column, RowAction, RowOrder};
use leptos::prelude::*;

pub const ROOMS_ENDPOINT: &str = "/admin/room";

const DELETE_MESSAGES: DeleteMessages = DeleteMessages {
    confirm: "Are you sure you want to delete Room ?",
    success: "Record deleted successfully",
    failure: "Failed to delete room",
};

fn columns() -> Vec<Column> {
    vec![
        Column::new("Image", "room_images"),
        Column::new("Title", "room_name"),
        Column::new("Old single occupancy price(INR)", "single_base_price"),
        Column::new("Offer single occupancy price(INR)", "single_new_price"),
        Column::new("Old Double occupancy price(INR)", "double_base_price"),
        Column::new("Offer Double occupancy price(INR)", "double_new_price"),
        Column::new("Old Triple occupancy price(INR)", "triple_base_price"),
        Column::new("Offer Triple occupancy price(INR)", "triple_new_price"),
        Column::new("Tags", "amenities_show"),
        Column::new("Rooms status", "status"),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn RoomList() -> impl IntoView {
    let state = ListState::new();
    let api = use_api();

    let fetch_api = api.clone();
    state.load("rooms", move || async move {
        let rows = fetch_api.get_rows(ROOMS_ENDPOINT).await?;
        Ok::<_, String>(rows.into_iter().map(normalize_room).collect())
    });

    let rows = state.rows;
    let actions = vec![RowAction::delete(move |row| {
        delete_record(api.clone(), rows, row, ROOMS_ENDPOINT, DELETE_MESSAGES)
    })];

    view! {
        <div class="page">
            <PageHeader title="Room List" />
            <ListContent state=state columns=columns() actions=actions order=RowOrder::Reverse />
        </div>
    }
}
