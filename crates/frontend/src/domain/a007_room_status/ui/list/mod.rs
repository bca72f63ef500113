use crate::layout::global_context::AppGlobalContext;
use crate::layout::pages::Page;
use crate::shared::api::use_api;
use crate::shared::components::ui::Button;
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::list_page::{delete_record, DeleteMessages, ListContent, ListState};
use crate::shared::table::{Column, RowAction, RowOrder};
use leptos::prelude::*;

pub const ROOM_STATUS_ENDPOINT: &str = "/admin/getRoomStatus";
const DELETE_ENDPOINT: &str = "/admin/deleteRoomStatus";

const DELETE_MESSAGES: DeleteMessages = DeleteMessages {
    confirm: "Are you sure you want to delete this Room Status?",
    success: "Room status deleted successfully",
    failure: "Failed to delete room status",
};

fn columns() -> Vec<Column> {
    vec![
        Column::new("Room Name", "Room.room_name"),
        Column::new("Type", "Room.type"),
        Column::new("Date", "date"),
        Column::new("Available", "status.available"),
        Column::new("Booked", "status.booked"),
    ]
}

/// Daily available/booked counts per room
#[component]
#[allow(non_snake_case)]
pub fn RoomStatusList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let state = ListState::new();
    let api = use_api();

    let fetch_api = api.clone();
    state.load("room status", move || async move {
        fetch_api.get_rows(ROOM_STATUS_ENDPOINT).await
    });

    let rows = state.rows;
    let actions = vec![
        RowAction::edit(move |row| ctx.edit(Page::RoomStatusForm, row)),
        RowAction::delete(move |row| {
            delete_record(api.clone(), rows, row, DELETE_ENDPOINT, DELETE_MESSAGES)
        }),
    ];

    view! {
        <div class="page">
            <PageHeader title="Room Status">
                <Button on_click=Callback::new(move |_| ctx.navigate(Page::RoomStatusForm))>
                    {icon("plus")}
                    "Add Room Status"
                </Button>
            </PageHeader>
            <ListContent state=state columns=columns() actions=actions order=RowOrder::Reverse />
        </div>
    }
}
