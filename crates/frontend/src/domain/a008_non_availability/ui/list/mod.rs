use crate::domain::a004_room::api::fetch_room_options;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::pages::Page;
use crate::shared::api::{use_api, ApiClient};
use crate::shared::components::ui::Button;
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::list_page::{delete_record, DeleteMessages, ListContent, ListState};
use crate::shared::rows::attach_room_names;
use crate::shared::table::{Column, Row, RowAction, RowOrder};
use leptos::prelude::*;

pub const NON_AVAILABILITY_ENDPOINT: &str = "/admin/availability";

const DELETE_MESSAGES: DeleteMessages = DeleteMessages {
    confirm: "Are you sure you want to delete this record?",
    success: "Record deleted successfully",
    failure: "Failed to delete the record",
};

fn columns() -> Vec<Column> {
    vec![
        Column::new("Date", "date"),
        Column::new("Room ID", "room_id"),
        Column::new("Room Name", "room_name"),
        Column::new("Count", "count"),
    ]
}

/// Records plus room names. Without the room list the records are still shown.
async fn fetch_with_room_names(api: &ApiClient) -> Result<Vec<Row>, String> {
    let records = api.get_rows(NON_AVAILABILITY_ENDPOINT).await?;
    match fetch_room_options(api).await {
        Ok(rooms) => Ok(attach_room_names(records, &rooms)),
        Err(e) => {
            log::warn!("Room names unavailable: {}", e);
            Ok(records)
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn NonAvailabilityList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let state = ListState::new();
    let api = use_api();

    let fetch_api = api.clone();
    state.load("non-availability records", move || async move {
        fetch_with_room_names(&fetch_api).await
    });

    let rows = state.rows;
    let actions = vec![RowAction::delete(move |row| {
        delete_record(api.clone(), rows, row, NON_AVAILABILITY_ENDPOINT, DELETE_MESSAGES)
    })];

    view! {
        <div class="page">
            <PageHeader title="Non Availability">
                <Button on_click=Callback::new(move |_| ctx.navigate(Page::NonAvailabilityForm))>
                    {icon("plus")}
                    "Add Non-Availability"
                </Button>
            </PageHeader>
            <ListContent state=state columns=columns() actions=actions order=RowOrder::Reverse />
        </div>
    }
}
