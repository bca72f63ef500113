use crate::shared::api::use_api;
use crate::shared::components::PageHeader;
use crate::shared::list_page::{
    delete_record, toggle_record_status, DeleteMessages, ListContent, ListState,
};
use crate::shared::table::{Column, RowAction, RowOrder};
use leptos::prelude::*;

pub const AGENTS_ENDPOINT: &str = "/admin/agent";

const DELETE_MESSAGES: DeleteMessages = DeleteMessages {
    confirm: "Are you sure you want to delete the Agent?",
    success: "Agent Deleted Successfully",
    failure: "Failed to delete the Agent",
};

fn columns() -> Vec<Column> {
    vec![
        Column::new("Name", "name"),
        Column::new("E-mail", "email"),
        Column::new("Phone", "phone"),
        Column::new("Address", "address"),
        Column::new("City", "city"),
        Column::new("State", "state"),
        Column::new("Pincode", "pincode"),
        Column::new("Country", "country"),
        Column::new("Id-proof", "idProof"),
        Column::new("Status", "status"),
        Column::new("Offers", "offers"),
    ]
}

/// Agents with delete and Active/Inactive toggle
#[component]
#[allow(non_snake_case)]
pub fn AgentList() -> impl IntoView {
    let state = ListState::new();
    let api = use_api();

    let fetch_api = api.clone();
    state.load("agents", move || async move { fetch_api.get_rows(AGENTS_ENDPOINT).await });

    let rows = state.rows;
    let delete_api = api.clone();
    let actions = vec![
        RowAction::delete(move |row| {
            delete_record(delete_api.clone(), rows, row, AGENTS_ENDPOINT, DELETE_MESSAGES)
        }),
        RowAction::toggle_status(move |row| {
            toggle_record_status(api.clone(), rows, row, AGENTS_ENDPOINT)
        }),
    ];

    view! {
        <div class="page">
            <PageHeader title="Agent List" />
            <ListContent state=state columns=columns() actions=actions order=RowOrder::Reverse />
        </div>
    }
}
