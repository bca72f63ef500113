use crate::shared::api::use_api;
use crate::shared::components::PageHeader;
use crate::shared::list_page::{ListContent, ListState};
use crate::shared::rows::normalize_inquiry;
use crate::shared::table::{Column, RowOrder};
use leptos::prelude::*;

fn columns() -> Vec<Column> {
    vec![
        Column::new("Name", "name"),
        Column::new("Phone", "mobile"),
        Column::new("E-mail", "email"),
        Column::new("From", "checkInDate"),
        Column::new("To", "checkOutDate"),
        Column::new("Adults", "adults"),
        Column::new("Children", "children"),
        Column::new("No. of rooms", "rooms"),
        Column::new("Created At", "createdAt"),
    ]
}

/// Inquiries with stay dates and creation time made human readable
#[component]
#[allow(non_snake_case)]
pub fn InquiryList() -> impl IntoView {
    let state = ListState::new();
    let api = use_api();
    state.load("inquiries", move || async move {
        let offset = api.config().utc_offset();
        let rows = api.get_rows("/admin/enquiry").await?;
        Ok::<_, String>(
            rows.into_iter()
                .map(|row| normalize_inquiry(row, offset))
                .collect(),
        )
    });

    view! {
        <div class="page">
            <PageHeader title="Inquiry" />
            <ListContent state=state columns=columns() order=RowOrder::Reverse />
        </div>
    }
}
