use crate::shared::api::use_api;
use crate::shared::components::PageHeader;
use crate::shared::list_page::{ListContent, ListState};
use crate::shared::table::{Column, RowOrder};
use leptos::prelude::*;

fn columns() -> Vec<Column> {
    vec![
        Column::new("ID", "id"),
        Column::new("Book ID", "payid"),
        Column::new("Transaction Id", "transactionid"),
        Column::new("Method", "method"),
        Column::new("Status", "status"),
        Column::new("Time-stamp", "timestamp"),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn PaymentList() -> impl IntoView {
    let state = ListState::new();
    let api = use_api();
    state.load("payments", move || async move { api.get_rows("/admin/payment").await });

    view! {
        <div class="page">
            <PageHeader title="Payment Info" />
            <ListContent state=state columns=columns() order=RowOrder::Reverse />
        </div>
    }
}
