use crate::layout::global_context::AppGlobalContext;
use crate::layout::pages::Page;
use crate::shared::api::use_api;
use crate::shared::components::ui::Button;
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::list_page::{
    delete_record, toggle_record_status, DeleteMessages, ListContent, ListState,
};
use crate::shared::table::{Column, RowAction, RowOrder};
use leptos::prelude::*;

pub const PACKAGES_ENDPOINT: &str = "/admin/package";

const DELETE_MESSAGES: DeleteMessages = DeleteMessages {
    confirm: "Are you sure you want to delete the package ?",
    success: "Record deleted successfully",
    failure: "Failed to delete the record",
};

fn columns() -> Vec<Column> {
    vec![
        Column::new("Name", "name"),
        Column::new("Package Price(INR)", "package_price"),
        Column::truncated("Key Elements", "long_description"),
        Column::truncated("Description", "short_description"),
        Column::new("Status", "status"),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn PackageList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let state = ListState::new();
    let api = use_api();

    let fetch_api = api.clone();
    state.load("packages", move || async move { fetch_api.get_rows(PACKAGES_ENDPOINT).await });

    let rows = state.rows;
    let delete_api = api.clone();
    let actions = vec![
        RowAction::edit(move |row| ctx.edit(Page::PackageForm, row)),
        RowAction::delete(move |row| {
            delete_record(delete_api.clone(), rows, row, PACKAGES_ENDPOINT, DELETE_MESSAGES)
        }),
        RowAction::toggle_status(move |row| {
            toggle_record_status(api.clone(), rows, row, PACKAGES_ENDPOINT)
        }),
    ];

    view! {
        <div class="page">
            <PageHeader title="Package List">
                <Button on_click=Callback::new(move |_| ctx.navigate(Page::PackageForm))>
                    {icon("plus")}
                    "Add Package"
                </Button>
            </PageHeader>
            <ListContent state=state columns=columns() actions=actions order=RowOrder::Reverse />
        </div>
    }
}
