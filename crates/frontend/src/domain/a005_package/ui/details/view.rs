use super::view_model::PackageFormViewModel;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::pages::Page;
use crate::shared::api::use_api;
use crate::shared::components::ui::{Button, Input, Select, Textarea};
use crate::shared::components::PageHeader;
use contracts::domain::common::RecordStatus;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn PackageForm() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let api = use_api();
    let vm = PackageFormViewModel::new();
    vm.load_from_row(ctx.take_editing());

    let status_options: Vec<(String, String)> = RecordStatus::all()
        .iter()
        .map(|s| (s.as_str().to_string(), s.as_str().to_string()))
        .collect();

    let title = if vm.is_edit_mode() { "Edit Package" } else { "Add New Package" };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save_command(
            api.clone(),
            Callback::new(move |_| ctx.navigate(Page::PackageList)),
        );
    };

    view! {
        <div class="page">
            <PageHeader title=title>
                <Button
                    variant="ghost"
                    on_click=Callback::new(move |_| ctx.navigate(Page::PackageList))
                >
                    "Back to list"
                </Button>
            </PageHeader>

            {move || vm.error.get().map(|e| view! { <div class="error-banner">{e}</div> })}

            <form class="details-form" on:submit=on_submit>
                <Input
                    label="Package Name"
                    id="name"
                    placeholder="Enter package name"
                    value=Signal::derive(move || vm.form.with(|f| f.name.clone()))
                    on_input=Callback::new(move |v| vm.update(|f| f.name = v))
                    required=true
                />
                <Input
                    label="Price (INR)"
                    id="package_price"
                    input_type="number"
                    min="0"
                    placeholder="Enter Price"
                    value=Signal::derive(move || vm.form.with(|f| f.package_price.clone()))
                    on_input=Callback::new(move |v| vm.update(|f| f.package_price = v))
                    required=true
                />
                <Textarea
                    label="Key elements"
                    id="long_description"
                    value=Signal::derive(move || vm.form.with(|f| f.long_description.clone()))
                    on_input=Callback::new(move |v| vm.update(|f| f.long_description = v))
                    required=true
                />
                <Textarea
                    label="Description"
                    id="short_description"
                    value=Signal::derive(move || vm.form.with(|f| f.short_description.clone()))
                    on_input=Callback::new(move |v| vm.update(|f| f.short_description = v))
                    required=true
                />
                <Select
                    label="Status"
                    id="status"
                    placeholder="Select status"
                    options=status_options
                    value=Signal::derive(move || vm.form.with(|f| f.status.clone()))
                    on_change=Callback::new(move |v| vm.update(|f| f.status = v))
                    required=true
                />

                <div class="details-actions">
                    <Button button_type="submit" disabled=Signal::derive(move || vm.saving.get())>
                        {if vm.is_edit_mode() { "Update Package" } else { "Add Package" }}
                    </Button>
                </div>
            </form>
        </div>
    }
}
