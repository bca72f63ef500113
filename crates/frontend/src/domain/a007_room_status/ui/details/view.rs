use super::view_model::RoomStatusFormViewModel;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::pages::Page;
use crate::shared::api::use_api;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::components::PageHeader;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn RoomStatusForm() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let api = use_api();
    let vm = RoomStatusFormViewModel::new();
    vm.load_from_row(ctx.take_editing(), api.config().utc_offset());
    vm.load_rooms(api.clone());

    let title = if vm.is_edit_mode() { "Edit Room Status" } else { "Add Room Status" };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save_command(
            api.clone(),
            Callback::new(move |_| ctx.navigate(Page::RoomStatusList)),
        );
    };

    view! {
        <div class="page">
            <PageHeader title=title>
                <Button
                    variant="ghost"
                    on_click=Callback::new(move |_| ctx.navigate(Page::RoomStatusList))
                >
                    "Back to list"
                </Button>
            </PageHeader>

            {move || vm.error.get().map(|e| view! { <div class="error-banner">{e}</div> })}

            <form class="details-form" on:submit=on_submit>
                <Select
                    label="Room"
                    id="room_id"
                    placeholder="Select a room"
                    options=vm.rooms
                    value=Signal::derive(move || vm.form.with(|f| f.room_id.clone()))
                    on_change=Callback::new(move |v| vm.update(|f| f.room_id = v))
                    required=true
                />
                <Input
                    label="Date"
                    id="date"
                    input_type="date"
                    value=Signal::derive(move || vm.form.with(|f| f.date.clone()))
                    on_input=Callback::new(move |v| vm.update(|f| f.date = v))
                    required=true
                />
                <Input
                    label="Available"
                    id="available"
                    input_type="number"
                    min="0"
                    value=Signal::derive(move || vm.form.with(|f| f.available.clone()))
                    on_input=Callback::new(move |v| vm.update(|f| f.available = v))
                    required=true
                />
                <Input
                    label="Booked"
                    id="booked"
                    input_type="number"
                    min="0"
                    value=Signal::derive(move || vm.form.with(|f| f.booked.clone()))
                    on_input=Callback::new(move |v| vm.update(|f| f.booked = v))
                    required=true
                />

                <div class="details-actions">
                    <Button button_type="submit" disabled=Signal::derive(move || vm.saving.get())>
                        {if vm.is_edit_mode() { "Update Room Status" } else { "Add Room Status" }}
                    </Button>
                </div>
            </form>
        </div>
    }
}
