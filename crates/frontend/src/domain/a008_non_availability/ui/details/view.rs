use crate::domain::a004_room::api::fetch_room_options;
use crate::domain::a008_non_availability::ui::list::NON_AVAILABILITY_ENDPOINT;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::pages::Page;
use crate::shared::api::{use_api, ApiClient};
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::components::PageHeader;
use crate::shared::dialogs::alert;
use contracts::domain::a008_non_availability::NonAvailabilityDto;
use leptos::prelude::*;

const SAVE_FAILURE: &str = "Error in adding non availability";

async fn save_non_availability(api: &ApiClient, dto: &NonAvailabilityDto) -> Result<(), String> {
    dto.validate()?;
    api.post_json(NON_AVAILABILITY_ENDPOINT, dto).await?;
    Ok(())
}

#[component]
#[allow(non_snake_case)]
pub fn NonAvailabilityForm() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let api = use_api();

    let form = RwSignal::new(NonAvailabilityDto::default());
    let rooms = RwSignal::new(Vec::<(String, String)>::new());
    let (saving, set_saving) = signal(false);

    let rooms_api = api.clone();
    wasm_bindgen_futures::spawn_local(async move {
        match fetch_room_options(&rooms_api).await {
            Ok(options) => rooms.set(
                options
                    .into_iter()
                    .map(|room| (room.id.to_string(), room.room_name))
                    .collect(),
            ),
            Err(e) => log::error!("Error fetching rooms: {}", e),
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let dto = form.get_untracked();
        let api = api.clone();
        set_saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match save_non_availability(&api, &dto).await {
                Ok(()) => {
                    log::info!("Non-availability added for room {}", dto.room_id);
                    ctx.navigate(Page::NonAvailabilityList);
                }
                Err(e) => {
                    log::error!("Error adding non availability: {}", e);
                    alert(SAVE_FAILURE);
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Non Availability">
                <Button
                    variant="ghost"
                    on_click=Callback::new(move |_| ctx.navigate(Page::NonAvailabilityList))
                >
                    "Back to list"
                </Button>
            </PageHeader>

            <form class="details-form" on:submit=on_submit>
                <Input
                    label="From Date"
                    id="date"
                    input_type="date"
                    value=Signal::derive(move || form.with(|f| f.date.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.date = v))
                    required=true
                />
                <Input
                    label="Count"
                    id="count"
                    input_type="number"
                    min="0"
                    value=Signal::derive(move || form.with(|f| f.count.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.count = v))
                    required=true
                />
                <Select
                    label="Room ID"
                    id="room_id"
                    placeholder="Select Room"
                    options=rooms
                    value=Signal::derive(move || form.with(|f| f.room_id.clone()))
                    on_change=Callback::new(move |v| form.update(|f| f.room_id = v))
                    required=true
                />

                <div class="details-actions">
                    <Button button_type="submit" disabled=Signal::derive(move || saving.get())>
                        "Add Non Availability"
                    </Button>
                </div>
            </form>
        </div>
    }
}
