use super::model::{self, RoomStatusFields};
use crate::domain::a004_room::api::fetch_room_options;
use crate::shared::api::ApiClient;
use crate::shared::dialogs::alert;
use crate::shared::rows::row_id;
use crate::shared::table::Row;
use chrono::FixedOffset;
use contracts::domain::common::RecordId;
use leptos::prelude::*;
use serde_json::Value;

#[derive(Clone, Copy)]
pub struct RoomStatusFormViewModel {
    pub form: RwSignal<RoomStatusFields>,
    pub editing_id: RwSignal<Option<RecordId>>,
    /// `(id, room name)` pairs for the room select
    pub rooms: RwSignal<Vec<(String, String)>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl RoomStatusFormViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(RoomStatusFields::default()),
            editing_id: RwSignal::new(None),
            rooms: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn load_from_row(&self, row: Option<Row>, offset: FixedOffset) {
        if let Some(row) = row {
            self.editing_id.set(row_id(&row));
            self.form.set(RoomStatusFields::from_row(&row, offset));
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing_id.with_untracked(Option::is_some)
    }

    pub fn update(&self, apply: impl FnOnce(&mut RoomStatusFields)) {
        self.form.update(apply);
    }

    pub fn load_rooms(&self, api: ApiClient) {
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_room_options(&api).await {
                Ok(rooms) => vm.rooms.set(
                    rooms
                        .into_iter()
                        .map(|room| (room.id.to_string(), room.room_name))
                        .collect(),
                ),
                Err(e) => {
                    log::error!("Error fetching rooms: {}", e);
                    vm.error.set(Some(format!("Failed to load rooms: {}", e)));
                }
            }
        });
    }

    pub fn save_command(&self, api: ApiClient, on_saved: Callback<()>) {
        let dto = match self.form.with_untracked(RoomStatusFields::to_dto) {
            Ok(dto) => dto,
            Err(e) => {
                alert(&e);
                return;
            }
        };

        let id = self.editing_id.get_untracked();
        let vm = *self;
        vm.saving.set(true);
        vm.error.set(None);

        wasm_bindgen_futures::spawn_local(async move {
            match model::save_room_status(&api, id.as_ref(), &dto).await {
                Ok(body) => {
                    let fallback = if id.is_some() {
                        "Room status updated successfully"
                    } else {
                        "Room status created successfully"
                    };
                    let message = body
                        .get("message")
                        .and_then(Value::as_str)
                        .unwrap_or(fallback);
                    alert(message);
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("Error submitting room status: {}", e);
                    let message = if e.starts_with("Request failed") {
                        "Failed to save room status".to_string()
                    } else {
                        e
                    };
                    vm.error.set(Some(message));
                }
            }
            vm.saving.set(false);
        });
    }
}

impl Default for RoomStatusFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}
