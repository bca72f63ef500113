use super::model;
use crate::shared::api::ApiClient;
use crate::shared::rows::row_id;
use crate::shared::table::Row;
use contracts::domain::a005_package::PackageDto;
use contracts::domain::common::RecordId;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct PackageFormViewModel {
    pub form: RwSignal<PackageDto>,
    pub editing_id: RwSignal<Option<RecordId>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl PackageFormViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(PackageDto::default()),
            editing_id: RwSignal::new(None),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    /// Prefill from the list row an edit was started from
    pub fn load_from_row(&self, row: Option<Row>) {
        if let Some(row) = row {
            self.editing_id.set(row_id(&row));
            self.form.set(PackageDto::from_record(&row));
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing_id.with_untracked(Option::is_some)
    }

    pub fn update(&self, apply: impl FnOnce(&mut PackageDto)) {
        self.form.update(apply);
    }

    pub fn save_command(&self, api: ApiClient, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        if let Err(e) = current.validate() {
            self.error.set(Some(e));
            return;
        }

        let id = self.editing_id.get_untracked();
        let vm = *self;
        vm.saving.set(true);
        vm.error.set(None);

        wasm_bindgen_futures::spawn_local(async move {
            match model::save_package(&api, id.as_ref(), &current).await {
                Ok(()) => {
                    let message = if id.is_some() {
                        "Package updated successfully"
                    } else {
                        "Package added successfully"
                    };
                    log::info!("{}", message);
                    crate::shared::dialogs::alert(message);
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("Error while submitting package: {}", e);
                    vm.error.set(Some(e));
                }
            }
            vm.saving.set(false);
        });
    }
}

impl Default for PackageFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}
