use leptos::prelude::Effect;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

use crate::layout::pages::Page;
use crate::shared::table::Row;

#[derive(Debug, Default, Serialize, Deserialize)]
struct PageQuery {
    page: Option<String>,
}

/// App-wide navigation state.
///
/// `editing` carries the row an edit action was started from to the form
/// page, which takes it once on mount.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
    pub left_open: RwSignal<bool>,
    pub editing: RwSignal<Option<Row>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Page::default()),
            left_open: RwSignal::new(true),
            editing: RwSignal::new(None),
        }
    }

    /// Restore the page from `?page=` and keep the query string in sync
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let query: PageQuery =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(page) = query.page.as_deref().and_then(Page::from_key) {
            self.active.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let page = this.active.get();
            let query = PageQuery {
                page: Some(page.key().to_string()),
            };
            let new_url = format!("?{}", serde_qs::to_string(&query).unwrap_or_default());

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn navigate(&self, page: Page) {
        log::debug!("navigate: {}", page.key());
        self.editing.set(None);
        self.active.set(page);
    }

    /// Open a form page pre-filled from `row`
    pub fn edit(&self, page: Page, row: Row) {
        log::debug!("edit on {}: {:?}", page.key(), row.get("id"));
        self.editing.set(Some(row));
        self.active.set(page);
    }

    pub fn take_editing(&self) -> Option<Row> {
        let row = self.editing.get_untracked();
        if row.is_some() {
            self.editing.set(None);
        }
        row
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
