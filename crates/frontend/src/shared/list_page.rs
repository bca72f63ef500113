//! State and mutating flows shared by the list pages.
//!
//! A list page fetches its collection once on mount and keeps it in a
//! [`ListState`]. Delete and status-toggle actions ask for confirmation,
//! call the API and then patch the in-memory collection; they never refetch.

use crate::shared::api::ApiClient;
use crate::shared::dialogs::{alert, confirm};
use crate::shared::rows::{remove_by_id, row_id, set_field_by_id};
use crate::shared::table::{Column, DataTable, Row, RowAction, RowOrder};
use contracts::domain::common::{RecordId, RecordStatus, StatusUpdate};
use leptos::prelude::*;
use serde_json::Value;
use std::future::Future;

#[derive(Clone, Copy)]
pub struct ListState {
    pub rows: RwSignal<Vec<Row>>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
}

impl ListState {
    pub fn new() -> Self {
        Self {
            rows: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
        }
    }

    /// Run `fetch` and replace the collection with its result.
    /// A failure keeps the collection empty and shows an error banner.
    pub fn load<F, Fut>(&self, what: &'static str, fetch: F)
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = Result<Vec<Row>, String>> + 'static,
    {
        let state = *self;
        state.loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match fetch().await {
                Ok(rows) => {
                    log::debug!("Loaded {} {}", rows.len(), what);
                    state.rows.set(rows);
                    state.error.set(None);
                }
                Err(e) => {
                    log::error!("Error fetching {}: {}", what, e);
                    state.error.set(Some(format!("Failed to load {}: {}", what, e)));
                }
            }
            state.loading.set(false);
        });
    }
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}

/// Error banner, loading line and table of a list page
#[component]
pub fn ListContent(
    state: ListState,
    columns: Vec<Column>,
    #[prop(optional)] actions: Vec<RowAction>,
    #[prop(optional)] order: RowOrder,
) -> impl IntoView {
    view! {
        {move || state.error.get().map(|e| view! { <div class="error-banner">{e}</div> })}
        {move || {
            state
                .loading
                .get()
                .then(|| view! { <div class="page__loading">"Loading..."</div> })
        }}
        <DataTable columns=columns rows=state.rows actions=actions order=order />
    }
}

/// Dialog texts of a delete flow
#[derive(Clone, Copy, Debug)]
pub struct DeleteMessages {
    pub confirm: &'static str,
    pub success: &'static str,
    pub failure: &'static str,
}

pub const STATUS_CONFIRM: &str = "Are you sure you want to change the status ?";
pub const STATUS_SUCCESS: &str = "Status changed successfully";
pub const STATUS_FAILURE: &str = "Failed to change status";

/// `{base}/{id}` for a record endpoint
pub fn record_path(base: &str, id: &RecordId) -> String {
    format!("{}/{}", base.trim_end_matches('/'), id)
}

/// Alert text for a failed request: the server message when there is one
fn failure_text(fallback: &str, error: &str) -> String {
    if error.starts_with("Request failed") || error.starts_with("Failed to") {
        fallback.to_string()
    } else {
        error.to_string()
    }
}

/// Confirm, `DELETE {base}/{id}`, then drop the row from `rows`
pub fn delete_record(
    api: ApiClient,
    rows: RwSignal<Vec<Row>>,
    row: Row,
    base: &'static str,
    messages: DeleteMessages,
) {
    let Some(id) = row_id(&row) else {
        log::warn!("Delete requested for a row without id on {}", base);
        alert(messages.failure);
        return;
    };
    if !confirm(messages.confirm) {
        return;
    }

    wasm_bindgen_futures::spawn_local(async move {
        match api.delete(&record_path(base, &id)).await {
            Ok(_) => {
                rows.update(|rows| {
                    remove_by_id(rows, &id);
                });
                alert(messages.success);
            }
            Err(e) => {
                log::error!("Error deleting {}: {}", record_path(base, &id), e);
                alert(&failure_text(messages.failure, &e));
            }
        }
    });
}

/// Confirm, `PUT {base}/{id}` with the flipped Active/Inactive status,
/// then patch the row's `status` in `rows`
pub fn toggle_record_status(
    api: ApiClient,
    rows: RwSignal<Vec<Row>>,
    row: Row,
    base: &'static str,
) {
    let Some(id) = row_id(&row) else {
        log::warn!("Status change requested for a row without id on {}", base);
        alert(STATUS_FAILURE);
        return;
    };
    if !confirm(STATUS_CONFIRM) {
        return;
    }

    let next = RecordStatus::toggled_from(row.get("status").and_then(Value::as_str));
    let body = StatusUpdate { status: next };

    wasm_bindgen_futures::spawn_local(async move {
        match api.put_json(&record_path(base, &id), &body).await {
            Ok(_) => {
                rows.update(|rows| {
                    set_field_by_id(rows, &id, "status", Value::String(next.as_str().to_string()));
                });
                alert(STATUS_SUCCESS);
            }
            Err(e) => {
                log::error!("Error changing status of {}: {}", record_path(base, &id), e);
                alert(&failure_text(STATUS_FAILURE, &e));
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_path() {
        let id = RecordId::new("12");
        assert_eq!(record_path("/admin/package", &id), "/admin/package/12");
        assert_eq!(record_path("/admin/deleteRoomStatus/", &id), "/admin/deleteRoomStatus/12");
    }

    #[test]
    fn test_failure_text_prefers_server_message() {
        assert_eq!(failure_text("Failed to delete room", "Room has bookings"), "Room has bookings");
        assert_eq!(
            failure_text("Failed to delete room", "Request failed: 500"),
            "Failed to delete room"
        );
        assert_eq!(
            failure_text("Failed to delete room", "Failed to send request: offline"),
            "Failed to delete room"
        );
    }
}
