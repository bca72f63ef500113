use crate::dashboards::d400_overview::api::{count_records, CountedCollection};
use crate::shared::api::use_api;
use crate::shared::components::{PageHeader, StatCard};
use leptos::prelude::*;

const LOAD_FAILURE: &str = "Failed to fetch dashboard data.";

/// Record counts of the main collections, fetched independently so one
/// failing endpoint does not blank the others
#[component]
#[allow(non_snake_case)]
pub fn OverviewDashboard() -> impl IntoView {
    let api = use_api();

    let cards = CountedCollection::ALL
        .iter()
        .map(|&collection| {
            let value = RwSignal::new(None::<usize>);
            let error = RwSignal::new(None::<String>);

            let api = api.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match count_records(&api, collection).await {
                    Ok(count) => value.set(Some(count)),
                    Err(e) => {
                        log::error!("Error counting {}: {}", collection.endpoint(), e);
                        error.set(Some(LOAD_FAILURE.to_string()));
                    }
                }
            });

            view! {
                <StatCard
                    label=collection.label()
                    icon_name=collection.icon_name()
                    value=value
                    error=error
                />
            }
        })
        .collect_view();

    view! {
        <div class="page">
            <PageHeader
                title="Dashboard"
                subtitle="Overview of bookings, users, agents and rooms"
            />
            <div class="stat-grid">
                {cards}
            </div>
        </div>
    }
}
