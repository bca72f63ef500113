use crate::shared::api::use_api;
use crate::shared::components::PageHeader;
use crate::shared::list_page::{ListContent, ListState};
use crate::shared::table::{Column, RowOrder};
use leptos::prelude::*;

pub const BOOKINGS_ENDPOINT: &str = "/admin/booking-details";

fn columns() -> Vec<Column> {
    vec![
        Column::new("user Id", "user_Id"),
        Column::new("Booked By", "BookedBy"),
        Column::new("Room Type", "roomType"),
        Column::new("Customer Name", "customerName"),
        Column::new("Customer Phone", "customerPhone"),
        Column::new("Check-In", "checkInDate"),
        Column::new("Check-out", "checkOutDate"),
        Column::new("No. of Cottages", "number_of_cottages"),
        Column::new("Selected Packages", "selected_packages"),
        Column::new("Selected Occupancy", "selected_occupancy"),
        Column::new("Status", "status"),
        Column::new("Amount(INR)", "amount"),
        Column::new("Payment Status", "paymentStatus"),
    ]
}

/// Read-only list of bookings
#[component]
#[allow(non_snake_case)]
pub fn BookingList() -> impl IntoView {
    let state = ListState::new();
    let api = use_api();
    state.load("booking details", move || async move { api.get_rows(BOOKINGS_ENDPOINT).await });

    view! {
        <div class="page">
            <PageHeader title="Booking Details" />
            <ListContent state=state columns=columns() order=RowOrder::Reverse />
        </div>
    }
}
