use super::Page;
use crate::dashboards::OverviewDashboard;
use crate::domain::a001_booking::ui::list::BookingList;
use crate::domain::a002_payment::ui::list::PaymentList;
use crate::domain::a003_inquiry::ui::list::InquiryList;
use crate::domain::a004_room::ui::list::RoomList;
use crate::domain::a005_package::ui::details::PackageForm;
use crate::domain::a005_package::ui::list::PackageList;
use crate::domain::a006_agent::ui::list::AgentList;
use crate::domain::a007_room_status::ui::details::RoomStatusForm;
use crate::domain::a007_room_status::ui::list::RoomStatusList;
use crate::domain::a008_non_availability::ui::details::NonAvailabilityForm;
use crate::domain::a008_non_availability::ui::list::NonAvailabilityList;
use leptos::prelude::*;

/// Content of the main area for `page`
pub fn render_page(page: Page) -> AnyView {
    match page {
        Page::Dashboard => view! { <OverviewDashboard /> }.into_any(),
        Page::Bookings => view! { <BookingList /> }.into_any(),
        Page::PackageList => view! { <PackageList /> }.into_any(),
        Page::PackageForm => view! { <PackageForm /> }.into_any(),
        Page::RoomList => view! { <RoomList /> }.into_any(),
        Page::AgentList => view! { <AgentList /> }.into_any(),
        Page::RoomStatusList => view! { <RoomStatusList /> }.into_any(),
        Page::RoomStatusForm => view! { <RoomStatusForm /> }.into_any(),
        Page::NonAvailabilityList => view! { <NonAvailabilityList /> }.into_any(),
        Page::NonAvailabilityForm => view! { <NonAvailabilityForm /> }.into_any(),
        Page::Payments => view! { <PaymentList /> }.into_any(),
        Page::Inquiries => view! { <InquiryList /> }.into_any(),
    }
}
