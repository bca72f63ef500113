//! Pages reachable from the sidebar, keyed the way they appear in `?page=`.

pub mod registry;

pub use registry::render_page;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Dashboard,
    Bookings,
    PackageList,
    PackageForm,
    RoomList,
    AgentList,
    RoomStatusList,
    RoomStatusForm,
    NonAvailabilityList,
    NonAvailabilityForm,
    Payments,
    Inquiries,
}

impl Page {
    pub const ALL: [Page; 12] = [
        Page::Dashboard,
        Page::Bookings,
        Page::PackageList,
        Page::PackageForm,
        Page::RoomList,
        Page::AgentList,
        Page::RoomStatusList,
        Page::RoomStatusForm,
        Page::NonAvailabilityList,
        Page::NonAvailabilityForm,
        Page::Payments,
        Page::Inquiries,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Bookings => "bookingdetails",
            Page::PackageList => "packages/list",
            Page::PackageForm => "packages/add",
            Page::RoomList => "roomtype/list",
            Page::AgentList => "agent/list",
            Page::RoomStatusList => "availability/list",
            Page::RoomStatusForm => "availability/add",
            Page::NonAvailabilityList => "nonavailability/list",
            Page::NonAvailabilityForm => "nonavailability/add",
            Page::Payments => "paymentlist",
            Page::Inquiries => "inquirylist",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Bookings => "Booking Details",
            Page::PackageList => "Package List",
            Page::PackageForm => "Add Package",
            Page::RoomList => "Rooms List",
            Page::AgentList => "Agents List",
            Page::RoomStatusList => "Room Status List",
            Page::RoomStatusForm => "Add Room Status",
            Page::NonAvailabilityList => "Non-Available Rooms List",
            Page::NonAvailabilityForm => "Add Non-Availability",
            Page::Payments => "Payment Info",
            Page::Inquiries => "Inquiry",
        }
    }

    /// Keys are matched case-insensitively and without surrounding slashes
    pub fn from_key(key: &str) -> Option<Page> {
        let key = key.trim().trim_matches('/');
        Page::ALL
            .into_iter()
            .find(|page| page.key().eq_ignore_ascii_case(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_round_trip_and_are_unique() {
        let keys: HashSet<&str> = Page::ALL.iter().map(|p| p.key()).collect();
        assert_eq!(keys.len(), Page::ALL.len());
        for page in Page::ALL {
            assert_eq!(Page::from_key(page.key()), Some(page));
        }
    }

    #[test]
    fn test_from_key_is_lenient() {
        assert_eq!(Page::from_key("/PaymentList"), Some(Page::Payments));
        assert_eq!(Page::from_key(" packages/add/ "), Some(Page::PackageForm));
        assert_eq!(Page::from_key("roomtype/add"), None);
        assert_eq!(Page::default(), Page::Dashboard);
    }
}
