use crate::domain::a001_booking::ui::list::BOOKINGS_ENDPOINT;
use crate::domain::a004_room::ui::list::ROOMS_ENDPOINT;
use crate::domain::a006_agent::ui::list::AGENTS_ENDPOINT;
use crate::shared::api::ApiClient;

pub const USERS_ENDPOINT: &str = "/admin/user";

/// Collections counted on the overview, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountedCollection {
    Bookings,
    Users,
    Agents,
    Rooms,
}

impl CountedCollection {
    pub const ALL: [CountedCollection; 4] = [
        CountedCollection::Bookings,
        CountedCollection::Users,
        CountedCollection::Agents,
        CountedCollection::Rooms,
    ];

    pub fn endpoint(self) -> &'static str {
        match self {
            CountedCollection::Bookings => BOOKINGS_ENDPOINT,
            CountedCollection::Users => USERS_ENDPOINT,
            CountedCollection::Agents => AGENTS_ENDPOINT,
            CountedCollection::Rooms => ROOMS_ENDPOINT,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CountedCollection::Bookings => "Total Bookings",
            CountedCollection::Users => "Total Users",
            CountedCollection::Agents => "Total Agents",
            CountedCollection::Rooms => "Total Room Types",
        }
    }

    pub fn icon_name(self) -> &'static str {
        match self {
            CountedCollection::Bookings => "calendar",
            CountedCollection::Users => "users",
            CountedCollection::Agents => "users",
            CountedCollection::Rooms => "bed",
        }
    }
}

/// Number of records in a collection endpoint
pub async fn count_records(
    api: &ApiClient,
    collection: CountedCollection,
) -> Result<usize, String> {
    let rows = api.get_rows(collection.endpoint()).await?;
    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collections_have_distinct_endpoints() {
        let mut endpoints: Vec<_> = CountedCollection::ALL.iter().map(|c| c.endpoint()).collect();
        endpoints.sort();
        endpoints.dedup();
        assert_eq!(endpoints.len(), CountedCollection::ALL.len());
        assert!(endpoints.contains(&"/admin/user"));
    }
}
