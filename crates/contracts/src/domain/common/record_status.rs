use serde::{Deserialize, Serialize};

/// Activation flag carried by packages and agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordStatus {
    Active,
    Inactive,
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Active => "Active",
            RecordStatus::Inactive => "Inactive",
        }
    }

    /// Status a record moves to when an admin flips it.
    ///
    /// Anything that is not exactly "Active" is treated as inactive, so an
    /// unknown or missing status is switched on.
    pub fn toggled_from(current: Option<&str>) -> Self {
        match current {
            Some("Active") => RecordStatus::Inactive,
            _ => RecordStatus::Active,
        }
    }

    pub fn all() -> [RecordStatus; 2] {
        [RecordStatus::Active, RecordStatus::Inactive]
    }
}

/// Body of `PUT /admin/{package,agent}/{id}` when only the status changes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: RecordStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert_eq!(RecordStatus::toggled_from(Some("Active")), RecordStatus::Inactive);
        assert_eq!(RecordStatus::toggled_from(Some("Inactive")), RecordStatus::Active);
        assert_eq!(RecordStatus::toggled_from(Some("active")), RecordStatus::Active);
        assert_eq!(RecordStatus::toggled_from(None), RecordStatus::Active);
    }

    #[test]
    fn test_status_update_body() {
        let body = serde_json::to_string(&StatusUpdate { status: RecordStatus::Inactive }).unwrap();
        assert_eq!(body, r#"{"status":"Inactive"}"#);
    }
}
