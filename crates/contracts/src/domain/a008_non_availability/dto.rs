use serde::{Deserialize, Serialize};

/// Body of `POST /admin/availability`: rooms blocked out for a date
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NonAvailabilityDto {
    pub date: String,
    pub room_id: String,
    pub count: String,
}

impl NonAvailabilityDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.date.trim().is_empty() {
            return Err("Date is required".to_string());
        }
        if self.room_id.trim().is_empty() {
            return Err("Select a room".to_string());
        }
        match self.count.trim().parse::<u32>() {
            Ok(_) => Ok(()),
            Err(_) => Err("Count must be a whole number".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        let mut dto = NonAvailabilityDto {
            date: "2024-12-24".into(),
            room_id: "2".into(),
            count: "3".into(),
        };
        assert!(dto.validate().is_ok());

        dto.count = "three".into();
        assert!(dto.validate().is_err());

        dto.count = "3".into();
        dto.room_id.clear();
        assert_eq!(dto.validate().unwrap_err(), "Select a room");
    }
}
