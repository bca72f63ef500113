use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Package create/update body (`POST /admin/package`, `PUT /admin/package/{id}`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageDto {
    pub name: String,
    /// Price in INR, kept as entered
    pub package_price: String,
    /// "Key elements" in the UI
    pub long_description: String,
    pub short_description: String,
    pub status: String,
}

impl PackageDto {
    /// Prefill the form from a row of the package list
    pub fn from_record(record: &Map<String, Value>) -> Self {
        let text = |key: &str| match record.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        };

        Self {
            name: text("name"),
            package_price: text("package_price"),
            long_description: text("long_description"),
            short_description: text("short_description"),
            status: text("status"),
        }
    }

    /// Returns the first validation problem, if any
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Package name is required".to_string());
        }
        match self.package_price.trim().parse::<f64>() {
            Ok(price) if price >= 0.0 => {}
            _ => return Err("Price must be a non-negative number".to_string()),
        }
        if self.long_description.trim().is_empty() {
            return Err("Key elements are required".to_string());
        }
        if self.short_description.trim().is_empty() {
            return Err("Description is required".to_string());
        }
        if self.status.is_empty() {
            return Err("Select a package status".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid() -> PackageDto {
        PackageDto {
            name: "Jungle safari".into(),
            package_price: "2500".into(),
            long_description: "Jeep, guide".into(),
            short_description: "Half day".into(),
            status: "Active".into(),
        }
    }

    #[test]
    fn test_from_record_accepts_numeric_price() {
        let record = json!({
            "id": 3,
            "name": "Jungle safari",
            "package_price": 2500,
            "long_description": "Jeep, guide",
            "short_description": "Half day",
            "status": "Inactive"
        });
        let dto = PackageDto::from_record(record.as_object().unwrap());
        assert_eq!(dto.package_price, "2500");
        assert_eq!(dto.status, "Inactive");
    }

    #[test]
    fn test_validate() {
        assert!(valid().validate().is_ok());

        let mut dto = valid();
        dto.package_price = "-1".into();
        assert!(dto.validate().is_err());

        let mut dto = valid();
        dto.status.clear();
        assert_eq!(dto.validate().unwrap_err(), "Select a package status");
    }
}
