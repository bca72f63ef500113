use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Identifier of a record as issued by the API.
///
/// Endpoints are inconsistent: some return numeric ids, others strings.
/// Both are normalised to their string form so they can be compared and
/// embedded in URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Build an id from a raw JSON value. Null, empty strings and
    /// non-scalar values yield `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) if !s.trim().is_empty() => Some(Self(s.trim().to_string())),
            Value::Number(n) => Some(Self(n.to_string())),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check a raw JSON value against this id regardless of its JSON type
    pub fn matches(&self, value: &Value) -> bool {
        Self::from_value(value).as_ref() == Some(self)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value() {
        assert_eq!(RecordId::from_value(&json!(42)), Some(RecordId::new("42")));
        assert_eq!(RecordId::from_value(&json!("a1")), Some(RecordId::new("a1")));
        assert_eq!(RecordId::from_value(&json!("")), None);
        assert_eq!(RecordId::from_value(&json!(null)), None);
        assert_eq!(RecordId::from_value(&json!({"id": 1})), None);
    }

    #[test]
    fn test_matches_across_json_types() {
        let id = RecordId::new("7");
        assert!(id.matches(&json!(7)));
        assert!(id.matches(&json!("7")));
        assert!(!id.matches(&json!(8)));
    }
}
