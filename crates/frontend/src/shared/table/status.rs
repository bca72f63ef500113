//! Reading the available/booked counters out of a room-status record.
//!
//! Depending on endpoint and on how old the record is, `status` arrives as
//! - a JSON object: `{"available": 3, "booked": 1}`
//! - a readable string: `"Available: 3, Booked: 1"`
//! - a JSON-encoded string: `"{\"available\":3,\"booked\":1}"`
//!
//! [`extract_count`] tries each shape in that order and reports a typed error
//! when none of them yields a number.

use super::column::StatusCount;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use thiserror::Error;

static AVAILABLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Available:\s*(\d+)").unwrap());
static BOOKED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Booked:\s*(\d+)").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusParseError {
    #[error("status field is missing")]
    Missing,
    #[error("no {count} count in status {raw}")]
    Unrecognised { count: &'static str, raw: String },
}

type Attempt = fn(&Value, StatusCount) -> Option<u64>;

/// Shapes tried in order; the first one that yields a number wins
const ATTEMPTS: [Attempt; 3] = [from_structured, from_pattern, from_encoded];

pub fn extract_count(status: Option<&Value>, count: StatusCount) -> Result<u64, StatusParseError> {
    let status = match status {
        None | Some(Value::Null) => return Err(StatusParseError::Missing),
        Some(status) => status,
    };

    ATTEMPTS
        .iter()
        .find_map(|attempt| attempt(status, count))
        .ok_or_else(|| StatusParseError::Unrecognised {
            count: count.key(),
            raw: status.to_string(),
        })
}

fn from_structured(status: &Value, count: StatusCount) -> Option<u64> {
    status.as_object()?.get(count.key()).and_then(count_from_value)
}

fn from_pattern(status: &Value, count: StatusCount) -> Option<u64> {
    let text = status.as_str()?;
    // JSON-encoded objects belong to `from_encoded`
    if text.trim_start().starts_with('{') {
        return None;
    }
    let re = match count {
        StatusCount::Available => &AVAILABLE_RE,
        StatusCount::Booked => &BOOKED_RE,
    };
    re.captures(text)?.get(1)?.as_str().parse().ok()
}

fn from_encoded(status: &Value, count: StatusCount) -> Option<u64> {
    let text = status.as_str()?;
    let decoded: Value = serde_json::from_str(text.trim()).ok()?;
    from_structured(&decoded, count)
}

/// Counters are stored as numbers by newer endpoints and as numeric
/// strings by the form that writes them.
fn count_from_value(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0 && f.fract() == 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_all_shapes_yield_the_same_count() {
        let shapes = [
            json!({"available": 3, "booked": 1}),
            json!("Available: 3, Booked: 1"),
            json!(r#"{"available":3,"booked":1}"#),
        ];
        for shape in &shapes {
            assert_eq!(extract_count(Some(shape), StatusCount::Available), Ok(3), "{shape}");
            assert_eq!(extract_count(Some(shape), StatusCount::Booked), Ok(1), "{shape}");
        }
    }

    #[test]
    fn test_numeric_strings_inside_object() {
        let status = json!({"available": "5", "booked": "0"});
        assert_eq!(extract_count(Some(&status), StatusCount::Available), Ok(5));
        assert_eq!(extract_count(Some(&status), StatusCount::Booked), Ok(0));
    }

    #[test]
    fn test_pattern_is_case_insensitive_and_tolerates_spacing() {
        let status = json!("available:7 | BOOKED:   2");
        assert_eq!(extract_count(Some(&status), StatusCount::Available), Ok(7));
        assert_eq!(extract_count(Some(&status), StatusCount::Booked), Ok(2));
    }

    #[test]
    fn test_encoded_object_is_not_pattern_matched() {
        let status = json!("{\"note\":\"Booked: 9\",\"booked\":2}");
        assert_eq!(extract_count(Some(&status), StatusCount::Booked), Ok(2));
        assert!(extract_count(Some(&status), StatusCount::Available).is_err());
    }

    #[test]
    fn test_missing_status() {
        assert_eq!(
            extract_count(None, StatusCount::Available),
            Err(StatusParseError::Missing)
        );
        assert_eq!(
            extract_count(Some(&Value::Null), StatusCount::Booked),
            Err(StatusParseError::Missing)
        );
    }

    #[test]
    fn test_unreadable_status() {
        for status in [
            json!("fully booked"),
            json!("{not json"),
            json!({"available": null}),
            json!({"available": -1}),
            json!(42),
        ] {
            assert!(
                matches!(
                    extract_count(Some(&status), StatusCount::Available),
                    Err(StatusParseError::Unrecognised { count: "available", .. })
                ),
                "{status}"
            );
        }
    }

    #[test]
    fn test_key_present_only_for_other_counter() {
        let status = json!({"booked": 4});
        assert!(extract_count(Some(&status), StatusCount::Available).is_err());
        assert_eq!(extract_count(Some(&status), StatusCount::Booked), Ok(4));
    }
}
