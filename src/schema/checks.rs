use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::form::form_model::FieldType;

pub const REQUIRED_MESSAGE: &str = "This field is required";

// RFC-5322-lite, the HTML5 input[type=email] pattern
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .unwrap()
});

// E.164-like
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[1-9]\d{1,14}$").unwrap());

// HTML date inputs submit this format
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Whether a submitted value counts as present. Null and the empty
/// string are absent; an unticked checkbox (false) is absent so a
/// required consent box violates.
pub fn is_present(field_type: FieldType, value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Bool(ticked) if field_type == FieldType::Checkbox => *ticked,
        _ => true,
    }
}

/// The per-type base check. Returns the violation message when the
/// value fails, None when it passes. Only called on present values.
pub fn base_check(field_type: FieldType, options: &[String], value: &Value) -> Option<String> {
    match field_type {
        FieldType::Text | FieldType::Textarea => {
            if value.is_string() {
                None
            } else {
                Some("Must be text".to_string())
            }
        }

        FieldType::Email => match value.as_str() {
            Some(s) if EMAIL_RE.is_match(s) => None,
            _ => Some("Invalid email address".to_string()),
        },

        FieldType::Number => {
            if numeric_value(value).is_some() {
                None
            } else {
                Some("Must be a number".to_string())
            }
        }

        FieldType::Phone => match value.as_str() {
            Some(s) if PHONE_RE.is_match(s) => None,
            _ => Some("Invalid phone number".to_string()),
        },

        FieldType::Date => match value.as_str() {
            Some(s) if NaiveDate::parse_from_str(s, DATE_FORMAT).is_ok() => None,
            _ => Some("Invalid date".to_string()),
        },

        FieldType::Select | FieldType::Radio => match value.as_str() {
            Some(s) if options.iter().any(|o| o == s) => None,
            _ => Some("Value is not one of the available options".to_string()),
        },

        // Presence-only kinds: no base type check
        FieldType::Checkbox | FieldType::File => None,
    }
}

/// Numeric reading of a value: a JSON number, or a string that parses
/// as one (HTML inputs submit strings).
pub fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}
