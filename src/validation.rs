//! Field validation shared by the request handlers.
//!
//! Each helper names the offending field in its error so the client can
//! tell which input was rejected.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::dates::parse_date;
use crate::error::{AppError, Result};

/// A numeric field as it arrives in either a JSON or a form body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Integer(i64),
    Float(f64),
    Text(String),
}

pub fn require_text(field: &str, value: Option<&str>) -> Result<String> {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(AppError::Validation(format!("{field} is required"))),
    }
}

pub fn require_positive_integer(field: &str, value: Option<&NumberOrText>) -> Result<i64> {
    let value = match value {
        Some(NumberOrText::Integer(n)) => Some(*n),
        Some(NumberOrText::Text(text)) if text.trim().is_empty() => {
            return Err(AppError::Validation(format!("{field} is required")));
        }
        Some(NumberOrText::Text(text)) => text.trim().parse::<i64>().ok(),
        Some(NumberOrText::Float(_)) => None,
        None => return Err(AppError::Validation(format!("{field} is required"))),
    };

    value
        .filter(|n| *n > 0)
        .ok_or_else(|| AppError::Validation(format!("{field} must be a positive integer")))
}

/// Empty strings count as absent, which is what HTML forms send for blank inputs.
pub fn optional_positive_integer(field: &str, value: Option<&str>) -> Result<Option<i64>> {
    match non_empty(value) {
        None => Ok(None),
        Some(text) => text
            .parse::<i64>()
            .ok()
            .filter(|n| *n > 0)
            .map(Some)
            .ok_or_else(|| AppError::Validation(format!("{field} must be a positive integer"))),
    }
}

pub fn optional_date(field: &str, value: Option<&str>) -> Result<Option<NaiveDate>> {
    match non_empty(value) {
        None => Ok(None),
        Some(text) => parse_date(text).map(Some).ok_or_else(|| {
            AppError::Validation(format!("{field} must be a date in YYYY-MM-DD format"))
        }),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(err: AppError) -> String {
        match err {
            AppError::Validation(msg) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_require_text() {
        assert_eq!(require_text("username", Some("  alice ")).unwrap(), "alice");
        assert_eq!(
            message(require_text("username", Some("   ")).unwrap_err()),
            "username is required"
        );
        assert_eq!(
            message(require_text("username", None).unwrap_err()),
            "username is required"
        );
    }

    #[test]
    fn test_require_positive_integer_accepts_numbers_and_text() {
        let thirty = NumberOrText::Integer(30);
        assert_eq!(require_positive_integer("duration", Some(&thirty)).unwrap(), 30);

        let text = NumberOrText::Text(" 45 ".to_string());
        assert_eq!(require_positive_integer("duration", Some(&text)).unwrap(), 45);
    }

    #[test]
    fn test_require_positive_integer_rejects_invalid() {
        for value in [
            NumberOrText::Integer(-1),
            NumberOrText::Integer(0),
            NumberOrText::Float(12.5),
            NumberOrText::Text("abc".to_string()),
            NumberOrText::Text("-5".to_string()),
            NumberOrText::Text("1.5".to_string()),
        ] {
            let err = require_positive_integer("duration", Some(&value)).unwrap_err();
            assert_eq!(message(err), "duration must be a positive integer");
        }

        let empty = NumberOrText::Text(String::new());
        assert_eq!(
            message(require_positive_integer("duration", Some(&empty)).unwrap_err()),
            "duration is required"
        );
        assert_eq!(
            message(require_positive_integer("duration", None).unwrap_err()),
            "duration is required"
        );
    }

    #[test]
    fn test_optional_positive_integer() {
        assert_eq!(optional_positive_integer("limit", None).unwrap(), None);
        assert_eq!(optional_positive_integer("limit", Some("")).unwrap(), None);
        assert_eq!(optional_positive_integer("limit", Some("3")).unwrap(), Some(3));
        assert!(optional_positive_integer("limit", Some("0")).is_err());
        assert!(optional_positive_integer("limit", Some("two")).is_err());
    }

    #[test]
    fn test_optional_date() {
        assert_eq!(optional_date("from", None).unwrap(), None);
        assert_eq!(optional_date("from", Some(" ")).unwrap(), None);
        assert_eq!(
            optional_date("from", Some("2023-01-10")).unwrap(),
            NaiveDate::from_ymd_opt(2023, 1, 10)
        );
        assert_eq!(
            message(optional_date("to", Some("not-a-date")).unwrap_err()),
            "to must be a date in YYYY-MM-DD format"
        );
    }

    #[test]
    fn test_number_or_text_deserializes_json() {
        let value: NumberOrText = serde_json::from_str("30").unwrap();
        assert_eq!(value, NumberOrText::Integer(30));

        let value: NumberOrText = serde_json::from_str("\"30\"").unwrap();
        assert_eq!(value, NumberOrText::Text("30".to_string()));

        let value: NumberOrText = serde_json::from_str("2.5").unwrap();
        assert_eq!(value, NumberOrText::Float(2.5));
    }
}
