//! Homework review domain: response shape checks and status formatting.
//!
//! The review API payload is deliberately kept as a generic
//! `serde_json::Value`; the contract is presence checks on the handful of
//! keys the bot cares about, not a derived schema.

use serde_json::Value;

use crate::{
    errors::{Error, ValidationError},
    Result,
};

/// Canonical review states recognized by the watcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "approved" => Some(Self::Approved),
            "reviewing" => Some(Self::Reviewing),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Fixed human-readable verdict for this status.
    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

/// Check the response shape and return the homework records unchanged.
///
/// The records themselves are not inspected here; `current_date` is optional
/// and read separately by the watcher.
pub fn check_response(response: &Value) -> Result<&[Value]> {
    let map = response.as_object().ok_or(ValidationError::NotAMapping)?;

    let homeworks = map
        .get("homeworks")
        .ok_or(ValidationError::MissingKey("homeworks"))?;

    let list = homeworks
        .as_array()
        .ok_or(ValidationError::NotAList("homeworks"))?;

    Ok(list)
}

/// The server clock echoed in the response, when present.
pub fn current_date(response: &Value) -> Option<i64> {
    response.get("current_date").and_then(Value::as_i64)
}

/// Format the notification for one homework record.
///
/// Pure function: no I/O, no mutation. Each key check is independent of the
/// other key's presence.
pub fn parse_status(homework: &Value) -> Result<String> {
    let record = homework.as_object().ok_or(ValidationError::NotAMapping)?;

    let name = record
        .get("homework_name")
        .ok_or(ValidationError::MissingKey("homework_name"))?;

    let raw_status = record
        .get("status")
        .ok_or(ValidationError::MissingKey("status"))?;

    let status = raw_status
        .as_str()
        .and_then(HomeworkStatus::parse)
        .ok_or_else(|| Error::Status(display_field(raw_status)))?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        display_field(name),
        status.verdict()
    ))
}

fn display_field(v: &Value) -> String {
    match v.as_str() {
        Some(s) => s.to_string(),
        None => v.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_status_formats_each_verdict() {
        let cases = [
            (
                "approved",
                "Изменился статус проверки работы \"proj1\". \
                 Работа проверена: ревьюеру всё понравилось. Ура!",
            ),
            (
                "reviewing",
                "Изменился статус проверки работы \"proj1\". \
                 Работа взята на проверку ревьюером.",
            ),
            (
                "rejected",
                "Изменился статус проверки работы \"proj1\". \
                 Работа проверена: у ревьюера есть замечания.",
            ),
        ];

        for (status, expected) in cases {
            let record = json!({"homework_name": "proj1", "status": status});
            assert_eq!(parse_status(&record).unwrap(), expected);
        }
    }

    #[test]
    fn parse_status_rejects_unknown_status() {
        let record = json!({"homework_name": "proj1", "status": "burned"});
        let err = parse_status(&record).unwrap_err();
        assert!(matches!(err, Error::Status(ref s) if s == "burned"));
    }

    #[test]
    fn parse_status_requires_homework_name() {
        let record = json!({"status": "approved"});
        let err = parse_status(&record).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::MissingKey("homework_name"))
        ));
    }

    #[test]
    fn parse_status_requires_status() {
        let record = json!({"homework_name": "proj1"});
        let err = parse_status(&record).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::MissingKey("status"))
        ));
    }

    #[test]
    fn parse_status_treats_non_string_status_as_unknown() {
        let record = json!({"homework_name": "proj1", "status": 7});
        let err = parse_status(&record).unwrap_err();
        assert!(matches!(err, Error::Status(_)));
    }

    #[test]
    fn check_response_rejects_non_mapping() {
        let err = check_response(&json!([1, 2, 3])).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::NotAMapping)
        ));
    }

    #[test]
    fn check_response_rejects_missing_homeworks_key() {
        let err = check_response(&json!({"current_date": 1})).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::MissingKey("homeworks"))
        ));
    }

    #[test]
    fn check_response_rejects_non_list_homeworks() {
        let err = check_response(&json!({"homeworks": {"a": 1}})).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::NotAList("homeworks"))
        ));
    }

    #[test]
    fn check_response_returns_records_unchanged() {
        let payload = json!({
            "homeworks": [{"homework_name": "proj1", "status": "approved"}],
            "current_date": 1700000200,
        });
        let records = check_response(&payload).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["homework_name"], "proj1");
    }

    #[test]
    fn current_date_is_optional() {
        assert_eq!(
            current_date(&json!({"homeworks": [], "current_date": 1700000200})),
            Some(1700000200)
        );
        assert_eq!(current_date(&json!({"homeworks": []})), None);
        // A mis-typed current_date is treated as absent.
        assert_eq!(
            current_date(&json!({"homeworks": [], "current_date": "soon"})),
            None
        );
    }
}
