//! Inbound payload validation.
//!
//! Turns a raw request body into either a typed [`NotificationRequest`] or a
//! caller-facing rejection reason. Checks run in a fixed order: JSON parse
//! first, then the `Title` key, then the `Message` key. The values themselves
//! are not type-checked here; non-string JSON values are coerced to their
//! JSON text representation.

use serde_json::Value;

/// A validated notification request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub title: String,
    pub message: String,
}

/// Outcome of validating a request body.
///
/// Rejection reasons are user-facing strings, returned verbatim in the HTTP
/// response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid(NotificationRequest),
    Invalid(String),
}

/// Validate a raw request body.
pub fn validate(raw_body: &str) -> ValidationOutcome {
    let body: Value = match serde_json::from_str(raw_body) {
        Ok(value) => value,
        Err(_) => return ValidationOutcome::Invalid("Unable to parse json".to_string()),
    };

    let Some(title) = body.get("Title") else {
        return ValidationOutcome::Invalid("No 'Title' in body".to_string());
    };

    let Some(message) = body.get("Message") else {
        return ValidationOutcome::Invalid("No 'Message' in body".to_string());
    };

    ValidationOutcome::Valid(NotificationRequest {
        title: coerce_to_string(title),
        message: coerce_to_string(message),
    })
}

fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_body_is_accepted() {
        let outcome = validate(r#"{"Title": "Hello", "Message": "World"}"#);

        assert_eq!(
            outcome,
            ValidationOutcome::Valid(NotificationRequest {
                title: "Hello".to_string(),
                message: "World".to_string(),
            })
        );
    }

    #[test]
    fn unparseable_json_is_rejected() {
        let outcome = validate("{not json");
        assert_eq!(outcome, ValidationOutcome::Invalid("Unable to parse json".to_string()));
    }

    #[test]
    fn missing_title_is_rejected() {
        let outcome = validate(r#"{"Message": "World"}"#);
        assert_eq!(outcome, ValidationOutcome::Invalid("No 'Title' in body".to_string()));
    }

    #[test]
    fn missing_message_is_rejected() {
        let outcome = validate(r#"{"Title": "Hello"}"#);
        assert_eq!(outcome, ValidationOutcome::Invalid("No 'Message' in body".to_string()));
    }

    #[test]
    fn parse_error_takes_precedence_over_missing_fields() {
        let outcome = validate("");
        assert_eq!(outcome, ValidationOutcome::Invalid("Unable to parse json".to_string()));
    }

    #[test]
    fn title_is_checked_before_message() {
        let outcome = validate("{}");
        assert_eq!(outcome, ValidationOutcome::Invalid("No 'Title' in body".to_string()));
    }

    #[test]
    fn non_object_body_reports_missing_title() {
        let outcome = validate("[1, 2, 3]");
        assert_eq!(outcome, ValidationOutcome::Invalid("No 'Title' in body".to_string()));
    }

    #[test]
    fn non_string_values_are_coerced() {
        let outcome = validate(r#"{"Title": 42, "Message": {"nested": true}}"#);

        match outcome {
            ValidationOutcome::Valid(request) => {
                assert_eq!(request.title, "42");
                assert_eq!(request.message, r#"{"nested":true}"#);
            }
            other => panic!("expected valid outcome, got {other:?}"),
        }
    }

    #[test]
    fn extra_fields_are_ignored() {
        let outcome =
            validate(r#"{"Title": "t", "Message": "m", "Badge": 3, "Sound": "default"}"#);
        assert!(matches!(outcome, ValidationOutcome::Valid(_)));
    }
}
