//! The uniform response envelope.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The single wire shape for every HTTP response, success and error alike.
///
/// Serialized as `{"Success": bool, "value": any}`; the capitalized key is
/// part of the wire contract with existing sender apps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(rename = "Success")]
    pub success: bool,
    pub value: Value,
}

impl ResponseEnvelope {
    pub fn ok(value: impl Into<Value>) -> Self {
        ResponseEnvelope { success: true, value: value.into() }
    }

    pub fn err(value: impl Into<Value>) -> Self {
        ResponseEnvelope { success: false, value: value.into() }
    }
}

/// Build the HTTP response for an envelope.
///
/// Every response advertises `text/html` (the body is JSON; kept for
/// compatibility with existing senders) and permissive CORS.
pub fn respond(status: StatusCode, envelope: ResponseEnvelope) -> Response {
    let mut response = (status, Json(envelope)).into_response();
    let headers = response.headers_mut();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/html"));
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_serializes_with_capitalized_success() {
        let envelope = ResponseEnvelope::ok("Sent!");
        let json = serde_json::to_string(&envelope).unwrap();

        assert_eq!(json, r#"{"Success":true,"value":"Sent!"}"#);
    }

    #[test]
    fn error_envelope_serializes_reason() {
        let envelope = ResponseEnvelope::err("No 'Title' in body");
        let json = serde_json::to_string(&envelope).unwrap();

        assert_eq!(json, r#"{"Success":false,"value":"No 'Title' in body"}"#);
    }

    #[test]
    fn respond_sets_content_type_and_cors() {
        let response = respond(StatusCode::OK, ResponseEnvelope::ok("hi"));

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE.as_str()], "text/html");
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
    }
}
