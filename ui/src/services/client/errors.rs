use serde::Deserialize;
use thiserror::Error;

/// Shown when no response was received at all.
pub const NETWORK_ERROR_MESSAGE: &str =
    "An unexpected error occurred. Is the backend server running?";

/// Shown when the backend answered with an error but gave no usable detail.
pub const SERVER_FALLBACK_DETAIL: &str = "Failed to fetch case details.";

/// Errors from the case lookup backend
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LookupError {
    /// Backend answered with a non-success status
    #[error("backend returned {status}: {}", detail_or_fallback(.detail))]
    Server { status: u16, detail: Option<String> },

    /// No response was received (connection refused, DNS, CORS, offline)
    #[error("network error: {message}")]
    Network { message: String },

    /// Backend answered 2xx but the body was not what we expected
    #[error("invalid response: {message}")]
    InvalidResponse { message: String },

    /// The HTTP client itself could not be constructed
    #[error("failed to build HTTP client: {message}")]
    Client { message: String },
}

impl LookupError {
    /// The exact text rendered in the error box for this error
    pub fn user_message(&self) -> String {
        match self {
            LookupError::Server { detail, .. } => format!("Error: {}", detail_or_fallback(detail)),
            LookupError::InvalidResponse { .. } => format!("Error: {}", SERVER_FALLBACK_DETAIL),
            LookupError::Network { .. } | LookupError::Client { .. } => {
                NETWORK_ERROR_MESSAGE.to_string()
            }
        }
    }

    /// Build a server error from the raw body of a non-success response
    pub fn from_error_body(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.detail)
            .and_then(detail_text);

        LookupError::Server { status, detail }
    }
}

fn detail_or_fallback(detail: &Option<String>) -> &str {
    detail.as_deref().unwrap_or(SERVER_FALLBACK_DETAIL)
}

/// `{"detail": ...}` as produced by the backend's exception handlers
#[derive(Deserialize, Debug)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// `detail` is a string for explicit errors and a list of `{msg, ...}` objects
/// for request validation failures. Other scalars are shown as written.
fn detail_text(detail: serde_json::Value) -> Option<String> {
    match detail {
        serde_json::Value::String(text) if !text.is_empty() => Some(text),
        serde_json::Value::Number(number) => Some(number.to_string()),
        serde_json::Value::Bool(flag) => Some(flag.to_string()),
        serde_json::Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|msg| msg.as_str()))
                .filter(|msg| !msg.is_empty())
                .collect();

            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_is_prefixed() {
        let error = LookupError::from_error_body(404, r#"{"detail": "Case not found"}"#);
        assert_eq!(
            error,
            LookupError::Server {
                status: 404,
                detail: Some("Case not found".to_string())
            }
        );
        assert_eq!(error.user_message(), "Error: Case not found");
    }

    #[test]
    fn test_missing_or_empty_detail_falls_back() {
        for body in [r#"{}"#, r#"{"detail": ""}"#, r#"{"detail": null}"#, "Internal Server Error"] {
            let error = LookupError::from_error_body(500, body);
            assert_eq!(
                error.user_message(),
                "Error: Failed to fetch case details.",
                "body: {}",
                body
            );
        }
    }

    #[test]
    fn test_scalar_detail_is_shown_verbatim() {
        let error = LookupError::from_error_body(400, r#"{"detail": 42}"#);
        assert_eq!(error.user_message(), "Error: 42");

        let error = LookupError::from_error_body(400, r#"{"detail": true}"#);
        assert_eq!(error.user_message(), "Error: true");
    }

    #[test]
    fn test_validation_detail_list_is_joined() {
        let body = r#"{"detail": [
            {"loc": ["body", "case_year"], "msg": "field required", "type": "value_error.missing"},
            {"loc": ["body", "case_type"], "msg": "str type expected", "type": "type_error.str"}
        ]}"#;
        let error = LookupError::from_error_body(422, body);
        assert_eq!(
            error.user_message(),
            "Error: field required; str type expected"
        );
    }

    #[test]
    fn test_network_and_client_errors_share_generic_message() {
        let network = LookupError::Network {
            message: "connection refused".to_string(),
        };
        let client = LookupError::Client {
            message: "builder error".to_string(),
        };
        assert_eq!(network.user_message(), NETWORK_ERROR_MESSAGE);
        assert_eq!(client.user_message(), NETWORK_ERROR_MESSAGE);
    }

    #[test]
    fn test_invalid_response_reads_like_server_error() {
        let error = LookupError::InvalidResponse {
            message: "missing field `party_names`".to_string(),
        };
        assert_eq!(error.user_message(), "Error: Failed to fetch case details.");
        assert!(error.to_string().contains("party_names"));
    }
}
