use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod protocol;

pub use protocol::{ApiRequest, HttpMethod, LoginRequest, LogoutRequest, RegisterRequest};

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// Durable-store key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";
pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const HEADER_ACCEPT: &str = "Accept";
pub const MIME_JSON: &str = "application/json";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// The server's user object. The client never looks inside it.
pub type UserRecord = Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub user: Option<UserRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<UserRecord>,
}

/// Body of a non-2xx response.
///
/// `message` is the server's summary; every other top-level key whose value
/// is a list of strings is kept as a per-field error list (`{"email": [..]}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub fields: BTreeMap<String, Vec<String>>,
}

impl ErrorPayload {
    /// Lenient parse: bodies that are not JSON objects yield an empty payload,
    /// and keys that are not string lists are skipped.
    pub fn parse(body: &str) -> Self {
        let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) else {
            return Self::default();
        };

        let mut payload = Self::default();
        for (key, value) in map {
            match (key.as_str(), value) {
                ("message", Value::String(message)) => payload.message = Some(message),
                (_, Value::Array(items)) => {
                    let list: Vec<String> = items
                        .into_iter()
                        .filter_map(|item| match item {
                            Value::String(s) => Some(s),
                            _ => None,
                        })
                        .collect();
                    if !list.is_empty() {
                        payload.fields.insert(key, list);
                    }
                }
                _ => {}
            }
        }
        payload
    }

    /// The server message, unless absent or empty.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }

    /// The first non-empty error recorded for `field`.
    pub fn first_field_error(&self, field: &str) -> Option<&str> {
        self.fields
            .get(field)
            .and_then(|errors| errors.first())
            .map(String::as_str)
            .filter(|e| !e.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_message_and_field_lists() {
        let payload = ErrorPayload::parse(
            r#"{"message":"The given data was invalid.","email":["already taken","too long"],"code":7}"#,
        );
        assert_eq!(payload.message(), Some("The given data was invalid."));
        assert_eq!(payload.first_field_error("email"), Some("already taken"));
        assert!(!payload.fields.contains_key("code"));
    }

    #[test]
    fn non_json_body_is_empty_payload() {
        let payload = ErrorPayload::parse("<html>502 Bad Gateway</html>");
        assert_eq!(payload, ErrorPayload::default());
        assert_eq!(payload.message(), None);
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let payload = ErrorPayload::parse(r#"{"message":"","email":[""]}"#);
        assert_eq!(payload.message(), None);
        assert_eq!(payload.first_field_error("email"), None);
    }

    #[test]
    fn login_response_tolerates_missing_user() {
        let resp: LoginResponse = serde_json::from_str(r#"{"access_token":"abc"}"#).unwrap();
        assert_eq!(resp.access_token, "abc");
        assert!(resp.user.is_none());
    }
}
