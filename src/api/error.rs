//! API Errors

use std::borrow::Cow;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request never got a response (network, CORS, DNS)
    #[error("request failed: {0}")]
    Transport(String),

    /// Server answered with a non-success status
    #[error("{message}")]
    Server { status: u16, message: String },

    /// Success status but the body did not match the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message handed to the error classifier
    pub fn message(&self) -> Cow<'_, str> {
        match self {
            ApiError::Server { message, .. } => Cow::Borrowed(message),
            other => Cow::Owned(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

#[derive(Deserialize)]
struct MessageBody {
    message: String,
}

/// Pull the human-readable message out of an error body.
///
/// Framework errors arrive as `{"message": "..."}`, handler errors as a bare
/// JSON string; anything else is passed through as text.
pub fn extract_message(body: &str) -> String {
    if let Ok(MessageBody { message }) = serde_json::from_str::<MessageBody>(body) {
        return message;
    }
    if let Ok(message) = serde_json::from_str::<String>(body) {
        return message;
    }
    body.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_prefers_message_field() {
        assert_eq!(extract_message(r#"{"message":"invalid csrf token"}"#), "invalid csrf token");
    }

    #[test]
    fn test_extract_bare_json_string() {
        assert_eq!(extract_message(r#""record not found""#), "record not found");
    }

    #[test]
    fn test_extract_raw_text() {
        assert_eq!(extract_message("Internal Server Error\n"), "Internal Server Error");
        assert_eq!(extract_message(r#"{"error":"x"}"#), r#"{"error":"x"}"#);
        assert_eq!(extract_message(""), "");
    }

    #[test]
    fn test_message_of_server_and_transport_errors() {
        let server = ApiError::Server { status: 404, message: "record not found".into() };
        assert_eq!(server.message(), "record not found");

        let transport = ApiError::Transport("connection refused".into());
        assert_eq!(transport.message(), "request failed: connection refused");
    }
}
