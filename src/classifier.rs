//! Server Error Classifier
//!
//! Maps the message of a failed request onto a known server error and
//! performs its single recovery.

use crate::api::ApiError;
use crate::session::{Route, Session};

const INVALID_CSRF: &str = "invalid csrf token";
const EXPIRED_JWT: &str = "invalid or expired jwt";
const MALFORMED_JWT: &str = "missing or malformed jwt";
const DUPLICATED_KEY: &str = "duplicated key not allowed";
const PASSWORD_MISMATCH: &str = "crypto/bcrypt: hashedPassword is not the hash of the given password";
const RECORD_NOT_FOUND: &str = "record not found";

/// Errors the server is known to report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerError {
    InvalidCsrfToken,
    ExpiredJwt,
    MalformedJwt,
    /// Sign-up with an email that is already registered
    DuplicatedKey,
    PasswordMismatch,
    /// Login with an unknown email
    RecordNotFound,
    Unclassified(String),
}

/// What the app does besides alerting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recovery {
    None,
    /// Token rejected; fetch a new one
    RefreshCsrf,
    /// Session is gone; drop the draft and return to the entry point
    Reauthenticate,
}

impl ServerError {
    pub fn classify(message: &str) -> Self {
        match message {
            INVALID_CSRF => ServerError::InvalidCsrfToken,
            EXPIRED_JWT => ServerError::ExpiredJwt,
            MALFORMED_JWT => ServerError::MalformedJwt,
            DUPLICATED_KEY => ServerError::DuplicatedKey,
            PASSWORD_MISMATCH => ServerError::PasswordMismatch,
            RECORD_NOT_FOUND => ServerError::RecordNotFound,
            other => {
                log::warn!("[ERROR] unclassified server message: {:?}", other);
                ServerError::Unclassified(other.to_string())
            }
        }
    }

    pub fn alert_message(&self) -> &str {
        match self {
            ServerError::InvalidCsrfToken => "CSRF token is invalid, please try again",
            ServerError::ExpiredJwt => "access token expired, please login",
            ServerError::MalformedJwt => "access token is not valid, please login",
            ServerError::DuplicatedKey => "email already exist, please use another one",
            ServerError::PasswordMismatch => "password is not correct",
            ServerError::RecordNotFound => "email is not correct",
            ServerError::Unclassified(message) => message,
        }
    }

    pub fn recovery(&self) -> Recovery {
        match self {
            ServerError::InvalidCsrfToken => Recovery::RefreshCsrf,
            ServerError::ExpiredJwt | ServerError::MalformedJwt => Recovery::Reauthenticate,
            _ => Recovery::None,
        }
    }
}

/// Classify a failed request and apply its effects to the session
pub fn handle_error<S: Session>(session: &S, err: &ApiError) {
    let error = ServerError::classify(&err.message());
    match error.recovery() {
        Recovery::RefreshCsrf => {
            session.refresh_csrf();
            session.alert(error.alert_message());
        }
        Recovery::Reauthenticate => {
            session.alert(error.alert_message());
            session.reset_draft();
            session.navigate(Route::Auth);
        }
        Recovery::None => session.alert(error.alert_message()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EditedTask;
    use crate::testing::{server_error, task, RecordingSession};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_classify_known_messages() {
        assert_eq!(ServerError::classify("invalid csrf token"), ServerError::InvalidCsrfToken);
        assert_eq!(ServerError::classify("invalid or expired jwt"), ServerError::ExpiredJwt);
        assert_eq!(ServerError::classify("missing or malformed jwt"), ServerError::MalformedJwt);
        assert_eq!(ServerError::classify("duplicated key not allowed"), ServerError::DuplicatedKey);
        assert_eq!(ServerError::classify(PASSWORD_MISMATCH), ServerError::PasswordMismatch);
        assert_eq!(ServerError::classify("record not found"), ServerError::RecordNotFound);
    }

    #[test]
    fn test_match_is_exact() {
        assert_eq!(
            ServerError::classify("Record not found"),
            ServerError::Unclassified("Record not found".into())
        );
        assert_eq!(ServerError::classify("title: limited max 12 char.").recovery(), Recovery::None);
    }

    #[test]
    fn test_record_not_found_alerts_once_without_side_effects() {
        let session = RecordingSession::with_tasks(vec![task(1, "a")]);
        session.draft.replace(EditedTask { id: 1, title: "a".into() });

        handle_error(&session, &server_error("record not found"));

        assert_eq!(session.alerts(), vec!["email is not correct".to_string()]);
        assert_eq!(session.route.get(), None);
        assert_eq!(session.tasks(), Some(vec![task(1, "a")]));
        assert_eq!(session.draft.borrow().id, 1);
        assert_eq!(session.csrf_refreshes.get(), 0);
    }

    #[test]
    fn test_expired_jwt_resets_draft_and_returns_to_entry() {
        let session = RecordingSession::default();
        session.draft.replace(EditedTask { id: 4, title: "half-typed".into() });

        handle_error(&session, &server_error("invalid or expired jwt"));

        assert_eq!(session.alerts(), vec!["access token expired, please login".to_string()]);
        assert_eq!(*session.draft.borrow(), EditedTask::default());
        assert_eq!(session.route.get(), Some(Route::Auth));
    }

    #[test]
    fn test_invalid_csrf_refreshes_token_once() {
        let session = RecordingSession::default();

        handle_error(&session, &server_error("invalid csrf token"));

        assert_eq!(session.csrf_refreshes.get(), 1);
        assert_eq!(session.alerts().len(), 1);
        assert_eq!(session.route.get(), None);
    }

    #[test]
    fn test_unknown_message_is_alerted_verbatim() {
        let session = RecordingSession::default();

        handle_error(&session, &server_error("title is required"));

        assert_eq!(session.alerts(), vec!["title is required".to_string()]);
    }
}
