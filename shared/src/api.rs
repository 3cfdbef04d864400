//! Session endpoint contract.
//!
//! Parsing lives here, independent of any HTTP client, so the browser
//! fetcher and tests share one interpretation of the response.

use crate::session::{AuthStatus, Session, SessionSnapshot};
use thiserror::Error;

/// API error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Network or connection error
    #[error("Network error: {0}")]
    Network(String),
    /// Server returned an error status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },
    /// Failed to parse response
    #[error("Parse error: {0}")]
    Parse(String),
}

/// API endpoint definitions
pub mod endpoints {
    pub const AUTH_SESSION: &str = "/api/auth/session";
}

/// Turn a session endpoint response into a snapshot.
///
/// An empty body, `null`, `{}` or an object without `user` all mean there
/// is no session. 401 and 403 mean the same.
pub fn parse_session_response(status: u16, body: &str) -> Result<SessionSnapshot, ApiError> {
    match status {
        200..=299 => {}
        401 | 403 => return Ok(SessionSnapshot::unauthenticated()),
        _ => {
            return Err(ApiError::Server {
                status,
                message: body.trim().chars().take(200).collect(),
            })
        }
    }

    let body = body.trim();
    if body.is_empty() {
        return Ok(SessionSnapshot::unauthenticated());
    }

    let session: Option<Session> =
        serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))?;

    Ok(match session {
        Some(session) if session.user.is_some() => SessionSnapshot {
            status: AuthStatus::Authenticated,
            data: Some(session),
        },
        _ => SessionSnapshot::unauthenticated(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_object_is_authenticated() {
        let body = r#"{"user":{"firstName":"Ana"},"expires":"2026-11-01T00:00:00Z"}"#;
        let snapshot = parse_session_response(200, body).unwrap();

        assert_eq!(snapshot.status, AuthStatus::Authenticated);
        let user = snapshot.user().unwrap();
        assert_eq!(user.first_name.as_deref(), Some("Ana"));
    }

    #[test]
    fn empty_responses_are_unauthenticated() {
        for body in ["", "  ", "null", "{}", r#"{"expires":"2026-11-01T00:00:00Z"}"#] {
            let snapshot = parse_session_response(200, body).unwrap();
            assert_eq!(snapshot, SessionSnapshot::unauthenticated(), "body: {body:?}");
        }
    }

    #[test]
    fn auth_failures_are_unauthenticated() {
        assert_eq!(
            parse_session_response(401, "").unwrap(),
            SessionSnapshot::unauthenticated()
        );
        assert_eq!(
            parse_session_response(403, "forbidden").unwrap(),
            SessionSnapshot::unauthenticated()
        );
    }

    #[test]
    fn server_errors_propagate() {
        let err = parse_session_response(502, "Bad Gateway").unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: 502,
                message: "Bad Gateway".to_string()
            }
        );
        assert_eq!(err.to_string(), "Server error (502): Bad Gateway");
    }

    #[test]
    fn wrongly_typed_user_field_still_authenticates() {
        let body = r#"{"user":{"firstName":"Ana","email":42}}"#;
        let snapshot = parse_session_response(200, body).unwrap();

        assert_eq!(snapshot.status, AuthStatus::Authenticated);
        let user = snapshot.user().unwrap();
        assert_eq!(user.first_name.as_deref(), Some("Ana"));
        assert!(user.email.is_none());
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = parse_session_response(200, "<html>").unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }
}
