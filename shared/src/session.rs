//! Session data as delivered by the session provider.
//!
//! These types mirror the JSON returned by the auth endpoint. Every user
//! field is optional; the provider decides what is filled in.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// A field of the wrong type reads as absent rather than failing the
/// whole session.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Authentication status reported by the session provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthStatus {
    #[default]
    Loading,
    Authenticated,
    Unauthenticated,
}

impl AuthStatus {
    pub fn as_str(&self) -> &str {
        match self {
            AuthStatus::Loading => "loading",
            AuthStatus::Authenticated => "authenticated",
            AuthStatus::Unauthenticated => "unauthenticated",
        }
    }
}

impl std::fmt::Display for AuthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extra profile details nested under the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    #[serde(default, deserialize_with = "lenient")]
    pub occupation: Option<String>,
}

/// The signed-in user as the provider describes them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(default, deserialize_with = "lenient")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub email: Option<String>,
    /// Avatar image URL
    #[serde(default, deserialize_with = "lenient")]
    pub profile_pic: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub personal_info: Option<PersonalInfo>,
}

impl SessionUser {
    pub fn occupation(&self) -> Option<&str> {
        self.personal_info
            .as_ref()
            .and_then(|info| info.occupation.as_deref())
    }
}

/// Session payload. Only meaningful while the status is authenticated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default, deserialize_with = "lenient")]
    pub user: Option<SessionUser>,
    /// ISO 8601 expiry, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<String>,
}

/// One observation of the session provider: status plus whatever data
/// came with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub status: AuthStatus,
    pub data: Option<Session>,
}

impl SessionSnapshot {
    pub fn loading() -> Self {
        Self::default()
    }

    pub fn unauthenticated() -> Self {
        Self {
            status: AuthStatus::Unauthenticated,
            data: None,
        }
    }

    pub fn authenticated(data: Session) -> Self {
        Self {
            status: AuthStatus::Authenticated,
            data: Some(data),
        }
    }

    /// The signed-in user, if and only if the status is authenticated.
    ///
    /// Data attached to any other status is never exposed.
    pub fn user(&self) -> Option<&SessionUser> {
        match self.status {
            AuthStatus::Authenticated => self.data.as_ref().and_then(|s| s.user.as_ref()),
            _ => None,
        }
    }
}
