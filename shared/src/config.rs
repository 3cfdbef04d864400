use crate::api::endpoints;
use crate::gate::PUBLIC_ROOT;
use serde::{Deserialize, Serialize};

/// Session provider settings for the frontend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Path of the session endpoint, resolved against the page origin
    pub session_endpoint: String,
    /// Redirect target for unauthenticated visitors
    pub public_root: String,
    /// Background refetch period; 0 disables polling
    pub refetch_interval_ms: u32,
    pub refetch_on_window_focus: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_endpoint: endpoints::AUTH_SESSION.to_string(),
            public_root: PUBLIC_ROOT.to_string(),
            refetch_interval_ms: 300_000,
            refetch_on_window_focus: true,
        }
    }
}

impl SessionConfig {
    pub fn polling_enabled(&self) -> bool {
        self.refetch_interval_ms > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.session_endpoint, "/api/auth/session");
        assert_eq!(config.public_root, "/");
        assert!(config.polling_enabled());
        assert!(config.refetch_on_window_focus);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: SessionConfig =
            serde_json::from_str(r#"{"refetch_interval_ms": 0}"#).unwrap();
        assert!(!config.polling_enabled());
        assert_eq!(config.session_endpoint, "/api/auth/session");
    }
}
