//! Display-safe projection of the session user.

use crate::session::SessionUser;

pub const DEFAULT_GREETING_NAME: &str = "User";
pub const DEFAULT_CONTACT_EMAIL: &str = "user@example.com";
pub const DEFAULT_OCCUPATION: &str = "Unknown";

/// What the dashboard shows for the signed-in user.
///
/// Recomputed from the session on every observation, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayModel {
    pub greeting_name: String,
    pub contact_email: String,
    pub occupation: String,
    /// No avatar is rendered when absent
    pub avatar_url: Option<String>,
}

impl DisplayModel {
    pub fn from_user(user: &SessionUser) -> Self {
        Self {
            greeting_name: or_default(user.first_name.as_deref(), DEFAULT_GREETING_NAME),
            contact_email: or_default(user.email.as_deref(), DEFAULT_CONTACT_EMAIL),
            occupation: or_default(user.occupation(), DEFAULT_OCCUPATION),
            avatar_url: present(user.profile_pic.as_deref()).map(str::to_string),
        }
    }
}

// Empty strings count as missing.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn or_default(value: Option<&str>, fallback: &str) -> String {
    present(value).unwrap_or(fallback).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::PersonalInfo;

    #[test]
    fn projects_present_fields_and_defaults_the_rest() {
        let user = SessionUser {
            first_name: Some("Ana".to_string()),
            email: None,
            profile_pic: None,
            personal_info: Some(PersonalInfo {
                occupation: Some("Engineer".to_string()),
            }),
        };

        assert_eq!(
            DisplayModel::from_user(&user),
            DisplayModel {
                greeting_name: "Ana".to_string(),
                contact_email: "user@example.com".to_string(),
                occupation: "Engineer".to_string(),
                avatar_url: None,
            }
        );
    }

    #[test]
    fn empty_user_gets_all_defaults() {
        let user: SessionUser = serde_json::from_str("{}").unwrap();

        assert_eq!(
            DisplayModel::from_user(&user),
            DisplayModel {
                greeting_name: "User".to_string(),
                contact_email: "user@example.com".to_string(),
                occupation: "Unknown".to_string(),
                avatar_url: None,
            }
        );
    }

    #[test]
    fn empty_strings_fall_back() {
        let user = SessionUser {
            first_name: Some(String::new()),
            email: Some(String::new()),
            profile_pic: Some(String::new()),
            personal_info: Some(PersonalInfo {
                occupation: Some(String::new()),
            }),
        };
        let model = DisplayModel::from_user(&user);

        assert_eq!(model.greeting_name, DEFAULT_GREETING_NAME);
        assert_eq!(model.contact_email, DEFAULT_CONTACT_EMAIL);
        assert_eq!(model.occupation, DEFAULT_OCCUPATION);
        assert!(model.avatar_url.is_none());
    }

    #[test]
    fn avatar_passed_through() {
        let user = SessionUser {
            profile_pic: Some("https://cdn.example.com/a.png".to_string()),
            ..Default::default()
        };
        assert_eq!(
            DisplayModel::from_user(&user).avatar_url.as_deref(),
            Some("https://cdn.example.com/a.png")
        );
    }
}
