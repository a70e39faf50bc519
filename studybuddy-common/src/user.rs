//! Cached user identity.

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Display-only user record cached next to the session token.
///
/// Every field is optional on the wire: an older or partial record must still
/// load so the topbar can fall back to its placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    #[serde(
        default,
        deserialize_with = "lenient_user_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Accept any user id the server sends, keeping it only when it is a UUID.
///
/// A numeric or otherwise unparsable id is dropped instead of failing the
/// whole payload.
pub(crate) fn lenient_user_id<'de, D>(deserializer: D) -> Result<Option<Uuid>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match Option::<RawId>::deserialize(deserializer)? {
        Some(RawId::Text(text)) => Uuid::parse_str(&text).ok(),
        Some(RawId::Number(_)) | None => None,
    })
}

impl UserSummary {
    pub fn new(first_name: &str, last_name: &str, email: &str) -> Self {
        Self {
            user_id: None,
            first_name: Some(first_name.to_string()),
            last_name: Some(last_name.to_string()),
            email: Some(email.to_string()),
        }
    }

    /// Upper-cased initials, or `?` when neither name is known.
    pub fn initials(&self) -> String {
        let first = initial(self.first_name.as_deref());
        let last = initial(self.last_name.as_deref());
        let initials: String = first.into_iter().chain(last).collect::<String>().to_uppercase();

        if initials.is_empty() {
            "?".to_string()
        } else {
            initials
        }
    }

    /// Full name, falling back to the email and then to a generic label.
    pub fn display_name(&self) -> String {
        let full = format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        );
        let full = full.trim();

        if !full.is_empty() {
            return full.to_string();
        }

        match self.email.as_deref() {
            Some(email) if !email.is_empty() => email.to_string(),
            _ => "Utente".to_string(),
        }
    }
}

fn initial(name: Option<&str>) -> Option<char> {
    name.and_then(|n| n.chars().next())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        let user = UserSummary::new("mario", "rossi", "mario@example.com");
        assert_eq!(user.initials(), "MR");
    }

    #[test]
    fn test_initials_missing_names() {
        assert_eq!(UserSummary::default().initials(), "?");

        let user = UserSummary {
            first_name: Some("Giulia".to_string()),
            ..Default::default()
        };
        assert_eq!(user.initials(), "G");
    }

    #[test]
    fn test_display_name_fallbacks() {
        let user = UserSummary::new("Mario", "Rossi", "mario@example.com");
        assert_eq!(user.display_name(), "Mario Rossi");

        let user = UserSummary {
            email: Some("anon@example.com".to_string()),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "anon@example.com");

        assert_eq!(UserSummary::default().display_name(), "Utente");
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{"firstName": "Mario", "lastName": "Rossi", "email": "m@r.it"}"#;
        let user: UserSummary = serde_json::from_str(json).unwrap();
        assert_eq!(user.first_name.as_deref(), Some("Mario"));
        assert_eq!(user.last_name.as_deref(), Some("Rossi"));
        assert!(user.user_id.is_none());
    }
}
