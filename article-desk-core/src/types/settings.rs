//! Persisted user settings and the credentials derived from them

use serde::{Deserialize, Serialize};

use crate::utils::text::non_blank;

/// User settings as stored locally.
///
/// Field names on disk match the keys the tool has always used:
/// `openaiApiKey`, `wpUrl`, `wpUsername`, `wpPassword`.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    pub openai_api_key: String,
    pub wp_url: String,
    pub wp_username: String,
    pub wp_password: String,
}

impl AppSettings {
    /// The API key to send with generation requests, if one is set.
    pub fn api_key_override(&self) -> Option<String> {
        non_blank(&self.openai_api_key).map(str::to_string)
    }

    pub fn publish_credentials(&self) -> PublishCredentials {
        PublishCredentials {
            wp_url: self.wp_url.clone(),
            wp_username: self.wp_username.clone(),
            wp_password: self.wp_password.clone(),
        }
    }
}

impl std::fmt::Debug for AppSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppSettings")
            .field("openai_api_key", &mask(&self.openai_api_key))
            .field("wp_url", &self.wp_url)
            .field("wp_username", &self.wp_username)
            .field("wp_password", &mask(&self.wp_password))
            .finish()
    }
}

/// One of the three publishing-target fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CredentialField {
    Url,
    Username,
    Password,
}

/// Where and as whom to publish.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PublishCredentials {
    pub wp_url: String,
    pub wp_username: String,
    pub wp_password: String,
}

impl PublishCredentials {
    #[must_use]
    pub fn new(
        wp_url: impl Into<String>,
        wp_username: impl Into<String>,
        wp_password: impl Into<String>,
    ) -> Self {
        Self {
            wp_url: wp_url.into(),
            wp_username: wp_username.into(),
            wp_password: wp_password.into(),
        }
    }

    /// Fields that are empty or whitespace-only, in form order.
    pub fn missing_fields(&self) -> Vec<CredentialField> {
        [
            (CredentialField::Url, &self.wp_url),
            (CredentialField::Username, &self.wp_username),
            (CredentialField::Password, &self.wp_password),
        ]
        .into_iter()
        .filter(|(_, value)| non_blank(value).is_none())
        .map(|(field, _)| field)
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

impl std::fmt::Debug for PublishCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublishCredentials")
            .field("wp_url", &self.wp_url)
            .field("wp_username", &self.wp_username)
            .field("wp_password", &mask(&self.wp_password))
            .finish()
    }
}

fn mask(secret: &str) -> &'static str {
    if secret.is_empty() {
        ""
    } else {
        "***"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_storage_keys() {
        let settings = AppSettings {
            openai_api_key: "sk-1".into(),
            wp_url: "https://blog.example".into(),
            wp_username: "admin".into(),
            wp_password: "pw".into(),
        };
        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json["openaiApiKey"], "sk-1");
        assert_eq!(json["wpUrl"], "https://blog.example");
        assert_eq!(json["wpUsername"], "admin");
        assert_eq!(json["wpPassword"], "pw");
    }

    #[test]
    fn missing_keys_default_to_empty() {
        let settings: AppSettings =
            serde_json::from_str(r#"{"wpUrl":"https://blog.example"}"#).unwrap();
        assert_eq!(settings.wp_url, "https://blog.example");
        assert_eq!(settings.openai_api_key, "");
        assert_eq!(settings.api_key_override(), None);
    }

    #[test]
    fn blank_credential_fields_are_missing() {
        let creds = PublishCredentials::new("https://blog.example", "  ", "");
        assert_eq!(
            creds.missing_fields(),
            vec![CredentialField::Username, CredentialField::Password]
        );
        assert!(!creds.is_complete());
        assert!(PublishCredentials::new("u", "n", "p").is_complete());
    }

    #[test]
    fn debug_masks_secrets() {
        let settings = AppSettings {
            openai_api_key: "sk-secret".into(),
            wp_password: "hunter2".into(),
            ..AppSettings::default()
        };
        let dbg = format!("{settings:?} {:?}", settings.publish_credentials());
        assert!(!dbg.contains("sk-secret"));
        assert!(!dbg.contains("hunter2"));
    }
}
