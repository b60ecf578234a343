//! User-visible alerts
//!
//! The controller reports results as typed notices; front ends own the wording.

use serde::{Deserialize, Serialize};

use article_desk_client::Endpoint;

use super::CredentialField;

/// Severity, which front ends map to colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertLevel {
    Info,
    Success,
    Warning,
    Danger,
}

/// What happened, without any wording attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Notice {
    KeywordsRequired,
    TitleContentRequired,
    CredentialsMissing { fields: Vec<CredentialField> },
    NothingToEdit,
    /// The backend refused; `message` is its own text, shown verbatim.
    ServiceError {
        endpoint: Endpoint,
        message: Option<String>,
    },
    /// No usable answer arrived.
    ConnectionFailed { endpoint: Option<Endpoint> },
    Published { title: String, url: Option<String> },
    SettingsSaved,
    StorageFailed { detail: String },
}

/// The single alert currently on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub notice: Notice,
}

impl Alert {
    #[must_use]
    pub fn new(level: AlertLevel, notice: Notice) -> Self {
        Self { level, notice }
    }

    #[must_use]
    pub fn success(notice: Notice) -> Self {
        Self::new(AlertLevel::Success, notice)
    }

    /// The link to offer alongside the alert, if any.
    pub fn link(&self) -> Option<&str> {
        match &self.notice {
            Notice::Published { url, .. } => url.as_deref(),
            _ => None,
        }
    }
}
