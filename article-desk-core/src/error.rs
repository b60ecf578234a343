//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use article_desk_client::BackendError;

use crate::types::{Alert, AlertLevel, CredentialField, Notice};

/// Input problems detected before any network call
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "fields")]
pub enum ValidationError {
    /// Keywords empty or whitespace-only
    #[error("Keywords are required")]
    KeywordsRequired,

    /// Title or content empty or whitespace-only
    #[error("Title and content are required")]
    TitleContentRequired,

    /// One or more publishing credentials are missing
    #[error("Publishing credentials missing: {0:?}")]
    CredentialsMissing(Vec<CredentialField>),

    /// Edit requested before any article exists
    #[error("There is no article to edit")]
    NothingToEdit,
}

impl ValidationError {
    fn notice(&self) -> Notice {
        match self {
            Self::KeywordsRequired => Notice::KeywordsRequired,
            Self::TitleContentRequired => Notice::TitleContentRequired,
            Self::CredentialsMissing(fields) => Notice::CredentialsMissing {
                fields: fields.clone(),
            },
            Self::NothingToEdit => Notice::NothingToEdit,
        }
    }
}

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Validation error
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Backend error (converting from library)
    #[error("{0}")]
    Backend(#[from] BackendError),

    /// Settings storage error
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, service refusal) rather than a fault.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation(_) => true,
            Self::Backend(e) => e.is_expected(),
            Self::StorageError(_) => false,
        }
    }

    /// The alert a front end should show for this error.
    #[must_use]
    pub fn alert(&self) -> Alert {
        match self {
            Self::Validation(v) => Alert::new(AlertLevel::Warning, v.notice()),
            Self::Backend(BackendError::Service {
                endpoint, message, ..
            }) => Alert::new(
                AlertLevel::Danger,
                Notice::ServiceError {
                    endpoint: *endpoint,
                    message: message.clone(),
                },
            ),
            Self::Backend(e) => Alert::new(
                AlertLevel::Danger,
                Notice::ConnectionFailed {
                    endpoint: e.endpoint(),
                },
            ),
            Self::StorageError(detail) => Alert::new(
                AlertLevel::Danger,
                Notice::StorageFailed {
                    detail: detail.clone(),
                },
            ),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
