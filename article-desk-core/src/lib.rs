//! Article Desk Core Library
//!
//! Provides the article view-mode controller behind every Article Desk front end:
//! - Article state (record + preview/editor phase)
//! - Generation, markdown conversion and publishing flows
//! - Settings service (credentials read at point of use)
//!
//! This library is platform-independent. The backend, the settings store and
//! the rendering surface are all injected through traits.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult, ValidationError};
pub use services::{ArticleController, ServiceContext, SettingsService};
pub use traits::{ArticleBackend, ArticleView, InMemorySettingsStore, SettingsStore};
