//! 设置存储抽象 Trait

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::CoreResult;
use crate::types::AppSettings;

/// Settings (credentials) storage Trait
///
/// 平台实现:
/// - TUI: `JsonSettingsStore` (`settings.json` + OS keyring for secrets)
/// - Tests / embedding: `InMemorySettingsStore`
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Load settings
    ///
    /// A store that has never been written returns `AppSettings::default()`.
    async fn load(&self) -> CoreResult<AppSettings>;

    /// Save settings, replacing what was stored
    async fn save(&self, settings: &AppSettings) -> CoreResult<()>;
}

/// In-memory settings store
#[derive(Clone, Default)]
pub struct InMemorySettingsStore {
    settings: Arc<RwLock<AppSettings>>,
}

impl InMemorySettingsStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_settings(settings: AppSettings) -> Self {
        Self {
            settings: Arc::new(RwLock::new(settings)),
        }
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn load(&self) -> CoreResult<AppSettings> {
        Ok(self.settings.read().await.clone())
    }

    async fn save(&self, settings: &AppSettings) -> CoreResult<()> {
        *self.settings.write().await = settings.clone();
        Ok(())
    }
}
