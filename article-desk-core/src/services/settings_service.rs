//! 设置管理服务
//!
//! Settings are read at the moment they are needed and never cached here.

use std::sync::Arc;

use crate::error::CoreResult;
use crate::traits::SettingsStore;
use crate::types::{AppSettings, PublishCredentials};

/// 设置管理服务
pub struct SettingsService {
    store: Arc<dyn SettingsStore>,
}

impl SettingsService {
    #[must_use]
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    /// 加载全部设置（用于预填设置表单）
    pub async fn load(&self) -> CoreResult<AppSettings> {
        self.store.load().await
    }

    /// 保存设置
    pub async fn save(&self, settings: &AppSettings) -> CoreResult<()> {
        self.store.save(settings).await?;
        log::info!(
            "[settings] saved (api key: {}, wp url: '{}')",
            if settings.api_key_override().is_some() { "set" } else { "unset" },
            settings.wp_url
        );
        Ok(())
    }

    /// API key to send with a generation request
    pub async fn api_key_override(&self) -> CoreResult<Option<String>> {
        Ok(self.store.load().await?.api_key_override())
    }

    /// Publishing credentials as currently stored
    pub async fn publish_credentials(&self) -> CoreResult<PublishCredentials> {
        Ok(self.store.load().await?.publish_credentials())
    }
}
