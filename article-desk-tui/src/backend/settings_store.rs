//! 设置仓库
//!
//! 非敏感字段（wpUrl / wpUsername）存储在 JSON 文件中，
//! API key 与应用密码交给 `SecretStore`（系统钥匙串）。
//! 实现 article-desk-core 的 SettingsStore trait

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use article_desk_core::error::{CoreError, CoreResult};
use article_desk_core::traits::SettingsStore;
use article_desk_core::types::AppSettings;
use serde::{Deserialize, Serialize};
use tokio::fs;

use super::secret_store::{SecretStore, Secrets};

/// settings.json 中保存的字段
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct StoredSettings {
    wp_url: String,
    wp_username: String,
}

/// 基于 JSON 文件 + 钥匙串的设置仓库
pub struct JsonSettingsStore {
    path: PathBuf,
    secrets: Arc<dyn SecretStore>,
}

impl JsonSettingsStore {
    pub fn new(config_dir: &Path, secrets: Arc<dyn SecretStore>) -> Self {
        Self {
            path: config_dir.join("settings.json"),
            secrets,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 确保配置目录存在
    async fn ensure_config_dir(&self) -> CoreResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| CoreError::StorageError(e.to_string()))?;
        }
        Ok(())
    }

    /// 读取文件；旧版本文件中可能还带有明文的敏感字段
    async fn read_file(&self) -> CoreResult<AppSettings> {
        if !self.path.exists() {
            return Ok(AppSettings::default());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))?;

        serde_json::from_str(&content).map_err(|e| CoreError::StorageError(e.to_string()))
    }
}

#[async_trait]
impl SettingsStore for JsonSettingsStore {
    async fn load(&self) -> CoreResult<AppSettings> {
        let file = self.read_file().await?;

        // 钥匙串中没有记录时沿用文件里的旧值，下次保存时迁移
        let secrets = match self.secrets.load().await? {
            Some(secrets) => secrets,
            None => Secrets::from(&file),
        };

        Ok(AppSettings {
            openai_api_key: secrets.openai_api_key,
            wp_url: file.wp_url,
            wp_username: file.wp_username,
            wp_password: secrets.wp_password,
        })
    }

    async fn save(&self, settings: &AppSettings) -> CoreResult<()> {
        self.secrets.save(&Secrets::from(settings)).await?;

        self.ensure_config_dir().await?;

        let stored = StoredSettings {
            wp_url: settings.wp_url.clone(),
            wp_username: settings.wp_username.clone(),
        };
        let content = serde_json::to_string_pretty(&stored)
            .map_err(|e| CoreError::StorageError(e.to_string()))?;

        fs::write(&self.path, content)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))?;

        log::debug!("[settings] saved to {} (secrets in keyring)", self.path.display());
        Ok(())
    }
}
