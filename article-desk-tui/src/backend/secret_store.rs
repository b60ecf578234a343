//! 敏感设置存储
//!
//! OpenAI API key 与 WordPress 应用密码不写入 settings.json，
//! 而是以一条 JSON 记录保存在系统钥匙串中。

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use keyring::Entry;
use serde::{Deserialize, Serialize};

use article_desk_core::error::{CoreError, CoreResult};
use article_desk_core::types::AppSettings;

const SERVICE_NAME: &str = "article-desk";
const SECRETS_KEY: &str = "__settings_secrets__";

/// 需要保密的设置字段
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Secrets {
    pub openai_api_key: String,
    pub wp_password: String,
}

impl From<&AppSettings> for Secrets {
    fn from(settings: &AppSettings) -> Self {
        Self {
            openai_api_key: settings.openai_api_key.clone(),
            wp_password: settings.wp_password.clone(),
        }
    }
}

impl std::fmt::Debug for Secrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secrets").finish_non_exhaustive()
    }
}

/// 敏感字段存储 Trait
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// 从未保存过时返回 `None`
    async fn load(&self) -> CoreResult<Option<Secrets>>;

    async fn save(&self, secrets: &Secrets) -> CoreResult<()>;
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// 基于系统钥匙串的敏感字段存储
///
/// 使用 keyring crate 保存到：
/// - Windows: Credential Manager
/// - macOS: Keychain
/// - Linux: Secret Service (GNOME Keyring / KWallet)
pub struct KeyringSecretStore {
    /// 内存缓存，避免频繁访问钥匙串
    cache: Mutex<Option<Secrets>>,
}

impl KeyringSecretStore {
    pub fn new() -> Self {
        Self {
            cache: Mutex::new(None),
        }
    }

    fn entry() -> CoreResult<Entry> {
        Entry::new(SERVICE_NAME, SECRETS_KEY)
            .map_err(|e| CoreError::StorageError(format!("Failed to open keyring entry: {e}")))
    }
}

impl Default for KeyringSecretStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SecretStore for KeyringSecretStore {
    async fn load(&self) -> CoreResult<Option<Secrets>> {
        if let Some(secrets) = lock(&self.cache).clone() {
            return Ok(Some(secrets));
        }

        let json = match Self::entry()?.get_password() {
            Ok(json) => json,
            Err(keyring::Error::NoEntry) => return Ok(None),
            Err(e) => {
                return Err(CoreError::StorageError(format!(
                    "Failed to read keyring: {e}"
                )))
            }
        };

        let secrets: Secrets = serde_json::from_str(&json)
            .map_err(|e| CoreError::StorageError(format!("Failed to deserialize secrets: {e}")))?;
        *lock(&self.cache) = Some(secrets.clone());
        Ok(Some(secrets))
    }

    async fn save(&self, secrets: &Secrets) -> CoreResult<()> {
        let json = serde_json::to_string(secrets)
            .map_err(|e| CoreError::StorageError(format!("Failed to serialize secrets: {e}")))?;

        Self::entry()?
            .set_password(&json)
            .map_err(|e| CoreError::StorageError(format!("Failed to write keyring: {e}")))?;

        *lock(&self.cache) = Some(secrets.clone());
        Ok(())
    }
}

/// 进程内的敏感字段存储（测试用）
#[cfg(test)]
#[derive(Default)]
pub struct MemorySecretStore {
    secrets: Mutex<Option<Secrets>>,
}

#[cfg(test)]
impl MemorySecretStore {
    pub fn stored(&self) -> Option<Secrets> {
        lock(&self.secrets).clone()
    }
}

#[cfg(test)]
#[async_trait]
impl SecretStore for MemorySecretStore {
    async fn load(&self) -> CoreResult<Option<Secrets>> {
        Ok(lock(&self.secrets).clone())
    }

    async fn save(&self, secrets: &Secrets) -> CoreResult<()> {
        *lock(&self.secrets) = Some(secrets.clone());
        Ok(())
    }
}
