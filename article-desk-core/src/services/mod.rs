//! 业务逻辑服务层

mod article_controller;
mod in_flight;
mod settings_service;

pub use article_controller::ArticleController;
pub use settings_service::SettingsService;

use std::sync::Arc;

use crate::traits::{ArticleBackend, SettingsStore};

/// 服务上下文 - 持有所有依赖
///
/// 平台层需要创建此上下文，并注入平台特定的后端与存储实现。
pub struct ServiceContext {
    /// Generation / conversion / publishing backend
    pub backend: Arc<dyn ArticleBackend>,
    /// 设置存储
    pub settings_store: Arc<dyn SettingsStore>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(backend: Arc<dyn ArticleBackend>, settings_store: Arc<dyn SettingsStore>) -> Self {
        Self {
            backend,
            settings_store,
        }
    }

    /// 获取设置服务
    pub fn settings(&self) -> SettingsService {
        SettingsService::new(Arc::clone(&self.settings_store))
    }
}
