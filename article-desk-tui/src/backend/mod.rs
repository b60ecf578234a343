//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦。文章的生成、转换、投稿都由
//! article-desk-core 的 `ArticleController` 完成，这里只负责组装和持久化。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod core_service;       // 组装控制器，执行 ControllerCommand
//!         mod settings_store;     // 设置持久化（settings.json + 钥匙串）
//!         mod secret_store;       // 敏感字段（系统钥匙串）
//!         mod config_service;     // 界面配置（config.json）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、核心服务（core_service）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     创建流程：
//!         1. 创建 HttpArticleBackend（后端地址来自命令行或 config.json）
//!         2. 创建 JsonSettingsStore（设置仓库，敏感字段交给 KeyringSecretStore）
//!         3. 组装 ServiceContext
//!         4. 以共享的 PageHandle 作为视图创建 ArticleController
//!
//!     控制器持有 PageHandle 的一个克隆，App 持有另一个；
//!     控制器写入，View 层读取。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、设置仓库（JsonSettingsStore）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     实现 article-desk-core 的 SettingsStore trait。
//!     <config_dir>/settings.json：wpUrl / wpUsername
//!     系统钥匙串（article-desk / __settings_secrets__）：openaiApiKey / wpPassword
//!
//!     文件不存在时视为空设置；读写、解析或钥匙串访问失败返回 StorageError。
//!     旧版本 settings.json 中的明文敏感字段在钥匙串为空时读取，
//!     下次保存时写入钥匙串并从文件中移除。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户按下 Alt+p
//!         ↓
//!     Update 层返回 Command::Controller(PublishCurrent)
//!         ↓
//!     app.rs 调用 core_service::execute（异步，期间继续重绘）
//!         ↓
//!     ArticleController 读取设置、校验、调用后端
//!         ↓
//!     控制器通过 PageHandle 写入提示框与按钮状态
//!         ↓
//!     update::apply 收尾，View 层重新渲染
//!

mod config_service;
mod core_service;
mod secret_store;
mod settings_store;

pub use config_service::{AppConfig, ConfigService, JsonConfigService};
pub use core_service::{build_controller, execute, Controller};
pub use secret_store::KeyringSecretStore;
