//! Article Desk TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 业务服务 (`backend/`)
//!
//!
//! main.rs
//! Article Desk TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     Cli::parse()            // 命令行参数
//!     logging::init()         // 日志写入配置目录
//!     config_service.load()   // 语言、主题、后端地址
//!     build_controller()      // 文章控制器，与 App 共享 PageHandle
//!     init_terminal()         // 初始化终端
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }
//!
//!
//! 后端地址的优先级：--backend-url / ARTICLE_DESK_BACKEND_URL > config.json > 默认值。
//! 控制器在进入终端界面之前创建，地址非法时直接报错退出。

mod app;
mod backend;
mod cli;
mod event;
pub mod i18n;
mod logging;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use backend::{AppConfig, ConfigService, JsonConfigService, KeyringSecretStore};
use i18n::{set_language, Language};
use model::PageHandle;
use util::{init_terminal, install_panic_restore, restore_terminal};
use view::theme::set_theme;

fn main() -> Result<(), anyhow::Error> {
    // 1. 命令行参数与日志
    let cli = cli::Cli::parse();
    let config_dir = cli.config_dir();
    let log_guard = logging::init(&config_dir);

    // 2. 加载界面配置
    let config_service = JsonConfigService::new(&config_dir);
    log::info!("[main] config at {}", config_service.path().display());
    let config = config_service.load().unwrap_or_else(|e| {
        log::warn!("[main] config ignored: {e:#}");
        AppConfig::default()
    });

    let language = cli
        .lang
        .as_deref()
        .and_then(Language::from_code)
        .unwrap_or_else(|| config.language());
    set_language(language);
    set_theme(config.theme);

    // 3. 创建控制器和应用实例
    let backend_url = cli
        .backend_url
        .clone()
        .unwrap_or_else(|| config.backend_url.clone());
    let page = PageHandle::new();
    let secrets = Arc::new(KeyringSecretStore::new());
    let controller = backend::build_controller(&backend_url, &config_dir, secrets, page.clone())?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut app = model::App::new(page, language, config.theme, backend_url);
    let mut session = app::Session {
        controller,
        runtime,
        config_service: Box::new(config_service),
        config,
    };

    // 4. 初始化终端
    install_panic_restore();
    let mut terminal = init_terminal()?;

    // 5. 运行主循环
    let result = app::run(&mut terminal, &mut app, &mut session);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        log::error!("[main] exited with error: {e:#}");
        if let Some(guard) = log_guard.as_ref() {
            eprintln!("logs: {}", guard.log_dir().display());
        }
    }
    result
}
