//!
//! app.rs
//! 应用主循环
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit{ break }                     // 检查 APP 是否应该退出
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);           // 接收原始事件并分发消息
//!         if let Some(cmd) = update::update(&mut app , msg) {
//!             session.execute(cmd)                        // 需要控制器或外部资源的操作
//!         }
//!     }
//! }
//!
//!
//! 控制器调用是异步的。执行期间主循环不再处理按键（已到达的按键被丢弃），
//! 但继续重绘，以便显示"投稿中…"等忙碌状态。
//! 调用结束后由 update::apply 收尾。

use std::time::Duration;

use anyhow::Result;
use tokio::runtime::Runtime;

use crate::backend::{self, AppConfig, ConfigService, Controller};
use crate::event;
use crate::i18n::t;
use crate::message::{Command, ControllerCommand};
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 事件轮询间隔，同时也是请求进行中的重绘间隔
const TICK: Duration = Duration::from_millis(100);

/// 主循环之外的运行时资源
pub struct Session {
    pub controller: Controller,
    pub runtime: Runtime,
    pub config_service: Box<dyn ConfigService>,
    pub config: AppConfig,
}

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, session: &mut Session) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(TICK)? {
            // 4. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 5. 更新状态；需要时执行命令
            if let Some(command) = update::update(app, msg) {
                execute(terminal, app, session, command)?;
            }
        }
    }

    Ok(())
}

fn execute(terminal: &mut Term, app: &mut App, session: &mut Session, command: Command) -> Result<()> {
    match command {
        Command::Controller(command) => run_controller(terminal, app, session, command),
        Command::SaveConfig => {
            save_config(app, session);
            Ok(())
        }
        Command::OpenLink(url) => {
            open_link(app, &url);
            Ok(())
        }
    }
}

/// 执行控制器调用，期间保持重绘
fn run_controller(
    terminal: &mut Term,
    app: &mut App,
    session: &mut Session,
    command: ControllerCommand,
) -> Result<()> {
    app.clear_status();

    let Session {
        controller,
        runtime,
        ..
    } = session;
    let app_view: &App = app;

    let output = runtime.block_on(async {
        let work = backend::execute(controller, &command);
        tokio::pin!(work);
        let mut ticker = tokio::time::interval(TICK);
        loop {
            tokio::select! {
                output = &mut work => break Ok::<_, anyhow::Error>(output),
                _ = ticker.tick() => {
                    terminal.draw(|frame| view::render(app_view, frame))?;
                    event::drain_events()?;
                }
            }
        }
    })?;

    update::apply(app, &command, output);
    Ok(())
}

/// 保存语言和主题
fn save_config(app: &mut App, session: &mut Session) {
    session.config.language = app.language.code().to_string();
    session.config.theme = app.theme;
    if let Err(e) = session.config_service.save(&session.config) {
        log::warn!("[app] failed to save config: {e:#}");
        app.set_status(format!("{}: {e}", t().alerts.settings_failed));
    }
}

/// 在系统浏览器中打开已发布文章
fn open_link(app: &mut App, url: &str) {
    log::info!("[app] opening {url}");
    if let Err(e) = open::that(url) {
        log::warn!("[app] failed to open {url}: {e}");
        app.set_status(format!("{}: {e}", t().alerts.open_link_failed));
    }
}
