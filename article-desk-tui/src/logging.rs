//! 日志初始化
//!
//! 终端被 TUI 占用，日志只写入配置目录下按天滚动的文件。
//! 库代码通过 `log` 门面输出，由 tracing-subscriber 的 tracing-log 桥接收集。

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// 日志文件名前缀
const LOG_FILE: &str = "article-desk.log";

/// 持有后台写线程；drop 时刷新剩余日志
pub struct LoggingGuard {
    _guard: WorkerGuard,
    log_dir: PathBuf,
}

impl LoggingGuard {
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

/// 初始化日志，失败时返回 `None`（应用照常运行，只是没有日志）
pub fn init(config_dir: &Path) -> Option<LoggingGuard> {
    let log_dir = ensure_dir(config_dir.join("logs"))
        .or_else(|_| ensure_dir(std::env::temp_dir().join("article-desk").join("logs")))
        .ok()?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true),
    );

    if subscriber.try_init().is_err() {
        return None;
    }

    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        tracing::error!(panic = %panic_info, "panic");
        previous(panic_info);
    }));

    tracing::info!(log_dir = %log_dir.display(), "tracing initialized");

    Some(LoggingGuard {
        _guard: guard,
        log_dir,
    })
}

fn ensure_dir(dir: PathBuf) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
