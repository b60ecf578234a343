//! 命令行参数

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "article-desk")]
#[command(about = "Generate, edit and publish articles from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// 后端地址，覆盖 config.json 中的值
    #[arg(long, env = "ARTICLE_DESK_BACKEND_URL")]
    pub backend_url: Option<String>,

    /// 界面语言（ja-JP / en-US）
    #[arg(long, value_parser = ["ja-JP", "ja", "en-US", "en"])]
    pub lang: Option<String>,

    /// 配置目录，默认为系统配置目录下的 article-desk
    #[arg(long, env = "ARTICLE_DESK_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,
}

impl Cli {
    /// 实际使用的配置目录
    pub fn config_dir(&self) -> PathBuf {
        self.config_dir.clone().unwrap_or_else(default_config_dir)
    }
}

/// 获取默认配置目录路径
fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("article-desk")
}
