//! Update 层返回给主循环的命令
//!
//! Update 层是同步的，不能等待网络请求。凡是需要控制器或外部资源的操作，
//! 都以 Command 的形式交给 app.rs 执行。

use article_desk_core::types::{AppSettings, OperationOutcome};

/// 主循环要执行的命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 交给文章控制器
    Controller(ControllerCommand),
    /// 保存界面配置（语言、主题）
    SaveConfig,
    /// 在浏览器中打开链接
    OpenLink(String),
}

/// 文章控制器的一次调用
#[derive(Clone, PartialEq, Eq)]
pub enum ControllerCommand {
    Generate { keywords: String },
    ManualPreview { title: String, markdown: String },
    ManualPublish { title: String, markdown: String },
    EnterEditor,
    UpdatePreview { title: String, markdown: String },
    CancelEdit,
    PublishCurrent,
    LoadSettings,
    SaveSettings(AppSettings),
}

impl ControllerCommand {
    /// 日志中使用的名称（不含用户输入）
    pub fn name(&self) -> &'static str {
        match self {
            Self::Generate { .. } => "generate",
            Self::ManualPreview { .. } => "manual_preview",
            Self::ManualPublish { .. } => "manual_publish",
            Self::EnterEditor => "enter_editor",
            Self::UpdatePreview { .. } => "update_preview",
            Self::CancelEdit => "cancel_edit",
            Self::PublishCurrent => "publish_current",
            Self::LoadSettings => "load_settings",
            Self::SaveSettings(_) => "save_settings",
        }
    }
}

impl std::fmt::Debug for ControllerCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 控制器调用的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    Outcome(OperationOutcome),
    /// `LoadSettings` 读到的设置
    Settings(AppSettings),
}
