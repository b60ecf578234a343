//! 应用主消息枚举

use super::{ActionMessage, InputMessage, SettingsMessage};

/// 应用主消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 焦点移到下一个输入框
    FocusNext,

    /// 焦点移到上一个输入框
    FocusPrev,

    /// 文本输入
    Input(InputMessage),

    /// 文章操作
    Action(ActionMessage),

    /// 设置弹窗
    Settings(SettingsMessage),

    /// 切换界面语言
    ToggleLanguage,

    /// 切换主题
    ToggleTheme,

    /// 在浏览器中打开已发布文章
    OpenLink,

    /// 滚动预览（正数向下，单位：行）
    ScrollPreview(i16),

    /// Esc：关闭弹窗 / 取消编辑 / 关闭提示框
    Escape,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
