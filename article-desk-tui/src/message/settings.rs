//! 设置弹窗消息

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsMessage {
    /// 打开（从存储预填）
    Open,
    /// 关闭，不保存
    Close,
    NextField,
    PrevField,
    /// 显示 / 隐藏密码
    ToggleReveal,
    /// 保存
    Save,
}
