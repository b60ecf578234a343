//! 文本输入消息

/// 作用于当前聚焦输入框的编辑
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMessage {
    Char(char),
    Backspace,
    /// Enter：多行输入框插入换行，单行输入框触发默认操作
    Enter,
}
