//! 文本输入框状态
//!
//! 光标始终在末尾，与弹窗输入框的行为一致。

/// 可编辑文本
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    multiline: bool,
}

impl TextInput {
    /// 单行输入框
    pub fn single_line() -> Self {
        Self::default()
    }

    /// 多行输入框（Enter 插入换行）
    pub fn multi_line() -> Self {
        Self {
            value: String::new(),
            multiline: true,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn is_multiline(&self) -> bool {
        self.multiline
    }

    pub fn push(&mut self, c: char) {
        if c == '\n' && !self.multiline {
            return;
        }
        self.value.push(c);
    }

    /// 删除最后一个字符
    pub fn backspace(&mut self) {
        self.value.pop();
    }

    pub fn set(&mut self, value: &str) {
        self.value.clear();
        if self.multiline {
            self.value.push_str(value);
        } else {
            self.value.extend(value.chars().filter(|c| *c != '\n'));
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}
