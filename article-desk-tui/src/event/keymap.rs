//! 快捷键配置
//!
//! 输入框占用了普通字符键，所有操作都绑定在 Alt 组合键上。

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const SETTINGS: KeyBinding = KeyBinding::alt(KeyCode::Char('s'));
    pub const LANGUAGE: KeyBinding = KeyBinding::alt(KeyCode::Char('l'));
    pub const THEME: KeyBinding = KeyBinding::alt(KeyCode::Char('t'));
    pub const OPEN_LINK: KeyBinding = KeyBinding::alt(KeyCode::Char('o'));

    // 焦点
    pub const NEXT_FIELD: KeyBinding = KeyBinding::key(KeyCode::Tab);

    // 文章操作
    pub const GENERATE: KeyBinding = KeyBinding::alt(KeyCode::Char('g'));
    pub const MANUAL_PREVIEW: KeyBinding = KeyBinding::alt(KeyCode::Char('v'));
    pub const MANUAL_PUBLISH: KeyBinding = KeyBinding::alt(KeyCode::Char('m'));
    pub const EDIT: KeyBinding = KeyBinding::alt(KeyCode::Char('e'));
    pub const PUBLISH: KeyBinding = KeyBinding::alt(KeyCode::Char('p'));
    pub const UPDATE_PREVIEW: KeyBinding = KeyBinding::alt(KeyCode::Char('u'));

    // 预览滚动
    pub const SCROLL_UP: KeyBinding = KeyBinding::alt(KeyCode::Up);
    pub const SCROLL_DOWN: KeyBinding = KeyBinding::alt(KeyCode::Down);
    pub const PAGE_UP: KeyBinding = KeyBinding::key(KeyCode::PageUp);
    pub const PAGE_DOWN: KeyBinding = KeyBinding::key(KeyCode::PageDown);

    // 设置弹窗
    pub const REVEAL: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));
}
