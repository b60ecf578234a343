//! 应用主状态结构

use crate::i18n::Language;
use crate::view::theme::Theme;

use super::{FocusField, PageHandle, SettingsForm, TextInput};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点输入框
    pub focus: FocusField,

    /// 控制器渲染的页面状态（与控制器共享）
    pub page: PageHandle,

    /// 关键词输入框
    pub keywords: TextInput,

    /// 设置弹窗；`None` = 未打开
    pub settings: Option<SettingsForm>,

    /// 界面语言
    pub language: Language,

    /// 界面主题
    pub theme: Theme,

    /// 后端地址（仅用于标题栏显示）
    pub backend_url: String,

    /// 状态栏消息
    pub status_message: Option<String>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(page: PageHandle, language: Language, theme: Theme, backend_url: String) -> Self {
        Self {
            should_quit: false,
            focus: FocusField::default(),
            page,
            keywords: TextInput::single_line(),
            settings: None,
            language,
            theme,
            backend_url,
            status_message: None,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// 编辑器关闭后，焦点不能停留在编辑器字段上
    pub fn sync_focus(&mut self) {
        if self.focus.is_editor() && !self.page.borrow().editor_open() {
            self.focus = FocusField::Keywords;
        }
    }

    /// 当前聚焦的输入框（设置弹窗打开时除外）
    pub fn with_focused_input<R>(&mut self, f: impl FnOnce(&mut TextInput) -> R) -> R {
        match self.focus {
            FocusField::Keywords => f(&mut self.keywords),
            FocusField::ManualTitle => f(&mut self.page.borrow_mut().manual_title),
            FocusField::ManualContent => f(&mut self.page.borrow_mut().manual_content),
            FocusField::EditorTitle => f(&mut self.page.borrow_mut().editor_title),
            FocusField::EditorMarkdown => f(&mut self.page.borrow_mut().editor_markdown),
        }
    }
}
