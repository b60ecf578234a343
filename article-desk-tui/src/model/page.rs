//! 页面显示状态
//!
//! `PageState` 保存控制器要求显示的一切：提示框、可见面板、预览内容、
//! 编辑器与手动投稿输入框、按钮状态。`PageHandle` 是它的共享句柄，
//! 同时交给控制器（作为 `ArticleView`）和 `App`（用于渲染与输入）。

use std::cell::{Cell, Ref, RefCell, RefMut};
use std::collections::HashMap;
use std::rc::Rc;

use article_desk_core::types::{Alert, ArticleRecord, Control, ControlState, ViewMode};
use article_desk_core::ArticleView;

use super::TextInput;

/// 页面显示状态
#[derive(Debug)]
pub struct PageState {
    /// 当前提示框
    pub alert: Option<Alert>,
    /// 可见面板；`None` = 两者都隐藏
    pub visible: Option<ViewMode>,
    /// 预览中的文章
    pub preview: ArticleRecord,
    /// 预览滚动偏移（行）
    pub preview_scroll: u16,
    /// 上次渲染时允许的最大偏移
    preview_scroll_max: Cell<u16>,
    /// 编辑器输入框
    pub editor_title: TextInput,
    pub editor_markdown: TextInput,
    /// 手动投稿输入框
    pub manual_title: TextInput,
    pub manual_content: TextInput,
    controls: HashMap<Control, ControlState>,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            alert: None,
            visible: None,
            preview: ArticleRecord::default(),
            preview_scroll: 0,
            preview_scroll_max: Cell::new(0),
            editor_title: TextInput::single_line(),
            editor_markdown: TextInput::multi_line(),
            manual_title: TextInput::single_line(),
            manual_content: TextInput::multi_line(),
            controls: HashMap::new(),
        }
    }
}

impl PageState {
    pub fn control(&self, control: Control) -> ControlState {
        self.controls.get(&control).copied().unwrap_or_default()
    }

    /// 是否有请求正在进行
    pub fn any_busy(&self) -> bool {
        self.controls.values().any(|s| s.busy)
    }

    pub fn editor_open(&self) -> bool {
        self.visible == Some(ViewMode::Editor)
    }

    pub fn preview_open(&self) -> bool {
        self.visible == Some(ViewMode::Preview)
    }

    /// 记录预览内容高度和可视高度，由渲染层调用
    pub fn set_preview_extent(&self, content_height: u16, viewport_height: u16) {
        self.preview_scroll_max
            .set(content_height.saturating_sub(viewport_height));
    }

    /// 实际使用的偏移（窗口变大后旧偏移可能越界）
    pub fn preview_offset(&self) -> u16 {
        self.preview_scroll.min(self.preview_scroll_max.get())
    }

    pub fn scroll_preview(&mut self, delta: i16) {
        self.preview_scroll = self
            .preview_offset()
            .saturating_add_signed(delta)
            .min(self.preview_scroll_max.get());
    }
}

/// `PageState` 的共享句柄
#[derive(Debug, Clone, Default)]
pub struct PageHandle(Rc<RefCell<PageState>>);

impl PageHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn borrow(&self) -> Ref<'_, PageState> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, PageState> {
        self.0.borrow_mut()
    }
}

impl ArticleView for PageHandle {
    fn show_alert(&self, alert: &Alert) {
        self.borrow_mut().alert = Some(alert.clone());
    }

    fn clear_alert(&self) {
        self.borrow_mut().alert = None;
    }

    fn render_article(&self, record: &ArticleRecord) {
        let mut page = self.borrow_mut();
        page.preview = record.clone();
        page.preview_scroll = 0;
    }

    fn show_view(&self, mode: Option<ViewMode>) {
        self.borrow_mut().visible = mode;
    }

    fn fill_editor(&self, title: &str, markdown: &str) {
        let mut page = self.borrow_mut();
        page.editor_title.set(title);
        page.editor_markdown.set(markdown);
    }

    fn clear_manual_inputs(&self) {
        let mut page = self.borrow_mut();
        page.manual_title.clear();
        page.manual_content.clear();
    }

    fn set_control(&self, control: Control, state: ControlState) {
        self.borrow_mut().controls.insert(control, state);
    }
}
