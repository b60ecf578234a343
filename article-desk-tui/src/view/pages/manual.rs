//! 手动投稿面板
//!
//! 标题 + Markdown 正文，可以预览或直接投稿。

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use article_desk_core::types::Control;

use crate::i18n::t;
use crate::model::{App, FocusField};
use crate::view::components::input::{button, button_row, render_field};
use crate::view::theme::Styles;

/// 渲染手动投稿面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let active = app.settings.is_none();

    let block = Block::default()
        .title(format!(" {} ", texts.manual.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(active && app.focus.is_manual()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Min(3),    // 正文
            Constraint::Length(1), // 按钮
        ])
        .split(inner);

    let page = app.page.borrow();

    render_field(
        frame,
        layout[0],
        texts.manual.title_label,
        &page.manual_title,
        texts.manual.title_placeholder,
        active && app.focus == FocusField::ManualTitle,
    );
    render_field(
        frame,
        layout[1],
        texts.manual.content_label,
        &page.manual_content,
        texts.manual.content_placeholder,
        active && app.focus == FocusField::ManualContent,
    );

    let buttons = button_row(vec![
        button(
            texts.hints.keys.preview,
            texts.manual.preview_btn,
            texts.manual.previewing,
            page.control(Control::ManualPreview),
        ),
        button(
            texts.hints.keys.manual_post,
            texts.manual.manual_post_btn,
            texts.article.posting,
            page.control(Control::ManualPublish),
        ),
    ]);
    frame.render_widget(Paragraph::new(buttons), layout[2]);
}
