//! 关键词生成面板

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

/// 面板高度：边框 2 + 输入框 3 + 按钮 1
pub const HEIGHT: u16 = 6;

/// 渲染关键词生成面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let focused = app.focus == FocusField::Keywords && app.settings.is_none();

    let block = Block::default()
        .title(format!(" {} ", texts.generate.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(inner);

    render_field(
        frame,
        layout[0],
        texts.generate.keywords_label,
        &app.keywords,
        texts.generate.keywords_placeholder,
        focused,
    );

    let state = app.page.borrow().control(Control::Generate);
    let buttons = button_row(vec![button(
        texts.hints.keys.generate,
        texts.generate.generate_btn,
        texts.generate.generating,
        state,
    )]);
    frame.render_widget(Paragraph::new(buttons), layout[1]);
}
