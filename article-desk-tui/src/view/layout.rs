//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::App;

use super::components;
use super::pages;
use super::theme::Styles;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 标题栏 + 主内容区 + 提示框 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                             // 标题栏
            Constraint::Min(1),                                // 主内容区
            Constraint::Length(components::alert::height(app)), // 提示框
            Constraint::Length(1),                             // 状态栏
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);

    // 左侧输入面板，右侧文章面板
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(main_layout[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(pages::generate::HEIGHT),
            Constraint::Min(1),
        ])
        .split(columns[0]);

    pages::generate::render(app, frame, left[0]);
    pages::manual::render(app, frame, left[1]);
    pages::article::render(app, frame, columns[1]);

    components::alert::render(app, frame, main_layout[2]);
    components::statusbar::render(app, frame, main_layout[3]);

    // 弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let mut spans = vec![
        Span::raw(format!(" {} v{}", texts.common.app_name, env!("CARGO_PKG_VERSION"))),
        Span::raw(format!("  │  {}: {}", texts.common.backend, app.backend_url)),
        Span::raw(format!("  │  {}", app.language.display_name())),
    ];
    // 请求进行中
    if app.page.borrow().any_busy() {
        spans.push(Span::raw("  ⋯"));
    }
    let title = Line::from(spans);
    frame.render_widget(Paragraph::new(title).style(Styles::statusbar()), area);
}
