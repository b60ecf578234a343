//! 文章面板
//!
//! 同一时刻最多显示预览和编辑器之一；两者都隐藏时显示生成中或空白提示。

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use article_desk_core::types::{Control, ViewMode};

use crate::i18n::t;
use crate::model::{App, FocusField, PageState};
use crate::view::components::input::{button, button_row, render_field};
use crate::view::html::html_to_lines;
use crate::view::theme::{colors, Styles};

/// 渲染文章面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let page = app.page.borrow();
    match page.visible {
        Some(ViewMode::Preview) => render_preview(&page, frame, area),
        Some(ViewMode::Editor) => render_editor(app, &page, frame, area),
        None => render_placeholder(&page, frame, area),
    }
}

fn render_placeholder(page: &PageState, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let block = Block::default()
        .title(format!(" {} ", texts.article.preview_title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(false));

    // 生成期间两个面板都隐藏
    let (text, style) = if page.control(Control::Generate).busy {
        (
            texts.article.loading,
            Style::default().fg(c.info).add_modifier(Modifier::ITALIC),
        )
    } else {
        (texts.article.empty, Style::default().fg(c.muted))
    };

    let paragraph = Paragraph::new(vec![Line::from(""), Line::styled(text, style)])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(paragraph, area);
}

fn render_preview(page: &PageState, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let block = Block::default()
        .title(format!(" {} ", texts.article.preview_title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(false));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let mut lines = vec![
        Line::styled(
            page.preview.title.clone(),
            Style::default()
                .fg(c.highlight)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        ),
        Line::from(""),
    ];
    for line in html_to_lines(&page.preview.html_content) {
        let style = if line.heading {
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c.fg)
        };
        lines.push(Line::styled(line.text, style));
    }
    let body = Paragraph::new(lines).wrap(Wrap { trim: false });
    let content_height = u16::try_from(body.line_count(layout[0].width)).unwrap_or(u16::MAX);
    page.set_preview_extent(content_height, layout[0].height);
    frame.render_widget(body.scroll((page.preview_offset(), 0)), layout[0]);

    let buttons = button_row(vec![
        button(
            texts.hints.keys.edit,
            texts.article.edit_btn,
            texts.article.edit_btn,
            Default::default(),
        ),
        button(
            texts.hints.keys.post,
            texts.article.post_btn,
            texts.article.posting,
            page.control(Control::Publish),
        ),
    ]);
    frame.render_widget(Paragraph::new(buttons), layout[1]);
}

fn render_editor(app: &App, page: &PageState, frame: &mut Frame, area: Rect) {
    let texts = t();
    let active = app.settings.is_none();

    let block = Block::default()
        .title(format!(" {} ", texts.article.editor_title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(active && app.focus.is_editor()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Min(3),    // Markdown
            Constraint::Length(1), // 按钮
        ])
        .split(inner);

    render_field(
        frame,
        layout[0],
        texts.article.title_label,
        &page.editor_title,
        "",
        active && app.focus == FocusField::EditorTitle,
    );
    render_field(
        frame,
        layout[1],
        texts.article.markdown_label,
        &page.editor_markdown,
        "",
        active && app.focus == FocusField::EditorMarkdown,
    );

    let buttons = button_row(vec![
        button(
            texts.hints.keys.update,
            texts.article.update_btn,
            texts.article.updating,
            page.control(Control::UpdatePreview),
        ),
        vec![
            Span::styled(format!("[{}]", texts.hints.keys.esc), Styles::hint_key()),
            Span::raw(" "),
            Span::raw(texts.article.cancel_btn),
        ],
    ]);
    frame.render_widget(Paragraph::new(buttons), layout[2]);
}
