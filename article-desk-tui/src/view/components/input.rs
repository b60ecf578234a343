//! 输入框与按钮

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use article_desk_core::types::ControlState;

use crate::model::TextInput;
use crate::view::theme::{colors, Styles};

const CURSOR: &str = "▎";

/// 输入框的显示文本
///
/// 空且未聚焦时显示占位符；密文字段未显示时用圆点代替。
pub fn display_lines(
    input: &TextInput,
    placeholder: &str,
    focused: bool,
    masked: bool,
) -> Vec<Line<'static>> {
    let c = colors();
    if input.is_empty() && !focused {
        return vec![Line::styled(
            placeholder.to_string(),
            Style::default().fg(c.muted),
        )];
    }

    let value = if masked {
        "•".repeat(input.value().chars().count().min(32))
    } else {
        input.value().to_string()
    };
    let style = Style::default().fg(c.fg);
    let mut lines: Vec<Line<'static>> = value
        .split('\n')
        .map(|l| Line::styled(l.to_string(), style))
        .collect();
    if focused {
        if let Some(last) = lines.last_mut() {
            last.spans
                .push(Span::styled(CURSOR, Style::default().fg(c.border_focused)));
        }
    }
    lines
}

/// 文本在给定宽度下折行后的行数
pub fn wrapped_height(lines: &[Line<'_>], width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let total: usize = lines
        .iter()
        .map(|line| {
            let w: usize = line.spans.iter().map(|s| s.content.width()).sum();
            w.div_ceil(width).max(1)
        })
        .sum();
    u16::try_from(total).unwrap_or(u16::MAX)
}

/// 带边框的输入框
///
/// 内容超出区域时滚动到末尾，保证光标可见。
pub fn render_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    input: &TextInput,
    placeholder: &str,
    focused: bool,
) {
    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));
    let inner = block.inner(area);

    let lines = display_lines(input, placeholder, focused, false);
    let scroll = if focused {
        wrapped_height(&lines, inner.width).saturating_sub(inner.height)
    } else {
        0
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

/// 按钮：`[按键] 标签`
///
/// 忙碌时显示忙碌文本，禁用时变灰。
pub fn button(key: &'static str, label: &str, busy_label: &str, state: ControlState) -> Vec<Span<'static>> {
    let c = colors();
    let text = if state.busy { busy_label } else { label };
    let style = if state.busy {
        Style::default().fg(c.warning).add_modifier(Modifier::ITALIC)
    } else if state.enabled {
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };
    vec![
        Span::styled(format!("[{key}]"), Styles::hint_key()),
        Span::raw(" "),
        Span::styled(text.to_string(), style),
    ]
}

/// 多个按钮排成一行
pub fn button_row(buttons: Vec<Vec<Span<'static>>>) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for (i, button) in buttons.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.extend(button);
    }
    Line::from(spans)
}
