//! 设置弹窗

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use article_desk_core::types::Control;

use crate::i18n::t;
use crate::model::{App, SettingsField, SettingsForm};
use crate::view::theme::{colors, Styles};

use super::input::{button, button_row, display_lines};

/// 渲染设置弹窗（如果已打开）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(form) = app.settings.as_ref() else {
        return;
    };

    let texts = t();
    let c = colors();

    // 每个字段：标签 + 值 + 空行；另加按钮行和边框
    let height = SettingsField::all().len() as u16 * 3 + 4;
    let area = centered_rect(64, height, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.settings.title))
        .title_alignment(Alignment::Center)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused))
        .style(Style::default().bg(c.bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    for field in SettingsField::all() {
        lines.extend(field_lines(form, *field));
        lines.push(Line::from(""));
    }

    let save_state = app.page.borrow().control(Control::SaveSettings);
    lines.push(button_row(vec![
        button(
            texts.hints.keys.enter,
            texts.settings.save_btn,
            texts.settings.saving,
            save_state,
        ),
        button(texts.hints.keys.esc, texts.common.cancel, texts.common.cancel, Default::default()),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn field_lines(form: &SettingsForm, field: SettingsField) -> Vec<Line<'static>> {
    let texts = t();
    let c = colors();
    let focused = form.focus == field;

    let (label, hint) = match field {
        SettingsField::ApiKey => (texts.settings.api_key_label, texts.settings.api_key_hint),
        SettingsField::WpUrl => (texts.settings.wp_url_label, texts.settings.wp_url_hint),
        SettingsField::WpUsername => (texts.settings.wp_username_label, ""),
        SettingsField::WpPassword => (texts.settings.wp_password_label, ""),
    };

    let label_style = if focused {
        Style::default().fg(c.border_focused).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };
    let mut label_spans = vec![Span::styled(format!(" {label}"), label_style)];
    if field.is_secret() {
        let eye = if form.show_secrets { " ◉" } else { " ⊖" };
        label_spans.push(Span::styled(eye, Style::default().fg(c.muted)));
        if focused {
            label_spans.push(Span::styled(
                format!(
                    "  ({} {})",
                    texts.hints.keys.reveal, texts.hints.actions.show_hide
                ),
                Style::default().fg(c.muted),
            ));
        }
    }

    let masked = field.is_secret() && !form.show_secrets;
    let mut lines = vec![Line::from(label_spans)];
    for mut line in display_lines(form.input(field), hint, focused, masked) {
        line.spans.insert(0, Span::raw("   "));
        lines.push(line);
    }
    lines
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_fits_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(64, 16, area), Rect::new(18, 12, 64, 16));

        let small = Rect::new(0, 0, 30, 10);
        assert_eq!(centered_rect(64, 16, small), Rect::new(0, 0, 30, 10));
    }

    #[test]
    fn password_is_masked_until_revealed() {
        let mut form = SettingsForm::from_settings(&article_desk_core::types::AppSettings {
            wp_password: "hunter2".into(),
            ..Default::default()
        });
        let text = |form: &SettingsForm| -> String {
            field_lines(form, SettingsField::WpPassword)
                .iter()
                .skip(1)
                .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
                .collect()
        };
        assert!(!text(&form).contains("hunter2"));

        form.show_secrets = true;
        assert!(text(&form).contains("hunter2"));
    }
}
