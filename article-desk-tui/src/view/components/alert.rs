//! 提示框组件
//!
//! 控制器只给出 `Notice`，文本在这里按当前语言生成。

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use article_desk_core::types::{Alert, CredentialField, Endpoint, Notice};

use crate::i18n::{t, AlertTexts};
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 提示框需要的高度（无提示框时为 0）
pub fn height(app: &App) -> u16 {
    match app.page.borrow().alert.as_ref() {
        None => 0,
        Some(alert) if alert.link().is_some() => 4,
        Some(_) => 3,
    }
}

/// 渲染提示框
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let page = app.page.borrow();
    let Some(alert) = page.alert.as_ref() else {
        return;
    };

    let texts = t();
    let color = colors().alert(alert.level);

    let mut lines = vec![Line::from(Span::styled(
        alert_message(alert),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))];
    if let Some(url) = alert.link() {
        lines.push(Line::from(vec![
            Span::styled(texts.hints.keys.open_link, Styles::hint_key()),
            Span::raw(" "),
            Span::styled(format!("{}: ", texts.alerts.view_post), Styles::hint_desc()),
            Span::styled(
                url.to_string(),
                Style::default().fg(color).add_modifier(Modifier::UNDERLINED),
            ),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// 按当前语言生成提示文本
pub fn alert_message(alert: &Alert) -> String {
    notice_text(&t().alerts, &alert.notice)
}

fn notice_text(texts: &AlertTexts, notice: &Notice) -> String {
    match notice {
        Notice::KeywordsRequired => texts.keywords_required.to_string(),
        Notice::TitleContentRequired => texts.title_content_required.to_string(),
        Notice::CredentialsMissing { fields } => {
            if fields.is_empty() {
                return texts.wp_creds_missing.to_string();
            }
            let names: Vec<&str> = fields.iter().map(|f| field_name(texts, *f)).collect();
            format!("{} ({})", texts.wp_creds_missing, names.join(", "))
        }
        Notice::NothingToEdit => texts.nothing_to_edit.to_string(),
        // 服务端给出的文本原样显示
        Notice::ServiceError {
            message: Some(message),
            ..
        } => message.clone(),
        Notice::ServiceError {
            endpoint,
            message: None,
        } => unknown_error(texts, *endpoint).to_string(),
        Notice::ConnectionFailed { endpoint } => match endpoint {
            Some(Endpoint::GenerateArticle) => texts.generate_connect_failed.to_string(),
            Some(Endpoint::ConvertMarkdown) => texts.convert_connect_failed.to_string(),
            Some(Endpoint::PostToWordpress) => texts.post_connect_failed.to_string(),
            None => texts.connect_failed.to_string(),
        },
        Notice::Published { title, .. } => texts.post_success.replace("{title}", title),
        Notice::SettingsSaved => texts.settings_saved.to_string(),
        Notice::StorageFailed { detail } => format!("{}: {}", texts.settings_failed, detail),
    }
}

fn field_name(texts: &AlertTexts, field: CredentialField) -> &'static str {
    match field {
        CredentialField::Url => texts.field_url,
        CredentialField::Username => texts.field_username,
        CredentialField::Password => texts.field_password,
    }
}

fn unknown_error(texts: &AlertTexts, endpoint: Endpoint) -> &'static str {
    match endpoint {
        Endpoint::GenerateArticle => texts.generate_unknown_error,
        Endpoint::ConvertMarkdown => texts.convert_unknown_error,
        Endpoint::PostToWordpress => texts.post_unknown_error,
    }
}
