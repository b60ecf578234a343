//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use article_desk_core::types::Alert;

use crate::i18n::t;
use crate::model::{App, FocusField};
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);
    let c = colors();

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(c.muted)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::raw(*desc));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(c.muted)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(c.warning)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = t();
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;
    let mut hints = Vec::new();

    // 设置弹窗
    if app.settings.is_some() {
        hints.push((keys.tab, actions.next_field));
        hints.push((keys.enter, actions.save));
        hints.push((keys.reveal, actions.show_hide));
        hints.push((keys.esc, actions.close));
        return hints;
    }

    hints.push((keys.tab, actions.next_field));

    match app.focus {
        FocusField::Keywords => hints.push((keys.enter, texts.generate.generate_btn)),
        FocusField::ManualTitle | FocusField::ManualContent => {
            if app.focus == FocusField::ManualContent {
                hints.push((keys.enter, actions.new_line));
            }
            hints.push((keys.preview, texts.manual.preview_btn));
            hints.push((keys.manual_post, texts.manual.manual_post_btn));
        }
        FocusField::EditorTitle | FocusField::EditorMarkdown => {
            if app.focus == FocusField::EditorMarkdown {
                hints.push((keys.enter, actions.new_line));
            }
            hints.push((keys.update, texts.article.update_btn));
            hints.push((keys.esc, texts.article.cancel_btn));
        }
    }

    let page = app.page.borrow();
    if page.preview_open() {
        hints.push((keys.edit, texts.article.edit_btn));
        hints.push((keys.post, texts.article.post_btn));
        hints.push((keys.scroll, actions.scroll));
    }
    if page.alert.as_ref().and_then(Alert::link).is_some() {
        hints.push((keys.open_link, actions.open_link));
    }
    drop(page);

    hints.push((keys.settings, actions.settings));
    hints.push((keys.language, actions.language));
    hints.push((keys.theme, actions.theme));
    hints.push((keys.quit, texts.common.quit));

    hints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::model::{PageHandle, SettingsForm};
    use crate::view::theme::Theme;
    use article_desk_core::types::{AlertLevel, AppSettings, Notice, ViewMode};
    use article_desk_core::ArticleView;

    fn app() -> App {
        App::new(
            PageHandle::new(),
            Language::EnUs,
            Theme::Dark,
            "http://127.0.0.1:5000".into(),
        )
    }

    fn keys(app: &App) -> Vec<&'static str> {
        get_hints(app).into_iter().map(|(k, _)| k).collect()
    }

    #[test]
    fn settings_modal_has_its_own_hints() {
        let mut app = app();
        app.settings = Some(SettingsForm::from_settings(&AppSettings::default()));
        assert_eq!(get_hints(&app).len(), 4);
    }

    #[test]
    fn preview_adds_edit_and_post() {
        let app = app();
        let k = t().hints.keys.edit;
        assert!(!keys(&app).contains(&k));

        app.page.show_view(Some(ViewMode::Preview));
        assert!(keys(&app).contains(&k));
        assert!(keys(&app).contains(&t().hints.keys.post));
        assert!(keys(&app).contains(&t().hints.keys.scroll));
    }

    #[test]
    fn link_hint_only_with_published_link() {
        let app = app();
        let k = t().hints.keys.open_link;
        app.page
            .show_alert(&Alert::new(AlertLevel::Danger, Notice::KeywordsRequired));
        assert!(!keys(&app).contains(&k));

        app.page.show_alert(&Alert::success(Notice::Published {
            title: "T".into(),
            url: Some("https://blog.example/?p=1".into()),
        }));
        assert!(keys(&app).contains(&k));
    }
}
