//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::{DefaultKeymap, KeyBinding};
use crate::message::{ActionMessage, AppMessage, InputMessage, SettingsMessage};
use crate::model::App;

/// PgUp / PgDn 一次滚动的行数
const PAGE_STEP: i16 = 10;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 丢弃所有已到达的事件（请求进行中时调用）
pub fn drain_events() -> Result<()> {
    while event::poll(Duration::ZERO)? {
        let _ = event::read()?;
    }
    Ok(())
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变，下一帧自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.settings.is_some() {
        return handle_settings_keys(key);
    }

    // 部分终端发送的 BackTab 不带 SHIFT
    if key.code == KeyCode::BackTab {
        return AppMessage::FocusPrev;
    }

    let actions: [(&KeyBinding, AppMessage); 14] = [
        (&DefaultKeymap::BACK, AppMessage::Escape),
        (&DefaultKeymap::NEXT_FIELD, AppMessage::FocusNext),
        (&DefaultKeymap::GENERATE, AppMessage::Action(ActionMessage::Generate)),
        (&DefaultKeymap::MANUAL_PREVIEW, AppMessage::Action(ActionMessage::ManualPreview)),
        (&DefaultKeymap::MANUAL_PUBLISH, AppMessage::Action(ActionMessage::ManualPublish)),
        (&DefaultKeymap::EDIT, AppMessage::Action(ActionMessage::Edit)),
        (&DefaultKeymap::PUBLISH, AppMessage::Action(ActionMessage::Publish)),
        (&DefaultKeymap::UPDATE_PREVIEW, AppMessage::Action(ActionMessage::UpdatePreview)),
        (&DefaultKeymap::SETTINGS, AppMessage::Settings(SettingsMessage::Open)),
        (&DefaultKeymap::OPEN_LINK, AppMessage::OpenLink),
        (&DefaultKeymap::SCROLL_UP, AppMessage::ScrollPreview(-1)),
        (&DefaultKeymap::SCROLL_DOWN, AppMessage::ScrollPreview(1)),
        (&DefaultKeymap::PAGE_UP, AppMessage::ScrollPreview(-PAGE_STEP)),
        (&DefaultKeymap::PAGE_DOWN, AppMessage::ScrollPreview(PAGE_STEP)),
    ];
    if let Some((_, msg)) = actions.into_iter().find(|(binding, _)| binding.matches(&key)) {
        return msg;
    }

    if DefaultKeymap::LANGUAGE.matches(&key) {
        return AppMessage::ToggleLanguage;
    }
    if DefaultKeymap::THEME.matches(&key) {
        return AppMessage::ToggleTheme;
    }

    handle_text_keys(key).map_or(AppMessage::Noop, AppMessage::Input)
}

/// 处理设置弹窗的按键
fn handle_settings_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::Settings(SettingsMessage::Close);
    }
    if DefaultKeymap::NEXT_FIELD.matches(&key) || key.code == KeyCode::Down {
        return AppMessage::Settings(SettingsMessage::NextField);
    }
    if key.code == KeyCode::BackTab || key.code == KeyCode::Up {
        return AppMessage::Settings(SettingsMessage::PrevField);
    }
    if DefaultKeymap::REVEAL.matches(&key) {
        return AppMessage::Settings(SettingsMessage::ToggleReveal);
    }

    handle_text_keys(key).map_or(AppMessage::Noop, AppMessage::Input)
}

/// 普通字符、退格、回车
fn handle_text_keys(key: KeyEvent) -> Option<InputMessage> {
    let plain = key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT;
    match key.code {
        KeyCode::Char(c) if plain => Some(InputMessage::Char(c)),
        KeyCode::Backspace => Some(InputMessage::Backspace),
        KeyCode::Enter => Some(InputMessage::Enter),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::model::{PageHandle, SettingsForm};
    use crate::view::theme::Theme;

    fn app() -> App {
        App::new(PageHandle::new(), Language::JaJp, Theme::Dark, String::new())
    }

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn alt_bindings_map_to_actions() {
        let app = app();
        assert_eq!(
            handle_event(press(KeyCode::Char('g'), KeyModifiers::ALT), &app),
            AppMessage::Action(ActionMessage::Generate)
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('p'), KeyModifiers::ALT), &app),
            AppMessage::Action(ActionMessage::Publish)
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL), &app),
            AppMessage::Quit
        );
    }

    #[test]
    fn plain_characters_are_text() {
        let app = app();
        assert_eq!(
            handle_event(press(KeyCode::Char('g'), KeyModifiers::NONE), &app),
            AppMessage::Input(InputMessage::Char('g'))
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('G'), KeyModifiers::SHIFT), &app),
            AppMessage::Input(InputMessage::Char('G'))
        );
    }

    #[test]
    fn settings_modal_captures_keys() {
        let mut app = app();
        app.settings = Some(SettingsForm::default());
        assert_eq!(
            handle_event(press(KeyCode::Esc, KeyModifiers::NONE), &app),
            AppMessage::Settings(SettingsMessage::Close)
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('g'), KeyModifiers::ALT), &app),
            AppMessage::Noop
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('r'), KeyModifiers::ALT), &app),
            AppMessage::Settings(SettingsMessage::ToggleReveal)
        );
    }

    #[test]
    fn paging_keys_scroll_the_preview() {
        let app = app();
        assert_eq!(
            handle_event(press(KeyCode::PageDown, KeyModifiers::NONE), &app),
            AppMessage::ScrollPreview(PAGE_STEP)
        );
        assert_eq!(
            handle_event(press(KeyCode::Up, KeyModifiers::ALT), &app),
            AppMessage::ScrollPreview(-1)
        );
    }

    #[test]
    fn release_events_are_ignored() {
        let app = app();
        let mut key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(handle_event(Event::Key(key), &app), AppMessage::Noop);
    }
}
