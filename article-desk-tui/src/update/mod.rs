//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态，是唯一可以修改 `App` 的地方。
//! 需要等待后端的操作不在这里执行：`update()` 返回一个 `Command`，
//! 由主循环（app.rs）交给文章控制器，完成后再调用 `apply()` 收尾。
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod action;     // 文章操作 → ControllerCommand
//!         mod input;      // 文本输入
//!         mod settings;   // 设置弹窗
//!
//!         pub fn update(app: &mut App, msg: AppMessage) -> Option<Command>
//!         pub fn apply(app: &mut App, command: &ControllerCommand, output: CommandOutput)
//!

mod action;
mod input;
mod settings;

use article_desk_core::types::{Alert, OperationOutcome};

use crate::i18n::set_language;
use crate::message::{ActionMessage, AppMessage, Command, CommandOutput, ControllerCommand};
use crate::model::{App, FocusField, SettingsForm};
use crate::view::theme::set_theme;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            None
        }

        AppMessage::FocusNext => {
            if let Some(form) = app.settings.as_mut() {
                form.focus = form.focus.next();
            } else {
                let editor_open = app.page.borrow().editor_open();
                app.focus = app.focus.next(editor_open);
            }
            None
        }

        AppMessage::FocusPrev => {
            if let Some(form) = app.settings.as_mut() {
                form.focus = form.focus.prev();
            } else {
                let editor_open = app.page.borrow().editor_open();
                app.focus = app.focus.prev(editor_open);
            }
            None
        }

        AppMessage::Input(input_msg) => input::update(app, input_msg),

        AppMessage::Action(action_msg) => action::update(app, action_msg),

        AppMessage::Settings(settings_msg) => settings::update(app, settings_msg),

        AppMessage::ToggleLanguage => {
            app.language = app.language.next();
            set_language(app.language);
            Some(Command::SaveConfig)
        }

        AppMessage::ToggleTheme => {
            app.theme = app.theme.next();
            set_theme(app.theme);
            Some(Command::SaveConfig)
        }

        AppMessage::OpenLink => {
            let link = app
                .page
                .borrow()
                .alert
                .as_ref()
                .and_then(Alert::link)
                .map(str::to_string);
            link.map(Command::OpenLink)
        }

        AppMessage::ScrollPreview(delta) => {
            let mut page = app.page.borrow_mut();
            if page.preview_open() {
                page.scroll_preview(delta);
            }
            None
        }

        AppMessage::Escape => {
            if app.settings.is_some() {
                app.settings = None;
                None
            } else if app.page.borrow().editor_open() {
                action::update(app, ActionMessage::CancelEdit)
            } else {
                // 关闭提示框
                app.page.borrow_mut().alert = None;
                app.clear_status();
                None
            }
        }

        AppMessage::Noop => None,
    }
}

/// 控制器调用完成后的界面收尾
pub fn apply(app: &mut App, command: &ControllerCommand, output: CommandOutput) {
    match (command, output) {
        (_, CommandOutput::Settings(settings)) => {
            app.settings = Some(SettingsForm::from_settings(&settings));
        }
        (ControllerCommand::EnterEditor, CommandOutput::Outcome(OperationOutcome::Completed)) => {
            app.focus = FocusField::EditorTitle;
        }
        (
            ControllerCommand::SaveSettings(_),
            CommandOutput::Outcome(OperationOutcome::Completed),
        ) => {
            app.settings = None;
        }
        _ => {}
    }
    app.sync_focus();
}
