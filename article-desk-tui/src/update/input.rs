//! 文本输入处理

use crate::message::{ActionMessage, Command, InputMessage, SettingsMessage};
use crate::model::{App, FocusField, TextInput};

pub fn update(app: &mut App, msg: InputMessage) -> Option<Command> {
    // 设置弹窗打开时，输入进入弹窗
    if let Some(form) = app.settings.as_mut() {
        match msg {
            InputMessage::Char(c) => form.focused_input_mut().push(c),
            InputMessage::Backspace => form.focused_input_mut().backspace(),
            InputMessage::Enter => return super::settings::update(app, SettingsMessage::Save),
        }
        return None;
    }

    match msg {
        InputMessage::Char(c) => app.with_focused_input(|input| input.push(c)),
        InputMessage::Backspace => app.with_focused_input(TextInput::backspace),
        InputMessage::Enter => {
            if app.with_focused_input(|input| input.is_multiline()) {
                app.with_focused_input(|input| input.push('\n'));
                return None;
            }
            // 单行输入框：触发默认操作或跳到下一项
            match app.focus {
                FocusField::Keywords => {
                    return super::action::update(app, ActionMessage::Generate);
                }
                FocusField::ManualTitle => app.focus = FocusField::ManualContent,
                FocusField::EditorTitle => app.focus = FocusField::EditorMarkdown,
                FocusField::ManualContent | FocusField::EditorMarkdown => {}
            }
        }
    }
    None
}
