//! 设置弹窗处理

use crate::message::{Command, ControllerCommand, SettingsMessage};
use crate::model::App;

pub fn update(app: &mut App, msg: SettingsMessage) -> Option<Command> {
    if msg == SettingsMessage::Open {
        // 弹窗在读取到设置后由 apply() 打开
        return Some(Command::Controller(ControllerCommand::LoadSettings));
    }

    let form = app.settings.as_mut()?;
    match msg {
        SettingsMessage::Close => app.settings = None,
        SettingsMessage::NextField => form.focus = form.focus.next(),
        SettingsMessage::PrevField => form.focus = form.focus.prev(),
        SettingsMessage::ToggleReveal => form.show_secrets = !form.show_secrets,
        SettingsMessage::Save => {
            return Some(Command::Controller(ControllerCommand::SaveSettings(
                form.to_settings(),
            )));
        }
        SettingsMessage::Open => {}
    }
    None
}
