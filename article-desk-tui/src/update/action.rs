//! 文章操作 → 控制器命令

use crate::message::{ActionMessage, Command, ControllerCommand};
use crate::model::App;

/// 从当前输入框收集参数，生成控制器命令
///
/// 预览时不显示编辑器按钮，编辑器打开时不显示预览按钮，
/// 因此对不可见按钮的操作直接忽略。
pub fn update(app: &mut App, msg: ActionMessage) -> Option<Command> {
    let page = app.page.borrow();
    let editor_open = page.editor_open();

    let command = match msg {
        ActionMessage::Generate => ControllerCommand::Generate {
            keywords: app.keywords.value().to_string(),
        },
        ActionMessage::ManualPreview => ControllerCommand::ManualPreview {
            title: page.manual_title.value().to_string(),
            markdown: page.manual_content.value().to_string(),
        },
        ActionMessage::ManualPublish => ControllerCommand::ManualPublish {
            title: page.manual_title.value().to_string(),
            markdown: page.manual_content.value().to_string(),
        },
        ActionMessage::Edit if !editor_open => ControllerCommand::EnterEditor,
        ActionMessage::Publish if !editor_open => ControllerCommand::PublishCurrent,
        ActionMessage::UpdatePreview if editor_open => ControllerCommand::UpdatePreview {
            title: page.editor_title.value().to_string(),
            markdown: page.editor_markdown.value().to_string(),
        },
        ActionMessage::CancelEdit if editor_open => ControllerCommand::CancelEdit,
        _ => return None,
    };

    Some(Command::Controller(command))
}
