//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁。
//! Event 层把按键翻译成 Message，Update 层消费 Message 修改 Model；
//! 需要访问后端的操作由 Update 层返回 Command，交给主循环执行。
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod action;         // 文章操作（生成、预览、投稿……）
//!         mod app;            // 主消息
//!         mod command;        // Update 层返回给主循环的命令
//!         mod input;          // 文本输入
//!         mod settings;       // 设置弹窗
//!

mod action;
mod app;
mod command;
mod input;
mod settings;

pub use action::ActionMessage;
pub use app::AppMessage;
pub use command::{Command, CommandOutput, ControllerCommand};
pub use input::InputMessage;
pub use settings::SettingsMessage;
