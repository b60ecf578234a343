//!
//! src/event/mod.rs
//! Event 层：输入处理
//!
//! 把 crossterm 的原始事件翻译成 `AppMessage`。
//!
//!     handler.rs      poll_event / handle_event / drain_events
//!     keymap.rs       快捷键定义
//!

mod handler;
mod keymap;

pub use handler::{drain_events, handle_event, poll_event};
