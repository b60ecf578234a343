//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层只包含纯数据结构，所有状态变更都通过 Update 层触发。
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点输入框
//!         mod input;          // 文本输入框
//!         mod page;           // 控制器渲染的页面状态
//!         mod settings_form;  // 设置弹窗
//!
//!     page.rs 与 app.rs 的分工：
//!         - PageState 由文章控制器通过 `ArticleView` 写入：提示框、可见面板、
//!           预览、编辑器内容、按钮忙碌状态。它放在 `Rc<RefCell<_>>` 中，
//!           控制器和 App 各持一份句柄。
//!         - App 只保存纯界面状态：焦点、关键词、设置弹窗、语言与主题。
//!
//!     数据流：
//!         用户按 Alt+g
//!             ↓
//!         update 层返回 Command::Generate
//!             ↓
//!         app.rs 调用控制器，控制器写入 PageState
//!             ↓
//!         view 层读取 PageState 渲染
//!

mod app;
mod focus;
mod input;
mod page;
mod settings_form;

pub use app::App;
pub use focus::FocusField;
pub use input::TextInput;
pub use page::{PageHandle, PageState};
pub use settings_form::{SettingsField, SettingsForm};
