//! View 层：UI 渲染
//!
//! 只读取 `App` 与共享的 `PageState`，不修改任何状态。
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         pub mod theme;      // 主题和样式
//!         pub mod html;       // HTML → 终端文本
//!         mod layout;         // 主布局
//!         mod components;     // 提示框、状态栏、设置弹窗、输入框
//!         mod pages;          // 三个面板

mod components;
pub mod html;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
