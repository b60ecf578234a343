//! 面板视图

pub mod article;
pub mod generate;
pub mod manual;
