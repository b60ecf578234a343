//! 类型定义模块

mod alert;
mod article;
mod control;
mod outcome;
mod settings;

pub use alert::{Alert, AlertLevel, Notice};
pub use article::{ArticlePhase, ArticleRecord, ArticleState, ViewMode};
pub use control::{Control, ControlBoard, ControlState};
pub use outcome::OperationOutcome;
pub use settings::{AppSettings, CredentialField, PublishCredentials};

// Re-export client 库的公共类型
pub use article_desk_client::{Endpoint, GeneratedArticle, PublishReceipt};
