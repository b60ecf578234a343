//! 核心服务
//!
//! 组装 article-desk-core 的 ServiceContext 与文章控制器，
//! 并负责执行 Update 层返回的 `ControllerCommand`。

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use article_desk_client::HttpArticleBackend;
use article_desk_core::{ArticleController, ServiceContext};

use crate::message::{CommandOutput, ControllerCommand};
use crate::model::PageHandle;

use super::secret_store::SecretStore;
use super::settings_store::JsonSettingsStore;

/// TUI 使用的控制器类型
pub type Controller = ArticleController<PageHandle>;

/// 创建文章控制器
///
/// 后端地址非法时返回错误；此时还没有进入终端界面。
pub fn build_controller(
    backend_url: &str,
    config_dir: &Path,
    secrets: Arc<dyn SecretStore>,
    page: PageHandle,
) -> Result<Controller> {
    // 1. 创建基础依赖
    let backend = Arc::new(HttpArticleBackend::new(backend_url)?);
    let settings_store = Arc::new(JsonSettingsStore::new(config_dir, secrets));
    log::info!(
        "[core] backend at {backend_url}, settings in {}",
        settings_store.path().display()
    );

    // 2. 组装 ServiceContext
    let ctx = Arc::new(ServiceContext::new(backend, settings_store));

    Ok(ArticleController::new(ctx, page))
}

/// 执行一次控制器调用
pub async fn execute(controller: &mut Controller, command: &ControllerCommand) -> CommandOutput {
    log::debug!("[core] running {}", command.name());
    let outcome = match command {
        ControllerCommand::Generate { keywords } => {
            controller.generate_with_saved_key(keywords).await
        }
        ControllerCommand::ManualPreview { title, markdown } => {
            controller.convert_and_preview(title, markdown).await
        }
        ControllerCommand::ManualPublish { title, markdown } => {
            controller
                .publish_manual_with_saved_credentials(title, markdown)
                .await
        }
        ControllerCommand::EnterEditor => controller.enter_editor(),
        ControllerCommand::UpdatePreview { title, markdown } => {
            controller.update_preview(title, markdown).await
        }
        ControllerCommand::CancelEdit => controller.cancel_edit(),
        ControllerCommand::PublishCurrent => controller.publish_current().await,
        ControllerCommand::LoadSettings => {
            return CommandOutput::Settings(controller.load_settings().await);
        }
        ControllerCommand::SaveSettings(settings) => controller.save_settings(settings).await,
    };
    log::debug!("[core] {} -> {:?}", command.name(), outcome);
    CommandOutput::Outcome(outcome)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::backend::secret_store::MemorySecretStore;
    use article_desk_core::types::{AppSettings, Notice, OperationOutcome, ViewMode};

    fn controller(dir: &Path) -> (Controller, PageHandle) {
        let page = PageHandle::new();
        // 不会被连接：这些测试只走本地校验和设置读写
        let controller = build_controller(
            "http://127.0.0.1:9",
            dir,
            Arc::new(MemorySecretStore::default()),
            page.clone(),
        )
        .unwrap();
        (controller, page)
    }

    #[test]
    fn invalid_backend_url_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        assert!(build_controller(
            "not a url",
            dir.path(),
            Arc::new(MemorySecretStore::default()),
            PageHandle::new()
        )
        .is_err());
    }

    #[tokio::test]
    async fn validation_failures_reach_the_page() {
        let dir = tempfile::tempdir().unwrap();
        let (mut controller, page) = controller(dir.path());

        let output = execute(
            &mut controller,
            &ControllerCommand::Generate {
                keywords: "   ".into(),
            },
        )
        .await;
        assert_eq!(output, CommandOutput::Outcome(OperationOutcome::Rejected));
        assert_eq!(
            page.borrow().alert.as_ref().map(|a| a.notice.clone()),
            Some(Notice::KeywordsRequired)
        );

        let output = execute(&mut controller, &ControllerCommand::EnterEditor).await;
        assert_eq!(output, CommandOutput::Outcome(OperationOutcome::Rejected));
        assert_eq!(page.borrow().visible, None::<ViewMode>);
    }

    #[tokio::test]
    async fn settings_are_saved_and_loaded_through_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let (mut controller, _page) = controller(dir.path());
        let settings = AppSettings {
            wp_url: "https://blog.example".into(),
            wp_password: "app pass".into(),
            ..AppSettings::default()
        };

        let saved = execute(
            &mut controller,
            &ControllerCommand::SaveSettings(settings.clone()),
        )
        .await;
        assert_eq!(saved, CommandOutput::Outcome(OperationOutcome::Completed));
        assert!(dir.path().join("settings.json").exists());

        let loaded = execute(&mut controller, &ControllerCommand::LoadSettings).await;
        assert_eq!(loaded, CommandOutput::Settings(settings));
    }
}
