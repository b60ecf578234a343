//! Article view controller
//!
//! Owns the article record and the preview/editor phase, and runs every user
//! action against the backend:
//!
//! ```text
//!            generate / convert_and_preview
//!   Empty ───────────────────────────────────▶ Preview ◀──┐ publish
//!                                              │    ▲     │
//!                                  enter_editor│    │update_preview / cancel_edit
//!                                              ▼    │
//!                                             Editing
//! ```
//!
//! Each operation is a sequence of awaited requests. Its control is disabled
//! by an [`InFlight`] guard before the first await and restored when the
//! guard drops. Every error is reported to the view as one alert and never
//! leaves the operation.

use std::sync::Arc;

use article_desk_client::{
    ConvertMarkdownRequest, GenerateArticleRequest, PublishReceipt, PublishRequest,
};

use super::ServiceContext;
use super::in_flight::InFlight;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::traits::{ArticleBackend, ArticleView};
use crate::types::{
    Alert, AppSettings, ArticleRecord, ArticleState, Control, ControlBoard, ControlState, Notice,
    OperationOutcome, PublishCredentials, ViewMode,
};
use crate::utils::text::{is_blank, non_blank};

/// Article view controller
pub struct ArticleController<V: ArticleView> {
    ctx: Arc<ServiceContext>,
    view: V,
    state: ArticleState,
    controls: ControlBoard,
}

impl<V: ArticleView> ArticleController<V> {
    /// 创建控制器实例
    pub fn new(ctx: Arc<ServiceContext>, view: V) -> Self {
        Self {
            ctx,
            view,
            state: ArticleState::new(),
            controls: ControlBoard::new(),
        }
    }

    pub fn state(&self) -> &ArticleState {
        &self.state
    }

    pub fn record(&self) -> &ArticleRecord {
        self.state.record()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn control_state(&self, control: Control) -> ControlState {
        self.controls.get(control)
    }

    /// Enable or disable a control from outside an operation.
    pub fn set_control_enabled(&mut self, control: Control, enabled: bool) {
        let state = if enabled {
            ControlState::IDLE
        } else {
            ControlState::DISABLED
        };
        self.controls.set(control, state);
        self.view.set_control(control, state);
    }

    // ========== Generation ==========

    /// Generate an article from keywords.
    ///
    /// Both panels are hidden while the request runs; the previous panel comes
    /// back if it fails.
    pub async fn generate(
        &mut self,
        keywords: &str,
        api_key_override: Option<&str>,
    ) -> OperationOutcome {
        if !self.controls.is_enabled(Control::Generate) {
            return OperationOutcome::Busy;
        }
        self.view.clear_alert();

        let Some(keywords) = non_blank(keywords) else {
            return reject(&self.view, ValidationError::KeywordsRequired);
        };
        let request = GenerateArticleRequest {
            keywords: keywords.to_string(),
            openai_api_key: api_key_override.and_then(non_blank).map(str::to_string),
        };

        let Some(_guard) = InFlight::acquire(&mut self.controls, &self.view, Control::Generate)
        else {
            return OperationOutcome::Busy;
        };
        let prior_mode = self.state.view_mode();
        self.view.show_view(None);

        match self.ctx.backend.generate_article(&request).await {
            Ok(article) => {
                log::info!("[controller] Article generated: '{}'", article.title);
                show_record(&mut self.state, &self.view, article.into());
                OperationOutcome::Completed
            }
            Err(e) => {
                self.view.show_view(prior_mode);
                fail(&self.view, e.into())
            }
        }
    }

    /// [`generate`](Self::generate) with the API key read from the settings store.
    pub async fn generate_with_saved_key(&mut self, keywords: &str) -> OperationOutcome {
        if !self.controls.is_enabled(Control::Generate) {
            return OperationOutcome::Busy;
        }
        match self.ctx.settings().api_key_override().await {
            Ok(key) => self.generate(keywords, key.as_deref()).await,
            Err(e) => {
                self.view.clear_alert();
                fail(&self.view, e)
            }
        }
    }

    // ========== Preview / editor ==========

    /// Convert manually entered markdown and show it as the current article.
    pub async fn convert_and_preview(&mut self, title: &str, markdown: &str) -> OperationOutcome {
        if !self.controls.is_enabled(Control::ManualPreview) {
            return OperationOutcome::Busy;
        }
        self.view.clear_alert();

        let (Some(title), Some(markdown)) = (non_blank(title), non_blank(markdown)) else {
            return reject(&self.view, ValidationError::TitleContentRequired);
        };

        let Some(_guard) =
            InFlight::acquire(&mut self.controls, &self.view, Control::ManualPreview)
        else {
            return OperationOutcome::Busy;
        };

        match convert(self.ctx.backend.as_ref(), markdown).await {
            Ok(html) => {
                show_record(
                    &mut self.state,
                    &self.view,
                    ArticleRecord::new(title, html, markdown),
                );
                OperationOutcome::Completed
            }
            Err(e) => fail(&self.view, e),
        }
    }

    /// Open the editor pre-filled with the current title and markdown.
    pub fn enter_editor(&mut self) -> OperationOutcome {
        self.view.clear_alert();
        if !self.state.begin_editing() {
            return reject(&self.view, ValidationError::NothingToEdit);
        }
        let record = self.state.record();
        self.view
            .fill_editor(&record.title, &record.markdown_content);
        self.view.show_view(Some(ViewMode::Editor));
        OperationOutcome::Completed
    }

    /// Re-convert the edited markdown and return to the preview.
    ///
    /// The edited text is stored as typed. On failure the editor stays open
    /// and the record is untouched.
    pub async fn update_preview(&mut self, title: &str, markdown: &str) -> OperationOutcome {
        if !self.controls.is_enabled(Control::UpdatePreview) {
            return OperationOutcome::Busy;
        }
        self.view.clear_alert();

        if is_blank(title) || is_blank(markdown) {
            return reject(&self.view, ValidationError::TitleContentRequired);
        }

        let Some(_guard) =
            InFlight::acquire(&mut self.controls, &self.view, Control::UpdatePreview)
        else {
            return OperationOutcome::Busy;
        };

        match convert(self.ctx.backend.as_ref(), markdown).await {
            Ok(html) => {
                show_record(
                    &mut self.state,
                    &self.view,
                    ArticleRecord::new(title, html, markdown),
                );
                OperationOutcome::Completed
            }
            Err(e) => fail(&self.view, e),
        }
    }

    /// Close the editor, discarding whatever was typed.
    pub fn cancel_edit(&mut self) -> OperationOutcome {
        if self.state.leave_editor() {
            self.view.show_view(Some(ViewMode::Preview));
        }
        OperationOutcome::Completed
    }

    // ========== Publishing ==========

    /// Publish finished HTML. View and phase are left as they are.
    pub async fn publish(
        &mut self,
        title: &str,
        html_content: &str,
        credentials: &PublishCredentials,
    ) -> OperationOutcome {
        if !self.controls.is_enabled(Control::Publish) {
            return OperationOutcome::Busy;
        }
        self.view.clear_alert();

        if is_blank(title) || is_blank(html_content) {
            return reject(&self.view, ValidationError::TitleContentRequired);
        }
        let missing = credentials.missing_fields();
        if !missing.is_empty() {
            return reject(&self.view, ValidationError::CredentialsMissing(missing));
        }

        let request = publish_request(title, html_content, credentials);
        let Some(_guard) = InFlight::acquire(&mut self.controls, &self.view, Control::Publish)
        else {
            return OperationOutcome::Busy;
        };

        match post(self.ctx.backend.as_ref(), &request).await {
            Ok(receipt) => {
                report_published(&self.view, title, &receipt);
                OperationOutcome::Completed
            }
            Err(e) => fail(&self.view, e),
        }
    }

    /// Publish the current record with credentials read from the settings store.
    pub async fn publish_current(&mut self) -> OperationOutcome {
        if !self.controls.is_enabled(Control::Publish) {
            return OperationOutcome::Busy;
        }
        let credentials = match self.ctx.settings().publish_credentials().await {
            Ok(credentials) => credentials,
            Err(e) => {
                self.view.clear_alert();
                return fail(&self.view, e);
            }
        };
        let record = self.state.record().clone();
        self.publish(&record.title, &record.html_content, &credentials)
            .await
    }

    /// Convert manual markdown, then publish it.
    ///
    /// Publishing is never attempted if conversion fails. On success the
    /// manual inputs are cleared; the current record is not touched.
    pub async fn publish_manual(
        &mut self,
        title: &str,
        markdown: &str,
        credentials: &PublishCredentials,
    ) -> OperationOutcome {
        if !self.controls.is_enabled(Control::ManualPublish) {
            return OperationOutcome::Busy;
        }
        self.view.clear_alert();

        let (Some(title), Some(markdown)) = (non_blank(title), non_blank(markdown)) else {
            return reject(&self.view, ValidationError::TitleContentRequired);
        };
        let missing = credentials.missing_fields();
        if !missing.is_empty() {
            return reject(&self.view, ValidationError::CredentialsMissing(missing));
        }

        let Some(_guard) =
            InFlight::acquire(&mut self.controls, &self.view, Control::ManualPublish)
        else {
            return OperationOutcome::Busy;
        };

        let html = match convert(self.ctx.backend.as_ref(), markdown).await {
            Ok(html) => html,
            Err(e) => return fail(&self.view, e),
        };

        let request = publish_request(title, &html, credentials);
        match post(self.ctx.backend.as_ref(), &request).await {
            Ok(receipt) => {
                report_published(&self.view, title, &receipt);
                self.view.clear_manual_inputs();
                OperationOutcome::Completed
            }
            Err(e) => fail(&self.view, e),
        }
    }

    /// [`publish_manual`](Self::publish_manual) with credentials read from the settings store.
    pub async fn publish_manual_with_saved_credentials(
        &mut self,
        title: &str,
        markdown: &str,
    ) -> OperationOutcome {
        if !self.controls.is_enabled(Control::ManualPublish) {
            return OperationOutcome::Busy;
        }
        match self.ctx.settings().publish_credentials().await {
            Ok(credentials) => self.publish_manual(title, markdown, &credentials).await,
            Err(e) => {
                self.view.clear_alert();
                fail(&self.view, e)
            }
        }
    }

    // ========== Settings ==========

    /// Stored settings for pre-filling the settings form.
    ///
    /// A store that cannot be read yields defaults and a storage alert.
    pub async fn load_settings(&self) -> AppSettings {
        match self.ctx.settings().load().await {
            Ok(settings) => settings,
            Err(e) => {
                fail(&self.view, e);
                AppSettings::default()
            }
        }
    }

    /// Persist settings and confirm.
    pub async fn save_settings(&mut self, settings: &AppSettings) -> OperationOutcome {
        if !self.controls.is_enabled(Control::SaveSettings) {
            return OperationOutcome::Busy;
        }
        self.view.clear_alert();

        let Some(_guard) =
            InFlight::acquire(&mut self.controls, &self.view, Control::SaveSettings)
        else {
            return OperationOutcome::Busy;
        };

        match self.ctx.settings().save(settings).await {
            Ok(()) => {
                self.view.show_alert(&Alert::success(Notice::SettingsSaved));
                OperationOutcome::Completed
            }
            Err(e) => fail(&self.view, e),
        }
    }
}

// ========== helpers ==========

async fn convert(backend: &dyn ArticleBackend, markdown: &str) -> CoreResult<String> {
    let request = ConvertMarkdownRequest {
        markdown_text: markdown.to_string(),
    };
    Ok(backend.convert_markdown(&request).await?.html_content)
}

async fn post(backend: &dyn ArticleBackend, request: &PublishRequest) -> CoreResult<PublishReceipt> {
    Ok(backend.post_to_wordpress(request).await?)
}

fn publish_request(title: &str, html: &str, credentials: &PublishCredentials) -> PublishRequest {
    PublishRequest {
        title: title.to_string(),
        content: html.to_string(),
        wp_url: credentials.wp_url.trim().to_string(),
        wp_username: credentials.wp_username.trim().to_string(),
        wp_password: credentials.wp_password.clone(),
    }
}

fn show_record<V: ArticleView + ?Sized>(state: &mut ArticleState, view: &V, record: ArticleRecord) {
    state.show(record);
    view.render_article(state.record());
    view.show_view(Some(ViewMode::Preview));
}

fn report_published<V: ArticleView + ?Sized>(view: &V, title: &str, receipt: &PublishReceipt) {
    match receipt.link() {
        Some(link) => log::info!("[controller] Published '{title}' at {link}"),
        None => log::info!("[controller] Published '{title}' (no link returned)"),
    }
    view.show_alert(&Alert::success(Notice::Published {
        title: title.to_string(),
        url: receipt.link().map(str::to_string),
    }));
}

fn reject<V: ArticleView + ?Sized>(view: &V, error: ValidationError) -> OperationOutcome {
    log::warn!("[controller] Rejected: {error}");
    view.show_alert(&CoreError::from(error).alert());
    OperationOutcome::Rejected
}

fn fail<V: ArticleView + ?Sized>(view: &V, error: CoreError) -> OperationOutcome {
    if error.is_expected() {
        log::warn!("[controller] {error}");
    } else {
        log::error!("[controller] {error}");
    }
    view.show_alert(&error.alert());
    OperationOutcome::Failed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        MockBackend, RecordingView, controller_with, network_error, service_error,
        stored_credentials,
    };
    use crate::types::{AlertLevel, ArticlePhase, CredentialField};
    use article_desk_client::Endpoint;

    fn creds() -> PublishCredentials {
        PublishCredentials::new("https://blog.example", "editor", "app-pass")
    }

    async fn controller_in_preview(
        backend: Arc<MockBackend>,
    ) -> ArticleController<RecordingView> {
        let mut controller = controller_with(backend, AppSettings::default());
        let outcome = controller.convert_and_preview("T", "**hi**").await;
        assert_eq!(outcome, OperationOutcome::Completed);
        controller
    }

    // ===== generate =====

    #[tokio::test]
    async fn generate_populates_record_and_shows_preview() {
        let backend = Arc::new(MockBackend::new());
        let mut controller = controller_with(backend.clone(), AppSettings::default());

        let outcome = controller.generate("  rust, tokio  ", None).await;

        assert_eq!(outcome, OperationOutcome::Completed);
        assert_eq!(controller.state().phase(), ArticlePhase::Preview);
        assert_eq!(controller.record(), &MockBackend::default_article());
        assert_eq!(controller.view().visible(), Some(ViewMode::Preview));
        assert_eq!(
            controller.view().rendered(),
            Some(MockBackend::default_article())
        );
        let request = backend.generate_requests().pop();
        assert_eq!(request.map(|r| r.keywords), Some("rust, tokio".to_string()));
    }

    #[tokio::test]
    async fn generate_with_blank_keywords_makes_no_call() {
        let backend = Arc::new(MockBackend::new());
        let mut controller = controller_with(backend.clone(), AppSettings::default());

        let outcome = controller.generate(" \t ", Some("sk-1")).await;

        assert_eq!(outcome, OperationOutcome::Rejected);
        assert!(backend.calls().is_empty());
        let alert = controller.view().alert_region();
        assert_eq!(
            alert.map(|a| (a.level, a.notice)),
            Some((AlertLevel::Warning, Notice::KeywordsRequired))
        );
        assert_eq!(controller.state().phase(), ArticlePhase::Empty);
    }

    #[tokio::test]
    async fn generate_disables_control_while_in_flight() {
        let backend = Arc::new(MockBackend::new());
        let mut controller = controller_with(backend, AppSettings::default());

        controller.generate("rust", None).await;

        assert_eq!(
            controller.view().control_history(),
            vec![
                (Control::Generate, ControlState::BUSY),
                (Control::Generate, ControlState::IDLE),
            ]
        );
        assert_eq!(
            controller.control_state(Control::Generate),
            ControlState::IDLE
        );
    }

    #[tokio::test]
    async fn generate_service_error_is_shown_verbatim() {
        let backend = Arc::new(MockBackend::new().with_generate(Err(service_error(
            Endpoint::GenerateArticle,
            Some("OpenAI API key is not configured."),
        ))));
        let mut controller = controller_with(backend, AppSettings::default());

        let outcome = controller.generate("rust", None).await;

        assert_eq!(outcome, OperationOutcome::Failed);
        assert_eq!(
            controller.view().alert_region().map(|a| a.notice),
            Some(Notice::ServiceError {
                endpoint: Endpoint::GenerateArticle,
                message: Some("OpenAI API key is not configured.".into()),
            })
        );
        assert_eq!(controller.state().phase(), ArticlePhase::Empty);
        assert_eq!(
            controller.control_state(Control::Generate),
            ControlState::IDLE
        );
    }

    #[tokio::test]
    async fn generate_transport_error_restores_previous_panel() {
        let backend = Arc::new(MockBackend::new());
        let mut controller = controller_in_preview(backend.clone()).await;
        let before = controller.record().clone();

        backend.set_generate(Err(network_error(Endpoint::GenerateArticle)));
        let outcome = controller.generate("rust", None).await;

        assert_eq!(outcome, OperationOutcome::Failed);
        assert_eq!(controller.record(), &before);
        assert_eq!(controller.view().visible(), Some(ViewMode::Preview));
        assert_eq!(
            controller.view().alert_region().map(|a| a.notice),
            Some(Notice::ConnectionFailed {
                endpoint: Some(Endpoint::GenerateArticle)
            })
        );
    }

    #[tokio::test]
    async fn generate_sends_api_key_override_trimmed() {
        let backend = Arc::new(MockBackend::new());
        let mut controller = controller_with(backend.clone(), AppSettings::default());

        controller.generate("rust", Some("  sk-abc ")).await;
        controller.generate("rust", Some("   ")).await;

        let keys: Vec<Option<String>> = backend
            .generate_requests()
            .into_iter()
            .map(|r| r.openai_api_key)
            .collect();
        assert_eq!(keys, vec![Some("sk-abc".to_string()), None]);
    }

    #[tokio::test]
    async fn generate_with_saved_key_reads_store() {
        let backend = Arc::new(MockBackend::new());
        let settings = AppSettings {
            openai_api_key: "sk-stored".into(),
            ..AppSettings::default()
        };
        let mut controller = controller_with(backend.clone(), settings);

        let outcome = controller.generate_with_saved_key("rust").await;

        assert_eq!(outcome, OperationOutcome::Completed);
        assert_eq!(
            backend
                .generate_requests()
                .pop()
                .and_then(|r| r.openai_api_key),
            Some("sk-stored".to_string())
        );
    }

    #[tokio::test]
    async fn disabled_generate_is_busy() {
        let backend = Arc::new(MockBackend::new());
        let mut controller = controller_with(backend.clone(), AppSettings::default());
        controller.set_control_enabled(Control::Generate, false);

        let outcome = controller.generate("rust", None).await;

        assert_eq!(outcome, OperationOutcome::Busy);
        assert!(backend.calls().is_empty());
        assert_eq!(controller.view().alert_region(), None);
    }

    // ===== convert_and_preview / editor =====

    #[tokio::test]
    async fn convert_and_preview_builds_record() {
        let backend = Arc::new(
            MockBackend::new().with_convert(Ok("<p><strong>hi</strong></p>".to_string())),
        );
        let mut controller = controller_with(backend.clone(), AppSettings::default());

        let outcome = controller.convert_and_preview("T", "**hi**").await;

        assert_eq!(outcome, OperationOutcome::Completed);
        assert_eq!(
            controller.record(),
            &ArticleRecord::new("T", "<p><strong>hi</strong></p>", "**hi**")
        );
        assert_eq!(controller.state().view_mode(), Some(ViewMode::Preview));
        assert_eq!(backend.convert_requests(), vec!["**hi**".to_string()]);
    }

    #[tokio::test]
    async fn convert_and_preview_requires_title_and_markdown() {
        let backend = Arc::new(MockBackend::new());
        let mut controller = controller_with(backend.clone(), AppSettings::default());

        assert_eq!(
            controller.convert_and_preview("", "**hi**").await,
            OperationOutcome::Rejected
        );
        assert_eq!(
            controller.convert_and_preview("T", "  ").await,
            OperationOutcome::Rejected
        );
        assert!(backend.calls().is_empty());
        assert_eq!(
            controller.view().alert_region().map(|a| a.notice),
            Some(Notice::TitleContentRequired)
        );
    }

    #[tokio::test]
    async fn enter_editor_copies_title_and_markdown_only() {
        let backend = Arc::new(MockBackend::new());
        let mut controller = controller_in_preview(backend).await;

        let outcome = controller.enter_editor();

        assert_eq!(outcome, OperationOutcome::Completed);
        assert_eq!(controller.state().phase(), ArticlePhase::Editing);
        assert_eq!(
            controller.view().editor_fields(),
            ("T".to_string(), "**hi**".to_string())
        );
        assert_eq!(controller.view().visible(), Some(ViewMode::Editor));
    }

    #[tokio::test]
    async fn enter_editor_without_article_is_rejected() {
        let backend = Arc::new(MockBackend::new());
        let mut controller = controller_with(backend, AppSettings::default());

        assert_eq!(controller.enter_editor(), OperationOutcome::Rejected);
        assert_eq!(controller.state().phase(), ArticlePhase::Empty);
        assert_eq!(
            controller.view().alert_region().map(|a| a.notice),
            Some(Notice::NothingToEdit)
        );
    }

    #[tokio::test]
    async fn update_preview_overwrites_record_and_returns_to_preview() {
        let backend = Arc::new(MockBackend::new());
        let mut controller = controller_in_preview(backend.clone()).await;
        controller.enter_editor();

        backend.set_convert(Ok("<h2>New</h2>".to_string()));
        let outcome = controller.update_preview("New title", "## New\n").await;

        assert_eq!(outcome, OperationOutcome::Completed);
        assert_eq!(
            controller.record(),
            &ArticleRecord::new("New title", "<h2>New</h2>", "## New\n")
        );
        assert_eq!(controller.state().phase(), ArticlePhase::Preview);
        assert_eq!(controller.view().visible(), Some(ViewMode::Preview));
    }

    #[tokio::test]
    async fn update_preview_failure_keeps_editor_and_record() {
        let backend = Arc::new(MockBackend::new());
        let mut controller = controller_in_preview(backend.clone()).await;
        controller.enter_editor();
        let before = controller.record().clone();

        backend.set_convert(Err(service_error(Endpoint::ConvertMarkdown, None)));
        let outcome = controller.update_preview("Other", "other").await;

        assert_eq!(outcome, OperationOutcome::Failed);
        assert_eq!(controller.record(), &before);
        assert_eq!(controller.state().phase(), ArticlePhase::Editing);
        assert_eq!(
            controller.control_state(Control::UpdatePreview),
            ControlState::IDLE
        );
    }

    #[tokio::test]
    async fn cancel_edit_never_mutates_record() {
        let backend = Arc::new(MockBackend::new());
        let mut controller = controller_in_preview(backend.clone()).await;
        let before = controller.record().clone();
        controller.enter_editor();

        let outcome = controller.cancel_edit();

        assert_eq!(outcome, OperationOutcome::Completed);
        assert_eq!(controller.record(), &before);
        assert_eq!(controller.state().phase(), ArticlePhase::Preview);
        assert_eq!(controller.view().visible(), Some(ViewMode::Preview));
        assert_eq!(backend.calls().len(), 1);
    }

    // ===== publish =====

    #[tokio::test]
    async fn publish_reports_title_and_link() {
        let backend = Arc::new(MockBackend::new().with_publish(Ok(PublishReceipt {
            url: Some("https://blog.example/?p=9".into()),
            message: None,
        })));
        let mut controller = controller_in_preview(backend.clone()).await;

        let outcome = controller.publish("T", "<p>x</p>", &creds()).await;

        assert_eq!(outcome, OperationOutcome::Completed);
        let alert = controller.view().alert_region();
        assert_eq!(
            alert.as_ref().map(|a| a.level),
            Some(AlertLevel::Success)
        );
        assert_eq!(
            alert.map(|a| a.notice),
            Some(Notice::Published {
                title: "T".into(),
                url: Some("https://blog.example/?p=9".into()),
            })
        );
        assert_eq!(controller.state().phase(), ArticlePhase::Preview);
        let request = backend.publish_requests().pop();
        assert_eq!(
            request.map(|r| (r.title, r.content, r.wp_username)),
            Some(("T".into(), "<p>x</p>".into(), "editor".into()))
        );
    }

    #[tokio::test]
    async fn publish_without_link_omits_it() {
        let backend = Arc::new(MockBackend::new().with_publish(Ok(PublishReceipt {
            url: Some(String::new()),
            message: Some("ok".into()),
        })));
        let mut controller = controller_with(backend, AppSettings::default());

        controller.publish("T", "<p>x</p>", &creds()).await;

        assert_eq!(
            controller.view().alert_region().map(|a| a.notice),
            Some(Notice::Published {
                title: "T".into(),
                url: None,
            })
        );
    }

    #[tokio::test]
    async fn publish_validation_messages_are_distinct() {
        let backend = Arc::new(MockBackend::new());
        let mut controller = controller_with(backend.clone(), AppSettings::default());

        controller.publish("", "<p>x</p>", &creds()).await;
        let missing_content = controller.view().alert_region().map(|a| a.notice);

        controller
            .publish("T", "<p>x</p>", &PublishCredentials::new("https://b", "", " "))
            .await;
        let missing_creds = controller.view().alert_region().map(|a| a.notice);

        assert_eq!(missing_content, Some(Notice::TitleContentRequired));
        assert_eq!(
            missing_creds,
            Some(Notice::CredentialsMissing {
                fields: vec![CredentialField::Username, CredentialField::Password]
            })
        );
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn publish_failure_restores_control() {
        let backend = Arc::new(
            MockBackend::new().with_publish(Err(network_error(Endpoint::PostToWordpress))),
        );
        let mut controller = controller_with(backend, AppSettings::default());

        let outcome = controller.publish("T", "<p>x</p>", &creds()).await;

        assert_eq!(outcome, OperationOutcome::Failed);
        assert_eq!(
            controller.view().control_history(),
            vec![
                (Control::Publish, ControlState::BUSY),
                (Control::Publish, ControlState::IDLE),
            ]
        );
    }

    #[tokio::test]
    async fn publish_current_uses_record_and_stored_credentials() {
        let backend = Arc::new(MockBackend::new());
        let mut controller =
            controller_with(backend.clone(), stored_credentials("https://blog.example"));
        controller.convert_and_preview("T", "body").await;

        let outcome = controller.publish_current().await;

        assert_eq!(outcome, OperationOutcome::Completed);
        let request = backend.publish_requests().pop();
        assert_eq!(
            request.map(|r| (r.title, r.content, r.wp_url)),
            Some((
                "T".into(),
                "<p>body</p>".into(),
                "https://blog.example".into()
            ))
        );
    }

    #[tokio::test]
    async fn publish_current_without_article_is_rejected() {
        let backend = Arc::new(MockBackend::new());
        let mut controller =
            controller_with(backend.clone(), stored_credentials("https://blog.example"));

        assert_eq!(
            controller.publish_current().await,
            OperationOutcome::Rejected
        );
        assert!(backend.calls().is_empty());
    }

    // ===== publish_manual =====

    #[tokio::test]
    async fn publish_manual_converts_then_posts_and_clears_inputs() {
        let backend = Arc::new(MockBackend::new());
        let mut controller = controller_with(backend.clone(), AppSettings::default());

        let outcome = controller.publish_manual(" T ", " body ", &creds()).await;

        assert_eq!(outcome, OperationOutcome::Completed);
        assert_eq!(
            backend.calls(),
            vec![Endpoint::ConvertMarkdown, Endpoint::PostToWordpress]
        );
        assert_eq!(
            backend.publish_requests().pop().map(|r| (r.title, r.content)),
            Some(("T".into(), "<p>body</p>".into()))
        );
        assert_eq!(controller.view().manual_clears(), 1);
        assert_eq!(controller.state().phase(), ArticlePhase::Empty);
    }

    #[tokio::test]
    async fn publish_manual_conversion_failure_skips_posting() {
        let backend = Arc::new(MockBackend::new().with_convert(Err(service_error(
            Endpoint::ConvertMarkdown,
            Some("bad markdown"),
        ))));
        let mut controller = controller_with(backend.clone(), AppSettings::default());

        let outcome = controller.publish_manual("T", "body", &creds()).await;

        assert_eq!(outcome, OperationOutcome::Failed);
        assert_eq!(backend.calls(), vec![Endpoint::ConvertMarkdown]);
        assert_eq!(
            controller.view().alert_region().map(|a| a.notice),
            Some(Notice::ServiceError {
                endpoint: Endpoint::ConvertMarkdown,
                message: Some("bad markdown".into()),
            })
        );
        assert_eq!(controller.view().manual_clears(), 0);
    }

    #[tokio::test]
    async fn publish_manual_posting_failure_surfaces_posting_error() {
        let backend = Arc::new(MockBackend::new().with_publish(Err(service_error(
            Endpoint::PostToWordpress,
            Some("Sorry, you are not allowed to create posts."),
        ))));
        let mut controller = controller_with(backend.clone(), AppSettings::default());

        let outcome = controller.publish_manual("T", "body", &creds()).await;

        assert_eq!(outcome, OperationOutcome::Failed);
        assert_eq!(
            controller.view().alert_region().map(|a| a.notice),
            Some(Notice::ServiceError {
                endpoint: Endpoint::PostToWordpress,
                message: Some("Sorry, you are not allowed to create posts.".into()),
            })
        );
        assert_eq!(controller.view().manual_clears(), 0);
        assert_eq!(
            controller.control_state(Control::ManualPublish),
            ControlState::IDLE
        );
    }

    #[tokio::test]
    async fn publish_manual_with_saved_credentials_checks_store() {
        let backend = Arc::new(MockBackend::new());
        let mut controller = controller_with(backend.clone(), AppSettings::default());

        let outcome = controller
            .publish_manual_with_saved_credentials("T", "body")
            .await;

        assert_eq!(outcome, OperationOutcome::Rejected);
        assert_eq!(
            controller.view().alert_region().map(|a| a.notice),
            Some(Notice::CredentialsMissing {
                fields: vec![
                    CredentialField::Url,
                    CredentialField::Username,
                    CredentialField::Password
                ]
            })
        );
        assert!(backend.calls().is_empty());
    }

    // ===== settings / alerts =====

    #[tokio::test]
    async fn save_then_load_settings() {
        let backend = Arc::new(MockBackend::new());
        let mut controller = controller_with(backend, AppSettings::default());
        let settings = AppSettings {
            openai_api_key: "sk-1".into(),
            wp_url: "https://blog.example".into(),
            wp_username: "editor".into(),
            wp_password: "pw".into(),
        };

        let outcome = controller.save_settings(&settings).await;

        assert_eq!(outcome, OperationOutcome::Completed);
        assert_eq!(
            controller.view().alert_region().map(|a| a.notice),
            Some(Notice::SettingsSaved)
        );
        assert_eq!(controller.load_settings().await, settings);
    }

    #[tokio::test]
    async fn alert_region_holds_only_latest_result() {
        let backend = Arc::new(MockBackend::new());
        let mut controller = controller_with(backend, AppSettings::default());

        controller.generate("", None).await;
        controller.generate("rust", None).await;

        assert_eq!(controller.view().alert_region(), None);
        assert_eq!(controller.view().alerts().len(), 1);
    }
}
