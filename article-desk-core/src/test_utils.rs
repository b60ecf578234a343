//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use article_desk_client::{
    BackendError, ConvertMarkdownRequest, ConvertedMarkdown, Endpoint, GenerateArticleRequest,
    GeneratedArticle, PublishReceipt, PublishRequest,
};

use crate::services::{ArticleController, ServiceContext};
use crate::traits::{ArticleBackend, ArticleView, InMemorySettingsStore};
use crate::types::{Alert, AppSettings, ArticleRecord, Control, ControlState, ViewMode};

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

// ===== MockBackend =====

/// Backend with configurable replies that logs every call.
///
/// Unless overridden, conversion wraps the markdown in `<p>…</p>`.
pub struct MockBackend {
    generate_reply: Mutex<Result<GeneratedArticle, BackendError>>,
    convert_reply: Mutex<Option<Result<String, BackendError>>>,
    publish_reply: Mutex<Result<PublishReceipt, BackendError>>,
    calls: Mutex<Vec<Endpoint>>,
    generate_requests: Mutex<Vec<GenerateArticleRequest>>,
    convert_requests: Mutex<Vec<String>>,
    publish_requests: Mutex<Vec<PublishRequest>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            generate_reply: Mutex::new(Ok(Self::default_generated())),
            convert_reply: Mutex::new(None),
            publish_reply: Mutex::new(Ok(PublishReceipt {
                url: Some("https://blog.example/?p=1".into()),
                message: Some("Article posted successfully!".into()),
            })),
            calls: Mutex::new(Vec::new()),
            generate_requests: Mutex::new(Vec::new()),
            convert_requests: Mutex::new(Vec::new()),
            publish_requests: Mutex::new(Vec::new()),
        }
    }

    fn default_generated() -> GeneratedArticle {
        GeneratedArticle {
            title: "Generated".into(),
            html_content: "<h2>Intro</h2>".into(),
            markdown_content: "## Intro".into(),
        }
    }

    pub fn default_article() -> ArticleRecord {
        Self::default_generated().into()
    }

    pub fn with_generate(self, reply: Result<GeneratedArticle, BackendError>) -> Self {
        self.set_generate(reply);
        self
    }

    pub fn with_convert(self, reply: Result<String, BackendError>) -> Self {
        self.set_convert(reply);
        self
    }

    pub fn with_publish(self, reply: Result<PublishReceipt, BackendError>) -> Self {
        self.set_publish(reply);
        self
    }

    pub fn set_generate(&self, reply: Result<GeneratedArticle, BackendError>) {
        *lock(&self.generate_reply) = reply;
    }

    pub fn set_convert(&self, reply: Result<String, BackendError>) {
        *lock(&self.convert_reply) = Some(reply);
    }

    pub fn set_publish(&self, reply: Result<PublishReceipt, BackendError>) {
        *lock(&self.publish_reply) = reply;
    }

    pub fn calls(&self) -> Vec<Endpoint> {
        lock(&self.calls).clone()
    }

    pub fn generate_requests(&self) -> Vec<GenerateArticleRequest> {
        lock(&self.generate_requests).clone()
    }

    pub fn convert_requests(&self) -> Vec<String> {
        lock(&self.convert_requests).clone()
    }

    pub fn publish_requests(&self) -> Vec<PublishRequest> {
        lock(&self.publish_requests).clone()
    }
}

#[async_trait]
impl ArticleBackend for MockBackend {
    async fn generate_article(
        &self,
        request: &GenerateArticleRequest,
    ) -> Result<GeneratedArticle, BackendError> {
        lock(&self.calls).push(Endpoint::GenerateArticle);
        lock(&self.generate_requests).push(request.clone());
        lock(&self.generate_reply).clone()
    }

    async fn convert_markdown(
        &self,
        request: &ConvertMarkdownRequest,
    ) -> Result<ConvertedMarkdown, BackendError> {
        lock(&self.calls).push(Endpoint::ConvertMarkdown);
        lock(&self.convert_requests).push(request.markdown_text.clone());
        let reply = lock(&self.convert_reply)
            .clone()
            .unwrap_or_else(|| Ok(format!("<p>{}</p>", request.markdown_text)));
        reply.map(|html_content| ConvertedMarkdown { html_content })
    }

    async fn post_to_wordpress(
        &self,
        request: &PublishRequest,
    ) -> Result<PublishReceipt, BackendError> {
        lock(&self.calls).push(Endpoint::PostToWordpress);
        lock(&self.publish_requests).push(request.clone());
        lock(&self.publish_reply).clone()
    }
}

pub fn service_error(endpoint: Endpoint, message: Option<&str>) -> BackendError {
    BackendError::Service {
        endpoint,
        status: 500,
        message: message.map(str::to_string),
    }
}

pub fn network_error(endpoint: Endpoint) -> BackendError {
    BackendError::Network {
        endpoint,
        detail: "connection refused".into(),
    }
}

// ===== RecordingView =====

/// View that remembers everything the controller asked it to show.
#[derive(Default)]
pub struct RecordingView {
    alert: RefCell<Option<Alert>>,
    alerts: RefCell<Vec<Alert>>,
    rendered: RefCell<Option<ArticleRecord>>,
    visible: Cell<Option<ViewMode>>,
    editor: RefCell<(String, String)>,
    manual_clears: Cell<usize>,
    controls: RefCell<HashMap<Control, ControlState>>,
    control_history: RefCell<Vec<(Control, ControlState)>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// What the alert region shows right now.
    pub fn alert_region(&self) -> Option<Alert> {
        self.alert.borrow().clone()
    }

    /// Every alert ever shown.
    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts.borrow().clone()
    }

    pub fn rendered(&self) -> Option<ArticleRecord> {
        self.rendered.borrow().clone()
    }

    pub fn visible(&self) -> Option<ViewMode> {
        self.visible.get()
    }

    pub fn editor_fields(&self) -> (String, String) {
        self.editor.borrow().clone()
    }

    pub fn manual_clears(&self) -> usize {
        self.manual_clears.get()
    }

    pub fn control(&self, control: Control) -> ControlState {
        self.controls
            .borrow()
            .get(&control)
            .copied()
            .unwrap_or_default()
    }

    pub fn control_history(&self) -> Vec<(Control, ControlState)> {
        self.control_history.borrow().clone()
    }
}

impl ArticleView for RecordingView {
    fn show_alert(&self, alert: &Alert) {
        *self.alert.borrow_mut() = Some(alert.clone());
        self.alerts.borrow_mut().push(alert.clone());
    }

    fn clear_alert(&self) {
        *self.alert.borrow_mut() = None;
    }

    fn render_article(&self, record: &ArticleRecord) {
        *self.rendered.borrow_mut() = Some(record.clone());
    }

    fn show_view(&self, mode: Option<ViewMode>) {
        self.visible.set(mode);
    }

    fn fill_editor(&self, title: &str, markdown: &str) {
        *self.editor.borrow_mut() = (title.to_string(), markdown.to_string());
    }

    fn clear_manual_inputs(&self) {
        self.manual_clears.set(self.manual_clears.get() + 1);
    }

    fn set_control(&self, control: Control, state: ControlState) {
        self.controls.borrow_mut().insert(control, state);
        self.control_history.borrow_mut().push((control, state));
    }
}

// ===== 工厂方法 =====

/// Controller over `backend`, a fresh recording view and an in-memory store.
pub fn controller_with(
    backend: Arc<MockBackend>,
    settings: AppSettings,
) -> ArticleController<RecordingView> {
    let ctx = ServiceContext::new(
        backend,
        Arc::new(InMemorySettingsStore::with_settings(settings)),
    );
    ArticleController::new(Arc::new(ctx), RecordingView::new())
}

/// Settings with a complete set of publishing credentials for `wp_url`.
pub fn stored_credentials(wp_url: &str) -> AppSettings {
    AppSettings {
        wp_url: wp_url.into(),
        wp_username: "editor".into(),
        wp_password: "app-pass".into(),
        ..AppSettings::default()
    }
}
