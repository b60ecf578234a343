//! reqwest-backed [`ArticleBackend`]

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{BackendError, Result};
use crate::http_client::HttpUtils;
use crate::traits::ArticleBackend;
use crate::types::{
    ConvertMarkdownRequest, ConvertedMarkdown, Endpoint, GenerateArticleRequest,
    GeneratedArticle, PublishReceipt, PublishRequest,
};
use crate::utils::log_sanitizer::describe_secret;

/// Default backend root (the reference server listens on port 5000).
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";

/// Backend reached over HTTP with JSON bodies.
///
/// The client is built without a request timeout: a request that never
/// answers stays pending, matching the backend contract.
#[derive(Debug, Clone)]
pub struct HttpArticleBackend {
    client: Client,
    base_url: Url,
}

impl HttpArticleBackend {
    /// Create a backend client rooted at `base_url`.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| BackendError::ClientInit {
                detail: e.to_string(),
            })?;
        Self::with_client(client, base_url)
    }

    /// Create a backend client with a caller-supplied `reqwest::Client`.
    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        Ok(Self {
            client,
            base_url: normalize_base_url(base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for an endpoint, resolved under the base path.
    pub fn endpoint_url(&self, endpoint: Endpoint) -> Result<Url> {
        self.base_url
            .join(endpoint.path().trim_start_matches('/'))
            .map_err(|e| BackendError::InvalidUrl {
                url: self.base_url.to_string(),
                detail: e.to_string(),
            })
    }

    async fn post_json<B, T>(&self, endpoint: Endpoint, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.endpoint_url(endpoint)?;
        let request = self.client.post(url).json(body);
        let (status, text) = HttpUtils::execute_request(request, endpoint).await?;
        HttpUtils::parse_response(status, &text, endpoint)
    }
}

#[async_trait]
impl ArticleBackend for HttpArticleBackend {
    async fn generate_article(
        &self,
        request: &GenerateArticleRequest,
    ) -> Result<GeneratedArticle> {
        log::info!(
            "[backend] Generating article (keywords: {} chars, api key: {})",
            request.keywords.chars().count(),
            describe_secret(request.openai_api_key.as_deref())
        );
        self.post_json(Endpoint::GenerateArticle, request).await
    }

    async fn convert_markdown(
        &self,
        request: &ConvertMarkdownRequest,
    ) -> Result<ConvertedMarkdown> {
        log::debug!(
            "[backend] Converting {} bytes of markdown",
            request.markdown_text.len()
        );
        self.post_json(Endpoint::ConvertMarkdown, request).await
    }

    async fn post_to_wordpress(&self, request: &PublishRequest) -> Result<PublishReceipt> {
        log::info!(
            "[backend] Publishing '{}' to {} as {}",
            request.title,
            request.wp_url,
            request.wp_username
        );
        self.post_json(Endpoint::PostToWordpress, request).await
    }
}

/// Parse the base URL and make sure its path ends with `/`, so that endpoint
/// paths resolve beneath it instead of replacing its last segment.
fn normalize_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    let mut url = Url::parse(trimmed).map_err(|e| BackendError::InvalidUrl {
        url: trimmed.to_string(),
        detail: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(BackendError::InvalidUrl {
            url: trimmed.to_string(),
            detail: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
