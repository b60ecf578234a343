//! Wire types for the backend endpoints.

use serde::{Deserialize, Serialize};

/// The three backend endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    /// `POST /generate-article`
    GenerateArticle,
    /// `POST /convert-markdown`
    ConvertMarkdown,
    /// `POST /post-to-wordpress`
    PostToWordpress,
}

impl Endpoint {
    /// Path relative to the backend root, with a leading slash.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::GenerateArticle => "/generate-article",
            Self::ConvertMarkdown => "/convert-markdown",
            Self::PostToWordpress => "/post-to-wordpress",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

// ============ /generate-article ============

/// Request body for `/generate-article`.
///
/// `openai_api_key` is serialized as `null` when absent so the backend can
/// fall back to its own key.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct GenerateArticleRequest {
    pub keywords: String,
    pub openai_api_key: Option<String>,
}

impl std::fmt::Debug for GenerateArticleRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerateArticleRequest")
            .field("keywords", &self.keywords)
            .field(
                "openai_api_key",
                &self.openai_api_key.as_ref().map(|_| "***"),
            )
            .finish()
    }
}

/// Success body of `/generate-article`.
///
/// This is the only accepted shape; a body without all three fields is a
/// parse error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneratedArticle {
    pub title: String,
    pub html_content: String,
    pub markdown_content: String,
}

// ============ /convert-markdown ============

/// Request body for `/convert-markdown`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertMarkdownRequest {
    pub markdown_text: String,
}

/// Success body of `/convert-markdown`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConvertedMarkdown {
    pub html_content: String,
}

// ============ /post-to-wordpress ============

/// Request body for `/post-to-wordpress`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct PublishRequest {
    pub title: String,
    /// Final HTML to publish.
    pub content: String,
    pub wp_url: String,
    pub wp_username: String,
    pub wp_password: String,
}

impl std::fmt::Debug for PublishRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublishRequest")
            .field("title", &self.title)
            .field("content_len", &self.content.len())
            .field("wp_url", &self.wp_url)
            .field("wp_username", &self.wp_username)
            .field("wp_password", &"***")
            .finish()
    }
}

/// Success body of `/post-to-wordpress`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PublishReceipt {
    /// Link to the published post. The backend sends `""` when the site did not return one.
    #[serde(default)]
    pub url: Option<String>,
    /// Informational message from the backend.
    #[serde(default)]
    pub message: Option<String>,
}

impl PublishReceipt {
    /// The destination link, if the backend returned a non-empty one.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }
}

// ============ error body ============

/// Body of every non-2xx response.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
