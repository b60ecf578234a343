use async_trait::async_trait;

use crate::error::Result;
use crate::types::{
    ConvertMarkdownRequest, ConvertedMarkdown, GenerateArticleRequest, GeneratedArticle,
    PublishReceipt, PublishRequest,
};

/// The generation / conversion / publishing backend.
///
/// Implementations perform exactly one round-trip per call: no retry and no
/// timeout beyond what the transport itself imposes.
#[async_trait]
pub trait ArticleBackend: Send + Sync {
    /// Generate an article from keywords.
    async fn generate_article(&self, request: &GenerateArticleRequest)
    -> Result<GeneratedArticle>;

    /// Render markdown into HTML.
    async fn convert_markdown(&self, request: &ConvertMarkdownRequest)
    -> Result<ConvertedMarkdown>;

    /// Publish a finished article to the remote site.
    async fn post_to_wordpress(&self, request: &PublishRequest) -> Result<PublishReceipt>;
}
