//! # article-desk-client
//!
//! Client for the Article Desk backend: article generation, markdown
//! conversion and WordPress publishing, each a single JSON `POST`.
//!
//! | Endpoint | Request | Success body |
//! |----------|---------|--------------|
//! | `/generate-article` | `{keywords, openai_api_key}` | `{title, html_content, markdown_content}` |
//! | `/convert-markdown` | `{markdown_text}` | `{html_content}` |
//! | `/post-to-wordpress` | `{title, content, wp_url, wp_username, wp_password}` | `{url}` |
//!
//! Every failure response is `{error}` with a non-2xx status.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use article_desk_client::{ArticleBackend, ConvertMarkdownRequest, HttpArticleBackend};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = HttpArticleBackend::new("http://127.0.0.1:5000")?;
//!     let converted = backend
//!         .convert_markdown(&ConvertMarkdownRequest {
//!             markdown_text: "**hi**".to_string(),
//!         })
//!         .await?;
//!     println!("{}", converted.html_content);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All calls return [`BackendError`]. [`BackendError::Service`] carries the
//! backend's own message; [`BackendError::is_transport`] identifies failures
//! where no usable answer arrived.

mod backend;
mod error;
mod http_client;
mod traits;
mod types;
mod utils;

pub use backend::{DEFAULT_BACKEND_URL, HttpArticleBackend};
pub use error::{BackendError, Result};
pub use http_client::HttpUtils;
pub use traits::ArticleBackend;
pub use types::{
    ConvertMarkdownRequest, ConvertedMarkdown, Endpoint, GenerateArticleRequest,
    GeneratedArticle, PublishReceipt, PublishRequest,
};
pub use utils::log_sanitizer::truncate_for_log;
