//! Abstractions the controller depends on

mod article_view;
mod settings_store;

pub use article_desk_client::ArticleBackend;
pub use article_view::ArticleView;
pub use settings_store::{InMemorySettingsStore, SettingsStore};
