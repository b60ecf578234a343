//! Article record and view-mode state

use serde::{Deserialize, Serialize};

use article_desk_client::GeneratedArticle;

/// The article being composed.
///
/// `html_content` is the rendering of `markdown_content` as of the last
/// conversion or generation call. Unconverted editor text never lands here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub title: String,
    pub html_content: String,
    pub markdown_content: String,
}

impl ArticleRecord {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        html_content: impl Into<String>,
        markdown_content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            html_content: html_content.into(),
            markdown_content: markdown_content.into(),
        }
    }
}

impl From<GeneratedArticle> for ArticleRecord {
    fn from(article: GeneratedArticle) -> Self {
        Self {
            title: article.title,
            html_content: article.html_content,
            markdown_content: article.markdown_content,
        }
    }
}

/// Which of the two mutually exclusive panels is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewMode {
    Preview,
    Editor,
}

/// Controller lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ArticlePhase {
    /// No article yet; both panels hidden.
    #[default]
    Empty,
    /// Record populated, preview shown.
    Preview,
    /// Record populated, editor shown.
    Editing,
}

/// The record together with its phase. Owned by exactly one controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleState {
    record: ArticleRecord,
    phase: ArticlePhase,
}

impl ArticleState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) -> &ArticleRecord {
        &self.record
    }

    pub fn phase(&self) -> ArticlePhase {
        self.phase
    }

    /// The visible panel; `None` while no article exists.
    pub fn view_mode(&self) -> Option<ViewMode> {
        match self.phase {
            ArticlePhase::Empty => None,
            ArticlePhase::Preview => Some(ViewMode::Preview),
            ArticlePhase::Editing => Some(ViewMode::Editor),
        }
    }

    pub fn has_article(&self) -> bool {
        self.phase != ArticlePhase::Empty
    }

    /// Replace the record and show it in the preview.
    pub(crate) fn show(&mut self, record: ArticleRecord) {
        self.record = record;
        self.phase = ArticlePhase::Preview;
    }

    /// Switch to the editor. Returns `false` when there is nothing to edit.
    pub(crate) fn begin_editing(&mut self) -> bool {
        if self.phase == ArticlePhase::Empty {
            return false;
        }
        self.phase = ArticlePhase::Editing;
        true
    }

    /// Leave the editor without touching the record. Returns whether the phase changed.
    pub(crate) fn leave_editor(&mut self) -> bool {
        if self.phase != ArticlePhase::Editing {
            return false;
        }
        self.phase = ArticlePhase::Preview;
        true
    }
}
