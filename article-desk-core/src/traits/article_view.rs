//! Rendering surface Trait

use crate::types::{Alert, ArticleRecord, Control, ControlState, ViewMode};

/// What the controller needs from a front end.
///
/// All methods are synchronous and take `&self`; implementations hold their
/// display state behind interior mutability. They are called from the one UI
/// thread only, so no `Send`/`Sync` bound is imposed.
///
/// Implementations:
/// - TUI: `PageHandle` (ratatui page model)
/// - Tests: `RecordingView`
pub trait ArticleView {
    /// Replace whatever alert is showing.
    fn show_alert(&self, alert: &Alert);

    /// Remove the current alert, if any.
    fn clear_alert(&self);

    /// Put the record's title and HTML into the preview panel.
    fn render_article(&self, record: &ArticleRecord);

    /// Show one panel and hide the other; `None` hides both.
    fn show_view(&self, mode: Option<ViewMode>);

    /// Pre-fill the editor fields.
    fn fill_editor(&self, title: &str, markdown: &str);

    /// Empty the manual title/content inputs.
    fn clear_manual_inputs(&self);

    /// Reflect a control's enabled / busy state.
    fn set_control(&self, control: Control, state: ControlState);
}
