//! 焦点状态定义

/// 可获得焦点的输入框
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusField {
    /// 关键词
    #[default]
    Keywords,
    /// 手动投稿：标题
    ManualTitle,
    /// 手动投稿：正文
    ManualContent,
    /// 编辑器：标题
    EditorTitle,
    /// 编辑器：Markdown
    EditorMarkdown,
}

impl FocusField {
    /// Tab 顺序；编辑器关闭时跳过编辑器字段
    fn ring(editor_open: bool) -> &'static [FocusField] {
        if editor_open {
            &[
                FocusField::Keywords,
                FocusField::ManualTitle,
                FocusField::ManualContent,
                FocusField::EditorTitle,
                FocusField::EditorMarkdown,
            ]
        } else {
            &[
                FocusField::Keywords,
                FocusField::ManualTitle,
                FocusField::ManualContent,
            ]
        }
    }

    /// 下一个输入框
    #[must_use]
    pub fn next(self, editor_open: bool) -> Self {
        let ring = Self::ring(editor_open);
        let pos = ring.iter().position(|f| *f == self).unwrap_or(0);
        ring[(pos + 1) % ring.len()]
    }

    /// 上一个输入框
    #[must_use]
    pub fn prev(self, editor_open: bool) -> Self {
        let ring = Self::ring(editor_open);
        let pos = ring.iter().position(|f| *f == self).unwrap_or(0);
        ring[(pos + ring.len() - 1) % ring.len()]
    }

    /// 是否属于编辑器
    pub fn is_editor(self) -> bool {
        matches!(self, FocusField::EditorTitle | FocusField::EditorMarkdown)
    }

    /// 是否属于手动投稿面板
    pub fn is_manual(self) -> bool {
        matches!(self, FocusField::ManualTitle | FocusField::ManualContent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_skips_editor_when_closed() {
        assert_eq!(FocusField::ManualContent.next(false), FocusField::Keywords);
        assert_eq!(FocusField::Keywords.prev(false), FocusField::ManualContent);
    }

    #[test]
    fn ring_includes_editor_when_open() {
        assert_eq!(FocusField::ManualContent.next(true), FocusField::EditorTitle);
        assert_eq!(FocusField::EditorMarkdown.next(true), FocusField::Keywords);
        assert_eq!(FocusField::Keywords.prev(true), FocusField::EditorMarkdown);
    }

    #[test]
    fn stale_editor_focus_restarts_ring() {
        assert_eq!(FocusField::EditorTitle.next(false), FocusField::ManualTitle);
    }
}
