//! Input text helpers

/// The trimmed text, or `None` when it is empty or whitespace-only.
pub fn non_blank(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

pub fn is_blank(s: &str) -> bool {
    non_blank(s).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\n"));
        assert!(!is_blank(" x "));
        assert_eq!(non_blank("  rust  "), Some("rust"));
        assert_eq!(non_blank("\u{3000}"), None);
    }
}
