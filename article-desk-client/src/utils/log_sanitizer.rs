//! Log sanitization utilities
//!
//! Generated articles and backend error pages can be large; only a prefix of
//! them ever reaches the log.

/// Maximum number of bytes to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Truncate a string for safe logging.
///
/// Strings within the limit are returned unchanged. Longer ones are cut at the
/// last character boundary at or below `TRUNCATE_LIMIT` bytes and suffixed
/// with the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }

    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= TRUNCATE_LIMIT)
        .last()
        .unwrap_or(0);

    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}

/// Describe a secret for logging without revealing it.
pub fn describe_secret(secret: Option<&str>) -> &'static str {
    match secret {
        Some(s) if !s.trim().is_empty() => "<provided>",
        _ => "<none>",
    }
}
