//! Utility modules.

/// Keeps response bodies and user text out of logs in full.
pub mod log_sanitizer;
