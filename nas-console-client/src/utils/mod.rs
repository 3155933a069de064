//! Utility modules.

/// Log sanitization utilities to prevent secrets from reaching log files.
pub mod log_sanitizer;
