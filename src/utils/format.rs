//! Format - Formatting Utilities

use chrono::{DateTime, Local, Utc};

/// Format a UTC datetime for display
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    let local: DateTime<Local> = dt.with_timezone(&Local);
    local.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Truncate a string to max length with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s[..max_len].to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}

/// Pad or cut a cell to a fixed display width
pub fn fit(s: &str, width: usize) -> String {
    let truncated = truncate(s, width);
    format!("{truncated:<width$}")
}
