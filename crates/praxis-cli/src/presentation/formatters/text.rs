use chrono::{DateTime, Utc};

pub fn truncate(text: &str, max_len: usize) -> String {
    let char_count = text.chars().count();

    if char_count <= max_len {
        text.to_string()
    } else if max_len <= 3 {
        text.chars().take(max_len).collect()
    } else {
        let truncated: String = text.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Pad by character count (not bytes), so accented titles line up.
pub fn pad_right(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - len))
    }
}

/// RFC3339 timestamp as a short calendar date ("2024-03-04"); unparsable
/// input is shown as-is.
pub fn format_date(ts: &str) -> String {
    match DateTime::parse_from_rfc3339(ts) {
        Ok(dt) => dt.with_timezone(&Utc).format("%Y-%m-%d").to_string(),
        Err(_) => ts.to_string(),
    }
}
