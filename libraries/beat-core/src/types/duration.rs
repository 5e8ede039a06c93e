//! Song duration parsing and clock formatting
//!
//! Songs carry their duration as a display string. The player needs seconds
//! for progress math, so the string is parsed on demand:
//!
//! - `"m:ss"`, `"mm:ss"` and `"h:mm:ss"` are clock notation
//! - a bare number (`"4"`, `"3.45"`) is decimal minutes

/// Parse a display duration into seconds
///
/// Returns `None` for empty, negative or malformed input.
pub fn parse_duration(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let seconds = if raw.contains(':') {
        parse_clock(raw)?
    } else {
        let minutes: f64 = raw.parse().ok()?;
        if minutes < 0.0 {
            return None;
        }
        minutes * 60.0
    };

    seconds.is_finite().then_some(seconds)
}

fn parse_clock(raw: &str) -> Option<f64> {
    let parts: Vec<&str> = raw.split(':').collect();
    if parts.len() > 3 {
        return None;
    }

    let mut total = 0.0;
    for (i, part) in parts.iter().enumerate() {
        let value: f64 = part.trim().parse().ok()?;
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        // Every field after the leading one is base 60
        if i > 0 && value >= 60.0 {
            return None;
        }
        total = total * 60.0 + value;
    }

    Some(total)
}

/// Format elapsed seconds as `m:ss`
///
/// Negative and non-finite input renders as `0:00`.
pub fn format_clock(seconds: f64) -> String {
    let secs = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", secs / 60, secs % 60)
}
