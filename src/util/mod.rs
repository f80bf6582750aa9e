//! Small formatting helpers shared by the UI, print mode, and logging.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// What: Format a price with a currency prefix.
///
/// Inputs:
/// - `prefix`: Currency marker such as `$`
/// - `price`: Non-negative price
///
/// Output:
/// - `"{prefix}{price}"`; whole prices print without decimals (`$30`, `$12.5`).
#[must_use]
pub fn format_price(prefix: &str, price: f64) -> String {
    format!("{prefix}{price}")
}

/// What: Shorten text to fit a display width, appending an ellipsis when cut.
///
/// Inputs:
/// - `s`: Text to fit
/// - `max_cols`: Available terminal columns
///
/// Output:
/// - `s` unchanged when it fits; otherwise a prefix plus `…` no wider than `max_cols`.
///
/// Details:
/// - Width is measured in terminal cells, so wide glyphs count double.
/// - Line breaks are flattened to spaces first; table cells are single-line.
#[must_use]
pub fn truncate_to_width(s: &str, max_cols: usize) -> String {
    let flat: String = s
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    if UnicodeWidthStr::width(flat.as_str()) <= max_cols {
        return flat;
    }
    if max_cols == 0 {
        return String::new();
    }
    let budget = max_cols - 1;
    let mut out = String::new();
    let mut used = 0usize;
    for ch in flat.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// What: Current local time formatted for log lines.
///
/// Inputs: none
///
/// Output:
/// - `YYYY-MM-DD-T HH:MM:SS` in local time.
#[must_use]
pub fn log_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S").to_string()
}
