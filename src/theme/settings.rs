use std::fs;
use std::path::Path;

use super::parsing::{normalize_key, parse_page_size_list, strip_inline_comment};
use super::paths::resolve_settings_config_path;
use super::types::Settings;

/// What: Load user settings from `settings.conf`.
///
/// Inputs: none
///
/// Output:
/// - Parsed and normalized [`Settings`]; defaults when no file exists or it cannot be read.
pub fn settings() -> Settings {
    let Some(path) = resolve_settings_config_path() else {
        tracing::debug!("no settings.conf found; using defaults");
        return Settings::default();
    };
    settings_from_path(&path)
}

/// What: Load settings from a specific file.
///
/// Inputs:
/// - `path`: Settings file to read
///
/// Output:
/// - Parsed settings; defaults when the file cannot be read.
pub fn settings_from_path(path: &Path) -> Settings {
    match fs::read_to_string(path) {
        Ok(content) => {
            tracing::info!(path = %path.display(), "loaded settings");
            parse_settings(&content)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read settings; using defaults");
            Settings::default()
        }
    }
}

/// What: Parse `key = value` settings text.
///
/// Inputs:
/// - `content`: File contents
///
/// Output:
/// - Normalized [`Settings`] with defaults for absent or invalid keys.
///
/// Details:
/// - Blank lines and lines starting with `#` are skipped; inline `# comments` are stripped.
/// - Unknown keys and unparsable values are ignored (logged at debug).
#[must_use]
pub fn parse_settings(content: &str) -> Settings {
    let mut out = Settings::default();
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let Some((raw_key, val_raw)) = trimmed.split_once('=') else {
            continue;
        };
        let key = normalize_key(raw_key);
        let val = strip_inline_comment(val_raw);
        match key.as_str() {
            "catalog_url" | "api_url" => {
                if !val.is_empty() {
                    out.catalog_url = val.to_string();
                }
            }
            "page_size" | "rows_per_page" => match val.parse::<usize>() {
                Ok(v) if v > 0 => out.page_size = v,
                _ => tracing::debug!(value = val, "ignoring invalid page_size"),
            },
            "page_size_options" => {
                if let Some(list) = parse_page_size_list(val) {
                    out.page_size_options = list;
                } else {
                    tracing::debug!(value = val, "ignoring invalid page_size_options");
                }
            }
            "currency_prefix" => out.display.currency_prefix = val.to_string(),
            "placeholder_image" => {
                if !val.is_empty() {
                    out.display.placeholder_image = val.to_string();
                }
            }
            "page_label" => out.display.page_label = val.to_string(),
            "no_data_label" => {
                if !val.is_empty() {
                    out.display.no_data_label = val.to_string();
                }
            }
            _ => tracing::debug!(key = %key, "ignoring unknown settings key"),
        }
    }
    out.normalize();
    out
}
