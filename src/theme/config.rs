//! First-run settings skeleton.

use std::fs;
use std::path::PathBuf;

use super::paths::config_dir;

/// Commented default `settings.conf` written on first run.
pub(crate) const SETTINGS_SKELETON_CONTENT: &str = "\
# product-dash settings
#
# Lines are `key = value`; `#` starts a comment.

# Endpoint returning the product catalog as a JSON array.
catalog_url = https://api.escuelajs.co/api/v1/products

# Rows per page on startup, and the choices offered by the selector.
page_size = 5
page_size_options = 5, 10, 20

# Display text.
currency_prefix = $
placeholder_image = https://via.placeholder.com/100
page_label = Page
no_data_label = No data found
";

/// What: Write the settings skeleton when no settings file exists yet.
///
/// Inputs: none
///
/// Output:
/// - `Some(path)` of the file written; `None` when a file already existed or writing failed.
///
/// Details:
/// - Never overwrites an existing file.
pub fn ensure_settings_file() -> Option<PathBuf> {
    if super::paths::resolve_settings_config_path().is_some() {
        return None;
    }
    let target = config_dir().join("settings.conf");
    match fs::write(&target, SETTINGS_SKELETON_CONTENT) {
        Ok(()) => {
            tracing::info!(path = %target.display(), "wrote default settings skeleton");
            Some(target)
        }
        Err(e) => {
            tracing::warn!(path = %target.display(), error = %e, "failed to write settings skeleton");
            None
        }
    }
}
