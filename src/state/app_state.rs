//! Terminal application state wrapping the pipeline's [`ViewState`].

use super::types::DisplayOptions;
use super::view_state::{DEFAULT_PAGE_SIZE, ViewState};

/// Page sizes offered by the selector when settings do not override them.
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 20];

/// Clickable rectangle as `(x, y, width, height)`.
pub type HitRect = Option<(u16, u16, u16, u16)>;

/// Central state container mutated by the event layer and read by the UI.
///
/// Pipeline data lives in [`AppState::view`]; the remaining fields only
/// describe presentation (labels, selector choices, hit-test rectangles).
#[derive(Debug, Clone)]
pub struct AppState {
    /// Dataset, query, sort, and pagination.
    pub view: ViewState,
    /// Choices offered by the page-size selector, ascending and non-empty.
    pub page_size_options: Vec<usize>,
    /// Labels and fallbacks used by the renderer.
    pub display: DisplayOptions,
    /// `true` once the startup catalog fetch resolved (successfully or not).
    pub catalog_loaded: bool,
    /// Clickable rectangle of the Title column header.
    pub title_header_rect: HitRect,
    /// Clickable rectangle of the Price column header.
    pub price_header_rect: HitRect,
    /// Clickable rectangle of the previous-page button.
    pub prev_button_rect: HitRect,
    /// Clickable rectangle of the next-page button.
    pub next_button_rect: HitRect,
    /// Clickable rectangle of the page-size selector.
    pub page_size_rect: HitRect,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            view: ViewState::new(DEFAULT_PAGE_SIZE),
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            display: DisplayOptions::default(),
            catalog_loaded: false,
            title_header_rect: None,
            price_header_rect: None,
            prev_button_rect: None,
            next_button_rect: None,
            page_size_rect: None,
        }
    }
}

impl AppState {
    /// What: Build the initial state from loaded settings.
    ///
    /// Inputs:
    /// - `settings`: Parsed settings (page size, selector options, labels)
    ///
    /// Output:
    /// - Empty dashboard waiting for the catalog
    #[must_use]
    pub fn from_settings(settings: &crate::theme::Settings) -> Self {
        Self {
            view: ViewState::new(settings.page_size),
            page_size_options: settings.page_size_options.clone(),
            display: settings.display.clone(),
            ..Self::default()
        }
    }

    /// What: Return the page size that follows (or precedes) the current one in the selector.
    ///
    /// Inputs:
    /// - `forward`: `true` to move to the next larger option, wrapping around
    ///
    /// Output:
    /// - The adjacent option; the first option when the current size is not listed
    #[must_use]
    pub fn adjacent_page_size(&self, forward: bool) -> usize {
        let opts = &self.page_size_options;
        if opts.is_empty() {
            return self.view.page_size;
        }
        let Some(pos) = opts.iter().position(|&o| o == self.view.page_size) else {
            return opts[0];
        };
        let next = if forward {
            (pos + 1) % opts.len()
        } else {
            (pos + opts.len() - 1) % opts.len()
        };
        opts[next]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Page-size selector cycles through options in both directions
    ///
    /// - Input: Options 5/10/20 starting at 5
    /// - Output: forward → 10; backward → 20 (wrap)
    fn adjacent_page_size_wraps_both_ways() {
        let app = AppState::default();
        assert_eq!(app.adjacent_page_size(true), 10);
        assert_eq!(app.adjacent_page_size(false), 20);
    }

    #[test]
    /// What: A page size missing from the options snaps to the first option
    ///
    /// - Input: page_size 7 with options 5/10/20
    /// - Output: 5
    fn adjacent_page_size_unknown_current_snaps_to_first() {
        let mut app = AppState::default();
        app.view.page_size = 7;
        assert_eq!(app.adjacent_page_size(true), 5);
    }
}
