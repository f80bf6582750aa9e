use ratatui::style::Color;

use crate::state::{DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_OPTIONS, DisplayOptions};

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind panels.
    pub mantle: Color,
    /// Subtle surface color for component backgrounds (level 1).
    pub surface1: Color,
    /// Subtle surface color for component backgrounds (level 2).
    pub surface2: Color,
    /// Muted overlay line/border color (primary).
    pub overlay1: Color,
    /// Muted overlay line/border color (secondary).
    pub overlay2: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Accent color commonly used for interactive highlights.
    pub sapphire: Color,
    /// Accent color for emphasized headings.
    pub mauve: Color,
    /// Success/positive state color.
    pub green: Color,
    /// Warning/attention state color.
    pub yellow: Color,
    /// Accent color for subtle emphasis and borders.
    pub lavender: Color,
}

/// User-configurable application settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Endpoint returning the product catalog as a JSON array.
    pub catalog_url: String,
    /// Rows per page on startup.
    pub page_size: usize,
    /// Choices offered by the page-size selector (ascending, deduplicated).
    pub page_size_options: Vec<usize>,
    /// Labels, currency prefix, and placeholder image.
    pub display: DisplayOptions,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_url: crate::sources::DEFAULT_CATALOG_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            display: DisplayOptions::default(),
        }
    }
}

impl Settings {
    /// What: Make page-size settings self-consistent.
    ///
    /// Inputs:
    /// - `self`: Settings as parsed
    ///
    /// Output:
    /// - Options sorted and deduplicated (defaults when empty); the startup page
    ///   size added to the options when missing.
    pub fn normalize(&mut self) {
        if self.page_size_options.is_empty() {
            self.page_size_options = DEFAULT_PAGE_SIZE_OPTIONS.to_vec();
        }
        self.page_size = self.page_size.max(1);
        if !self.page_size_options.contains(&self.page_size) {
            self.page_size_options.push(self.page_size);
        }
        self.page_size_options.sort_unstable();
        self.page_size_options.dedup();
    }
}
