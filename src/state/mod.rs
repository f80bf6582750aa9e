//! Core application state types for the product dashboard.
//!
//! This module defines the catalog data model, the sort configuration, the
//! pipeline-owned [`ViewState`], and the [`AppState`] container mutated by the
//! event layer and read by the UI.

pub mod app_state;
pub mod types;
pub mod view_state;

pub use app_state::{AppState, DEFAULT_PAGE_SIZE_OPTIONS, HitRect};
pub use types::{Category, DisplayOptions, Product, SortColumn, SortState};
pub use view_state::{DEFAULT_PAGE_SIZE, ViewState};
