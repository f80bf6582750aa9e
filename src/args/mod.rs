//! Command-line argument parsing and handling.

pub mod definition;
pub mod print;

pub use definition::{Args, apply_overrides, determine_log_level};
pub use print::handle_print;
