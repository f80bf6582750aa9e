//! Command-line argument definition and processing.

use clap::Parser;

use crate::state::SortColumn;
use crate::theme::Settings;

/// product-dash - Browse a remote product catalog in the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "product-dash")]
#[command(version)]
#[command(about = "Browse a remote product catalog in the terminal", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Catalog endpoint returning a JSON array of products (overrides settings.conf)
    #[arg(long)]
    pub catalog_url: Option<String>,

    /// Rows per page on startup (overrides settings.conf)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub page_size: Option<u16>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Print one page as plain text and exit instead of starting the TUI
    #[arg(short, long)]
    pub print: bool,

    /// Title filter applied in print mode
    #[arg(short, long, requires = "print")]
    pub search: Option<String>,

    /// Sort column in print mode (title or price)
    #[arg(long, requires = "print", value_parser = parse_sort_column)]
    pub sort: Option<SortColumn>,

    /// Sort descending in print mode (use with --sort)
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Page number to print (1-based, clamped to the last page)
    #[arg(long, requires = "print", default_value_t = 1)]
    pub page: usize,
}

/// Parse a `--sort` value into a column.
fn parse_sort_column(s: &str) -> Result<SortColumn, String> {
    SortColumn::from_key(s).ok_or_else(|| format!("unknown sort column '{s}' (use title or price)"))
}

/// What: Determine the log level from command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides `--log-level`. `RUST_LOG`, when set, is honoured
///   by the subscriber before this value is consulted.
#[must_use]
pub fn determine_log_level(args: &Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

/// What: Apply command-line overrides on top of file settings.
///
/// Inputs:
/// - `args`: Parsed command-line arguments
/// - `settings`: Settings loaded from `settings.conf`
///
/// Output:
/// - Settings with overrides applied and selector options re-normalized.
#[must_use]
pub fn apply_overrides(args: &Args, mut settings: Settings) -> Settings {
    if let Some(url) = args.catalog_url.as_deref().map(str::trim)
        && !url.is_empty()
    {
        settings.catalog_url = url.to_string();
    }
    if let Some(n) = args.page_size {
        settings.page_size = usize::from(n);
    }
    settings.normalize();
    settings
}
