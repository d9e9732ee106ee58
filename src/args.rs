//! Command-line argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// tradui - a fast, friendly TUI for translating text between languages
#[derive(Parser, Debug)]
#[command(name = "tradui")]
#[command(version)]
#[command(about = "A fast, friendly TUI for translating text between languages", long_about = None)]
pub struct Args {
    /// Source language code (e.g. "en", "de"); defaults to auto-detection
    #[arg(short = 'f', long)]
    pub from: Option<String>,

    /// Target language code (e.g. "fr"); defaults to English
    #[arg(short = 't', long)]
    pub to: Option<String>,

    /// Load a plain-text document into the input buffer at startup
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
