//! Command-line argument definitions for the modviz CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, output format,
//! configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the modviz diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input model file (TOML)
    #[arg(help = "Path to the input model file")]
    pub input: String,

    /// Path to the output file
    #[arg(short, long, default_value = "out.png")]
    pub output: String,

    /// Output format (png, svg, pdf, dot). Defaults to the output file
    /// extension, then to the configured format
    #[arg(short, long)]
    pub format: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
