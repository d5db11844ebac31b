//! Modviz CLI library
//!
//! This module contains the core CLI logic for the modviz diagram tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;
pub use error_adapter::{ErrorAdapter, to_reportable};

use std::{fs, path::Path};

use log::{debug, info};

use modviz::{
    DiagramBuilder, ModvizError,
    config::{AppConfig, OutputFormat},
};

/// Run the modviz CLI application
///
/// This function loads the model file, builds its class diagram and
/// renders it to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `ModvizError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Model file errors
/// - Diagram construction errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), ModvizError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing diagram"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;
    let format = select_format(args, &app_config)?;
    debug!(format:%; "Output format selected");
    let render = app_config.render().clone().with_format(format);
    let app_config = app_config.with_render(render);

    // Read input file
    let source = fs::read_to_string(&args.input)?;

    let builder = DiagramBuilder::new(app_config);
    let modules = builder.load_model(&source)?;
    builder.render_to_file(&modules, &args.output)?;

    info!(output_file = args.output; "Diagram exported successfully");

    Ok(())
}

/// Pick the output format: `--format` first, then a recognized output
/// file extension, then the configured format.
fn select_format(args: &Args, config: &AppConfig) -> Result<OutputFormat, ModvizError> {
    if let Some(format) = &args.format {
        return format.parse().map_err(ModvizError::Config);
    }

    let from_extension = Path::new(&args.output)
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| ext.parse().ok());

    Ok(from_extension.unwrap_or(config.render().format()))
}
