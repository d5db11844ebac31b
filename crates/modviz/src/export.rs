//! Export functionality for modviz diagrams.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! writing a built diagram graph to an output file. It is the final stage in
//! the modviz pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Object Model
//!     ↓ diagram
//! Digraph
//!     ↓ export (this module)
//! Output File
//! ```
//!
//! # Available Backends
//!
//! - [`dot::DotExporter`]: writes DOT source
//! - [`graphviz::GraphvizExporter`]: pipes DOT source through the Graphviz
//!   `dot` renderer
//!
//! # Error Handling
//!
//! Export operations return [`Error`]. [`Error`] converts into
//! [`ModvizError::Export`] at the crate boundary.
//!
//! [`ModvizError::Export`]: crate::ModvizError::Export

pub mod dot;
pub mod graphviz;

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::graph::Digraph;

/// Abstraction for diagram export backends.
pub trait Exporter {
    /// Exports a diagram graph to the backend's output.
    ///
    /// # Arguments
    ///
    /// * `graph` - The built diagram.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the renderer cannot be run or fails, or if
    /// writing the output fails.
    fn export_graph(&mut self, graph: &Digraph) -> Result<(), Error>;
}

/// Errors that can occur during diagram export.
#[derive(Debug, Error)]
pub enum Error {
    /// The renderer executable could not be started.
    #[error("Graphviz renderer `{}` not found", program.display())]
    RendererNotFound { program: PathBuf },

    /// The renderer ran and reported a failure.
    #[error("Graphviz renderer failed ({}): {stderr}", exit_description(*status))]
    Render { status: Option<i32>, stderr: String },

    /// An I/O error encountered while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

fn exit_description(status: Option<i32>) -> String {
    match status {
        Some(code) => format!("exit status {code}"),
        None => "terminated by signal".to_string(),
    }
}
