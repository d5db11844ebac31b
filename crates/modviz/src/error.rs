//! Error types for modviz operations.
//!
//! This module provides the main error type [`ModvizError`] which wraps
//! the failures that can occur while loading a model, building a diagram
//! and rendering it. Identifier collisions are not errors: colliding
//! declarations silently share one node.

use std::{io, ops::Range};

use thiserror::Error;

use modviz_core::model::ModelError;

use crate::export;

/// The main error type for modviz operations.
#[derive(Debug, Error)]
pub enum ModvizError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A model file could not be deserialized. `span` is the byte range
    /// in `src` the error points at, when known.
    #[error("Invalid model file: {message}")]
    ModelSyntax {
        message: String,
        span: Option<Range<usize>>,
        src: String,
    },

    #[error("Invalid model: {0}")]
    Model(#[from] ModelError),

    #[error("Module `{module}` is nested deeper than the limit of {limit} levels")]
    NestingTooDeep { module: String, limit: usize },

    #[error("Export error: {0}")]
    Export(#[from] export::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ModvizError {
    /// Create a new `ModelSyntax` error from a TOML error and its source.
    pub fn new_model_syntax_error(err: &toml::de::Error, src: impl Into<String>) -> Self {
        Self::ModelSyntax {
            message: err.message().to_string(),
            span: err.span(),
            src: src.into(),
        }
    }
}
