//! Error adapter for converting ModvizError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.
//!
//! Malformed model files carry their source and the byte range the TOML
//! reader pointed at, and render with a labeled snippet. Every other error
//! renders as a plain message with a code and, where one applies, a hint.

use std::{fmt, ops::Range};

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use modviz::{ExportError, ModvizError};

/// Adapter for a model file syntax error.
///
/// This adapter wraps the pieces of a [`ModvizError::ModelSyntax`] and
/// implements [`MietteDiagnostic`] so the offending line is shown.
pub struct ModelSyntaxAdapter<'a> {
    message: &'a str,
    span: Option<Range<usize>>,
    src: &'a str,
}

impl<'a> ModelSyntaxAdapter<'a> {
    /// Create a new syntax error adapter.
    pub fn new(message: &'a str, span: Option<Range<usize>>, src: &'a str) -> Self {
        Self { message, span, src }
    }
}

impl fmt::Debug for ModelSyntaxAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelSyntaxAdapter")
            .field("message", &self.message)
            .field("span", &self.span)
            .finish()
    }
}

impl fmt::Display for ModelSyntaxAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid model file: {}", self.message.trim_end())
    }
}

impl std::error::Error for ModelSyntaxAdapter<'_> {}

impl MietteDiagnostic for ModelSyntaxAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("modviz::model_syntax"))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.span.clone()?;
        Some(Box::new(std::iter::once(LabeledSpan::new_primary_with_span(
            Some("here".to_string()),
            span_to_miette(span),
        ))))
    }
}

/// Adapter for [`ModvizError`] variants without source information.
pub struct ErrorAdapter<'a>(pub &'a ModvizError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            ModvizError::Io(_) => "modviz::io",
            ModvizError::ModelSyntax { .. } => "modviz::model_syntax",
            ModvizError::Model(_) => "modviz::model",
            ModvizError::NestingTooDeep { .. } => "modviz::nesting",
            ModvizError::Export(_) => "modviz::export",
            ModvizError::Config(_) => "modviz::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            ModvizError::Export(ExportError::RendererNotFound { .. }) => {
                "install Graphviz or set render.graphviz_path"
            }
            ModvizError::NestingTooDeep { .. } => "raise diagram.max_depth in the configuration",
            _ => return None,
        };
        Some(Box::new(help))
    }
}

/// A reportable error that can be rendered by miette.
///
/// This enum wraps either a syntax diagnostic or a plain error, providing
/// a uniform interface for error rendering.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A model file error with source location information.
    Diagnostic(ModelSyntaxAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Diagnostic(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Diagnostic(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

fn span_to_miette(span: Range<usize>) -> SourceSpan {
    SourceSpan::new(span.start.into(), span.len())
}

/// Convert a [`ModvizError`] into a reportable error.
pub fn to_reportable(err: &ModvizError) -> Reportable<'_> {
    match err {
        ModvizError::ModelSyntax { message, span, src } => {
            Reportable::Diagnostic(ModelSyntaxAdapter::new(message, span.clone(), src))
        }
        _ => Reportable::Error(ErrorAdapter(err)),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_syntax_error_has_label() {
        let err = ModvizError::ModelSyntax {
            message: "missing field `name`".to_string(),
            span: Some(0..11),
            src: "[[modules]]\n".to_string(),
        };

        let reportable = to_reportable(&err);
        assert!(matches!(reportable, Reportable::Diagnostic(_)));
        assert_eq!(
            reportable.to_string(),
            "Invalid model file: missing field `name`"
        );
        assert!(reportable.source_code().is_some());

        let labels: Vec<_> = reportable.labels().expect("labels").collect();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].offset(), 0);
        assert_eq!(labels[0].len(), 11);
    }

    #[test]
    fn test_syntax_error_without_span() {
        let err = ModvizError::ModelSyntax {
            message: "bad".to_string(),
            span: None,
            src: String::new(),
        };

        assert!(to_reportable(&err).labels().is_none());
    }

    #[test]
    fn test_missing_renderer_has_help() {
        let err = ModvizError::Export(ExportError::RendererNotFound {
            program: PathBuf::from("dot"),
        });

        let reportable = to_reportable(&err);
        assert!(matches!(reportable, Reportable::Error(_)));
        assert_eq!(
            reportable.code().map(|c| c.to_string()).as_deref(),
            Some("modviz::export")
        );
        assert_eq!(
            reportable.help().map(|h| h.to_string()).as_deref(),
            Some("install Graphviz or set render.graphviz_path")
        );
    }

    #[test]
    fn test_config_error_code() {
        let err = ModvizError::Config("broken".to_string());
        let reportable = to_reportable(&err);

        assert_eq!(
            reportable.code().map(|c| c.to_string()).as_deref(),
            Some("modviz::config")
        );
        assert!(reportable.help().is_none());
    }
}
