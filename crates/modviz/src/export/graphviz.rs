//! Rendering through the Graphviz `dot` executable.
//!
//! DOT source is piped into `dot -T<format> -o <output>`. The call blocks
//! until the renderer exits; there is no timeout and no retry.

use std::{
    io::{self, Write},
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use log::{debug, info};

use crate::{config::OutputFormat, graph::Digraph};

use super::{Error, Exporter, dot::to_dot_string};

/// Name of the Graphviz layout executable.
const DOT_PROGRAM: &str = "dot";

/// Resolves the renderer executable.
///
/// With a configured directory the executable is taken from there;
/// otherwise it is left to `PATH` lookup.
fn renderer_program(graphviz_path: Option<&Path>) -> PathBuf {
    match graphviz_path {
        Some(dir) => dir.join(DOT_PROGRAM),
        None => PathBuf::from(DOT_PROGRAM),
    }
}

/// Exporter producing rendered images with Graphviz.
#[derive(Debug)]
pub struct GraphvizExporter {
    output: PathBuf,
    format: OutputFormat,
    program: PathBuf,
}

impl GraphvizExporter {
    /// Creates an exporter rendering `format` into `output`, locating `dot`
    /// on `PATH`.
    pub fn new(output: impl Into<PathBuf>, format: OutputFormat) -> Self {
        Self {
            output: output.into(),
            format,
            program: renderer_program(None),
        }
    }

    /// Looks for the `dot` executable inside `graphviz_path` instead of
    /// `PATH`. `None` keeps the current lookup.
    pub fn with_graphviz_path(mut self, graphviz_path: Option<&Path>) -> Self {
        if graphviz_path.is_some() {
            self.program = renderer_program(graphviz_path);
        }
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn run(&self, source: &str) -> Result<(), Error> {
        debug!(
            program = self.program.display().to_string(),
            format = self.format.as_str();
            "Starting renderer"
        );

        let mut child = Command::new(&self.program)
            .arg(format!("-T{}", self.format.as_str()))
            .arg("-o")
            .arg(&self.output)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|err| match err.kind() {
                io::ErrorKind::NotFound => Error::RendererNotFound {
                    program: self.program.clone(),
                },
                _ => Error::Io(err),
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(source.as_bytes())?;
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(Error::Render {
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}

impl Exporter for GraphvizExporter {
    fn export_graph(&mut self, graph: &Digraph) -> Result<(), Error> {
        let source = to_dot_string(graph);
        self.run(&source)?;

        info!(
            output_file = self.output.display().to_string(),
            format = self.format.as_str();
            "Diagram rendered"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_defaults_to_path_lookup() {
        let exporter = GraphvizExporter::new("out.png", OutputFormat::Png);
        assert_eq!(exporter.program(), Path::new("dot"));
    }

    #[test]
    fn test_configured_directory() {
        let exporter = GraphvizExporter::new("out.png", OutputFormat::Png)
            .with_graphviz_path(Some(Path::new("/opt/graphviz/bin")));
        assert_eq!(exporter.program(), Path::new("/opt/graphviz/bin/dot"));

        let unchanged = GraphvizExporter::new("out.png", OutputFormat::Png).with_graphviz_path(None);
        assert_eq!(unchanged.program(), Path::new("dot"));
    }

    #[test]
    fn test_missing_renderer_is_reported() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut exporter = GraphvizExporter::new(dir.path().join("out.png"), OutputFormat::Png)
            .with_graphviz_path(Some(dir.path()));

        let err = exporter
            .export_graph(&Digraph::new("G"))
            .expect_err("no renderer in an empty directory");

        match err {
            Error::RendererNotFound { program } => assert_eq!(program, dir.path().join("dot")),
            other => panic!("expected RendererNotFound, got {other:?}"),
        }
    }
}
