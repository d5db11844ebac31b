//! Configuration types for modviz diagram rendering.
//!
//! This module provides configuration structures that control how diagrams
//! are built, styled and rendered. All types implement [`serde::Deserialize`]
//! for loading from external sources; every field has a default.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`StyleConfig`] - Font family and size applied to the whole diagram.
//! - [`DiagramConfig`] - Optional construction features and recursion bounds.
//! - [`RenderConfig`] - Output format and renderer location.
//!
//! # Example
//!
//! ```
//! # use modviz::config::{AppConfig, OutputFormat};
//! let config: AppConfig = toml::from_str(r#"
//!     [style]
//!     font_size = 10
//!
//!     [render]
//!     format = "svg"
//! "#).unwrap();
//!
//! assert_eq!(config.style().font_name(), "Verdana");
//! assert_eq!(config.style().font_size(), 10);
//! assert_eq!(config.render().format(), OutputFormat::Svg);
//! assert!(!config.diagram().dependency_edges());
//! ```

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Diagram construction section.
    #[serde(default)]
    diagram: DiagramConfig,

    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    ///
    /// # Arguments
    ///
    /// * `style` - Global font settings.
    /// * `diagram` - Construction features and limits.
    /// * `render` - Output format and renderer location.
    pub fn new(style: StyleConfig, diagram: DiagramConfig, render: RenderConfig) -> Self {
        Self {
            style,
            diagram,
            render,
        }
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn diagram(&self) -> &DiagramConfig {
        &self.diagram
    }

    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// Replaces the render section.
    pub fn with_render(mut self, render: RenderConfig) -> Self {
        self.render = render;
        self
    }

    /// Replaces the diagram section.
    pub fn with_diagram(mut self, diagram: DiagramConfig) -> Self {
        self.diagram = diagram;
        self
    }
}

/// Font settings applied once to the graph, its nodes and its edges.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    font_name: String,
    font_size: u32,
}

impl StyleConfig {
    pub fn new(font_name: impl Into<String>, font_size: u32) -> Self {
        Self {
            font_name: font_name.into(),
            font_size,
        }
    }

    pub fn font_name(&self) -> &str {
        &self.font_name
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::new("Verdana", 12)
    }
}

/// Options controlling which graph constructs are emitted.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    /// Draw one edge per distinct module dependency. Off by default.
    dependency_edges: bool,

    /// Deepest module nesting level accepted before the build fails.
    max_depth: usize,
}

impl DiagramConfig {
    pub fn new(dependency_edges: bool, max_depth: usize) -> Self {
        Self {
            dependency_edges,
            max_depth,
        }
    }

    /// Returns `true` when module dependency edges are drawn.
    pub fn dependency_edges(&self) -> bool {
        self.dependency_edges
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self::new(false, 64)
    }
}

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    Svg,
    Pdf,
    /// DOT source, written without invoking the renderer.
    Dot,
}

impl OutputFormat {
    /// The renderer's name for this format, as passed to `dot -T`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Pdf => "pdf",
            Self::Dot => "dot",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            "pdf" => Ok(Self::Pdf),
            "dot" | "gv" => Ok(Self::Dot),
            other => Err(format!(
                "Unsupported output format `{other}` (expected png, svg, pdf or dot)"
            )),
        }
    }
}

/// Output format and renderer location.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    format: OutputFormat,

    /// Directory containing the Graphviz `dot` binary. When unset, `dot`
    /// is looked up on `PATH`.
    graphviz_path: Option<PathBuf>,
}

impl RenderConfig {
    pub fn new(format: OutputFormat, graphviz_path: Option<PathBuf>) -> Self {
        Self {
            format,
            graphviz_path,
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn graphviz_path(&self) -> Option<&Path> {
        self.graphviz_path.as_deref()
    }

    /// Replaces the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}
