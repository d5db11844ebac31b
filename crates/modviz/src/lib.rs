//! Modviz - class diagrams of a codebase's structural model.
//!
//! Turns a tree of modules, classes, methods and properties into a Graphviz
//! diagram: one shaded cluster per module, one record node per class listing
//! its public members, and hollow-arrow edges for inheritance.
//!
//! The object model comes from an external analysis step (or a TOML model
//! file, see [`DiagramBuilder::load_model`]); layout and rasterization are
//! left to Graphviz.

pub mod config;
pub mod graph;

mod diagram;
mod error;
mod export;
mod model_file;

pub use modviz_core::{identifier, model};

pub use error::ModvizError;
pub use export::{Error as ExportError, dot::to_dot_graph};

use std::path::Path;

use log::{debug, info, trace};

use config::{AppConfig, OutputFormat};
use export::{Exporter, dot::DotExporter, graphviz::GraphvizExporter};
use graph::Digraph;
use model::Module;

/// Builder for constructing and rendering modviz diagrams.
///
/// # Examples
///
/// ```rust,no_run
/// use modviz::{DiagramBuilder, config::AppConfig, model::{Class, Method, Module}};
///
/// let modules = vec![
///     Module::new("App").with_class(Class::new("Widget").with_method(Method::new("render"))),
/// ];
///
/// let builder = DiagramBuilder::new(AppConfig::default());
///
/// // Render straight to an image with Graphviz
/// builder.render_to_file(&modules, "diagram.png")
///     .expect("Failed to render");
///
/// // Or inspect the DOT source
/// let dot = builder.render_dot(&modules).expect("Failed to build");
/// println!("{dot}");
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Style, construction and render settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder uses.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a TOML model file into validated top-level modules.
    ///
    /// # Arguments
    ///
    /// * `source` - Contents of the model file
    ///
    /// # Errors
    ///
    /// Returns [`ModvizError::ModelSyntax`] for malformed files and
    /// [`ModvizError::Model`] for structurally invalid models.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use modviz::DiagramBuilder;
    ///
    /// let source = r#"
    ///     [[modules]]
    ///     name = "App"
    /// "#;
    /// let modules = DiagramBuilder::default()
    ///     .load_model(source)
    ///     .expect("Failed to load model");
    /// assert_eq!(modules.len(), 1);
    /// ```
    pub fn load_model(&self, source: &str) -> Result<Vec<Module>, ModvizError> {
        info!("Loading model");
        let modules = model_file::parse(source)?;
        trace!(modules:?; "Loaded model");
        Ok(modules)
    }

    /// Build the diagram graph for the given top-level modules.
    ///
    /// Modules are visited in the order supplied.
    ///
    /// # Errors
    ///
    /// Returns [`ModvizError::NestingTooDeep`] when modules nest deeper than
    /// the configured limit.
    pub fn build_graph(&self, modules: &[Module]) -> Result<Digraph, ModvizError> {
        diagram::build_diagram(modules, &self.config)
    }

    /// Build the diagram and print it as DOT source.
    ///
    /// # Errors
    ///
    /// Same as [`DiagramBuilder::build_graph`].
    pub fn render_dot(&self, modules: &[Module]) -> Result<String, ModvizError> {
        let graph = self.build_graph(modules)?;
        Ok(export::dot::to_dot_string(&graph))
    }

    /// Build the diagram and render it to `output`.
    ///
    /// The configured [`OutputFormat`] selects the backend: `dot` writes the
    /// DOT source directly, every other format is rendered by Graphviz,
    /// located through the configured `graphviz_path` or `PATH`.
    ///
    /// # Errors
    ///
    /// Returns [`ModvizError::Export`] if the renderer is missing, fails,
    /// or the output cannot be written. Failures are not retried.
    pub fn render_to_file(
        &self,
        modules: &[Module],
        output: impl AsRef<Path>,
    ) -> Result<(), ModvizError> {
        let output = output.as_ref();
        let graph = self.build_graph(modules)?;

        let render = self.config.render();
        let mut exporter: Box<dyn Exporter> = match render.format() {
            OutputFormat::Dot => Box::new(DotExporter::new(output)),
            format => Box::new(
                GraphvizExporter::new(output, format).with_graphviz_path(render.graphviz_path()),
            ),
        };
        debug!(format:% = render.format(); "Exporter selected");

        exporter.export_graph(&graph)?;
        Ok(())
    }
}
