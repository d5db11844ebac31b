//! DOT source generation.
//!
//! Converts a [`Digraph`] into a `dot_structures` graph and prints it with
//! the `graphviz-rust` printer. Every identifier and attribute value is
//! emitted as a quoted string, so non-ASCII path separators, `|` and record
//! braces survive unchanged. Backslash escapes such as `\l` are passed
//! through for the renderer to interpret.

use std::{fs, path::PathBuf};

use dot_structures::{
    Attribute, Edge as DotEdge, EdgeTy, Graph, GraphAttributes, Id as DotId, Node as DotNode,
    NodeId, Stmt, Subgraph, Vertex,
};
use graphviz_rust::printer::{DotPrinter, PrinterContext};
use log::{debug, info};

use crate::graph::{Attributes, Cluster, Digraph, Edge, GraphContainer, Node, Statement};

use super::{Error, Exporter};

/// Quotes `value` as a DOT string literal.
fn quoted(value: &str) -> DotId {
    DotId::Escaped(format!("\"{}\"", value.replace('"', "\\\"")))
}

fn attribute_list(attributes: &Attributes) -> Vec<Attribute> {
    attributes
        .iter()
        .map(|(key, value)| Attribute(quoted(key), quoted(value)))
        .collect()
}

fn node_id(id: &str) -> NodeId {
    NodeId(quoted(id), None)
}

fn convert_node(node: &Node) -> Stmt {
    Stmt::Node(DotNode {
        id: node_id(node.id()),
        attributes: attribute_list(node.attributes()),
    })
}

fn convert_edge(edge: &Edge) -> Stmt {
    Stmt::Edge(DotEdge {
        ty: EdgeTy::Pair(
            Vertex::N(node_id(edge.source())),
            Vertex::N(node_id(edge.target())),
        ),
        attributes: attribute_list(edge.attributes()),
    })
}

fn convert_cluster(cluster: &Cluster) -> Stmt {
    let mut stmts = graph_attribute_stmts(cluster.attributes());
    stmts.extend(convert_statements(cluster.statements()));

    Stmt::Subgraph(Subgraph {
        id: quoted(cluster.id()),
        stmts,
    })
}

fn graph_attribute_stmts(attributes: &Attributes) -> Vec<Stmt> {
    attribute_list(attributes)
        .into_iter()
        .map(Stmt::Attribute)
        .collect()
}

fn convert_statements(statements: &[Statement]) -> Vec<Stmt> {
    statements
        .iter()
        .map(|statement| match statement {
            Statement::Node(node) => convert_node(node),
            Statement::Cluster(cluster) => convert_cluster(cluster),
            Statement::Edge(edge) => convert_edge(edge),
        })
        .collect()
}

/// Converts the diagram into a `dot_structures` directed graph.
///
/// Graph attributes come first, then node and edge defaults, then the body
/// in insertion order.
pub fn to_dot_graph(graph: &Digraph) -> Graph {
    let mut stmts = graph_attribute_stmts(graph.attributes());

    if !graph.node_defaults().is_empty() {
        stmts.push(Stmt::GAttribute(GraphAttributes::Node(attribute_list(
            graph.node_defaults(),
        ))));
    }
    if !graph.edge_defaults().is_empty() {
        stmts.push(Stmt::GAttribute(GraphAttributes::Edge(attribute_list(
            graph.edge_defaults(),
        ))));
    }
    stmts.extend(convert_statements(graph.statements()));

    Graph::DiGraph {
        id: quoted(graph.name()),
        strict: false,
        stmts,
    }
}

/// Prints the diagram as DOT source text.
pub fn to_dot_string(graph: &Digraph) -> String {
    to_dot_graph(graph).print(&mut PrinterContext::default())
}

/// Exporter writing DOT source to a file.
#[derive(Debug)]
pub struct DotExporter {
    output: PathBuf,
}

impl DotExporter {
    /// Creates an exporter writing to `output`.
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
        }
    }
}

impl Exporter for DotExporter {
    fn export_graph(&mut self, graph: &Digraph) -> Result<(), Error> {
        let source = to_dot_string(graph);
        debug!(bytes = source.len(); "DOT source generated");

        fs::write(&self.output, source)?;

        info!(output_file = self.output.display().to_string(); "DOT source written");
        Ok(())
    }
}
