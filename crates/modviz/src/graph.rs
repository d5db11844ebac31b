//! Abstract graph built by the diagram builder.
//!
//! This is the graph-building interface the builder emits into: a directed
//! graph holding clusters, nodes and edges, each with an ordered attribute
//! set. It knows nothing about layout; the [`export`](crate::export) stage
//! turns it into DOT for the renderer.
//!
//! Node identity is flat: a [`Node`] is keyed by a string that is unique
//! across the whole graph, independent of the [`Cluster`] it is placed in.
//! Two nodes added with the same key are the same node to the renderer.
//!
//! Statements keep their insertion order, so the same model always produces
//! the same graph.

use indexmap::IndexMap;

/// Ordered key/value attributes of a graph element.
pub type Attributes = IndexMap<String, String>;

/// A labeled node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: String,
    attributes: Attributes,
}

impl Node {
    /// Creates a node with no attributes.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: Attributes::new(),
        }
    }

    /// Sets an attribute, replacing any previous value for `key`.
    pub fn with_attribute(mut self, key: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Returns the value of one attribute.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// A directed edge between two node keys.
///
/// The target does not need to exist; the renderer creates a placeholder
/// node for unknown keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    source: String,
    target: String,
    attributes: Attributes,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            attributes: Attributes::new(),
        }
    }

    /// Sets an attribute, replacing any previous value for `key`.
    pub fn with_attribute(mut self, key: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Returns the value of one attribute.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// A visually grouped sub-graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    id: String,
    attributes: Attributes,
    statements: Vec<Statement>,
}

impl Cluster {
    /// Creates an empty cluster.
    ///
    /// Graphviz only draws sub-graphs whose key starts with `cluster`.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: Attributes::new(),
            statements: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

/// One entry of a graph or cluster body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Node(Node),
    Cluster(Cluster),
    Edge(Edge),
}

/// Operations shared by the root graph and clusters.
pub trait GraphContainer {
    /// Attributes that apply to this graph or cluster itself.
    fn attributes(&self) -> &Attributes;

    fn attributes_mut(&mut self) -> &mut Attributes;

    /// Statements in insertion order.
    fn statements(&self) -> &[Statement];

    fn statements_mut(&mut self) -> &mut Vec<Statement>;

    /// Sets an attribute on this container.
    fn set(&mut self, key: &str, value: impl Into<String>) {
        self.attributes_mut().insert(key.to_string(), value.into());
    }

    /// Returns the value of one of this container's attributes.
    fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes().get(key).map(String::as_str)
    }

    fn add_node(&mut self, node: Node) {
        self.statements_mut().push(Statement::Node(node));
    }

    fn add_cluster(&mut self, cluster: Cluster) {
        self.statements_mut().push(Statement::Cluster(cluster));
    }

    fn add_edge(&mut self, edge: Edge) {
        self.statements_mut().push(Statement::Edge(edge));
    }

    /// Nodes placed directly in this container.
    fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.statements().iter().filter_map(|statement| match statement {
            Statement::Node(node) => Some(node),
            _ => None,
        })
    }

    /// Clusters placed directly in this container.
    fn clusters(&self) -> impl Iterator<Item = &Cluster> {
        self.statements().iter().filter_map(|statement| match statement {
            Statement::Cluster(cluster) => Some(cluster),
            _ => None,
        })
    }

    /// Edges placed directly in this container.
    fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.statements().iter().filter_map(|statement| match statement {
            Statement::Edge(edge) => Some(edge),
            _ => None,
        })
    }
}

impl GraphContainer for Cluster {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    fn statements(&self) -> &[Statement] {
        &self.statements
    }

    fn statements_mut(&mut self) -> &mut Vec<Statement> {
        &mut self.statements
    }
}

/// The root directed graph.
///
/// Besides its own attributes, the root graph carries default attribute
/// sets inherited by every node and edge unless overridden locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digraph {
    name: String,
    attributes: Attributes,
    node_defaults: Attributes,
    edge_defaults: Attributes,
    statements: Vec<Statement>,
}

impl Digraph {
    /// Creates an empty directed graph.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Attributes::new(),
            node_defaults: Attributes::new(),
            edge_defaults: Attributes::new(),
            statements: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets a default attribute for every node.
    pub fn set_node_default(&mut self, key: &str, value: impl Into<String>) {
        self.node_defaults.insert(key.to_string(), value.into());
    }

    /// Sets a default attribute for every edge.
    pub fn set_edge_default(&mut self, key: &str, value: impl Into<String>) {
        self.edge_defaults.insert(key.to_string(), value.into());
    }

    pub fn node_defaults(&self) -> &Attributes {
        &self.node_defaults
    }

    pub fn edge_defaults(&self) -> &Attributes {
        &self.edge_defaults
    }

    /// Finds a node by key anywhere in the graph, searching clusters depth-first.
    pub fn find_node(&self, id: &str) -> Option<&Node> {
        find_node_in(&self.statements, id)
    }

    /// Finds a cluster by key anywhere in the graph.
    pub fn find_cluster(&self, id: &str) -> Option<&Cluster> {
        find_cluster_in(&self.statements, id)
    }

    /// Collects every edge in the graph, in statement order.
    pub fn all_edges(&self) -> Vec<&Edge> {
        let mut edges = Vec::new();
        collect_edges(&self.statements, &mut edges);
        edges
    }
}

impl GraphContainer for Digraph {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    fn statements(&self) -> &[Statement] {
        &self.statements
    }

    fn statements_mut(&mut self) -> &mut Vec<Statement> {
        &mut self.statements
    }
}

fn find_node_in<'g>(statements: &'g [Statement], id: &str) -> Option<&'g Node> {
    statements.iter().find_map(|statement| match statement {
        Statement::Node(node) if node.id == id => Some(node),
        Statement::Cluster(cluster) => find_node_in(&cluster.statements, id),
        _ => None,
    })
}

fn find_cluster_in<'g>(statements: &'g [Statement], id: &str) -> Option<&'g Cluster> {
    statements.iter().find_map(|statement| match statement {
        Statement::Cluster(cluster) if cluster.id == id => Some(cluster),
        Statement::Cluster(cluster) => find_cluster_in(&cluster.statements, id),
        _ => None,
    })
}

fn collect_edges<'g>(statements: &'g [Statement], edges: &mut Vec<&'g Edge>) {
    for statement in statements {
        match statement {
            Statement::Edge(edge) => edges.push(edge),
            Statement::Cluster(cluster) => collect_edges(&cluster.statements, edges),
            Statement::Node(_) => {}
        }
    }
}
