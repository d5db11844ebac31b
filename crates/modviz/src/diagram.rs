//! Diagram construction.
//!
//! Walks the object model top-down, once per top-level module, and emits
//! the matching graph constructs:
//!
//! - every [`Module`] becomes a cluster, shaded by nesting depth, holding a
//!   label-only node for its public free functions;
//! - every class becomes a record node `{name|methods|properties}`;
//! - every base class reference becomes an inheritance edge.
//!
//! Emission order follows traversal order, so label lines and statement
//! order are deterministic.

mod class;
mod label;
mod module;

use log::{debug, info};

use modviz_core::{identifier::Id, model::Module};

use crate::{
    ModvizError,
    config::AppConfig,
    graph::{Digraph, GraphContainer},
};

/// Name of the root graph.
pub(crate) const GRAPH_NAME: &str = "G";

/// Builds the complete diagram graph for `modules`.
///
/// Global font defaults and the record node shape are applied before any
/// module is visited, so every cluster, node and edge inherits them.
///
/// # Errors
///
/// Returns [`ModvizError::NestingTooDeep`] if a module tree exceeds the
/// configured depth limit.
pub(crate) fn build_diagram(modules: &[Module], config: &AppConfig) -> Result<Digraph, ModvizError> {
    info!(modules = modules.len(); "Building diagram");

    let mut graph = Digraph::new(GRAPH_NAME);
    apply_defaults(&mut graph, config);

    for module in modules {
        module::build_module(module, &mut graph, Id::root(), 0, config.diagram())?;
    }

    debug!(statements = graph.statements().len(); "Diagram built");
    Ok(graph)
}

fn apply_defaults(graph: &mut Digraph, config: &AppConfig) {
    let style = config.style();
    let font_size = style.font_size().to_string();

    graph.set("fontsize", font_size.as_str());
    graph.set("fontname", style.font_name());
    graph.set_edge_default("fontsize", font_size.as_str());
    graph.set_edge_default("fontname", style.font_name());
    graph.set_node_default("fontsize", font_size.as_str());
    graph.set_node_default("fontname", style.font_name());
    graph.set_node_default("shape", "record");
}

#[cfg(test)]
mod tests {
    use modviz_core::model::{Class, Method, Property, QualifiedName, Visibility};

    use super::*;
    use crate::config::{AppConfig, DiagramConfig, RenderConfig, StyleConfig};

    #[test]
    fn test_defaults_are_applied() {
        let graph = build_diagram(&[], &AppConfig::default()).expect("empty diagram");

        assert_eq!(graph.name(), "G");
        assert_eq!(graph.attribute("fontsize"), Some("12"));
        assert_eq!(graph.attribute("fontname"), Some("Verdana"));
        assert_eq!(graph.node_defaults().get("shape").map(String::as_str), Some("record"));
        assert_eq!(graph.node_defaults().get("fontname").map(String::as_str), Some("Verdana"));
        assert_eq!(graph.edge_defaults().get("fontsize").map(String::as_str), Some("12"));
        assert!(graph.statements().is_empty());
    }

    #[test]
    fn test_custom_style() {
        let config = AppConfig::new(
            StyleConfig::new("Helvetica", 9),
            DiagramConfig::default(),
            RenderConfig::default(),
        );
        let graph = build_diagram(&[], &config).expect("empty diagram");

        assert_eq!(graph.attribute("fontname"), Some("Helvetica"));
        assert_eq!(graph.node_defaults().get("fontsize").map(String::as_str), Some("9"));
    }

    #[test]
    fn test_top_level_modules_keep_order() {
        let modules = [Module::new("B"), Module::new("A")];
        let graph = build_diagram(&modules, &AppConfig::default()).expect("diagram");

        let ids: Vec<_> = graph.clusters().map(|cluster| cluster.id()).collect();
        assert_eq!(ids, ["cluster_B", "cluster_A"]);
    }

    #[test]
    fn test_widget_round_trip() {
        let modules = [Module::new("App").with_class(
            Class::new("Widget")
                .with_method(Method::new("render"))
                .with_property(Property::new("value").with_getter().with_setter()),
        )];
        let graph = build_diagram(&modules, &AppConfig::default()).expect("diagram");

        assert_eq!(graph.clusters().count(), 1);
        let cluster = graph.find_cluster("cluster_App").expect("cluster");
        assert_eq!(cluster.attribute("label"), Some("App"));

        let node = graph.find_node("App÷Widget").expect("class node");
        assert_eq!(
            node.attribute("label"),
            Some("{Widget|+ render()\\l|+ get/set value\\l}")
        );
        assert!(graph.all_edges().is_empty());
    }

    #[test]
    fn test_inheritance_target_ignores_nesting() {
        let derived = Class::new("Circle").with_extends(QualifiedName::new(["Shapes", "Base"]));
        let modules = [
            Module::new("Shapes").with_class(Class::new("Base")),
            Module::new("App").with_module(Module::new("deep").with_class(derived)),
        ];
        let graph = build_diagram(&modules, &AppConfig::default()).expect("diagram");

        let edges = graph.all_edges();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].source(), "App÷deep÷Circle");
        assert_eq!(edges[0].target(), Id::root().create_nested("Shapes").create_nested("Base").to_string());
        assert_eq!(edges[0].attribute("arrowhead"), Some("onormal"));
        assert!(graph.find_node("Shapes÷Base").is_some());
    }

    #[test]
    fn test_hidden_members_never_reach_labels() {
        let modules = [Module::new("App")
            .with_method(Method::new("secret_fn").with_visibility(Visibility::Private))
            .with_class(
                Class::new("Widget")
                    .with_method(Method::new("secret").with_visibility(Visibility::Protected))
                    .with_property(Property::new("hidden").with_visibility(Visibility::Private)),
            )];
        let graph = build_diagram(&modules, &AppConfig::default()).expect("diagram");

        assert!(graph.find_node("App").is_none());
        let node = graph.find_node("App÷Widget").expect("class node");
        assert_eq!(node.attribute("label"), Some("{Widget}"));
    }
}
