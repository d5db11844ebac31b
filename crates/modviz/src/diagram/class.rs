//! Class nodes and inheritance edges.

use log::trace;

use modviz_core::{
    identifier::Id,
    model::{Class, Declaration},
};

use crate::graph::{Edge, GraphContainer, Node};

use super::label::{combine_signatures, method_signature, property_signature};

/// Arrowhead drawn on inheritance edges: an unfilled triangle.
pub(crate) const INHERITANCE_ARROWHEAD: &str = "onormal";

/// Builds the record label `{name|methods|properties}`.
///
/// Empty blocks are dropped together with their separator.
pub(crate) fn class_label(class: &Class) -> String {
    let methods = combine_signatures(class.methods(), method_signature);
    let properties = combine_signatures(class.properties(), property_signature);

    let sections: Vec<&str> = [class.name(), methods.as_str(), properties.as_str()]
        .into_iter()
        .filter(|section| !section.is_empty())
        .collect();

    format!("{{{}}}", sections.join("|"))
}

/// Adds the node for `class` to `container`, plus its inheritance edge.
///
/// The base class is addressed from the root of the diagram, never relative
/// to `path`. If no node exists under that identifier the renderer creates
/// an empty placeholder for it.
pub(crate) fn build_class<C: GraphContainer>(class: &Class, container: &mut C, path: Id) {
    let class_id = path.create_nested(class.name());
    trace!(class_id:% = class_id; "Adding class node");

    container.add_node(Node::new(class_id.to_string()).with_attribute("label", class_label(class)));

    if let Some(base) = class.extends() {
        let base_id = Id::from_qualified(base);
        trace!(class_id:% = class_id, base_id:% = base_id; "Adding inheritance edge");

        container.add_edge(
            Edge::new(class_id.to_string(), base_id.to_string())
                .with_attribute("arrowhead", INHERITANCE_ARROWHEAD),
        );
    }
}

#[cfg(test)]
mod tests {
    use modviz_core::model::{Method, Property, QualifiedName, Visibility};

    use super::*;
    use crate::graph::Cluster;

    #[test]
    fn test_label_with_methods_and_properties() {
        let class = Class::new("Widget")
            .with_method(Method::new("render"))
            .with_property(Property::new("value").with_getter().with_setter());

        assert_eq!(class_label(&class), "{Widget|+ render()\\l|+ get/set value\\l}");
    }

    #[test]
    fn test_label_without_members() {
        assert_eq!(class_label(&Class::new("Marker")), "{Marker}");
    }

    #[test]
    fn test_label_drops_empty_method_block() {
        let class = Class::new("Point")
            .with_method(Method::new("secret").with_visibility(Visibility::Private))
            .with_property(Property::new("x").with_getter());

        assert_eq!(class_label(&class), "{Point|+ get x\\l}");
    }

    #[test]
    fn test_label_drops_empty_property_block() {
        let class = Class::new("Service").with_method(Method::new("run"));
        assert_eq!(class_label(&class), "{Service|+ run()\\l}");
    }

    #[test]
    fn test_builds_node_under_path() {
        let mut cluster = Cluster::new("cluster_App");
        build_class(&Class::new("Widget"), &mut cluster, Id::new("App"));

        let node = cluster.nodes().next().expect("class node");
        assert_eq!(node.id(), "App÷Widget");
        assert_eq!(node.attribute("label"), Some("{Widget}"));
        assert_eq!(cluster.edges().count(), 0);
    }

    #[test]
    fn test_inheritance_edge_is_rooted() {
        let class = Class::new("Circle").with_extends(QualifiedName::new(["Shapes", "Base"]));
        let path = Id::new("App").create_nested("geometry");

        let mut cluster = Cluster::new("cluster_App÷geometry");
        build_class(&class, &mut cluster, path);

        let edge = cluster.edges().next().expect("inheritance edge");
        assert_eq!(edge.source(), "App÷geometry÷Circle");
        assert_eq!(edge.target(), "Shapes÷Base");
        assert_eq!(edge.attribute("arrowhead"), Some("onormal"));
    }
}
