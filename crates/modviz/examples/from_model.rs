//! Example: Creating a diagram from the object model
//!
//! This example demonstrates how to build a diagram programmatically from
//! model records, without loading a model file.

use modviz::{
    DiagramBuilder,
    config::{AppConfig, DiagramConfig, OutputFormat, RenderConfig, StyleConfig},
    graph::GraphContainer,
    model::{Class, Dependency, Method, Module, Property, QualifiedName, Visibility},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Building diagram from the object model...\n");

    let shapes = Module::new("Shapes").with_class(
        Class::new("Base")
            .with_method(Method::new("area"))
            .with_method(Method::new("invalidate").with_visibility(Visibility::Protected))
            .with_property(Property::new("origin").with_getter()),
    );

    let app = Module::new("App")
        .with_method(Method::new("main"))
        .with_dependency(Dependency::new("Shapes"))
        .with_module(
            Module::new("internal")
                .with_visibility(Visibility::Private)
                .with_class(Class::new("Cache").with_property(Property::new("size").with_getter())),
        )
        .with_class(
            Class::new("Circle")
                .with_extends(QualifiedName::new(["Shapes", "Base"]))
                .with_property(Property::new("radius").with_getter().with_setter()),
        );

    let modules = vec![shapes, app];

    // Write DOT source so the example runs without Graphviz installed
    let config = AppConfig::new(
        StyleConfig::default(),
        DiagramConfig::new(true, 64),
        RenderConfig::new(OutputFormat::Dot, None),
    );
    let builder = DiagramBuilder::new(config);

    let graph = builder.build_graph(&modules)?;
    println!("Created diagram:");
    println!("  Clusters: {}", graph.clusters().count());
    println!("  Edges: {}", graph.all_edges().len());
    println!();

    let output_path = "from_model_output.dot";
    builder.render_to_file(&modules, output_path)?;
    println!("DOT written to: {output_path}");
    println!("Render it with: dot -Tpng {output_path} -o from_model_output.png");

    Ok(())
}
