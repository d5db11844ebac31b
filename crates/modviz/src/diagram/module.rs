//! Module clusters, built recursively.

use indexmap::IndexSet;
use log::{debug, trace};

use modviz_core::{
    identifier::Id,
    model::{Declaration, Module},
};

use crate::{
    ModvizError,
    config::DiagramConfig,
    graph::{Cluster, Edge, GraphContainer, Node},
};

use super::{
    class::build_class,
    label::{combine_signatures, method_signature},
};

/// Prefix of every cluster key. Keeps clusters apart from node keys even
/// when a module and a node share a name.
pub(crate) const CLUSTER_PREFIX: &str = "cluster_";

/// Gray level of a cluster at nesting `level`: `max(40, 95 - 6 * level)`.
///
/// Deeper clusters are darker, never below `gray40`.
pub(crate) fn cluster_shade(level: usize) -> usize {
    95usize.saturating_sub(level.saturating_mul(6)).max(40)
}

/// Cluster label: the module name, prefixed by its visibility symbol
/// unless the module is public.
pub(crate) fn module_label(module: &Module) -> String {
    if module.is_public() {
        module.name().to_string()
    } else {
        format!("{} {}", module.visibility().symbol(), module.name())
    }
}

/// Adds the cluster for `module` and everything it contains to `parent`.
///
/// # Arguments
///
/// * `module` - The module to draw.
/// * `parent` - The graph or cluster the new cluster is placed in.
/// * `path` - Identifier of the enclosing module, [`Id::root`] at the top.
/// * `level` - Nesting depth, `0` for top-level modules.
/// * `config` - Construction options.
///
/// # Errors
///
/// Returns [`ModvizError::NestingTooDeep`] when `level` exceeds
/// [`DiagramConfig::max_depth`].
pub(crate) fn build_module<C: GraphContainer>(
    module: &Module,
    parent: &mut C,
    path: Id,
    level: usize,
    config: &DiagramConfig,
) -> Result<(), ModvizError> {
    if level > config.max_depth() {
        return Err(ModvizError::NestingTooDeep {
            module: module.name().to_string(),
            limit: config.max_depth(),
        });
    }

    let module_id = path.create_nested(module.name());
    debug!(module_id:% = module_id, level; "Building module cluster");

    let mut cluster = Cluster::new(format!("{CLUSTER_PREFIX}{module_id}"));
    cluster.set("label", module_label(module));
    cluster.set("style", "filled");
    cluster.set("color", format!("gray{}", cluster_shade(level)));

    let functions = combine_signatures(module.methods(), method_signature);
    if !functions.is_empty() {
        cluster.add_node(
            Node::new(module_id.to_string())
                .with_attribute("label", functions)
                .with_attribute("shape", "none"),
        );
    }

    for child in module.modules() {
        build_module(child, &mut cluster, module_id, level + 1, config)?;
    }

    for class in module.classes() {
        build_class(class, &mut cluster, module_id);
    }

    parent.add_cluster(cluster);

    if config.dependency_edges() {
        add_dependency_edges(module, module_id, parent);
    }

    Ok(())
}

/// One edge per distinct dependency name, in first-occurrence order.
///
/// Targets are addressed from the root, like base classes.
fn add_dependency_edges<C: GraphContainer>(module: &Module, module_id: Id, parent: &mut C) {
    let distinct: IndexSet<&str> = module
        .dependencies()
        .iter()
        .map(|dependency| dependency.name())
        .collect();

    for name in distinct {
        let target = Id::root().create_nested(name);
        trace!(module_id:% = module_id, target:% = target; "Adding dependency edge");
        parent.add_edge(Edge::new(module_id.to_string(), target.to_string()));
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn shade_is_non_increasing(level in 0usize..1000) {
            prop_assert!(cluster_shade(level + 1) <= cluster_shade(level));
        }

        #[test]
        fn shade_stays_in_range(level in any::<usize>()) {
            let shade = cluster_shade(level);
            prop_assert!((40..=95).contains(&shade));
        }
    }
}
