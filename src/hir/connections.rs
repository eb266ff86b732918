//! Direct connections between two sibling instances.

use std::sync::Arc;

use indexmap::IndexMap;

use super::index::DesignIndex;
use super::model::{InstanceReference, ModuleDefinition, PortBinding};
use crate::base::SourceLocation;
use crate::core::text_utils::normalize_net_expression;

/// A pair of bindings, one per instance, connected to the same net.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionMatch {
    /// The shared expression with whitespace removed.
    pub net: String,
    pub left: PortBinding,
    pub right: PortBinding,
    /// Where to navigate for this match (the left binding).
    pub location: SourceLocation,
}

/// Bindings of one instance grouped by normalized net, in textual order.
/// Unconnected ports (`.port()`) are left out.
fn bindings_by_net(instance: &InstanceReference) -> IndexMap<String, Vec<&PortBinding>> {
    let mut nets: IndexMap<String, Vec<&PortBinding>> = IndexMap::new();
    for binding in &instance.bindings {
        let net = normalize_net_expression(&binding.expression);
        if !net.is_empty() {
            nets.entry(net).or_default().push(binding);
        }
    }
    nets
}

fn match_instances(left: &InstanceReference, right: &InstanceReference) -> Vec<ConnectionMatch> {
    let right_nets = bindings_by_net(right);
    let mut matches = Vec::new();
    for (net, left_bindings) in bindings_by_net(left) {
        let Some(right_bindings) = right_nets.get(&net) else {
            continue;
        };
        for l in &left_bindings {
            for r in right_bindings {
                matches.push(ConnectionMatch {
                    net: net.clone(),
                    left: (*l).clone(),
                    right: (*r).clone(),
                    location: l.location,
                });
            }
        }
    }
    matches
}

/// Find the nets shared by instances `left` and `right` inside a module
/// named `parent`.
///
/// The first definition of `parent` containing both instances is used.
/// Every combination of bindings on a shared net is reported, so a net
/// reaching several ports of either instance yields several matches. Any
/// missing piece yields an empty result.
pub fn find_connections(
    index: &DesignIndex,
    parent: &str,
    left: &str,
    right: &str,
) -> Vec<ConnectionMatch> {
    if left == right {
        return Vec::new();
    }
    index
        .modules_named(parent)
        .into_iter()
        .find_map(|module| Some((module.instance(left)?, module.instance(right)?)))
        .map(|(l, r)| match_instances(l, r))
        .unwrap_or_default()
}

/// Connections between `instance` and each of its siblings in the first
/// definition of `parent` that contains it. Siblings with no shared net
/// are omitted.
pub fn connections_with_all(
    index: &DesignIndex,
    parent: &str,
    instance: &str,
) -> Vec<(Arc<str>, Vec<ConnectionMatch>)> {
    let Some((module, subject)) = index
        .modules_named(parent)
        .into_iter()
        .find_map(|m| Some((m, m.instance(instance)?)))
    else {
        return Vec::new();
    };
    siblings(module, instance)
        .map(|sibling| (sibling.instance_name.clone(), match_instances(subject, sibling)))
        .filter(|(_, matches)| !matches.is_empty())
        .collect()
}

fn siblings<'m>(
    module: &'m ModuleDefinition,
    instance: &'m str,
) -> impl Iterator<Item = &'m InstanceReference> {
    module
        .instances
        .iter()
        .filter(move |i| &*i.instance_name != instance)
}
