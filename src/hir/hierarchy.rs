//! Instantiation hierarchy built from a [`DesignIndex`].
//!
//! The tree is rebuilt from scratch for every index. Expansion is bounded by
//! a depth limit and a per-path cycle check, and an instance whose type has
//! no definition becomes an `External` leaf, so building always terminates.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::index::DesignIndex;
use super::model::{InstanceReference, ModuleDefinition};
use crate::base::SourceLocation;

/// How to expand a module name that has several definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateResolution {
    /// Expand every matching definition as its own child.
    #[default]
    All,
    /// Expand only the first definition found.
    First,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyOptions {
    pub max_depth: usize,
    pub resolve: DuplicateResolution,
    /// Restrict roots to this module when it is defined.
    pub top_module: Option<String>,
}

impl Default for HierarchyOptions {
    fn default() -> Self {
        Self {
            max_depth: 20,
            resolve: DuplicateResolution::All,
            top_module: None,
        }
    }
}

/// What a hierarchy node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HierarchyNodeKind {
    /// A resolved module definition, expanded.
    Module,
    /// The module already appears on the path from the root.
    Cycle,
    /// The depth limit was reached; not expanded.
    DepthLimit,
    /// The instantiated type has no definition in the index.
    External,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyNode {
    pub module_name: Arc<str>,
    /// `None` for roots.
    pub instance_name: Option<Arc<str>>,
    pub label: String,
    pub kind: HierarchyNodeKind,
    pub depth: usize,
    pub children: Vec<HierarchyNode>,
    /// First covered definition. A root under `All` may cover several.
    pub definition: Option<SourceLocation>,
    pub instantiation: Option<SourceLocation>,
}

impl HierarchyNode {
    /// Whether this node stops expansion (cycle, depth limit or external).
    pub fn is_terminal(&self) -> bool {
        self.kind != HierarchyNodeKind::Module
    }

    /// First child created for `instance_name`.
    pub fn child(&self, instance_name: &str) -> Option<&HierarchyNode> {
        self.children
            .iter()
            .find(|c| c.instance_name.as_deref() == Some(instance_name))
    }

    /// All children created for `instance_name` (one per expanded variant).
    pub fn children_for(&self, instance_name: &str) -> Vec<&HierarchyNode> {
        self.children
            .iter()
            .filter(|c| c.instance_name.as_deref() == Some(instance_name))
            .collect()
    }

    /// Follow a path of instance names from this node.
    pub fn descend(&self, path: &[&str]) -> Option<&HierarchyNode> {
        path.iter().try_fold(self, |node, name| node.child(name))
    }

    /// Breadth-first walk over this node and all descendants.
    pub fn walk(&self) -> Vec<&HierarchyNode> {
        let mut out = vec![self];
        let mut i = 0;
        while i < out.len() {
            let node = out[i];
            out.extend(node.children.iter());
            i += 1;
        }
        out
    }
}

/// Diagnostics accumulated while building; they do not affect the tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HierarchyStats {
    pub node_count: usize,
    pub max_depth: usize,
    pub depth_limit_hits: usize,
    pub cycle_hits: usize,
    pub external_hits: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hierarchy {
    pub roots: Vec<HierarchyNode>,
    pub stats: HierarchyStats,
}

impl Hierarchy {
    pub fn root(&self, name: &str) -> Option<&HierarchyNode> {
        self.roots.iter().find(|r| &*r.module_name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

/// Module names never instantiated anywhere in the index, sorted.
pub fn root_modules(index: &DesignIndex) -> Vec<Arc<str>> {
    let mut roots: Vec<Arc<str>> = index
        .module_names()
        .filter(|name| !index.is_instantiated(name))
        .cloned()
        .collect();
    roots.sort();
    roots
}

/// Build the hierarchy for `index`. A missing index yields an empty
/// hierarchy.
pub fn build_hierarchy(index: Option<&DesignIndex>, options: &HierarchyOptions) -> Hierarchy {
    match index {
        Some(index) => HierarchyBuilder::new(index, options).build(),
        None => Hierarchy::default(),
    }
}

/// The chain of module names from the root to the node being expanded.
///
/// Each recursion level owns its own link, so sibling branches never see
/// each other's entries.
struct PathLink<'p> {
    name: &'p str,
    parent: Option<&'p PathLink<'p>>,
}

impl PathLink<'_> {
    fn contains(link: Option<&PathLink<'_>>, name: &str) -> bool {
        let mut current = link;
        while let Some(l) = current {
            if l.name == name {
                return true;
            }
            current = l.parent;
        }
        false
    }
}

/// Single-use builder carrying the statistics for one build.
pub struct HierarchyBuilder<'a> {
    index: &'a DesignIndex,
    options: &'a HierarchyOptions,
    stats: HierarchyStats,
}

impl<'a> HierarchyBuilder<'a> {
    pub fn new(index: &'a DesignIndex, options: &'a HierarchyOptions) -> Self {
        Self {
            index,
            options,
            stats: HierarchyStats::default(),
        }
    }

    pub fn build(mut self) -> Hierarchy {
        let roots: Vec<HierarchyNode> = self
            .root_names()
            .into_iter()
            .map(|name| {
                let definitions = self.resolve(&name);
                self.module_node(&name, definitions, None, None, 0)
            })
            .collect();

        info!(
            "hierarchy: {} root(s), {} node(s), depth {}, {} cycle(s), {} depth limit(s), {} external",
            roots.len(),
            self.stats.node_count,
            self.stats.max_depth,
            self.stats.cycle_hits,
            self.stats.depth_limit_hits,
            self.stats.external_hits
        );

        Hierarchy {
            roots,
            stats: self.stats,
        }
    }

    fn root_names(&self) -> Vec<Arc<str>> {
        if let Some(top) = self.options.top_module.as_deref().filter(|t| !t.is_empty()) {
            if let Some(definition) = self.index.module(top) {
                return vec![definition.name.clone()];
            }
            warn!("top module '{}' is not defined; using computed roots", top);
        }
        root_modules(self.index)
    }

    fn resolve(&self, name: &str) -> Vec<&'a ModuleDefinition> {
        let mut definitions = self.index.modules_named(name);
        if self.options.resolve == DuplicateResolution::First {
            definitions.truncate(1);
        }
        definitions
    }

    fn module_node(
        &mut self,
        name: &Arc<str>,
        definitions: Vec<&'a ModuleDefinition>,
        instance: Option<&'a InstanceReference>,
        path: Option<&PathLink<'_>>,
        depth: usize,
    ) -> HierarchyNode {
        self.stats.node_count += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        // Only a node bound to exactly one definition names its file.
        let variant = match definitions.as_slice() {
            [only] => Some(*only),
            _ => None,
        };
        let mut node = HierarchyNode {
            module_name: name.clone(),
            instance_name: instance.map(|i| i.instance_name.clone()),
            label: self.label(name, instance, variant),
            kind: HierarchyNodeKind::Module,
            depth,
            children: Vec::new(),
            definition: definitions.first().map(|d| d.location),
            instantiation: instance.map(|i| i.location),
        };

        if depth >= self.options.max_depth {
            self.stats.depth_limit_hits += 1;
            node.kind = HierarchyNodeKind::DepthLimit;
            node.label.push_str(" (depth limit)");
            return node;
        }
        if PathLink::contains(path, name) {
            self.stats.cycle_hits += 1;
            node.kind = HierarchyNodeKind::Cycle;
            node.label.push_str(" (cycle)");
            return node;
        }

        let link = PathLink {
            name: name.as_ref(),
            parent: path,
        };
        for definition in definitions {
            for child in &definition.instances {
                let children = self.instance_children(child, &link, depth + 1);
                node.children.extend(children);
            }
        }
        node
    }

    fn instance_children(
        &mut self,
        instance: &'a InstanceReference,
        path: &PathLink<'_>,
        depth: usize,
    ) -> Vec<HierarchyNode> {
        let definitions = self.resolve(&instance.module_type);
        if definitions.is_empty() {
            return vec![self.external_node(instance, depth)];
        }
        definitions
            .into_iter()
            .map(|definition| {
                self.module_node(
                    &instance.module_type,
                    vec![definition],
                    Some(instance),
                    Some(path),
                    depth,
                )
            })
            .collect()
    }

    fn external_node(&mut self, instance: &InstanceReference, depth: usize) -> HierarchyNode {
        self.stats.node_count += 1;
        self.stats.external_hits += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);
        HierarchyNode {
            module_name: instance.module_type.clone(),
            instance_name: Some(instance.instance_name.clone()),
            label: format!(
                "{} : {} (external)",
                instance.instance_name, instance.module_type
            ),
            kind: HierarchyNodeKind::External,
            depth,
            children: Vec::new(),
            definition: None,
            instantiation: Some(instance.location),
        }
    }

    fn label(
        &self,
        name: &str,
        instance: Option<&InstanceReference>,
        definition: Option<&ModuleDefinition>,
    ) -> String {
        let mut label = match instance {
            Some(instance) => format!("{} : {}", instance.instance_name, name),
            None => name.to_string(),
        };
        let variant_file = definition
            .filter(|_| self.index.modules_named(name).len() > 1)
            .and_then(|d| self.index.file_path(d.file))
            .and_then(|p| p.file_name())
            .map(|f| f.to_string_lossy().into_owned());
        if let Some(file) = variant_file {
            label.push_str(&format!(" [{file}]"));
        }
        label
    }
}
