//! Find every instantiation of a module.

use std::sync::Arc;

use crate::base::SourceLocation;
use crate::hir::DesignIndex;

/// Result of a find-instantiations request.
#[derive(Clone, Debug, Default)]
pub struct ReferenceResult {
    /// Definitions first (when requested), then instances in discovery order.
    pub references: Vec<Reference>,
    pub include_declaration: bool,
}

impl ReferenceResult {
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    pub fn len(&self) -> usize {
        self.references.len()
    }
}

/// One definition or instantiation site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reference {
    /// The enclosing module for an instance, the module itself for a
    /// definition.
    pub parent: Arc<str>,
    /// `None` for a definition.
    pub instance_name: Option<Arc<str>>,
    pub location: SourceLocation,
    pub is_definition: bool,
}

/// Every instance whose type is `module`, across the whole index.
pub fn find_instantiations(
    index: &DesignIndex,
    module: &str,
    include_declaration: bool,
) -> ReferenceResult {
    let mut references = Vec::new();

    if include_declaration {
        references.extend(index.modules_named(module).into_iter().map(|def| Reference {
            parent: def.name.clone(),
            instance_name: None,
            location: def.location,
            is_definition: true,
        }));
    }

    references.extend(
        index
            .instances()
            .filter(|(_, inst)| &*inst.module_type == module)
            .map(|(parent, inst)| Reference {
                parent: parent.name.clone(),
                instance_name: Some(inst.instance_name.clone()),
                location: inst.location,
                is_definition: false,
            }),
    );

    ReferenceResult {
        references,
        include_declaration,
    }
}
