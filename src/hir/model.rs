//! Located design model produced by one scan.

use std::sync::Arc;

use crate::base::{FileId, SourceLocation};

pub use crate::parser::PortDirection;

/// A port declared in a module header (or resolved from a body
/// declaration).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortDeclaration {
    pub name: Arc<str>,
    pub direction: PortDirection,
    /// Bit range as written, e.g. `[7:0]`.
    pub range: Option<Arc<str>>,
    pub location: SourceLocation,
}

/// `.port(expression)` inside an instantiation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortBinding {
    pub port: Arc<str>,
    /// Raw connected text, trimmed. Empty for `.port()`.
    pub expression: Arc<str>,
    /// Location of the port name.
    pub location: SourceLocation,
    pub expression_location: SourceLocation,
}

/// A named use of a module type inside another module's body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceReference {
    pub module_type: Arc<str>,
    pub instance_name: Arc<str>,
    /// From the type name through the instance name.
    pub location: SourceLocation,
    /// Bindings in textual order.
    pub bindings: Vec<PortBinding>,
}

impl InstanceReference {
    pub fn binding(&self, port: &str) -> Option<&PortBinding> {
        self.bindings.iter().find(|b| &*b.port == port)
    }
}

/// One `module ... endmodule` definition.
///
/// Modules hold no reference to where they are instantiated; all such
/// lookups go through [`DesignIndex`](super::DesignIndex) by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDefinition {
    pub name: Arc<str>,
    pub file: FileId,
    /// The `module NAME` keyword span.
    pub location: SourceLocation,
    /// From the `module` keyword to the end of the body.
    pub extent: SourceLocation,
    pub ports: Vec<PortDeclaration>,
    pub instances: Vec<InstanceReference>,
}

impl ModuleDefinition {
    pub fn port(&self, name: &str) -> Option<&PortDeclaration> {
        self.ports.iter().find(|p| &*p.name == name)
    }

    pub fn instance(&self, name: &str) -> Option<&InstanceReference> {
        self.instances.iter().find(|i| &*i.instance_name == name)
    }
}
