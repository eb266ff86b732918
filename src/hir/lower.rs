//! Lowering of parser byte ranges into located model types.

use std::sync::Arc;

use crate::base::{FileId, LineIndex, TextRange};
use crate::parser::{BindingSyntax, InstanceSyntax, ModuleSyntax, PortSyntax};

use super::model::{InstanceReference, ModuleDefinition, PortBinding, PortDeclaration};

/// Converts ranges for one file. The line table is built once and reused
/// for every location in that file.
pub(crate) struct Lowerer {
    file: FileId,
    lines: LineIndex,
}

impl Lowerer {
    pub(crate) fn new(file: FileId, text: &str) -> Self {
        Self {
            file,
            lines: LineIndex::new(text),
        }
    }

    pub(crate) fn lower_modules(&self, modules: Vec<ModuleSyntax>) -> Vec<ModuleDefinition> {
        modules.into_iter().map(|m| self.lower_module(m)).collect()
    }

    fn lower_module(&self, module: ModuleSyntax) -> ModuleDefinition {
        ModuleDefinition {
            name: Arc::from(module.name),
            file: self.file,
            location: self.location(module.header_range),
            extent: self.location(module.header_range.cover(module.body_range)),
            ports: module.ports.into_iter().map(|p| self.lower_port(p)).collect(),
            instances: module
                .instances
                .into_iter()
                .map(|i| self.lower_instance(i))
                .collect(),
        }
    }

    fn lower_port(&self, port: PortSyntax) -> PortDeclaration {
        PortDeclaration {
            name: Arc::from(port.name),
            direction: port.direction,
            range: port.range.map(Arc::from),
            location: self.location(port.name_range),
        }
    }

    fn lower_instance(&self, instance: InstanceSyntax) -> InstanceReference {
        InstanceReference {
            module_type: Arc::from(instance.module_type),
            instance_name: Arc::from(instance.instance_name),
            location: self.location(instance.type_range.cover(instance.name_range)),
            bindings: instance
                .bindings
                .into_iter()
                .map(|b| self.lower_binding(b))
                .collect(),
        }
    }

    fn lower_binding(&self, binding: BindingSyntax) -> PortBinding {
        PortBinding {
            port: Arc::from(binding.port),
            expression: Arc::from(binding.expression),
            location: self.location(binding.port_range),
            expression_location: self.location(binding.expression_range),
        }
    }

    fn location(&self, range: TextRange) -> crate::base::SourceLocation {
        self.lines.location(self.file, range)
    }
}
