//! Raw structural items located by the extractor.
//!
//! Everything here is addressed by byte ranges into the processed text;
//! `hir` lowers these into located model types.

use text_size::TextRange;

/// Direction keyword of a port declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PortDirection {
    Input,
    Output,
    Inout,
    Ref,
    #[default]
    Unknown,
}

impl PortDirection {
    /// Parse a direction keyword, ignoring ASCII case.
    pub fn from_keyword(word: &str) -> Option<Self> {
        [
            ("input", PortDirection::Input),
            ("output", PortDirection::Output),
            ("inout", PortDirection::Inout),
            ("ref", PortDirection::Ref),
        ]
        .into_iter()
        .find(|(keyword, _)| word.eq_ignore_ascii_case(keyword))
        .map(|(_, direction)| direction)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PortDirection::Input => "input",
            PortDirection::Output => "output",
            PortDirection::Inout => "inout",
            PortDirection::Ref => "ref",
            PortDirection::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for PortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `module NAME ... endmodule` region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSyntax {
    pub name: String,
    /// From the `module` keyword through the end of the name.
    pub header_range: TextRange,
    pub name_range: TextRange,
    /// From the end of the header to `endmodule` (or the next module).
    pub body_range: TextRange,
    pub ports: Vec<PortSyntax>,
    pub instances: Vec<InstanceSyntax>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortSyntax {
    pub name: String,
    pub name_range: TextRange,
    pub direction: PortDirection,
    /// Bit range as written, e.g. `[7:0]`. Never evaluated.
    pub range: Option<String>,
}

/// `TYPE [#(...)] NAME (...)` inside a module body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceSyntax {
    pub module_type: String,
    pub type_range: TextRange,
    pub instance_name: String,
    pub name_range: TextRange,
    pub bindings: Vec<BindingSyntax>,
}

/// `.port(expr)`, or `.port` which binds the net of the same name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingSyntax {
    pub port: String,
    pub port_range: TextRange,
    pub expression: String,
    pub expression_range: TextRange,
}
