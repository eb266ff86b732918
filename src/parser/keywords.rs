//! Keyword tables used by the structural extractor.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

/// Words that can never name a module type or an instance.
///
/// A line such as `else foo(x);` has the same shallow shape as an
/// instantiation; rejecting either identifier when it is a keyword filters
/// most of those statements out.
pub const DEFAULT_DENYLIST: &[&str] = &[
    // declarations
    "module", "macromodule", "endmodule", "input", "output", "inout", "ref", "wire", "reg",
    "logic", "bit", "byte", "int", "integer", "shortint", "longint", "real", "shortreal",
    "realtime", "time", "string", "void", "var", "const", "signed", "unsigned", "genvar",
    "parameter", "localparam", "defparam", "specparam", "typedef", "struct", "union", "enum",
    "packed", "tri", "tri0", "tri1", "triand", "trior", "wand", "wor", "supply0", "supply1",
    "event", "chandle", "static", "automatic", "virtual", "extern", "import", "export",
    // procedural and control flow
    "assign", "deassign", "force", "release", "always", "always_ff", "always_comb",
    "always_latch", "initial", "final", "begin", "end", "if", "else", "for", "foreach", "while",
    "do", "repeat", "forever", "case", "casex", "casez", "endcase", "default", "unique",
    "unique0", "priority", "return", "break", "continue", "wait", "disable", "fork", "join",
    "join_any", "join_none", "posedge", "negedge", "edge", "or", "and", "not", "new", "this",
    "super", "null",
    // blocks
    "generate", "endgenerate", "function", "endfunction", "task", "endtask", "package",
    "endpackage", "interface", "endinterface", "modport", "class", "endclass", "program",
    "endprogram", "clocking", "endclocking", "specify", "endspecify", "table", "endtable",
    "primitive", "endprimitive", "config", "endconfig", "covergroup", "endgroup", "property",
    "endproperty", "sequence", "endsequence", "checker", "endchecker", "constraint",
    // assertions
    "assert", "assume", "cover", "restrict", "expect",
];

/// Case-insensitive keyword set consulted for both identifiers of an
/// instantiation candidate.
///
/// The default contents are [`DEFAULT_DENYLIST`]; callers may extend or
/// replace the set without touching the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordDenylist {
    words: FxHashSet<SmolStr>,
}

impl KeywordDenylist {
    /// An empty denylist that rejects nothing.
    pub fn empty() -> Self {
        Self {
            words: FxHashSet::default(),
        }
    }

    pub fn insert(&mut self, word: &str) -> bool {
        self.words.insert(SmolStr::new(word.to_ascii_lowercase()))
    }

    pub fn remove(&mut self, word: &str) -> bool {
        self.words.remove(word.to_ascii_lowercase().as_str())
    }

    pub fn contains(&self, word: &str) -> bool {
        if word.bytes().any(|b| b.is_ascii_uppercase()) {
            self.words.contains(word.to_ascii_lowercase().as_str())
        } else {
            self.words.contains(word)
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for KeywordDenylist {
    fn default() -> Self {
        DEFAULT_DENYLIST.iter().copied().collect()
    }
}

impl<'a> FromIterator<&'a str> for KeywordDenylist {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut denylist = Self::empty();
        denylist.extend(iter);
        denylist
    }
}

impl<'a> Extend<&'a str> for KeywordDenylist {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}
