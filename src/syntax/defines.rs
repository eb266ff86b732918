use rustc_hash::FxHashSet;
use smol_str::SmolStr;

/// The set of active preprocessor symbols.
///
/// Threaded mutably through a scan so later files observe earlier
/// `` `define``/`` `undef`` directives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefineSet {
    names: FxHashSet<SmolStr>,
}

impl DefineSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<SmolStr>) -> bool {
        self.names.insert(name.into())
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.names.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Defined names in sorted order.
    pub fn sorted(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.names.iter().map(SmolStr::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<S: Into<SmolStr>> FromIterator<S> for DefineSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<SmolStr>> Extend<S> for DefineSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.names.extend(iter.into_iter().map(Into::into));
    }
}
