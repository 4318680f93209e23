use std::collections::BTreeSet;

/// Import-list maintenance seam.
///
/// The rewriter reports which symbols generated statements start
/// needing (`ensure_imported`) and which construct markers become
/// unused (`ensure_not_imported`); actually editing the compilation
/// unit's import list is the driver's job.
pub trait ImportRegistry {
    fn ensure_imported(&mut self, symbol: &str);
    fn ensure_not_imported(&mut self, symbol: &str);
}

/// Recording registry: collects requested additions and removals as
/// sorted, de-duplicated sets. Usable directly by drivers that apply
/// import edits after the rewrite, and by tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectedImports {
    pub added: BTreeSet<String>,
    pub removed: BTreeSet<String>,
}

impl CollectedImports {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ImportRegistry for CollectedImports {
    fn ensure_imported(&mut self, symbol: &str) {
        self.removed.remove(symbol);
        self.added.insert(symbol.to_string());
    }

    fn ensure_not_imported(&mut self, symbol: &str) {
        self.added.remove(symbol);
        self.removed.insert(symbol.to_string());
    }
}
