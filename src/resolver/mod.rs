pub mod dotted;
pub mod relative;

use std::collections::{BTreeSet, HashSet};

use crate::parser::ImportStmt;

/// The read-only set of discovered project files that resolution probes
/// against. Resolution is purely structural: a specifier either names a path
/// in this set or it is an external dependency — the filesystem is never
/// consulted.
pub struct FileSet {
    files: HashSet<String>,
}

impl FileSet {
    /// Build the index from normalized project-relative paths.
    pub fn from_paths(paths: &[String]) -> Self {
        Self {
            files: paths.iter().cloned().collect(),
        }
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains(path)
    }

    /// Every `.py` file recursively inside `dir` (package expansion).
    /// Sorted for deterministic edge insertion.
    pub fn py_files_under(&self, dir: &str) -> Vec<String> {
        let prefix = format!("{dir}/");
        let mut found: Vec<String> = self
            .files
            .iter()
            .filter(|f| f.starts_with(&prefix) && f.ends_with(".py"))
            .cloned()
            .collect();
        found.sort();
        found
    }
}

/// Resolve one import statement from the perspective of `importer` (a
/// normalized project-relative path) to the set of project files it denotes.
///
/// An empty result is the normal outcome for external and standard-library
/// imports — never an error. Resolved paths are normalized and deduplicated,
/// so overlapping resolution rules that reach the same real file collapse to
/// one entry.
pub fn resolve_import(stmt: &ImportStmt, importer: &str, files: &FileSet) -> BTreeSet<String> {
    match stmt {
        ImportStmt::Esm { specifier } => relative::resolve_relative(importer, specifier, files)
            .into_iter()
            .collect(),
        ImportStmt::PlainImport { module } | ImportStmt::FromImport { module } => {
            dotted::resolve_dotted(importer, module, files)
        }
    }
}
