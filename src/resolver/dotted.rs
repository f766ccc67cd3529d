use std::collections::BTreeSet;

use super::FileSet;
use crate::paths;

/// Resolve a dotted Python module specifier (`a.b.c`) to concrete project
/// files.
///
/// Dots become path separators, then the candidate is probed against two
/// bases — the importer's own directory and the project root — accumulating
/// all matches rather than stopping at the first. Per base:
///
/// 1. `<candidate>.py` as a file;
/// 2. otherwise, a directory `<candidate>` carrying an `__init__.py` marker,
///    which expands to every `.py` file recursively beneath it.
///
/// A module matched under both bases collapses to one entry — candidates are
/// normalized paths collected into a set. A module that matches nowhere is an
/// external or standard-library import and resolves to the empty set.
pub fn resolve_dotted(importer: &str, module: &str, files: &FileSet) -> BTreeSet<String> {
    let candidate = module.replace('.', "/");
    let mut resolved = BTreeSet::new();

    probe_base(paths::parent_dir(importer), &candidate, files, &mut resolved);
    probe_base("", &candidate, files, &mut resolved);

    resolved
}

/// Probe one base directory for a module candidate, inserting matches.
fn probe_base(base: &str, candidate: &str, files: &FileSet, out: &mut BTreeSet<String>) {
    let module_path = paths::join_normalized(base, candidate);
    if module_path.is_empty() {
        return;
    }

    let as_file = format!("{module_path}.py");
    if files.contains(&as_file) {
        out.insert(as_file);
    } else if files.contains(&format!("{module_path}/__init__.py")) {
        out.extend(files.py_files_under(&module_path));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fileset(paths: &[&str]) -> FileSet {
        FileSet::from_paths(&paths.iter().map(|s| s.to_string()).collect::<Vec<_>>())
    }

    fn resolved(importer: &str, module: &str, files: &FileSet) -> Vec<String> {
        resolve_dotted(importer, module, files).into_iter().collect()
    }

    #[test]
    fn test_sibling_module_file() {
        let files = fileset(&["app/main.py", "app/db.py"]);
        assert_eq!(resolved("app/main.py", "db", &files), vec!["app/db.py"]);
    }

    #[test]
    fn test_root_relative_module_file() {
        let files = fileset(&["app/main.py", "settings.py"]);
        assert_eq!(
            resolved("app/main.py", "settings", &files),
            vec!["settings.py"]
        );
    }

    #[test]
    fn test_dotted_path_conversion() {
        let files = fileset(&["main.py", "pkg/sub/mod.py", "pkg/__init__.py"]);
        assert_eq!(
            resolved("main.py", "pkg.sub.mod", &files),
            vec!["pkg/sub/mod.py"]
        );
    }

    #[test]
    fn test_package_expansion_via_init_marker() {
        let files = fileset(&[
            "x.py",
            "pkg/__init__.py",
            "pkg/sub.py",
            "pkg/deep/leaf.py",
            "pkg/notes.txt",
        ]);
        assert_eq!(
            resolved("x.py", "pkg", &files),
            vec!["pkg/__init__.py", "pkg/deep/leaf.py", "pkg/sub.py"]
        );
    }

    #[test]
    fn test_directory_without_init_is_not_a_package() {
        let files = fileset(&["x.py", "pkg/sub.py"]);
        assert!(resolved("x.py", "pkg", &files).is_empty());
    }

    #[test]
    fn test_external_module_resolves_to_nothing() {
        let files = fileset(&["x.py"]);
        assert!(resolved("x.py", "numpy", &files).is_empty());
        assert!(resolved("x.py", "os.path", &files).is_empty());
    }

    #[test]
    fn test_importer_and_root_matches_accumulate() {
        // `import util` from app/main.py can name both app/util.py and
        // util.py — both bases are probed and both matches are kept.
        let files = fileset(&["app/main.py", "app/util.py", "util.py"]);
        assert_eq!(
            resolved("app/main.py", "util", &files),
            vec!["app/util.py", "util.py"]
        );
    }

    #[test]
    fn test_root_level_importer_deduplicates_bases() {
        // For a root-level importer both bases are the project root; the
        // match must appear once, not twice.
        let files = fileset(&["main.py", "util.py"]);
        assert_eq!(resolved("main.py", "util", &files), vec!["util.py"]);
    }

    #[test]
    fn test_file_match_shadows_package_at_same_base() {
        // Mirrors the if/elif probe: when pkg.py exists, the pkg/ package
        // directory at the same base is not expanded.
        let files = fileset(&["x.py", "pkg.py", "pkg/__init__.py", "pkg/sub.py"]);
        assert_eq!(resolved("x.py", "pkg", &files), vec!["pkg.py"]);
    }
}
