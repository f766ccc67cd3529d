use std::collections::BTreeSet;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use rayon::prelude::*;

use crate::config::ImportGraphConfig;
use crate::graph::DepGraph;
use crate::output::BuildStats;
use crate::parser::{self, languages::Grammar};
use crate::paths;
use crate::resolver::{self, FileSet};
use crate::walker;

/// Per-file result produced by one parallel worker. Counters travel with the
/// result and are summed during the reduce — workers share no mutable state.
struct FileAnalysis {
    path: String,
    callees: BTreeSet<String>,
    grammar: Option<Grammar>,
    import_count: usize,
    resolved_count: usize,
    skipped: bool,
}

/// Everything a build run produces: the graph plus its summary counters.
pub struct BuildOutcome {
    pub graph: DepGraph,
    pub stats: BuildStats,
}

/// Run the full build phase: discover, parse, resolve, and merge into a
/// fresh dependency graph. Persistence is the caller's concern.
///
/// Discovery is sequential; per-file parsing and resolution fan out over a
/// rayon worker pool, since each file's analysis depends only on its own
/// content and the read-only discovered file set. Results merge by
/// (caller, callee) identity, so completion order is irrelevant.
///
/// No single-file failure aborts the build — the worst outcome is an
/// under-connected graph for that file.
pub fn build_graph(
    root: &Path,
    config: &ImportGraphConfig,
    verbose: bool,
) -> Result<BuildOutcome> {
    let started = Instant::now();

    let files = walker::discover_files(root, config, verbose)?;
    let file_set = FileSet::from_paths(&files);

    let analyses: Vec<FileAnalysis> = files
        .par_iter()
        .map(|rel| analyze_file(root, rel, &file_set, verbose))
        .collect();

    let mut graph = DepGraph::new();
    let mut stats = BuildStats::default();

    for analysis in analyses {
        graph.add_file(&analysis.path);
        for callee in &analysis.callees {
            graph.add_edge(&analysis.path, callee);
        }

        stats.file_count += 1;
        stats.import_count += analysis.import_count;
        stats.resolved_imports += analysis.resolved_count;
        stats.external_imports += analysis.import_count - analysis.resolved_count;
        if analysis.skipped {
            stats.skipped += 1;
        }
        match analysis.grammar {
            Some(Grammar::Python) => stats.python_files += 1,
            Some(_) => stats.js_ts_files += 1,
            None => {}
        }
    }

    stats.edge_count = graph.edge_count();
    stats.elapsed_secs = started.elapsed().as_secs_f64();

    Ok(BuildOutcome { graph, stats })
}

/// Analyze one file: read, extract import statements, resolve each against
/// the discovered file set. Read and parse failures degrade to an empty
/// import set with a stderr diagnostic.
fn analyze_file(root: &Path, rel: &str, file_set: &FileSet, verbose: bool) -> FileAnalysis {
    let ext = paths::extension(rel);
    let grammar = Grammar::from_extension(ext);

    let mut analysis = FileAnalysis {
        path: rel.to_owned(),
        callees: BTreeSet::new(),
        grammar,
        import_count: 0,
        resolved_count: 0,
        skipped: false,
    };

    // Non-source files are nodes only; nothing to read or parse.
    if grammar.is_none() {
        return analysis;
    }

    let source = match std::fs::read(root.join(rel)) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("warning: failed to read {rel}: {err}");
            analysis.skipped = true;
            return analysis;
        }
    };

    let imports = match parser::extract_file_imports(ext, &source) {
        Ok(imports) => imports,
        Err(err) => {
            eprintln!("warning: failed to parse {rel}: {err}");
            analysis.skipped = true;
            return analysis;
        }
    };

    for stmt in &imports {
        analysis.import_count += 1;
        let resolved = resolver::resolve_import(stmt, rel, file_set);
        if resolved.is_empty() {
            // External or standard-library import — expected, silent.
            continue;
        }
        analysis.resolved_count += 1;
        if verbose {
            for target in &resolved {
                eprintln!("  resolve: {rel} imports {:?} -> {target}", stmt.raw());
            }
        }
        analysis.callees.extend(resolved);
    }

    analysis
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn build(dir: &TempDir) -> BuildOutcome {
        build_graph(dir.path(), &ImportGraphConfig::default(), false).unwrap()
    }

    #[test]
    fn test_python_package_expansion_edges() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("pkg")).unwrap();
        fs::write(dir.path().join("x.py"), "import pkg\n").unwrap();
        fs::write(dir.path().join("pkg").join("__init__.py"), "").unwrap();
        fs::write(dir.path().join("pkg").join("sub.py"), "").unwrap();

        let outcome = build(&dir);
        assert_eq!(
            outcome.graph.callees("x.py"),
            vec!["pkg/__init__.py", "pkg/sub.py"]
        );
        assert_eq!(outcome.graph.callers("pkg/sub.py"), vec!["x.py"]);
    }

    #[test]
    fn test_external_imports_produce_no_edges() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("x.py"), "import numpy\nimport os.path\n").unwrap();

        let outcome = build(&dir);
        assert!(outcome.graph.callees("x.py").is_empty());
        assert_eq!(outcome.stats.import_count, 2);
        assert_eq!(outcome.stats.external_imports, 2);
        assert_eq!(outcome.stats.resolved_imports, 0);
    }

    #[test]
    fn test_js_extension_probe_prefers_ts() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("a")).unwrap();
        fs::write(
            dir.path().join("a").join("b.ts"),
            "import { c } from './c';\n",
        )
        .unwrap();
        fs::write(dir.path().join("a").join("c.ts"), "export const c = 1;\n").unwrap();
        fs::write(dir.path().join("a").join("c.js"), "export const c = 1;\n").unwrap();

        let outcome = build(&dir);
        assert_eq!(outcome.graph.callees("a/b.ts"), vec!["a/c.ts"]);
    }

    #[test]
    fn test_duplicate_imports_collapse_to_one_edge() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("x.py"),
            "import util\nfrom util import thing\n",
        )
        .unwrap();
        fs::write(dir.path().join("util.py"), "").unwrap();

        let outcome = build(&dir);
        assert_eq!(outcome.graph.callees("x.py"), vec!["util.py"]);
        assert_eq!(outcome.stats.edge_count, 1);
        // Both statements resolved, but the store collapses them.
        assert_eq!(outcome.stats.resolved_imports, 2);
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("pkg")).unwrap();
        fs::write(dir.path().join("x.py"), "import pkg\nimport numpy\n").unwrap();
        fs::write(dir.path().join("pkg").join("__init__.py"), "import sub\n").unwrap();
        fs::write(dir.path().join("pkg").join("sub.py"), "").unwrap();

        let first = build(&dir);
        let second = build(&dir);
        assert_eq!(first.graph.edges(), second.graph.edges());
        assert_eq!(first.graph.files(), second.graph.files());
    }

    #[test]
    fn test_non_source_files_are_nodes_without_edges() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("README.md"), "# docs").unwrap();

        let outcome = build(&dir);
        assert!(outcome.graph.contains_file("README.md"));
        assert_eq!(outcome.stats.edge_count, 0);
        assert_eq!(outcome.stats.python_files, 0);
    }

    #[test]
    fn test_blacklisted_tree_contributes_nothing() {
        let dir = TempDir::new().unwrap();
        let nm = dir.path().join("node_modules").join("react");
        fs::create_dir_all(&nm).unwrap();
        fs::write(nm.join("index.js"), "import x from './x';\n").unwrap();
        fs::write(dir.path().join("app.js"), "import react from 'react';\n").unwrap();

        let outcome = build(&dir);
        assert_eq!(outcome.graph.files(), vec!["app.js"]);
        assert_eq!(outcome.stats.edge_count, 0);
    }
}
