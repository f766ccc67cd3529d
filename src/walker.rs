use std::path::Path;

use crate::config::ImportGraphConfig;
use crate::paths;

/// Walk a project directory and collect every regular file as a normalized
/// project-relative path.
///
/// Directory-name patterns prune the walk before descent, so a blacklisted
/// subtree is never visited. File-name patterns drop individual files. Both
/// are matched against the bare name only, not the full path.
///
/// Discovery is extension-agnostic: every surviving file becomes a graph
/// node; whether it is parsed is decided later by extension dispatch.
///
/// When `verbose` is true, each discovered path is printed to stderr.
///
/// The returned list is sorted and deduplicated — a stable order for
/// reproducible builds, though nothing downstream depends on it.
pub fn discover_files(
    root: &Path,
    config: &ImportGraphConfig,
    verbose: bool,
) -> anyhow::Result<Vec<String>> {
    let dir_patterns = compile_patterns(&config.dir_patterns());
    let file_patterns = compile_patterns(&config.file_patterns());

    let walker = ignore::WalkBuilder::new(root)
        // No gitignore/hidden filtering: the blacklist patterns are the only
        // exclusion mechanism, matching the contract of this walk.
        .standard_filters(false)
        .filter_entry(move |entry| {
            if entry.depth() == 0 {
                return true;
            }
            let name = match entry.file_name().to_str() {
                Some(n) => n,
                None => {
                    eprintln!(
                        "warning: skipping non-UTF-8 name {:?}",
                        entry.file_name()
                    );
                    return false;
                }
            };
            let is_dir = entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false);
            if is_dir {
                !matches_any(&dir_patterns, name)
            } else {
                !matches_any(&file_patterns, name)
            }
        })
        .build();

    let mut files = Vec::new();
    for result in walker {
        let entry = match result {
            Ok(e) => e,
            Err(err) => {
                eprintln!("warning: {err}");
                continue;
            }
        };

        if entry.file_type().map(|ft| ft.is_dir()).unwrap_or(true) {
            continue;
        }

        let relative = match entry.path().strip_prefix(root) {
            Ok(r) => r,
            Err(_) => continue,
        };

        let identity = paths::to_identity(relative);
        if identity.is_empty() {
            continue;
        }

        if verbose {
            eprintln!("{identity}");
        }
        files.push(identity);
    }

    files.sort();
    files.dedup();
    Ok(files)
}

/// Compile glob patterns, warning about (and skipping) invalid ones.
fn compile_patterns(patterns: &[String]) -> Vec<glob::Pattern> {
    let mut compiled = Vec::with_capacity(patterns.len());
    for pattern in patterns {
        match glob::Pattern::new(pattern) {
            Ok(p) => compiled.push(p),
            Err(err) => eprintln!("warning: invalid exclude pattern {pattern:?}: {err}"),
        }
    }
    compiled
}

fn matches_any(patterns: &[glob::Pattern], name: &str) -> bool {
    patterns.iter().any(|p| p.matches(name))
}
