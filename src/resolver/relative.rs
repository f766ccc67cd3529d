use super::FileSet;
use crate::paths;

/// Extension probe order for extensionless JS/TS specifiers. Deliberately
/// TypeScript-first: when a `.ts` source and its emitted `.js` sibling both
/// exist, the edge targets the source, the way TS toolchains shadow build
/// output. A `.js`-first order would flip which file such an edge targets.
const EXTENSION_PROBES: &[&str] = &[".ts", ".tsx", ".js", ".jsx"];

/// Resolve a JS/TS import specifier relative to the importing file.
///
/// Only specifiers beginning with `./` or `../` are project-internal; bare
/// package names (`react`, `@org/pkg`, `lodash/merge`) are external by
/// design and resolve to nothing.
///
/// The specifier is joined onto the importer's directory, resolved lexically,
/// and probed with each extension in order — the first hit in the discovered
/// file set wins, so at most one file is returned. A specifier already
/// naming an existing file verbatim (extension included) also matches.
///
/// A specifier whose `..` segments climb above the project root points at a
/// file outside the project and resolves to nothing, even when a root-level
/// file happens to share the trailing name.
pub fn resolve_relative(importer: &str, specifier: &str, files: &FileSet) -> Option<String> {
    if !specifier.starts_with("./") && !specifier.starts_with("../") {
        return None;
    }

    let base = paths::parent_dir(importer);
    let stem = paths::join_within(base, specifier)?;
    if stem.is_empty() {
        return None;
    }

    if files.contains(&stem) {
        return Some(stem);
    }

    for ext in EXTENSION_PROBES {
        let candidate = format!("{stem}{ext}");
        if files.contains(&candidate) {
            return Some(candidate);
        }
    }

    None
}
