use std::path::Path;

/// Lexically normalize a forward-slash path: drop empty and `.` segments,
/// resolve `..` against preceding segments. `..` that would climb above the
/// project root is dropped — file identities never contain dot segments.
pub fn normalize(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    segments.join("/")
}

/// Join a specifier onto a base directory and normalize the result.
/// An empty base means the project root.
pub fn join_normalized(base: &str, relative: &str) -> String {
    if base.is_empty() {
        normalize(relative)
    } else {
        normalize(&format!("{base}/{relative}"))
    }
}

/// Join a specifier onto a base directory, resolving `.` and `..` lexically,
/// but fail when `..` climbs above the project root. A path that escapes the
/// root lies outside the project and can never name a project file.
pub fn join_within(base: &str, relative: &str) -> Option<String> {
    let mut segments: Vec<&str> = if base.is_empty() {
        Vec::new()
    } else {
        base.split('/').collect()
    };
    for segment in relative.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop()?;
            }
            other => segments.push(other),
        }
    }
    Some(segments.join("/"))
}

/// The directory portion of a project-relative path ("" for root-level files).
pub fn parent_dir(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[..idx],
        None => "",
    }
}

/// The file extension of a project-relative path, without the dot.
pub fn extension(path: &str) -> &str {
    let name = match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    };
    match name.rfind('.') {
        Some(idx) if idx > 0 => &name[idx + 1..],
        _ => "",
    }
}

/// Convert a filesystem path (relative to the project root) into the
/// forward-slash identity used throughout the graph.
pub fn to_identity(path: &Path) -> String {
    let joined = path
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    normalize(&joined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_normalize_drops_dot_segments() {
        assert_eq!(normalize("a/./b.py"), "a/b.py");
        assert_eq!(normalize("./a/b.py"), "a/b.py");
        assert_eq!(normalize("a//b.py"), "a/b.py");
    }

    #[test]
    fn test_normalize_resolves_parent_segments() {
        assert_eq!(normalize("a/b/../c.ts"), "a/c.ts");
        assert_eq!(normalize("a/../../c.ts"), "c.ts");
    }

    #[test]
    fn test_join_normalized() {
        assert_eq!(join_normalized("a", "./c"), "a/c");
        assert_eq!(join_normalized("a/b", "../c"), "a/c");
        assert_eq!(join_normalized("", "./c"), "c");
    }

    #[test]
    fn test_join_within_stays_inside_root() {
        assert_eq!(join_within("a", "./c"), Some("a/c".to_string()));
        assert_eq!(join_within("a/b", "../c"), Some("a/c".to_string()));
        assert_eq!(join_within("", "./c"), Some("c".to_string()));
    }

    #[test]
    fn test_join_within_rejects_root_escape() {
        assert_eq!(join_within("a", "../../util"), None);
        assert_eq!(join_within("", "../util"), None);
        assert_eq!(join_within("a/b", "../../../x"), None);
    }

    #[test]
    fn test_parent_dir() {
        assert_eq!(parent_dir("a/b/c.py"), "a/b");
        assert_eq!(parent_dir("c.py"), "");
    }

    #[test]
    fn test_extension() {
        assert_eq!(extension("a/b.tsx"), "tsx");
        assert_eq!(extension("Makefile"), "");
        assert_eq!(extension("pkg/__init__.py"), "py");
        assert_eq!(extension("a/.gitignore"), "");
    }

    #[test]
    fn test_to_identity() {
        let p = PathBuf::from("a").join("b").join("c.py");
        assert_eq!(to_identity(&p), "a/b/c.py");
    }
}
