use std::io::Write;
use std::path::{Path, PathBuf};

use crate::graph::DepGraph;

/// Current store format version. Bump when the serialized graph layout
/// changes — bincode has no schema evolution, so a mismatch forces a rebuild.
pub const STORE_VERSION: u32 = 1;

/// Store directory name (created in the project root).
pub const STORE_DIR: &str = ".import-graph";
/// Graph file name within STORE_DIR.
pub const STORE_FILE: &str = "graph.bin";

/// Envelope wrapping the serialized graph with version metadata. The graph is
/// rebuilt wholesale on every build run, so no per-file staleness tracking is
/// carried.
#[derive(serde::Serialize, serde::Deserialize)]
pub struct GraphEnvelope {
    pub version: u32,
    pub project_root: PathBuf,
    pub graph: DepGraph,
}

/// The graph file path for a project: `<project_root>/.import-graph/graph.bin`
pub fn store_path(project_root: &Path) -> PathBuf {
    project_root.join(STORE_DIR).join(STORE_FILE)
}

/// Persist the graph atomically using bincode serialization.
///
/// Writes to a temp file in the store directory first, then renames onto the
/// final path — readers never observe a partially written graph.
pub fn save(project_root: &Path, graph: &DepGraph) -> anyhow::Result<()> {
    let store_dir = project_root.join(STORE_DIR);
    std::fs::create_dir_all(&store_dir)?;

    let envelope = GraphEnvelope {
        version: STORE_VERSION,
        project_root: project_root.to_path_buf(),
        graph: graph.clone(),
    };

    let target = store_path(project_root);
    let mut tmp = tempfile::NamedTempFile::new_in(&store_dir)?;
    bincode::serde::encode_into_std_write(&envelope, &mut tmp, bincode::config::standard())?;
    tmp.as_file().flush()?;
    tmp.persist(&target)?;

    Ok(())
}

/// Load the persisted graph. Returns None if the store file doesn't exist,
/// the version doesn't match, or the bytes don't decode (corrupt store) —
/// the caller decides whether that means "run build first" or "rebuild".
pub fn load(project_root: &Path) -> Option<GraphEnvelope> {
    let target = store_path(project_root);
    let bytes = std::fs::read(&target).ok()?;
    let result =
        bincode::serde::decode_from_slice::<GraphEnvelope, _>(&bytes, bincode::config::standard());
    match result {
        Ok((envelope, _)) if envelope.version == STORE_VERSION => Some(envelope),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut graph = DepGraph::new();
        graph.add_edge("x.py", "pkg/__init__.py");
        graph.add_file("lonely.md");

        save(dir.path(), &graph).unwrap();

        let loaded = load(dir.path()).expect("store should load");
        assert_eq!(loaded.version, STORE_VERSION);
        assert_eq!(loaded.project_root, dir.path());
        assert_eq!(loaded.graph.file_count(), 3);
        assert_eq!(loaded.graph.callees("x.py"), vec!["pkg/__init__.py"]);
        assert_eq!(loaded.graph.callers("pkg/__init__.py"), vec!["x.py"]);
    }

    #[test]
    fn test_load_missing_store_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(dir.path()).is_none());
    }

    #[test]
    fn test_load_corrupt_store_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let store_dir = dir.path().join(STORE_DIR);
        std::fs::create_dir_all(&store_dir).unwrap();
        std::fs::write(store_dir.join(STORE_FILE), b"not a graph").unwrap();
        assert!(load(dir.path()).is_none());
    }

    #[test]
    fn test_save_overwrites_previous_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut first = DepGraph::new();
        first.add_edge("a.py", "b.py");
        save(dir.path(), &first).unwrap();

        let second = DepGraph::new();
        save(dir.path(), &second).unwrap();

        let loaded = load(dir.path()).unwrap();
        assert_eq!(loaded.graph.file_count(), 0);
        assert_eq!(loaded.graph.edge_count(), 0);
    }
}
