use std::collections::HashMap;

use petgraph::Directed;
use petgraph::Direction;
use petgraph::stable_graph::{NodeIndex, StableGraph};
use serde::{Deserialize, Serialize};

/// A file node: the normalized project-relative path is the node's whole
/// identity. Resolution is structural, so no content hash is carried.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileNode {
    pub path: String,
}

/// The file-level dependency graph: a directed petgraph StableGraph with an
/// O(1) path lookup index. An edge caller → callee means "caller's source
/// contains an import that resolves to callee".
#[derive(Clone, Serialize, Deserialize)]
pub struct DepGraph {
    graph: StableGraph<FileNode, (), Directed>,
    path_index: HashMap<String, NodeIndex>,
}

impl DepGraph {
    pub fn new() -> Self {
        Self {
            graph: StableGraph::new(),
            path_index: HashMap::new(),
        }
    }

    /// Add a file node. Insert-if-absent: re-adding an existing path returns
    /// the existing index.
    pub fn add_file(&mut self, path: &str) -> NodeIndex {
        if let Some(&existing) = self.path_index.get(path) {
            return existing;
        }
        let idx = self.graph.add_node(FileNode {
            path: path.to_owned(),
        });
        self.path_index.insert(path.to_owned(), idx);
        idx
    }

    /// Add a caller → callee edge, inserting both endpoints as nodes if
    /// needed. Duplicate (caller, callee) pairs are a no-op; self-loops are
    /// stored as-is. Returns true if the edge was newly inserted.
    pub fn add_edge(&mut self, caller: &str, callee: &str) -> bool {
        let from = self.add_file(caller);
        let to = self.add_file(callee);
        if self.graph.find_edge(from, to).is_some() {
            return false;
        }
        self.graph.add_edge(from, to, ());
        true
    }

    pub fn contains_file(&self, path: &str) -> bool {
        self.path_index.contains_key(path)
    }

    /// Files this file imports, sorted. Unknown files have no callees.
    pub fn callees(&self, path: &str) -> Vec<String> {
        self.neighbors(path, Direction::Outgoing)
    }

    /// Files importing this file, sorted. Unknown files have no callers.
    pub fn callers(&self, path: &str) -> Vec<String> {
        self.neighbors(path, Direction::Incoming)
    }

    fn neighbors(&self, path: &str, direction: Direction) -> Vec<String> {
        let idx = match self.path_index.get(path) {
            Some(&idx) => idx,
            None => return Vec::new(),
        };
        let mut found: Vec<String> = self
            .graph
            .neighbors_directed(idx, direction)
            .map(|n| self.graph[n].path.clone())
            .collect();
        found.sort();
        found.dedup();
        found
    }

    pub fn file_count(&self) -> usize {
        self.path_index.len()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// All file paths in the graph, sorted — the authoritative list of known
    /// project files for downstream consumers.
    pub fn files(&self) -> Vec<String> {
        let mut all: Vec<String> = self.path_index.keys().cloned().collect();
        all.sort();
        all
    }

    /// All (caller, callee) pairs, sorted. Used for idempotency checks and
    /// JSON output.
    pub fn edges(&self) -> Vec<(String, String)> {
        let mut all: Vec<(String, String)> = self
            .graph
            .edge_indices()
            .filter_map(|e| self.graph.edge_endpoints(e))
            .map(|(a, b)| (self.graph[a].path.clone(), self.graph[b].path.clone()))
            .collect();
        all.sort();
        all
    }
}

impl Default for DepGraph {
    fn default() -> Self {
        Self::new()
    }
}
