use serde::Serialize;

use crate::graph::DepGraph;
use crate::parser::languages::Grammar;
use crate::paths;

/// Summary of a persisted graph, computed on demand for `stats`.
#[derive(Debug, Serialize)]
pub struct GraphStats {
    pub file_count: usize,
    pub edge_count: usize,
    pub python_files: usize,
    pub js_ts_files: usize,
    pub other_files: usize,
    pub isolated_files: usize,
}

impl GraphStats {
    pub fn compute(graph: &DepGraph) -> Self {
        let mut stats = Self {
            file_count: graph.file_count(),
            edge_count: graph.edge_count(),
            python_files: 0,
            js_ts_files: 0,
            other_files: 0,
            isolated_files: 0,
        };

        for file in graph.files() {
            match Grammar::from_extension(paths::extension(&file)) {
                Some(Grammar::Python) => stats.python_files += 1,
                Some(_) => stats.js_ts_files += 1,
                None => stats.other_files += 1,
            }
            if graph.callees(&file).is_empty() && graph.callers(&file).is_empty() {
                stats.isolated_files += 1;
            }
        }

        stats
    }
}

/// Print graph stats, human-readable or JSON.
pub fn print_graph_stats(stats: &GraphStats, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(stats)?);
        return Ok(());
    }
    println!(
        "{} files ({} Python, {} JS/TS, {} other)",
        stats.file_count, stats.python_files, stats.js_ts_files, stats.other_files
    );
    println!("{} dependency edges", stats.edge_count);
    println!("{} isolated files", stats.isolated_files);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_classifies_by_extension() {
        let mut graph = DepGraph::new();
        graph.add_edge("a.py", "b.py");
        graph.add_file("c.ts");
        graph.add_file("README.md");

        let stats = GraphStats::compute(&graph);
        assert_eq!(stats.file_count, 4);
        assert_eq!(stats.edge_count, 1);
        assert_eq!(stats.python_files, 2);
        assert_eq!(stats.js_ts_files, 1);
        assert_eq!(stats.other_files, 1);
    }

    #[test]
    fn test_isolated_files_have_no_edges_either_way() {
        let mut graph = DepGraph::new();
        graph.add_edge("a.py", "b.py");
        graph.add_file("lonely.md");

        let stats = GraphStats::compute(&graph);
        assert_eq!(stats.isolated_files, 1);
    }
}
