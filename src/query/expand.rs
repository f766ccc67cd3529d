use std::collections::BTreeSet;

use crate::graph::DepGraph;
use crate::paths;

/// Expand a seed set by exactly one dependency hop.
///
/// The result is the seeds themselves plus, for each seed, its direct
/// callees and direct callers. Neighbors-of-neighbors are never visited —
/// only the original seeds are iterated, so a chain A → B → C expanded from
/// {A} yields {A, B}, never C.
///
/// Seed paths are normalized before lookup so `./a.py` and `a.py` name the
/// same node. Seeds absent from the graph are kept in the result but
/// contribute no neighbors.
pub fn expand_seeds(graph: &DepGraph, seeds: &[String]) -> BTreeSet<String> {
    let mut result: BTreeSet<String> = BTreeSet::new();

    for seed in seeds {
        let seed = paths::normalize(seed);
        if seed.is_empty() {
            continue;
        }
        result.extend(graph.callees(&seed));
        result.extend(graph.callers(&seed));
        result.insert(seed);
    }

    result
}
