//! All-pairs shortest-path precomputation.
//!
//! One uniform-cost search runs per source vertex and records, for every
//! reachable destination, the predecessor on a shortest path and the path
//! length in edges. Edges all cost 1, so the search visits vertices in
//! breadth-first order; the priority queue keeps it correct for any
//! non-negative cost.

use rayon::prelude::*;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::hash::Hash;
use std::time::Instant;
use wordgraph_core::config::PrecomputeConfig;
use wordgraph_core::graph::Graph;

/// Shortest-path entry for one (source, destination) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRecord<V> {
    pub destination: V,
    /// Previous vertex on the shortest path from the source.
    pub predecessor: Option<V>,
    /// Path length in edges.
    pub length: usize,
}

/// Shortest-path trees for every source: source → destination → record.
///
/// Built wholesale by [`precompute_all`] and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct PathIndex<V> {
    trees: HashMap<V, HashMap<V, PathRecord<V>>>,
}

impl<V: Eq + Hash> PartialEq for PathIndex<V> {
    fn eq(&self, other: &Self) -> bool {
        self.trees == other.trees
    }
}

impl<V: Eq + Hash> Eq for PathIndex<V> {}

/// Frontier entry ordered by path length, then by push order.
#[derive(Debug)]
struct FrontierEntry<'g, V> {
    length: usize,
    seq: usize,
    vertex: &'g V,
}

impl<V> PartialEq for FrontierEntry<'_, V> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V> Eq for FrontierEntry<'_, V> {}

impl<V> PartialOrd for FrontierEntry<'_, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V> Ord for FrontierEntry<'_, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.length
            .cmp(&other.length)
            .then(self.seq.cmp(&other.seq))
    }
}

/// Run a uniform-cost search from `source` and return the shortest-path tree
/// to every reachable vertex. The source itself has no entry.
pub fn search_from<V: Eq + Hash + Clone>(
    graph: &Graph<V>,
    source: &V,
) -> HashMap<V, PathRecord<V>> {
    let mut records: HashMap<V, PathRecord<V>> = HashMap::new();
    if !graph.contains_vertex(source) {
        return records;
    }

    let mut explored: HashSet<&V> = HashSet::new();
    let mut frontier = BinaryHeap::new();
    let mut seq = 0;
    frontier.push(Reverse(FrontierEntry {
        length: 0,
        seq,
        vertex: source,
    }));

    while let Some(Reverse(current)) = frontier.pop() {
        if explored.contains(current.vertex) {
            continue;
        }
        let next_length = current.length + 1;
        for neighbor in graph.neighbors(current.vertex).into_iter().flatten() {
            if explored.contains(neighbor) {
                continue;
            }
            // Never replace an equal or shorter recorded path.
            if records
                .get(neighbor)
                .is_some_and(|r| r.length <= next_length)
            {
                continue;
            }
            records.insert(
                neighbor.clone(),
                PathRecord {
                    destination: neighbor.clone(),
                    predecessor: Some(current.vertex.clone()),
                    length: next_length,
                },
            );
            seq += 1;
            frontier.push(Reverse(FrontierEntry {
                length: next_length,
                seq,
                vertex: neighbor,
            }));
        }
        explored.insert(current.vertex);
    }

    records
}

/// Rebuild the full path index: one search per vertex in `graph`.
///
/// With `config.parallel` the searches fan out over rayon, each producing its
/// own tree; the trees are merged into the index once every search is done.
pub fn precompute_all<V>(graph: &Graph<V>, config: &PrecomputeConfig) -> PathIndex<V>
where
    V: Eq + Hash + Clone + Send + Sync,
{
    let started = Instant::now();
    let sources: Vec<&V> = graph.vertices().collect();

    let trees = if !config.parallel {
        sources
            .iter()
            .map(|source| ((*source).clone(), search_from(graph, *source)))
            .collect()
    } else if config.threads > 0 {
        match rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .build()
        {
            Ok(pool) => pool.install(|| search_all_parallel(graph, &sources)),
            Err(e) => {
                tracing::warn!(
                    "failed to build {}-thread pool ({}), using global pool",
                    config.threads,
                    e
                );
                search_all_parallel(graph, &sources)
            }
        }
    } else {
        search_all_parallel(graph, &sources)
    };

    let index = PathIndex { trees };
    tracing::info!(
        "precomputed shortest paths from {} sources ({} reachable pairs) in {:.2?}",
        index.source_count(),
        index.pair_count(),
        started.elapsed()
    );
    index
}

fn search_all_parallel<V>(
    graph: &Graph<V>,
    sources: &[&V],
) -> HashMap<V, HashMap<V, PathRecord<V>>>
where
    V: Eq + Hash + Clone + Send + Sync,
{
    sources
        .par_iter()
        .map(|source| ((*source).clone(), search_from(graph, *source)))
        .collect()
}

impl<V: Eq + Hash + Clone> PathIndex<V> {
    /// The record for `destination` as seen from `source`, if reachable.
    pub fn record(&self, source: &V, destination: &V) -> Option<&PathRecord<V>> {
        self.trees.get(source)?.get(destination)
    }

    /// The full shortest-path tree rooted at `source`.
    pub fn tree(&self, source: &V) -> Option<&HashMap<V, PathRecord<V>>> {
        self.trees.get(source)
    }

    /// Vertices from `source` to `destination`, both inclusive.
    ///
    /// Empty when `source == destination` or when no path exists.
    pub fn shortest_path(&self, source: &V, destination: &V) -> Vec<V> {
        if source == destination {
            return Vec::new();
        }
        self.backtrace(source, destination).unwrap_or_default()
    }

    fn backtrace(&self, source: &V, destination: &V) -> Option<Vec<V>> {
        let tree = self.trees.get(source)?;
        let mut cursor = tree.get(destination)?;
        let mut path = Vec::with_capacity(cursor.length + 1);
        path.push(destination.clone());
        while let Some(prev) = &cursor.predecessor {
            path.push(prev.clone());
            if prev == source {
                break;
            }
            cursor = tree.get(prev)?;
        }
        path.reverse();
        Some(path)
    }

    /// Path length in edges from `source` to `destination`.
    ///
    /// None when `source == destination` or when no path exists.
    pub fn shortest_distance(&self, source: &V, destination: &V) -> Option<usize> {
        if source == destination {
            return None;
        }
        self.record(source, destination).map(|r| r.length)
    }

    /// Number of sources searched.
    pub fn source_count(&self) -> usize {
        self.trees.len()
    }

    /// Number of reachable (source, destination) pairs, excluding self-pairs.
    pub fn pair_count(&self) -> usize {
        self.trees.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }
}
