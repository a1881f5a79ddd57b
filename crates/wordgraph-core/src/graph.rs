//! Undirected, unweighted graph keyed by vertex value.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// An undirected, unweighted graph: G = (V, E).
///
/// Each vertex maps to the set of its neighbors. The neighbor relation is kept
/// symmetric and irreflexive by the mutation methods; there is no other way to
/// touch the adjacency sets.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    adjacency: HashMap<V, HashSet<V>>,
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }
}

impl<V: Eq + Hash + Clone> Graph<V> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an isolated vertex. Returns false if the vertex already exists.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex, HashSet::new());
        true
    }

    /// Remove a vertex and every edge touching it.
    /// Returns the removed vertex, or None if it was not in the graph.
    pub fn remove_vertex(&mut self, vertex: &V) -> Option<V> {
        let neighbors: Vec<V> = self.adjacency.get(vertex)?.iter().cloned().collect();
        for neighbor in &neighbors {
            self.remove_edge(neighbor, vertex);
        }
        self.adjacency.remove_entry(vertex).map(|(v, _)| v)
    }

    /// Add an undirected edge. Fails on a missing endpoint, a self-loop, or an
    /// edge that already exists.
    pub fn add_edge(&mut self, a: &V, b: &V) -> bool {
        if a == b || !self.contains_vertex(a) || !self.contains_vertex(b) {
            return false;
        }
        let inserted = self
            .adjacency
            .get_mut(a)
            .is_some_and(|set| set.insert(b.clone()));
        if !inserted {
            return false;
        }
        if let Some(set) = self.adjacency.get_mut(b) {
            set.insert(a.clone());
        }
        true
    }

    /// Remove an undirected edge. Fails under the same conditions as
    /// [`add_edge`](Self::add_edge), plus when the edge does not exist.
    pub fn remove_edge(&mut self, a: &V, b: &V) -> bool {
        if a == b || !self.contains_vertex(a) || !self.contains_vertex(b) {
            return false;
        }
        let removed = self
            .adjacency
            .get_mut(a)
            .is_some_and(|set| set.remove(b));
        if !removed {
            return false;
        }
        if let Some(set) = self.adjacency.get_mut(b) {
            set.remove(a);
        }
        true
    }

    /// Check whether an edge connects `a` and `b`.
    /// False if either vertex is missing or `a == b`.
    pub fn is_adjacent(&self, a: &V, b: &V) -> bool {
        if a == b || !self.contains_vertex(b) {
            return false;
        }
        self.adjacency.get(a).is_some_and(|set| set.contains(b))
    }

    /// The neighbors of a vertex, in no particular order.
    /// None if the vertex is not in the graph.
    pub fn neighbors<'a>(
        &'a self,
        vertex: &V,
    ) -> Option<impl Iterator<Item = &'a V> + use<'a, V>> {
        self.adjacency.get(vertex).map(|set| set.iter())
    }

    /// All vertices, in no particular order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Number of neighbors, or None if the vertex is not in the graph.
    pub fn degree(&self, vertex: &V) -> Option<usize> {
        self.adjacency.get(vertex).map(HashSet::len)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges (each edge counted once).
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(HashSet::len).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph<&'static str> {
        let mut graph = Graph::new();
        for v in ["a", "b", "c"] {
            graph.add_vertex(v);
        }
        graph.add_edge(&"a", &"b");
        graph.add_edge(&"b", &"c");
        graph.add_edge(&"c", &"a");
        graph
    }

    #[test]
    fn test_empty_graph() {
        let graph: Graph<String> = Graph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.vertices().count(), 0);
    }

    #[test]
    fn test_edge_count_counts_each_edge_once() {
        let graph = triangle();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.degree(&"a"), Some(2));
    }

    #[test]
    fn test_degree_missing_vertex() {
        let graph = triangle();
        assert_eq!(graph.degree(&"z"), None);
    }

    #[test]
    fn test_remove_vertex_returns_owned_value() {
        let mut graph: Graph<String> = Graph::new();
        graph.add_vertex("CAT".to_string());
        assert_eq!(graph.remove_vertex(&"CAT".to_string()), Some("CAT".to_string()));
        assert!(graph.is_empty());
    }
}
