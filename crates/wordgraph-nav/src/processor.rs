//! GraphProcessor: build a word graph from a dictionary and query it.
//!
//! Populating connects every new word to every existing word one edit away,
//! then rebuilds the path index so queries are valid as soon as it returns.

use crate::paths::{self, PathIndex};
use std::io;
use std::path::Path;
use std::sync::Arc;
use wordgraph_core::config::WordGraphConfig;
use wordgraph_core::graph::Graph;
use wordgraph_core::lexical;
use wordgraph_core::words::{self, WordSourceError};

/// Errors from populating the graph.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    SourceUnavailable(#[from] WordSourceError),
    #[error("failed to read word #{position}: {source}")]
    Read {
        position: usize,
        #[source]
        source: io::Error,
    },
    #[error("word #{position} is blank")]
    InvalidWord { position: usize },
}

/// Errors from path queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("shortest paths have not been precomputed since the graph last changed")]
    NotReady,
}

/// Word graph plus its precomputed shortest-path index.
#[derive(Debug, Default)]
pub struct GraphProcessor {
    graph: Graph<String>,
    index: Option<Arc<PathIndex<String>>>,
    config: WordGraphConfig,
}

impl GraphProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: WordGraphConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &WordGraphConfig {
        &self.config
    }

    pub fn graph(&self) -> &Graph<String> {
        &self.graph
    }

    /// Mutable access to the graph. Invalidates the path index: queries fail
    /// with [`PathError::NotReady`] until [`precompute`](Self::precompute) runs.
    pub fn graph_mut(&mut self) -> &mut Graph<String> {
        self.index = None;
        &mut self.graph
    }

    /// Load a dictionary file and add its words to the graph.
    /// Returns the number of words read.
    pub fn populate_graph(&mut self, path: &Path) -> Result<usize, BuildError> {
        let stream = words::open(path, self.config.words.case_fold)?;
        let count = self.populate(stream)?;
        tracing::info!(
            "loaded {} words from {} ({} vertices, {} edges)",
            count,
            path.display(),
            self.graph.vertex_count(),
            self.graph.edge_count()
        );
        Ok(count)
    }

    /// Add a sequence of normalized words to the graph, connect each to every
    /// existing vertex one edit away, and rebuild the path index.
    ///
    /// The sequence is read to the end before the graph is touched, so a read
    /// error or blank word leaves graph and index exactly as they were.
    pub fn populate<I>(&mut self, words: I) -> Result<usize, BuildError>
    where
        I: IntoIterator<Item = io::Result<String>>,
    {
        let mut batch = Vec::new();
        for (i, item) in words.into_iter().enumerate() {
            let position = i + 1;
            let word = item.map_err(|source| BuildError::Read { position, source })?;
            if word.trim().is_empty() {
                return Err(BuildError::InvalidWord { position });
            }
            batch.push(word);
        }

        let count = batch.len();
        let edges_before = self.graph.edge_count();
        for word in batch {
            self.add_word(word);
        }
        tracing::debug!(
            "added {} words, {} new edges",
            count,
            self.graph.edge_count() - edges_before
        );

        self.precompute();
        Ok(count)
    }

    /// Insert one word and connect it to every current vertex one edit away.
    fn add_word(&mut self, word: String) {
        if !self.graph.add_vertex(word.clone()) {
            tracing::debug!("word {} already in graph", word);
        }
        let adjacent: Vec<String> = self
            .graph
            .vertices()
            .filter(|v| lexical::is_adjacent(v, &word))
            .cloned()
            .collect();
        for other in &adjacent {
            self.graph.add_edge(other, &word);
        }
    }

    /// Recompute shortest paths for every vertex and swap in the new index.
    pub fn precompute(&mut self) {
        let index = paths::precompute_all(&self.graph, &self.config.precompute);
        self.index = Some(Arc::new(index));
    }

    /// Whether queries can be answered.
    pub fn is_ready(&self) -> bool {
        self.index.is_some()
    }

    /// The current path index. Holding the returned `Arc` keeps that snapshot
    /// alive across later precomputations.
    pub fn snapshot(&self) -> Result<Arc<PathIndex<String>>, PathError> {
        self.index.clone().ok_or(PathError::NotReady)
    }

    /// Words on the shortest path from `from` to `to`, both inclusive.
    /// Empty when the words are equal or no path exists.
    pub fn shortest_path(&self, from: &str, to: &str) -> Result<Vec<String>, PathError> {
        let index = self.index.as_ref().ok_or(PathError::NotReady)?;
        Ok(index.shortest_path(&from.to_string(), &to.to_string()))
    }

    /// Number of edges on the shortest path from `from` to `to`.
    /// None when the words are equal or no path exists.
    pub fn shortest_distance(&self, from: &str, to: &str) -> Result<Option<usize>, PathError> {
        let index = self.index.as_ref().ok_or(PathError::NotReady)?;
        Ok(index.shortest_distance(&from.to_string(), &to.to_string()))
    }
}
