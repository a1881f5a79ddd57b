//! Shortest-path navigation over the word graph.
//!
//! Provides the precomputed all-pairs path index ([`paths::PathIndex`]) and the
//! [`processor::GraphProcessor`] facade that loads a dictionary, connects
//! single-edit neighbors, and answers path and distance queries.

pub mod paths;
pub mod processor;
