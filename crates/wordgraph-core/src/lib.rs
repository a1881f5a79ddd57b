//! Core types for the word graph.
//!
//! Provides the undirected graph ADT ([`graph::Graph`]), the single-edit
//! adjacency rule used to connect words ([`lexical`]), dictionary loading and
//! normalization ([`words`]), and on-disk configuration ([`config`]).

pub mod config;
pub mod graph;
pub mod lexical;
pub mod words;
