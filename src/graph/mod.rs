//! Vertices, edges and the adjacency-list graph holding them.
//!
//! # Vertices and handles
//!
//! A vertex wraps a user value, and values identify vertices:
//! adding a value twice yields one vertex.
//! Inside a graph, every vertex also gets a [`VertexId`], a cheap `Copy` handle.
//! Edges store handles of their endpoints rather than the vertices themselves,
//! so they can be copied around freely.
//! Handles are never reused, even after their vertices are removed.
//!
//! # Directed and undirected graphs
//!
//! [`directed::AdjacencyGraph`] keeps edges exactly as added.
//! [`undirected::AdjacencyGraph`] stores an edge between two distinct vertices
//! in both adjacency lists.
//!
//! # Missing vertices and edges
//!
//! Mutations involving absent vertices, or removals of absent edges, change nothing
//! and report `None`.
//! Lookups which cannot answer sensibly, like the adjacency list of an absent vertex,
//! fail with [`crate::GraphError`].

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod r#trait;
pub use self::r#trait::*;
mod config;
pub use self::config::*;
mod adjacency_graph;
pub use self::adjacency_graph::*;
mod graph_debug;
pub use self::graph_debug::*;

pub mod directed;
pub mod undirected;

#[cfg(test)]
mod ops;
#[cfg(test)]
pub use self::ops::*;
