//! Undirected adjacency-list graphs.
//!
//! An edge between two distinct vertices is stored in both adjacency lists,
//! so it is seen as an out-edge, and as an in-edge, of either endpoint.
//! Self-loops are stored once.

use crate::graph::DirectedOrNot;

/// Marker for graphs mirroring every edge between distinct vertices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Undirected;

impl DirectedOrNot for Undirected {
    const DIRECTED_OR_NOT: bool = false;
}

/// An undirected adjacency-list graph over values of type `T`.
pub type AdjacencyGraph<T> = crate::graph::AdjacencyGraph<T, Undirected>;
