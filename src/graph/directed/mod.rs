//! Directed adjacency-list graphs.

use crate::graph::DirectedOrNot;

/// Marker for graphs keeping every edge exactly as added.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Directed;

impl DirectedOrNot for Directed {
    const DIRECTED_OR_NOT: bool = true;
}

/// A directed adjacency-list graph over values of type `T`.
pub type AdjacencyGraph<T> = crate::graph::AdjacencyGraph<T, Directed>;
