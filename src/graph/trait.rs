use crate::error::Result;
use crate::graph::*;
use ahash::RandomState;
use std::collections::HashSet;

/// Whether a graph mirrors every edge between distinct vertices.
pub trait DirectedOrNot {
    const DIRECTED_OR_NOT: bool;
}

/// Graphs whose vertices are keyed by user values.
pub trait Graph {
    /// Type of values wrapped by vertices.
    type Value;
}

pub trait GrowableGraph: Graph {
    fn new() -> Self;
    /// Adds a vertex wrapping `value` unless one already exists.
    /// Either way, returns the handle of the vertex.
    fn add_vertex(&mut self, value: Self::Value) -> VertexId;
    /// Adds an edge between two existent vertices.
    ///
    /// Returns `None` and changes nothing if either endpoint is absent.
    fn add_edge(
        &mut self,
        source: &Self::Value,
        sink: &Self::Value,
        weight: f64,
    ) -> Option<Edge>;
}

pub trait EdgeShrinkableGraph: Graph {
    /// Removes the first edge from `source` to `sink` carrying `weight`, if any.
    fn remove_edge(
        &mut self,
        source: &Self::Value,
        sink: &Self::Value,
        weight: f64,
    ) -> Option<Edge>;
}

pub trait VertexShrinkableGraph: EdgeShrinkableGraph {
    /// Removes a vertex together with every edge from or to it.
    fn remove_vertex(&mut self, value: &Self::Value) -> Option<Vertex<Self::Value>>;
}

pub trait QueryableGraph: Graph {
    fn vertex_size(&self) -> usize;
    /// Iterates over vertices in insertion order.
    fn iter_vertices(&self) -> Box<dyn Iterator<Item = &Vertex<Self::Value>> + '_>;
    fn vertex_id(&self, value: &Self::Value) -> Option<VertexId>;
    fn vertex_by_id(&self, vid: VertexId) -> Option<&Vertex<Self::Value>>;

    fn edge_size(&self) -> usize;
    /// Iterates over edges, grouped by source in insertion order of sources.
    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_>;
    fn adjacent_by_id(&self, vid: VertexId) -> Result<&[Edge]>;

    fn contains_vertex(&self, value: &Self::Value) -> bool {
        self.vertex_id(value).is_some()
    }

    /// Outgoing edges of the vertex wrapping `value`.
    fn adjacent(&self, value: &Self::Value) -> Result<&[Edge]> {
        let vid = self
            .vertex_id(value)
            .ok_or(crate::error::GraphError::VertexNotFound)?;
        self.adjacent_by_id(vid)
    }

    fn vertices(&self) -> Vec<&Vertex<Self::Value>> {
        self.iter_vertices().collect()
    }

    /// All edges sorted by ascending weight.
    fn edges(&self) -> Vec<Edge> {
        let mut res: Vec<_> = self.iter_edges().collect();
        res.sort_by(|a, b| a.weight.total_cmp(&b.weight));
        res
    }

    /// Number of edges across the graph whose sink wraps `value`.
    fn input_degree(&self, value: &Self::Value) -> usize {
        match self.vertex_id(value) {
            Some(vid) => self.iter_edges().filter(|e| e.sink == vid).count(),
            None => 0,
        }
    }

    /// Length of the adjacency list of `value`.
    ///
    /// Unlike [`QueryableGraph::input_degree`], an absent vertex is an error.
    fn output_degree(&self, value: &Self::Value) -> Result<usize> {
        self.adjacent(value).map(|edges| edges.len())
    }

    /// Values of vertices without incoming edges.
    fn sources(&self) -> Vec<&Self::Value> {
        let mut sinks = HashSet::with_hasher(RandomState::new());
        sinks.extend(self.iter_edges().map(|e| e.sink));
        self.iter_vertices()
            .filter(|v| !sinks.contains(&v.id()))
            .map(|v| v.value())
            .collect()
    }

    /// Values of vertices without outgoing edges.
    fn drains(&self) -> Vec<&Self::Value> {
        self.iter_vertices()
            .filter(|v| {
                self.adjacent_by_id(v.id())
                    .map(|edges| edges.is_empty())
                    .unwrap_or(false)
            })
            .map(|v| v.value())
            .collect()
    }

    fn debug(&self) -> GraphDebug<'_, Self>
    where
        Self: Sized,
    {
        GraphDebug::new(self)
    }
}
