use crate::error::{GraphError, Result};
use crate::graph::*;
use ahash::RandomState;
use bimap::BiHashMap;
use std::collections::BTreeMap;
use std::hash::Hash;
use std::marker::PhantomData;

/// A graph mapping each vertex to the ordered list of its outgoing edges.
///
/// * `T`: values wrapped by vertices. Two vertices never wrap equal values.
/// * `D`: either [`directed::Directed`] or [`undirected::Undirected`].
///
/// | Operation       | Complexity                                                   |
/// | --------------- | ------------------------------------------------------------ |
/// | `add_vertex`    | O(log V)                                                     |
/// | `add_edge`      | O(log V), plus O(d) with `EdgePolicy::RejectDuplicate`, where d is the out-degree |
/// | `remove_edge`   | O(log V + d)                                                 |
/// | `remove_vertex` | O(V + E)                                                     |
/// | `adjacent`      | O(log V)                                                     |
/// | `input_degree`  | O(V + E)                                                     |
/// | `edges`         | O(E log E)                                                   |
///
/// There is no internal locking.
/// Mutation goes through `&mut self`, so sharing a graph which is still being
/// mutated across threads needs a lock supplied by the caller.
pub struct AdjacencyGraph<T, D = directed::Directed>
where
    T: Hash + Eq,
{
    config: GraphConfig,
    vid_factory: VertexIdFactory,
    vertex_keys: BiHashMap<VertexId, T, RandomState, RandomState>,
    lists: BTreeMap<VertexId, AdjacencyList<T>>,
    edge_size: usize,
    direction: PhantomData<D>,
}

#[derive(Clone)]
struct AdjacencyList<T> {
    vertex: Vertex<T>,
    out_edges: Vec<Edge>,
}

impl<T, D> Clone for AdjacencyGraph<T, D>
where
    T: Hash + Eq + Clone,
{
    fn clone(&self) -> Self {
        Self {
            config: self.config,
            vid_factory: self.vid_factory.clone(),
            vertex_keys: self.vertex_keys.clone(),
            lists: self.lists.clone(),
            edge_size: self.edge_size,
            direction: PhantomData,
        }
    }
}

impl<T, D> DirectedOrNot for AdjacencyGraph<T, D>
where
    T: Hash + Eq,
    D: DirectedOrNot,
{
    const DIRECTED_OR_NOT: bool = D::DIRECTED_OR_NOT;
}

impl<T, D> Default for AdjacencyGraph<T, D>
where
    T: Hash + Eq + Clone,
    D: DirectedOrNot,
{
    fn default() -> Self {
        Self::with_config(GraphConfig::default())
    }
}

impl<T, D> AdjacencyGraph<T, D>
where
    T: Hash + Eq + Clone,
    D: DirectedOrNot,
{
    /// Creates an empty graph.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            vid_factory: VertexIdFactory::new(),
            vertex_keys: BiHashMap::with_hashers(RandomState::new(), RandomState::new()),
            lists: BTreeMap::new(),
            edge_size: 0,
            direction: PhantomData,
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn is_directed(&self) -> bool {
        D::DIRECTED_OR_NOT
    }

    /// Same as `add_edge` with [`DEFAULT_WEIGHT`].
    pub fn add_edge_default(&mut self, source: &T, sink: &T) -> Option<Edge> {
        self.add_edge(source, sink, DEFAULT_WEIGHT)
    }

    /// Same as `remove_edge` with [`DEFAULT_WEIGHT`].
    pub fn remove_edge_default(&mut self, source: &T, sink: &T) -> Option<Edge> {
        self.remove_edge(source, sink, DEFAULT_WEIGHT)
    }

    pub fn vertex(&self, value: &T) -> Option<&Vertex<T>> {
        self.vertex_keys
            .get_by_right(value)
            .and_then(|vid| self.lists.get(vid))
            .map(|list| &list.vertex)
    }

    /// Gives access to the bookkeeping fields of a vertex.
    pub fn vertex_mut(&mut self, value: &T) -> Option<&mut Vertex<T>> {
        let vid = *self.vertex_keys.get_by_right(value)?;
        self.lists.get_mut(&vid).map(|list| &mut list.vertex)
    }

    /// Resolves a handle, such as an edge endpoint, to its value.
    pub fn value_of(&self, vid: VertexId) -> Result<&T> {
        self.vertex_keys
            .get_by_left(&vid)
            .ok_or(GraphError::StaleVertexId(vid.to_raw()))
    }

    pub fn contains_edge(&self, source: &T, sink: &T, weight: f64) -> bool {
        self.endpoints(source, sink)
            .and_then(|(src, snk)| self.lists.get(&src).map(|list| (list, snk)))
            .map(|(list, snk)| list.out_edges.iter().any(|e| e.matches(snk, weight)))
            .unwrap_or(false)
    }

    /// Restores bookkeeping fields of all vertices.
    pub fn reset_vertices(&mut self) {
        for list in self.lists.values_mut() {
            list.vertex.reset();
        }
    }

    /// Removes all vertices and edges.
    ///
    /// Handles issued before are never reused afterwards.
    pub fn clear(&mut self) {
        self.vertex_keys.clear();
        self.lists.clear();
        self.edge_size = 0;
    }

    fn endpoints(&self, source: &T, sink: &T) -> Option<(VertexId, VertexId)> {
        match (self.vertex_id(source), self.vertex_id(sink)) {
            (Some(src), Some(snk)) => Some((src, snk)),
            _ => None,
        }
    }

    fn push_edge(&mut self, edge: Edge) -> bool {
        let policy = self.config.edge_policy;
        let list = match self.lists.get_mut(&edge.source) {
            Some(list) => list,
            None => return false,
        };
        if policy == EdgePolicy::RejectDuplicate
            && list.out_edges.iter().any(|e| e.matches(edge.sink, edge.weight))
        {
            log::debug!(
                "duplicate edge {:?} -> {:?} ({}) rejected",
                edge.source,
                edge.sink,
                edge.weight
            );
            return false;
        }
        list.out_edges.push(edge);
        self.edge_size += 1;
        true
    }

    fn pop_edge(&mut self, source: VertexId, sink: VertexId, weight: f64) -> Option<Edge> {
        let list = self.lists.get_mut(&source)?;
        let idx = list.out_edges.iter().position(|e| e.matches(sink, weight))?;
        let edge = list.out_edges.remove(idx);
        self.edge_size -= 1;
        Some(edge)
    }
}

impl<T, D> Graph for AdjacencyGraph<T, D>
where
    T: Hash + Eq,
{
    type Value = T;
}

impl<T, D> GrowableGraph for AdjacencyGraph<T, D>
where
    T: Hash + Eq + Clone,
    D: DirectedOrNot,
{
    fn new() -> Self {
        Self::default()
    }

    fn add_vertex(&mut self, value: T) -> VertexId {
        if let Some(vid) = self.vertex_keys.get_by_right(&value) {
            return *vid;
        }
        let vid = self.vid_factory.one_more();
        self.vertex_keys.insert(vid, value.clone());
        self.lists.insert(
            vid,
            AdjacencyList {
                vertex: Vertex::new(vid, value),
                out_edges: vec![],
            },
        );
        vid
    }

    fn add_edge(&mut self, source: &T, sink: &T, weight: f64) -> Option<Edge> {
        let (src, snk) = match self.endpoints(source, sink) {
            Some(x) => x,
            None => {
                log::debug!("edge not added: endpoint absent");
                return None;
            }
        };
        let edge = Edge::new(src, snk, weight);
        if !self.push_edge(edge) {
            return None;
        }
        if !D::DIRECTED_OR_NOT && src != snk {
            self.push_edge(edge.reversed());
        }
        Some(edge)
    }
}

impl<T, D> EdgeShrinkableGraph for AdjacencyGraph<T, D>
where
    T: Hash + Eq + Clone,
    D: DirectedOrNot,
{
    fn remove_edge(&mut self, source: &T, sink: &T, weight: f64) -> Option<Edge> {
        let (src, snk) = match self.endpoints(source, sink) {
            Some(x) => x,
            None => {
                log::debug!("edge not removed: endpoint absent");
                return None;
            }
        };
        let edge = match self.pop_edge(src, snk, weight) {
            Some(edge) => edge,
            None => {
                log::debug!("no edge {:?} -> {:?} ({}) to remove", src, snk, weight);
                return None;
            }
        };
        if !D::DIRECTED_OR_NOT && src != snk {
            self.pop_edge(snk, src, weight);
        }
        Some(edge)
    }
}

impl<T, D> VertexShrinkableGraph for AdjacencyGraph<T, D>
where
    T: Hash + Eq + Clone,
    D: DirectedOrNot,
{
    fn remove_vertex(&mut self, value: &T) -> Option<Vertex<T>> {
        let (vid, _) = self.vertex_keys.remove_by_right(value)?;
        let list = self.lists.remove(&vid)?;
        let mut dropped = list.out_edges.len();
        for other in self.lists.values_mut() {
            let before = other.out_edges.len();
            other.out_edges.retain(|e| e.sink != vid);
            dropped += before - other.out_edges.len();
        }
        self.edge_size -= dropped;
        log::trace!("vertex {:?} removed with {} edges", vid, dropped);
        Some(list.vertex)
    }
}

impl<T, D> QueryableGraph for AdjacencyGraph<T, D>
where
    T: Hash + Eq,
{
    fn vertex_size(&self) -> usize {
        self.lists.len()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = &Vertex<T>> + '_> {
        Box::new(self.lists.values().map(|list| &list.vertex))
    }

    fn vertex_id(&self, value: &T) -> Option<VertexId> {
        self.vertex_keys.get_by_right(value).copied()
    }

    fn vertex_by_id(&self, vid: VertexId) -> Option<&Vertex<T>> {
        self.lists.get(&vid).map(|list| &list.vertex)
    }

    fn edge_size(&self) -> usize {
        self.edge_size
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        let it = self
            .lists
            .values()
            .flat_map(|list| list.out_edges.iter().copied());
        Box::new(it)
    }

    fn adjacent_by_id(&self, vid: VertexId) -> Result<&[Edge]> {
        self.lists
            .get(&vid)
            .map(|list| list.out_edges.as_slice())
            .ok_or(GraphError::StaleVertexId(vid.to_raw()))
    }
}

impl<T, D> std::fmt::Debug for AdjacencyGraph<T, D>
where
    T: Hash + Eq + std::fmt::Debug,
    D: DirectedOrNot,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = if D::DIRECTED_OR_NOT {
            "directed"
        } else {
            "undirected"
        };
        writeln!(f, "AdjacencyGraph ({}) {{", kind)?;
        write!(f, "{:?}", self.debug().indent(2, 2))?;
        writeln!(f, "}}")?;
        Ok(())
    }
}
