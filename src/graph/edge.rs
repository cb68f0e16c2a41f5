use super::VertexId;

/// Weight given to edges when callers do not provide one.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// A weighted relation from `source` to `sink`.
///
/// Endpoints are handles into the graph which stores the edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub source: VertexId,
    pub sink: VertexId,
    pub weight: f64,
}

impl Edge {
    pub fn new(source: VertexId, sink: VertexId, weight: f64) -> Self {
        Self {
            source,
            sink,
            weight,
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.sink
    }

    /// The same relation in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            source: self.sink,
            sink: self.source,
            weight: self.weight,
        }
    }

    pub(crate) fn matches(&self, sink: VertexId, weight: f64) -> bool {
        self.sink == sink && self.weight == weight
    }
}
