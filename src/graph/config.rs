/// What `add_edge` does when an edge with the same sink and weight is already
/// in the source's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EdgePolicy {
    /// Parallel edges of equal weight are stored side by side.
    #[default]
    AllowParallel,
    /// The new edge is dropped.
    RejectDuplicate,
}

/// Knobs of an `AdjacencyGraph`, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphConfig {
    pub edge_policy: EdgePolicy,
}

impl GraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_edge_policy(mut self, policy: EdgePolicy) -> Self {
        self.edge_policy = policy;
        self
    }
}
