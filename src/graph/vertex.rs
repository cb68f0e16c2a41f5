/// Handle for vertices, which is essentially `usize`.
///
/// Handles are handed out in increasing order, so ordering them gives insertion order.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

/// A factory to generate `VertexId` uniquely.
#[derive(Clone)]
pub struct VertexIdFactory(usize);

impl Default for VertexIdFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexIdFactory {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn one_more(&mut self) -> VertexId {
        let cur = self.0;
        self.0 += 1;
        VertexId(cur)
    }
}

impl VertexId {
    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }
}

/// Traversal marker of a vertex.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum Color {
    /// Not visited yet.
    #[default]
    White,
    /// Discovered but not finished.
    Gray,
    /// Finished.
    Black,
}

/// A vertex wrapping a user value.
///
/// Besides the value, a vertex carries bookkeeping fields for algorithms built
/// on top of the graph. The graph itself never reads or writes them.
#[derive(Debug, Clone)]
pub struct Vertex<T> {
    id: VertexId,
    value: T,
    pub color: Color,
    /// Weak back-reference to another vertex of the same graph.
    pub predecessor: Option<VertexId>,
    pub distance: f64,
    /// Finishing order.
    pub finish: f64,
    /// Priority key.
    pub key: f64,
}

impl<T> Vertex<T> {
    pub(crate) fn new(id: VertexId, value: T) -> Self {
        Self {
            id,
            value,
            color: Color::White,
            predecessor: None,
            distance: f64::INFINITY,
            finish: f64::INFINITY,
            key: f64::INFINITY,
        }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    /// Restores all bookkeeping fields to their initial state.
    pub fn reset(&mut self) {
        self.color = Color::White;
        self.predecessor = None;
        self.distance = f64::INFINITY;
        self.finish = f64::INFINITY;
        self.key = f64::INFINITY;
    }
}

/// Vertices are equal iff their values are.
impl<T: PartialEq> PartialEq for Vertex<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for Vertex<T> {}
