//! Random operation sequences and invariant checks shared by property tests.

use crate::graph::*;
use quickcheck::Arbitrary;
use rs_quickcheck_util::*;

/// Vertex values are drawn from a small domain so that operations collide often.
const VALUE_DOMAIN: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    AddVertex(u8),
    RemoveVertex(u8),
    AddEdge((u8, u8, f64)),
    RemoveEdge((u8, u8, f64)),
}

#[derive(Clone)]
pub struct Ops {
    pub ops: Vec<Op>,
}

impl std::fmt::Debug for Ops {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.ops)
    }
}

impl Ops {
    pub fn iter(&self) -> impl Iterator<Item = &Op> + '_ {
        self.ops.iter()
    }

    /// Replays all operations on `graph`, calling `inspect` after each one.
    pub fn apply<G, F>(&self, graph: &mut G, mut inspect: F)
    where
        G: Graph<Value = u8> + GrowableGraph + VertexShrinkableGraph,
        F: FnMut(&G, &Op),
    {
        for op in self.iter() {
            match *op {
                Op::AddVertex(x) => {
                    graph.add_vertex(x);
                }
                Op::RemoveVertex(x) => {
                    graph.remove_vertex(&x);
                }
                Op::AddEdge((u, v, w)) => {
                    graph.add_edge(&u, &v, w);
                }
                Op::RemoveEdge((u, v, w)) => {
                    graph.remove_edge(&u, &v, w);
                }
            }
            inspect(graph, op);
        }
    }
}

impl Arbitrary for Ops {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let value = |g: &mut quickcheck::Gen| u8::arbitrary(g) % VALUE_DOMAIN;
        let weight = |g: &mut quickcheck::Gen| f64::from(u8::arbitrary(g) % 3 + 1);
        let ops = gen_bytes(g, b"abcd.", b'.', 0..)
            .iter()
            .map(|_| match u8::arbitrary(g) % 6 {
                0 | 1 => Op::AddVertex(value(g)),
                2 => Op::RemoveVertex(value(g)),
                3 | 4 => Op::AddEdge((value(g), value(g), weight(g))),
                5 => Op::RemoveEdge((value(g), value(g), weight(g))),
                _ => unreachable!(),
            })
            .collect();
        Self { ops }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let l = self.ops.len();
        let me = self.clone();
        let it = std::iter::successors(Some(l / 2), move |n| {
            let nxt = (n + l) / 2 + 1;
            if nxt >= l {
                None
            } else {
                Some(nxt)
            }
        })
        .map(move |n| {
            let mut res = me.clone();
            res.ops = me.ops[0..n].to_vec();
            res
        });
        Box::new(it)
    }
}

/// Asserts every structural invariant of an adjacency-list graph.
pub fn check_invariants<G>(graph: &G)
where
    G: QueryableGraph<Value = u8> + DirectedOrNot,
{
    let mut values: Vec<u8> = graph.iter_vertices().map(|v| *v.value()).collect();
    let vertex_size = values.len();
    assert_eq!(graph.vertex_size(), vertex_size);
    values.sort_unstable();
    values.dedup();
    assert_eq!(values.len(), vertex_size, "a value is wrapped twice");

    let edges: Vec<Edge> = graph.iter_edges().collect();
    assert_eq!(graph.edge_size(), edges.len());
    for e in edges.iter() {
        assert!(graph.vertex_by_id(e.source).is_some(), "dangling {:?}", e);
        assert!(graph.vertex_by_id(e.sink).is_some(), "dangling {:?}", e);
    }

    for v in graph.iter_vertices() {
        assert_eq!(graph.vertex_id(v.value()), Some(v.id()));
        let adj = graph.adjacent(v.value()).unwrap();
        assert!(adj.iter().all(|e| e.source == v.id()));
        assert_eq!(graph.output_degree(v.value()).unwrap(), adj.len());
        let ins = edges.iter().filter(|e| e.sink == v.id()).count();
        assert_eq!(graph.input_degree(v.value()), ins);
    }

    let sources: Vec<u8> = graph.sources().into_iter().copied().collect();
    let expected: Vec<u8> = graph
        .iter_vertices()
        .filter(|v| graph.input_degree(v.value()) == 0)
        .map(|v| *v.value())
        .collect();
    assert_eq!(sources, expected);

    let drains: Vec<u8> = graph.drains().into_iter().copied().collect();
    let expected: Vec<u8> = graph
        .iter_vertices()
        .filter(|v| graph.output_degree(v.value()).unwrap() == 0)
        .map(|v| *v.value())
        .collect();
    assert_eq!(drains, expected);

    let sorted = graph.edges();
    assert_eq!(sorted.len(), edges.len());
    assert!(sorted.windows(2).all(|w| w[0].weight <= w[1].weight));

    if !G::DIRECTED_OR_NOT {
        let key = |e: &Edge| (e.source, e.sink, e.weight.to_bits());
        let mut forward: Vec<_> = edges.iter().map(key).collect();
        let mut backward: Vec<_> = edges.iter().map(|e| key(&e.reversed())).collect();
        forward.sort_unstable();
        backward.sort_unstable();
        assert_eq!(forward, backward, "unmirrored edges");
    }
}

/// Asserts no edge touches the vertex behind a removed handle.
pub fn check_detached<G>(graph: &G, removed: VertexId)
where
    G: QueryableGraph,
{
    assert!(graph.vertex_by_id(removed).is_none());
    assert!(graph
        .iter_edges()
        .all(|e| e.source != removed && e.sink != removed));
}
