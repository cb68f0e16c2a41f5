//! A generic, in-memory adjacency-list graph.
//!
//! Vertices are identified by the values they wrap.
//! Each vertex owns an ordered list of its outgoing, weighted edges.
//! Edges refer to their endpoints through lightweight [`graph::VertexId`] handles,
//! so they never own the vertices they connect.
//!
//! ```
//! use adjgraph::graph::*;
//!
//! let mut g = directed::AdjacencyGraph::new();
//! g.add_vertex('a');
//! g.add_vertex('b');
//! g.add_vertex('c');
//! g.add_edge(&'a', &'b', 1.0);
//! g.add_edge(&'b', &'c', 2.0);
//! assert_eq!(g.sources(), vec![&'a']);
//! assert_eq!(g.drains(), vec![&'c']);
//! assert_eq!(g.output_degree(&'b').unwrap(), 1);
//! ```

pub mod error;
pub mod graph;

pub use self::error::{GraphError, Result};
