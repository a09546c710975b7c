//! Determine which vertices are reachable from a start vertex.
//!
//! The adjacency relation is taken as undirected, i.e., an edge in any
//! direction connects its endpoints.
//!
//! # Examples
//!
//! ```
//! use graphgen::{algo::Connected, Graph};
//!
//! let graph = Graph::from_edges(4, [(0, 1), (1, 2)]).unwrap();
//!
//! let connected = Connected::on(&graph).run();
//!
//! assert!(!connected.is());
//! assert_eq!(connected.connected(), &[0, 1, 2]);
//! assert_eq!(connected.disconnected(), &[3]);
//! ```

use crate::graph::Graph;

mod bfs;
mod builder;

pub use builder::ConnectedBuilder;

/// Partition of the vertices to those reached from the start vertex and the
/// rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connected {
    start: usize,
    connected: Vec<usize>,
    disconnected: Vec<usize>,
}

impl Connected {
    /// Returns `true` if the start vertex reached all vertices.
    pub fn is(&self) -> bool {
        self.disconnected.is_empty()
    }

    pub fn start(&self) -> usize {
        self.start
    }

    /// Reached vertices, in ascending order.
    pub fn connected(&self) -> &[usize] {
        &self.connected
    }

    /// Vertices not reached, in ascending order.
    pub fn disconnected(&self) -> &[usize] {
        &self.disconnected
    }

    pub fn into_parts(self) -> (Vec<usize>, Vec<usize>) {
        (self.connected, self.disconnected)
    }
}

pub fn is_connected(graph: &Graph) -> bool {
    Connected::on(graph).run().is()
}
