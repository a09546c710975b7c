//! Random connected graphs with degree, distance and eccentricity
//! statistics.
//!
//! The crate revolves around [`Graph`], a simple graph over a fixed set of
//! vertices with a dense adjacency matrix. On top of it, [`algo`] provides
//! breadth-first connectivity checking, single-root distances and a random
//! graph generator that guarantees connectivity by bridging unreachable
//! vertices into the main component.
//!
//! # Examples
//!
//! ```
//! use fastrand::Rng;
//! use graphgen::{algo::random_connected_graph, graph::complete_graph};
//!
//! let mut rng = Rng::with_seed(7);
//! let graph = random_connected_graph(5, &mut rng).unwrap();
//! println!("{graph}");
//!
//! let complete = complete_graph(4).unwrap();
//! assert_eq!(complete.size(), 6);
//! assert_eq!(complete.diameter(), Some(1));
//! ```

pub mod algo;
pub mod core;
pub mod graph;
pub mod infra;

pub use crate::{
    core::{Edge, Vertex},
    graph::Graph,
};
