//! Random graph generation.
//!
//! The generator inserts uniformly drawn edges until the graph has the
//! target number of edges, and then, unless told otherwise, repairs the
//! graph by _bridging_ every vertex not reachable from vertex 0 to a random
//! vertex that is. The randomness comes from a caller-supplied [`Rng`], so a
//! seeded generator always gives the same graph.
//!
//! # Examples
//!
//! ```
//! use fastrand::Rng;
//! use graphgen::algo::{is_connected, random_connected_graph};
//!
//! let mut rng = Rng::with_seed(42);
//! let graph = random_connected_graph(8, &mut rng).unwrap();
//!
//! assert!(is_connected(&graph));
//! assert!(graph.size() >= 7);
//! assert!(graph.diameter().is_some());
//! ```

use fastrand::Rng;
use tracing::{debug, instrument, trace};

use crate::{
    core::{facts, CreateError},
    graph::Graph,
};

use super::Connected;

/// Parameters of [`generate`].
///
/// The default generates a connected graph with a random number of edges
/// and calculates its degree statistics and eccentricities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomParams {
    size: Option<usize>,
    connected: bool,
    eccentricities: bool,
}

impl Default for RandomParams {
    fn default() -> Self {
        Self {
            size: None,
            connected: true,
            eccentricities: true,
        }
    }
}

impl RandomParams {
    /// Requests the number of randomly inserted edges. Bridging may add
    /// more.
    pub fn size(self, size: usize) -> Self {
        Self {
            size: Some(size),
            ..self
        }
    }

    /// Skips the bridging repair, the result may be disconnected.
    pub fn allow_disconnected(self) -> Self {
        Self {
            connected: false,
            ..self
        }
    }

    /// Skips calculating distances and eccentricities of the result.
    pub fn skip_eccentricities(self) -> Self {
        Self {
            eccentricities: false,
            ..self
        }
    }
}

/// Generates a random connected graph of given order.
///
/// The number of edges is first chosen uniformly from the range of all
/// connected simple graphs of the order. Degree statistics and
/// eccentricities of the result are calculated.
pub fn random_connected_graph(order: usize, rng: &mut Rng) -> Result<Graph, CreateError> {
    generate(order, RandomParams::default(), rng)
}

/// Generates a random graph of given order and size, with no guarantee of
/// connectivity.
pub fn random_graph(order: usize, size: usize, rng: &mut Rng) -> Result<Graph, CreateError> {
    let params = RandomParams::default()
        .size(size)
        .allow_disconnected()
        .skip_eccentricities();

    generate(order, params, rng)
}

#[instrument(name = "graphgen.generate", level = "debug", skip(rng), err)]
pub fn generate(order: usize, params: RandomParams, rng: &mut Rng) -> Result<Graph, CreateError> {
    facts::check_order(order)?;

    let size = target_size(order, &params, rng)?;
    debug!(size, "inserting random edges");

    let mut graph = Graph::try_new(order)?;
    insert_random_edges(&mut graph, size, rng);

    if params.connected {
        let bridges = connect(&mut graph, rng);
        debug!(bridges, size = graph.size(), "graph is connected");
    }

    graph.calculate_graph_parameters();

    if params.eccentricities {
        graph.calculate_graph_eccentricities();
    }

    Ok(graph)
}

// Size before bridging, either requested or drawn uniformly from the valid
// range.
fn target_size(order: usize, params: &RandomParams, rng: &mut Rng) -> Result<usize, CreateError> {
    let range = if params.connected {
        facts::connected_size_range(order)
    } else {
        facts::size_range(order)
    };

    match params.size {
        Some(size) => {
            facts::check_size(order, size, range)?;
            Ok(size)
        }
        None => Ok(rng.usize(range)),
    }
}

fn insert_random_edges(graph: &mut Graph, size: usize, rng: &mut Rng) {
    let order = graph.order();

    // Rejected edges (self-loops and duplicates) do not make progress.
    while graph.size() < size {
        let v1 = rng.usize(..order);
        let v2 = rng.usize(..order);

        graph.add_edge(v1, v2);
    }
}

// Runtime analysis for graph of order n and size m:
// 2m + 2n for bridging disconnected graphs
fn connect(graph: &mut Graph, rng: &mut Rng) -> usize {
    let connectivity = Connected::on(graph).run();

    if connectivity.is() {
        return 0;
    }

    let (mut connected, disconnected) = connectivity.into_parts();
    debug!(
        connected = connected.len(),
        disconnected = disconnected.len(),
        "bridging disconnected vertices"
    );

    let mut bridges = 0;

    for vertex in disconnected {
        // The vertex may already be adjacent to a previously bridged one, in
        // which case another random candidate is drawn. Vertex 0 is never
        // adjacent to it, so the loop terminates.
        loop {
            let candidate = connected[rng.usize(..connected.len())];
            trace!(candidate, vertex, "bridging attempt");

            if graph.add_edge(candidate, vertex) {
                break;
            }
        }

        connected.push(vertex);
        bridges += 1;
    }

    bridges
}
