use crate::core::{facts, CreateError};

use super::Graph;

/// Creates a [complete graph] of given order, with degree statistics and
/// eccentricities calculated.
///
/// [complete graph]: https://en.wikipedia.org/wiki/Complete_graph
pub fn complete_graph(order: usize) -> Result<Graph, CreateError> {
    let mut graph = Graph::try_new(order)?;
    graph.edges.reserve(facts::complete_graph_edge_count(order));

    for u in 0..order {
        for v in (u + 1)..order {
            graph.add_edge(u, v);
        }
    }

    graph.calculate_graph_parameters();
    graph.calculate_graph_eccentricities();

    Ok(graph)
}

/// Creates a path `0 - 1 - ... - (order - 1)`, with degree statistics and
/// eccentricities calculated.
pub fn path_graph(order: usize) -> Result<Graph, CreateError> {
    let mut graph = Graph::try_new(order)?;
    graph.extend_with_edges((1..order).map(|v| (v - 1, v)));

    graph.calculate_graph_parameters();
    graph.calculate_graph_eccentricities();

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use crate::{algo::is_connected, infra::testing::check_consistency};

    use super::*;

    #[test]
    fn complete_four() {
        let graph = complete_graph(4).unwrap();

        assert_eq!(graph.size(), 6);
        assert!((0..4).all(|v| graph.degree(v) == 3));
        assert!((0..4).all(|v| graph.eccentricity(v) == Some(1)));
        assert_eq!(graph.diameter(), Some(1));
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn complete_single() {
        let graph = complete_graph(1).unwrap();

        assert_eq!(graph.size(), 0);
        assert_eq!(graph.eccentricity(0), Some(0));
    }

    #[test]
    fn complete_empty() {
        assert_eq!(complete_graph(0).unwrap_err(), CreateError::EmptyOrder);
    }

    #[test]
    fn complete_eccentricity_one() {
        for order in 2..9 {
            let graph = complete_graph(order).unwrap();

            assert_eq!(graph.size(), facts::complete_graph_edge_count(order));
            assert!(graph.vertices().iter().all(|v| v.eccentricity() == Some(1)));
        }
    }

    #[test]
    fn path_diameter() {
        let graph = path_graph(6).unwrap();

        assert_eq!(graph.size(), 5);
        assert!(is_connected(&graph));
        assert_eq!(graph.diameter(), Some(5));
        assert_eq!(graph.radius(), Some(3));
        assert_eq!(graph.eccentricity(0), Some(5));
        assert_eq!(graph.eccentricity(2), Some(3));
        check_consistency(&graph).unwrap();
    }
}
