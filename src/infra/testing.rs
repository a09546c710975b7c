use thiserror::Error;

use crate::graph::{DegreeStats, Graph};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("vertex {0} is adjacent to itself")]
    SelfLoop(usize),
    #[error("vertex at position {0} has id {1}")]
    VertexIdMismatch(usize, usize),
    #[error("edge {0} (zero-based) is not present in the adjacency matrix")]
    EdgeMissing(usize),
    #[error("undirected edge {0} (zero-based) is present in one direction only")]
    EdgeAsymmetric(usize),
    #[error("edge list contains {0} distinct edges, but the size is {1}")]
    DuplicateEdges(usize, usize),
    #[error("adjacency matrix has {0} entries, but the edges account for {1}")]
    AdjacencyEntriesMismatch(usize, usize),
    #[error("sum of degrees ({0}) is not equal to doubled edge count ({1})")]
    HandshakingLemma(usize, usize),
    #[error("degree statistics {0:?} do not match the adjacency {1:?}")]
    StaleDegreeStats(DegreeStats, DegreeStats),
}

pub fn check_consistency(graph: &Graph) -> Result<(), ConsistencyCheckError> {
    fn cmp<F>(actual: usize, expected: usize, error: F) -> Result<(), ConsistencyCheckError>
    where
        F: FnOnce(usize, usize) -> ConsistencyCheckError,
    {
        if actual == expected {
            Ok(())
        } else {
            Err(error(actual, expected))
        }
    }

    let adjacency = graph.adjacency();

    for (i, vertex) in graph.vertices().iter().enumerate() {
        if vertex.id() != i {
            return Err(ConsistencyCheckError::VertexIdMismatch(i, vertex.id()));
        }

        if adjacency.contains(i, i) {
            return Err(ConsistencyCheckError::SelfLoop(i));
        }
    }

    let mut directed_count = 0;

    for (i, edge) in graph.edges().iter().enumerate() {
        let (v1, v2) = edge.endpoints();

        if !adjacency.contains(v1, v2) {
            return Err(ConsistencyCheckError::EdgeMissing(i));
        }

        if edge.is_directional() {
            directed_count += 1;
        } else if !adjacency.contains(v2, v1) {
            return Err(ConsistencyCheckError::EdgeAsymmetric(i));
        }
    }

    let size = graph.size();
    let undirected_count = size - directed_count;

    cmp(
        graph.edge_set().len(),
        size,
        ConsistencyCheckError::DuplicateEdges,
    )?;

    cmp(
        adjacency.count(),
        directed_count + 2 * undirected_count,
        ConsistencyCheckError::AdjacencyEntriesMismatch,
    )?;

    let degrees = (0..graph.order()).map(|v| graph.degree(v));
    let expected = DegreeStats {
        max: degrees.clone().max().unwrap_or_default(),
        min: degrees.clone().min().unwrap_or_default(),
        sum: degrees.sum(),
    };

    if directed_count == 0 {
        // https://en.wikipedia.org/wiki/Handshaking_lemma
        cmp(
            expected.sum,
            2 * size,
            ConsistencyCheckError::HandshakingLemma,
        )?;
    }

    let actual = graph.degree_stats();
    if actual != expected {
        return Err(ConsistencyCheckError::StaleDegreeStats(actual, expected));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consistent_after_mixed_insertions() {
        let mut graph = Graph::new(4);

        graph.add_edge(0, 1);
        graph.add_directed_edge(1, 2);
        graph.add_directed_edge(2, 1);
        graph.add_edge(3, 0);
        graph.calculate_graph_parameters();
        graph.add_edge(3, 2);

        assert_eq!(check_consistency(&graph), Ok(()));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ConsistencyCheckError::HandshakingLemma(3, 4).to_string(),
            "sum of degrees (3) is not equal to doubled edge count (4)"
        );
        assert_eq!(
            ConsistencyCheckError::SelfLoop(2).to_string(),
            "vertex 2 is adjacent to itself"
        );
    }
}
