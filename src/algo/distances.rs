//! Hop distances from a single root vertex, found by breadth-first search.
//!
//! The maximum distance found is the eccentricity of the root, provided the
//! root reached every vertex of the graph.
//!
//! # Examples
//!
//! ```
//! use graphgen::{algo::Distances, Graph};
//!
//! let graph = Graph::from_edges(4, [(0, 1), (1, 2), (1, 3)]).unwrap();
//!
//! let distances = Distances::on(&graph).run(0);
//!
//! assert_eq!(distances.dist(3), Some(2));
//! assert_eq!(distances.max(), 2);
//! assert!(distances.reached_all());
//! ```

use std::{collections::VecDeque, ops::Index};

use fixedbitset::FixedBitSet;

use crate::graph::Graph;

/// Distances from a root vertex to every vertex it reaches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distances {
    root: usize,
    dist: Vec<Option<usize>>,
    max: usize,
    reached: usize,
}

impl Distances {
    /// Starts configuring the algorithm on the graph.
    pub fn on(graph: &Graph) -> DistancesBuilder<'_> {
        DistancesBuilder { graph }
    }

    pub fn root(&self) -> usize {
        self.root
    }

    /// Distance to the vertex, or `None` if it is not reachable from the
    /// root.
    ///
    /// # Panics
    ///
    /// Panics if the vertex does not exist.
    pub fn dist(&self, to: usize) -> Option<usize> {
        assert!(to < self.dist.len(), "vertex {to} does not exist");
        self.dist[to]
    }

    /// Maximum distance to a reached vertex.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Number of reached vertices, including the root.
    pub fn reached(&self) -> usize {
        self.reached
    }

    pub fn reached_all(&self) -> bool {
        self.reached == self.dist.len()
    }

    /// Eccentricity of the root, if it reached all vertices.
    pub fn eccentricity(&self) -> Option<usize> {
        self.reached_all().then_some(self.max)
    }

    /// Iterates over reached vertices and their distances, in ascending
    /// order of the vertices.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.dist
            .iter()
            .enumerate()
            .filter_map(|(v, dist)| dist.map(|dist| (v, dist)))
    }
}

impl Index<usize> for Distances {
    type Output = usize;

    fn index(&self, index: usize) -> &Self::Output {
        self.dist[index]
            .as_ref()
            .expect("vertex is not reachable from the root")
    }
}

/// Builder for [`Distances`].
pub struct DistancesBuilder<'a> {
    graph: &'a Graph,
}

impl<'a> DistancesBuilder<'a> {
    /// Runs the algorithm from given root.
    ///
    /// # Panics
    ///
    /// Panics if the root does not exist.
    pub fn run(self, root: usize) -> Distances {
        bfs(self.graph, root)
    }
}

fn bfs(graph: &Graph, root: usize) -> Distances {
    let order = graph.order();
    assert!(root < order, "vertex {root} does not exist");

    let mut dist = vec![None; order];
    let mut enqueued = FixedBitSet::with_capacity(order);
    let mut queue = VecDeque::with_capacity(order);

    dist[root] = Some(0);
    enqueued.insert(root);
    queue.push_back((root, 0));

    let mut max = 0;
    let mut reached = 1;

    while let Some((vertex, vertex_dist)) = queue.pop_front() {
        let next_dist = vertex_dist + 1;

        for next in 0..order {
            if enqueued.contains(next) || !graph.is_adjacent(vertex, next) {
                continue;
            }

            // Vertices are dequeued in non-decreasing distance, so the first
            // discovery is the shortest.
            enqueued.insert(next);
            dist[next] = Some(next_dist);
            max = max.max(next_dist);
            reached += 1;

            queue.push_back((next, next_dist));
        }
    }

    Distances {
        root,
        dist,
        max,
        reached,
    }
}

#[cfg(test)]
mod tests {
    use petgraph::{algo::dijkstra, graph::UnGraph};
    use proptest::prelude::*;

    use crate::{graph::complete_graph, infra::proptest::graph_any};

    use super::*;

    fn assert_valid(distances: &Distances, graph: &Graph) {
        let mut reference = UnGraph::<(), ()>::with_capacity(graph.order(), graph.size());
        let nodes = (0..graph.order())
            .map(|_| reference.add_node(()))
            .collect::<Vec<_>>();

        for edge in graph.edges() {
            let (u, v) = edge.endpoints();
            reference.add_edge(nodes[u], nodes[v], ());
        }

        let expected = dijkstra(&reference, nodes[distances.root()], None, |_| 1usize);

        for (v, node) in nodes.iter().enumerate() {
            assert_eq!(distances.dist(v), expected.get(node).copied(), "vertex {v}");
        }

        assert_eq!(distances.reached(), expected.len());
        assert_eq!(distances.max(), expected.values().copied().max().unwrap_or(0));
    }

    #[test]
    fn path() {
        let graph = Graph::from_edges(3, [(0, 1), (1, 2)]).unwrap();

        let from_middle = Distances::on(&graph).run(1);
        assert_eq!(from_middle.eccentricity(), Some(1));

        let from_end = Distances::on(&graph).run(0);
        assert_eq!(from_end[0], 0);
        assert_eq!(from_end[1], 1);
        assert_eq!(from_end[2], 2);
        assert_eq!(from_end.eccentricity(), Some(2));
    }

    #[test]
    fn shortcut() {
        // 0 - 1 - 2 - 3 - 4 with a shortcut 0 - 3.
        let graph = Graph::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4), (0, 3)]).unwrap();

        let distances = Distances::on(&graph).run(0);
        assert_eq!(
            distances.iter().collect::<Vec<_>>(),
            vec![(0, 0), (1, 1), (2, 2), (3, 1), (4, 2)]
        );
        assert_eq!(distances.max(), 2);
    }

    #[test]
    fn complete() {
        let graph = complete_graph(5).unwrap();

        for root in 0..5 {
            let distances = Distances::on(&graph).run(root);
            assert_eq!(distances.eccentricity(), Some(1));
        }
    }

    #[test]
    fn single() {
        let graph = Graph::new(1);

        let distances = Distances::on(&graph).run(0);
        assert_eq!(distances.eccentricity(), Some(0));
        assert_eq!(distances.reached(), 1);
    }

    #[test]
    fn unreachable() {
        let graph = Graph::from_edges(4, [(0, 1), (2, 3)]).unwrap();

        let distances = Distances::on(&graph).run(0);
        assert_eq!(distances.dist(1), Some(1));
        assert_eq!(distances.dist(2), None);
        assert_eq!(distances.dist(3), None);
        assert_eq!(distances.reached(), 2);
        assert!(!distances.reached_all());
        assert_eq!(distances.eccentricity(), None);
        assert_eq!(distances.max(), 1);
    }

    #[test]
    #[should_panic(expected = "not reachable")]
    fn index_unreachable() {
        let graph = Graph::new(2);
        let distances = Distances::on(&graph).run(0);
        let _dist = distances[1];
    }

    #[test]
    #[should_panic(expected = "vertex 4 does not exist")]
    fn dist_out_of_range() {
        let graph = Graph::from_edges(4, [(0, 1)]).unwrap();
        let distances = Distances::on(&graph).run(0);
        distances.dist(4);
    }

    proptest! {
        #[test]
        fn proptest_distances_any(graph in graph_any(12)) {
            let distances = Distances::on(&graph).run(0);
            assert_valid(&distances, &graph);
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_distances_all_roots(graph in graph_any(32)) {
            for root in 0..graph.order() {
                let distances = Distances::on(&graph).run(root);
                assert_valid(&distances, &graph);
            }
        }
    }
}
