//! The graph over a fixed vertex set.
//!
//! A [`Graph`] is created with a fixed number of vertices (its _order_) and
//! grows only by adding edges. Adjacency is stored in a dense bit matrix,
//! which makes adjacency queries constant time and degree computation a
//! row scan. Beside the structure, the graph keeps the results of the
//! breadth-first computations: the distance matrix and the eccentricity of
//! every vertex.
//!
//! # Examples
//!
//! ```
//! use graphgen::Graph;
//!
//! let mut graph = Graph::new(3);
//!
//! assert!(graph.add_edge(0, 1));
//! assert!(graph.add_edge(1, 2));
//! // Duplicate edges and self-loops are rejected.
//! assert!(!graph.add_edge(2, 1));
//! assert!(!graph.add_edge(2, 2));
//!
//! graph.calculate_graph_eccentricities();
//!
//! assert_eq!(graph.eccentricity(1), Some(1));
//! assert_eq!(graph.diameter(), Some(2));
//! ```

use std::fmt;

use rustc_hash::FxHashSet;
use tracing::trace;

use crate::{
    algo::Distances,
    core::{
        facts,
        matrix::{BitMatrix, Matrix},
        AddEdgeError, AddEdgeErrorKind, CreateError, Edge, Vertex,
    },
};

mod create;

pub use create::{complete_graph, path_graph};

/// Graphs of at most this order list their vertices and edges when
/// displayed.
pub const LISTING_LIMIT: usize = 10;

/// Aggregate degree statistics of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DegreeStats {
    pub max: usize,
    pub min: usize,
    pub sum: usize,
}

#[derive(Debug, Clone)]
pub struct Graph {
    adjacency: BitMatrix,
    distances: Matrix<usize>,
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    // Invalidated by every accepted edge insertion.
    stats: Option<DegreeStats>,
}

impl Graph {
    /// Creates a graph with `order` isolated vertices.
    ///
    /// # Panics
    ///
    /// Panics if `order` is zero. See [`try_new`](Graph::try_new) for the
    /// fallible version.
    pub fn new(order: usize) -> Self {
        match Self::try_new(order) {
            Ok(graph) => graph,
            Err(error) => panic!("{error}"),
        }
    }

    pub fn try_new(order: usize) -> Result<Self, CreateError> {
        facts::check_order(order)?;

        Ok(Self {
            adjacency: BitMatrix::new(order),
            distances: Matrix::new(order),
            vertices: (0..order).map(Vertex::new).collect(),
            edges: Vec::new(),
            stats: None,
        })
    }

    /// Creates a graph of given order and adds the edges. Vertex pairs are
    /// undirected edges. Rejected edges (self-loops, duplicates) are
    /// skipped.
    pub fn from_edges<T, I>(order: usize, edges: I) -> Result<Self, CreateError>
    where
        T: Into<Edge>,
        I: IntoIterator<Item = T>,
    {
        let mut graph = Self::try_new(order)?;
        graph.extend_with_edges(edges);
        Ok(graph)
    }

    /// Number of vertices.
    pub fn order(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn size(&self) -> usize {
        self.edges.len()
    }

    pub fn vertex(&self, v: usize) -> &Vertex {
        self.check_vertex(v);
        &self.vertices[v]
    }

    pub fn vertex_mut(&mut self, v: usize) -> &mut Vertex {
        self.check_vertex(v);
        &mut self.vertices[v]
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Edges in the order they were added.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge_set(&self) -> FxHashSet<Edge> {
        self.edges.iter().copied().collect()
    }

    /// Adds an undirected edge between `v1` and `v2`.
    ///
    /// Returns `false` and leaves the graph untouched if the edge is a
    /// self-loop or if the vertices are already adjacent. An accepted edge
    /// resets the eccentricities of all vertices to unknown.
    ///
    /// # Panics
    ///
    /// Panics if any of the vertices does not exist.
    pub fn add_edge(&mut self, v1: usize, v2: usize) -> bool {
        self.try_add_edge(Edge::new(v1, v2)).is_ok()
    }

    /// Adds an edge going from `src` to `dst` only.
    ///
    /// Returns `false` and leaves the graph untouched if the edge is a
    /// self-loop or if the very same directed edge already exists.
    pub fn add_directed_edge(&mut self, src: usize, dst: usize) -> bool {
        self.try_add_edge(Edge::directed(src, dst)).is_ok()
    }

    pub fn try_add_edge(&mut self, edge: Edge) -> Result<(), AddEdgeError> {
        let (v1, v2) = edge.endpoints();
        self.check_vertex(v1);
        self.check_vertex(v2);

        if edge.is_loop() {
            return Err(AddEdgeError::new(edge, AddEdgeErrorKind::SelfLoop));
        }

        let exists = if edge.is_directional() {
            self.adjacency.contains(v1, v2)
        } else {
            self.is_adjacent(v1, v2)
        };

        if exists {
            return Err(AddEdgeError::new(edge, AddEdgeErrorKind::MultiEdge));
        }

        self.adjacency.set(v1, v2, true);
        if !edge.is_directional() {
            self.adjacency.set(v2, v1, true);
        }

        self.edges.push(edge);
        self.stats = None;
        self.vertices
            .iter_mut()
            .for_each(|vertex| vertex.set_eccentricity(None));

        Ok(())
    }

    pub fn extend_with_edges<T, I>(&mut self, edges: I)
    where
        T: Into<Edge>,
        I: IntoIterator<Item = T>,
    {
        for edge in edges {
            // Rejections leave the graph untouched.
            let _ = self.try_add_edge(edge.into());
        }
    }

    /// Returns `true` if there is an edge between the two vertices, in any
    /// direction.
    pub fn is_adjacent(&self, v1: usize, v2: usize) -> bool {
        self.check_vertex(v1);
        self.check_vertex(v2);

        v1 != v2 && (self.adjacency.contains(v1, v2) || self.adjacency.contains(v2, v1))
    }

    /// Vertices adjacent to `v` in any direction, in ascending order.
    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.check_vertex(v);
        (0..self.order()).filter(move |&u| self.is_adjacent(v, u))
    }

    /// Number of adjacency entries in the row of `v`. For undirected
    /// graphs this is the number of incident edges.
    pub fn degree(&self, v: usize) -> usize {
        self.check_vertex(v);
        self.adjacency.row_count(v)
    }

    /// Recomputes the degree statistics by scanning the adjacency matrix
    /// row by row.
    pub fn calculate_graph_parameters(&mut self) -> DegreeStats {
        let stats = self.scan_degrees();
        self.stats = Some(stats);
        stats
    }

    /// Degree statistics of the current adjacency. Uses the result of the
    /// last [`calculate_graph_parameters`](Graph::calculate_graph_parameters)
    /// unless an edge was added since.
    pub fn degree_stats(&self) -> DegreeStats {
        self.stats.unwrap_or_else(|| self.scan_degrees())
    }

    pub fn max_degree(&self) -> usize {
        self.degree_stats().max
    }

    pub fn min_degree(&self) -> usize {
        self.degree_stats().min
    }

    pub fn degree_sum(&self) -> usize {
        self.degree_stats().sum
    }

    fn scan_degrees(&self) -> DegreeStats {
        let mut stats = DegreeStats {
            max: 0,
            min: usize::MAX,
            sum: 0,
        };

        for v in 0..self.order() {
            let degree = self.adjacency.row_count(v);
            stats.max = stats.max.max(degree);
            stats.min = stats.min.min(degree);
            stats.sum += degree;
        }

        stats
    }

    /// Records the shortest-path distance between `root` and `target` in
    /// both directions.
    pub fn add_distance(&mut self, root: usize, target: usize, distance: usize) {
        self.add_directed_distance(root, target, distance);
        self.distances.insert(target, root, distance);
    }

    /// Records the shortest-path distance from `root` to `target` only.
    pub fn add_directed_distance(&mut self, root: usize, target: usize, distance: usize) {
        self.check_vertex(root);
        self.check_vertex(target);
        self.distances.insert(root, target, distance);
    }

    /// Recorded distance between the two vertices, if any.
    ///
    /// The value is only meaningful after the distances from `root` were
    /// calculated for the current set of edges.
    pub fn distance(&self, root: usize, target: usize) -> Option<usize> {
        self.check_vertex(root);
        self.check_vertex(target);
        self.distances.get(root, target).copied()
    }

    /// Runs a breadth-first search from `root`, records the distances to all
    /// reached vertices and returns the maximum of them.
    pub fn calculate_distances_from_root(&mut self, root: usize) -> usize {
        let distances = Distances::on(self).run(root);
        self.store_distances(&distances)
    }

    fn store_distances(&mut self, distances: &Distances) -> usize {
        let root = distances.root();

        for (target, dist) in distances.iter() {
            self.add_distance(root, target, dist);
        }

        distances.max()
    }

    /// Calculates distances from every vertex and stores the eccentricity of
    /// each of them.
    ///
    /// A vertex that does not reach every other vertex has no eccentricity.
    pub fn calculate_graph_eccentricities(&mut self) {
        self.distances.clear();

        for root in 0..self.order() {
            let distances = Distances::on(self).run(root);
            let max = self.store_distances(&distances);

            let eccentricity = distances.reached_all().then_some(max);
            trace!(root, ?eccentricity, "eccentricity calculated");
            self.vertices[root].set_eccentricity(eccentricity);
        }
    }

    pub fn eccentricity(&self, v: usize) -> Option<usize> {
        self.vertex(v).eccentricity()
    }

    /// Maximum eccentricity, if all eccentricities are known.
    pub fn diameter(&self) -> Option<usize> {
        self.eccentricities()?.into_iter().max()
    }

    /// Minimum eccentricity, if all eccentricities are known.
    pub fn radius(&self) -> Option<usize> {
        self.eccentricities()?.into_iter().min()
    }

    fn eccentricities(&self) -> Option<Vec<usize>> {
        self.vertices.iter().map(Vertex::eccentricity).collect()
    }

    pub(crate) fn adjacency(&self) -> &BitMatrix {
        &self.adjacency
    }

    fn check_vertex(&self, v: usize) {
        assert!(v < self.order(), "vertex {v} does not exist");
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.degree_stats();

        writeln!(f, "Order: {}", self.order())?;
        writeln!(f, "Size: {}", self.size())?;
        writeln!(f, "Max Degree: {}", stats.max)?;
        writeln!(f, "Min Degree: {}", stats.min)?;

        if self.order() <= LISTING_LIMIT {
            writeln!(f, "Vertices:")?;
            for vertex in self.vertices.iter() {
                writeln!(f, "    {vertex}")?;
            }

            writeln!(f, "Edges:")?;
            for edge in self.edges.iter() {
                writeln!(f, "    {edge}")?;
            }
        }

        Ok(())
    }
}
