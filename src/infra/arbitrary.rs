use arbitrary::Arbitrary;
use fastrand::Rng;

use crate::{
    algo::{generate, RandomParams},
    core::{AddEdgeError, CreateError, Edge},
    graph::{DegreeStats, Graph},
};

#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Index(pub usize);

impl Index {
    pub fn get(&self, m: usize) -> Option<usize> {
        if m > 0 {
            Some(self.0 % m)
        } else {
            None
        }
    }
}

#[derive(Debug, Arbitrary, Clone)]
pub enum MutOp {
    AddEdge(Index, Index),
    AddDirectedEdge(Index, Index),
    AddDistance(Index, Index, u8),
    CalculateGraphParameters,
    CalculateGraphEccentricities,
}

#[derive(Debug, PartialEq)]
pub enum MutOpResult {
    AddEdge(Result<(), AddEdgeError>),
    AddDistance,
    CalculateGraphParameters(DegreeStats),
    CalculateGraphEccentricities,
}

impl MutOp {
    pub fn apply(self, graph: &mut Graph) -> MutOpResult {
        let n = graph.order();
        let vertex = |index: Index| index.get(n).unwrap_or_default();

        match self {
            MutOp::AddEdge(v1, v2) => {
                MutOpResult::AddEdge(graph.try_add_edge(Edge::new(vertex(v1), vertex(v2))))
            }
            MutOp::AddDirectedEdge(src, dst) => {
                MutOpResult::AddEdge(graph.try_add_edge(Edge::directed(vertex(src), vertex(dst))))
            }
            MutOp::AddDistance(root, target, distance) => {
                graph.add_distance(vertex(root), vertex(target), distance.into());
                MutOpResult::AddDistance
            }
            MutOp::CalculateGraphParameters => {
                MutOpResult::CalculateGraphParameters(graph.calculate_graph_parameters())
            }
            MutOp::CalculateGraphEccentricities => {
                graph.calculate_graph_eccentricities();
                MutOpResult::CalculateGraphEccentricities
            }
        }
    }
}

/// Sequence of mutations on a graph of given order.
#[derive(Debug, Arbitrary, Clone)]
pub struct MutOpsSeq {
    pub order: u8,
    pub ops: Vec<MutOp>,
}

impl MutOpsSeq {
    /// Creates the graph to apply the operations on. Order zero is mapped to
    /// one.
    pub fn graph(&self) -> Graph {
        Graph::new(usize::from(self.order).max(1))
    }

    pub fn replay(self) -> Graph {
        let mut graph = self.graph();

        for op in self.ops {
            op.apply(&mut graph);
        }

        graph
    }
}

/// Input for the random graph generator.
#[derive(Debug, Arbitrary, Clone, Copy)]
pub struct GenerateInput {
    pub order: u8,
    pub size: Option<u16>,
    pub connected: bool,
    pub seed: u64,
}

impl GenerateInput {
    pub fn params(&self) -> RandomParams {
        let mut params = RandomParams::default().skip_eccentricities();

        if let Some(size) = self.size {
            params = params.size(size.into());
        }

        if !self.connected {
            params = params.allow_disconnected();
        }

        params
    }

    pub fn generate(&self) -> Result<Graph, CreateError> {
        generate(
            self.order.into(),
            self.params(),
            &mut Rng::with_seed(self.seed),
        )
    }
}
