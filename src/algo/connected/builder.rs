use crate::graph::Graph;

use super::{bfs::bfs, Connected};

/// Builder for [`Connected`].
pub struct ConnectedBuilder<'a> {
    graph: &'a Graph,
    start: usize,
}

impl Connected {
    /// Starts configuring the algorithm on the graph. The search starts from
    /// vertex 0 unless [`start`](ConnectedBuilder::start) says otherwise.
    pub fn on(graph: &Graph) -> ConnectedBuilder<'_> {
        ConnectedBuilder { graph, start: 0 }
    }
}

impl<'a> ConnectedBuilder<'a> {
    /// Starts the search from given vertex.
    pub fn start(self, start: usize) -> Self {
        Self { start, ..self }
    }

    /// Runs the algorithm.
    ///
    /// # Panics
    ///
    /// Panics if the start vertex does not exist.
    pub fn run(self) -> Connected {
        bfs(self.graph, self.start)
    }
}
