use std::fmt;

use thiserror::Error;

use super::edge::Edge;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CreateError {
    #[error("graph must have at least one vertex")]
    EmptyOrder,
    #[error("edge count {size} is out of range [{min}, {max}] for a graph of order {order}")]
    SizeOutOfRange {
        order: usize,
        size: usize,
        min: usize,
        max: usize,
    },
}

#[derive(Debug, Error, PartialEq)]
#[error("adding edge {edge} failed: {kind}")]
pub struct AddEdgeError {
    pub edge: Edge,
    pub kind: AddEdgeErrorKind,
}

impl AddEdgeError {
    pub fn new(edge: Edge, kind: AddEdgeErrorKind) -> Self {
        Self { edge, kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddEdgeErrorKind {
    SelfLoop,
    MultiEdge,
}

impl fmt::Display for AddEdgeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AddEdgeErrorKind::SelfLoop => "the graph does not allow self-loops",
            AddEdgeErrorKind::MultiEdge => {
                "an edge already exists and the graph does not allow multi edges"
            }
        };
        f.write_str(reason)
    }
}
