//! Closed-form edge count bounds for simple graphs.

use std::ops::RangeInclusive;

use super::error::CreateError;

/// Returns the number of edges in an undirected [complete graph] of the given
/// order.
///
/// [complete graph]: https://en.wikipedia.org/wiki/Complete_graph
///
/// # Examples
///
/// ```
/// use graphgen::core::facts::complete_graph_edge_count;
///
/// assert_eq!(complete_graph_edge_count(5), 10);
/// ```
pub fn complete_graph_edge_count(order: usize) -> usize {
    order * order.saturating_sub(1) / 2
}

/// Returns the number of edges in a tree of the given order, which is the
/// minimum for the graph to be connected.
pub fn tree_edge_count(order: usize) -> usize {
    order.saturating_sub(1)
}

/// Range of edge counts a connected simple graph of the given order can
/// have.
pub fn connected_size_range(order: usize) -> RangeInclusive<usize> {
    tree_edge_count(order)..=complete_graph_edge_count(order)
}

/// Range of edge counts any simple graph of the given order can have.
pub fn size_range(order: usize) -> RangeInclusive<usize> {
    0..=complete_graph_edge_count(order)
}

pub(crate) fn check_order(order: usize) -> Result<(), CreateError> {
    if order == 0 {
        Err(CreateError::EmptyOrder)
    } else {
        Ok(())
    }
}

pub(crate) fn check_size(
    order: usize,
    size: usize,
    range: RangeInclusive<usize>,
) -> Result<(), CreateError> {
    if range.contains(&size) {
        Ok(())
    } else {
        Err(CreateError::SizeOutOfRange {
            order,
            size,
            min: *range.start(),
            max: *range.end(),
        })
    }
}
