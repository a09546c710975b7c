use std::collections::VecDeque;

use fixedbitset::FixedBitSet;

use crate::graph::Graph;

use super::Connected;

pub fn bfs(graph: &Graph, start: usize) -> Connected {
    let order = graph.order();
    assert!(start < order, "vertex {start} does not exist");

    let mut visited = FixedBitSet::with_capacity(order);
    let mut enqueued = FixedBitSet::with_capacity(order);
    let mut queue = VecDeque::with_capacity(order);

    queue.push_back(start);
    enqueued.insert(start);

    while let Some(vertex) = queue.pop_front() {
        visited.insert(vertex);

        // Dense representation, all candidates are checked.
        for next in 0..order {
            if !visited.contains(next) && !enqueued.contains(next) && graph.is_adjacent(vertex, next)
            {
                enqueued.insert(next);
                queue.push_back(next);
            }
        }
    }

    let (connected, disconnected): (Vec<_>, Vec<_>) =
        (0..order).partition(|&v| visited.contains(v));

    Connected {
        start,
        connected,
        disconnected,
    }
}
