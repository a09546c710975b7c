use fastrand::Rng;
use proptest::{
    collection::vec,
    prelude::{any, Just, Strategy},
    strategy::BoxedStrategy,
};

use crate::{
    algo::{generate, RandomParams},
    core::{facts, Edge},
    graph::Graph,
};

/// Graph with undirected edges between arbitrary vertex pairs.
pub fn graph_any(max_order: usize) -> BoxedStrategy<Graph> {
    graph(StrategyParams::default().max_order(max_order))
}

/// Graph that may also contain directed edges.
pub fn graph_mixed(max_order: usize) -> BoxedStrategy<Graph> {
    graph(StrategyParams::default().max_order(max_order).directed())
}

/// Graph produced by the random connected graph generator from an arbitrary
/// seed.
pub fn graph_connected(max_order: usize) -> BoxedStrategy<Graph> {
    (1..=max_order.max(1), any::<u64>())
        .prop_filter_map("generation failed", |(order, seed)| {
            generate(order, RandomParams::default(), &mut Rng::with_seed(seed)).ok()
        })
        .boxed()
}

pub fn graph(params: StrategyParams) -> BoxedStrategy<Graph> {
    (1..=params.max_order.max(1))
        .prop_flat_map(move |order| {
            let max_edges = params
                .max_edges
                .unwrap_or_else(|| 2 * facts::complete_graph_edge_count(order));
            let pair = (0..order, 0..order, any::<bool>());

            (Just(order), vec(pair, 0..=max_edges))
        })
        .prop_map(move |(order, pairs)| {
            let mut graph = Graph::new(order);

            for (v1, v2, directional) in pairs {
                let edge = if params.directed && directional {
                    Edge::directed(v1, v2)
                } else {
                    Edge::new(v1, v2)
                };

                // Self-loops and duplicates are drawn too and rejected.
                let _ = graph.try_add_edge(edge);
            }

            graph
        })
        .boxed()
}

#[derive(Debug, Clone, Copy)]
pub struct StrategyParams {
    max_order: usize,
    max_edges: Option<usize>,
    directed: bool,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            max_order: 32,
            max_edges: None,
            directed: false,
        }
    }
}

impl StrategyParams {
    pub fn max_order(self, max_order: usize) -> Self {
        Self { max_order, ..self }
    }

    pub fn max_edges(self, max_edges: usize) -> Self {
        Self {
            max_edges: Some(max_edges),
            ..self
        }
    }

    pub fn directed(self) -> Self {
        Self {
            directed: true,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::{
        strategy::ValueTree,
        test_runner::{Config, TestRunner},
    };

    use crate::{algo::is_connected, infra::testing::check_consistency};

    use super::*;

    #[test]
    fn graph_strategy_sanity() {
        let mut runner = TestRunner::new(Config::default());

        for _ in 0..32 {
            let graph = graph_mixed(10).new_tree(&mut runner).unwrap().current();

            assert!((1..=10).contains(&graph.order()));
            check_consistency(&graph).unwrap();
        }
    }

    #[test]
    fn max_edges_respected() {
        let mut runner = TestRunner::new(Config::default());
        let strategy = graph(StrategyParams::default().max_order(6).max_edges(3));

        for _ in 0..32 {
            let graph = strategy.new_tree(&mut runner).unwrap().current();
            assert!(graph.size() <= 3);
        }
    }

    #[test]
    fn connected_strategy_sanity() {
        let mut runner = TestRunner::new(Config::default());

        for _ in 0..16 {
            let graph = graph_connected(12).new_tree(&mut runner).unwrap().current();
            assert!(is_connected(&graph));
        }
    }
}
