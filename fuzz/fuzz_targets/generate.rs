#![no_main]

use libfuzzer_sys::fuzz_target;

use graphgen::{
    algo::is_connected,
    infra::{arbitrary::GenerateInput, testing::check_consistency},
};

fuzz_target!(|input: GenerateInput| {
    // Keep the dense matrices small.
    let input = GenerateInput {
        order: input.order % 64,
        ..input
    };

    let Ok(graph) = input.generate() else {
        return;
    };

    check_consistency(&graph)
        .as_ref()
        .map_err(ToString::to_string)
        .unwrap();

    if input.connected {
        assert!(is_connected(&graph));
    }

    if let Some(size) = input.size {
        assert!(graph.size() >= usize::from(size));
    }
});
