#![no_main]

use libfuzzer_sys::fuzz_target;

use graphgen::infra::{arbitrary::MutOpsSeq, testing::check_consistency};

fuzz_target!(|seq: MutOpsSeq| {
    let mut graph = seq.graph();

    for op in seq.ops {
        op.apply(&mut graph);
        check_consistency(&graph)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }
});
