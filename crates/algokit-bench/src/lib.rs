//! Workload generation, invariant checkers and caller scenarios for
//! benchmarking `algokit-core`.
//!
//! Workloads are deterministic for a given seed so benchmark runs and
//! property tests can be reproduced exactly.

use std::path::PathBuf;

pub mod correctness;
pub mod scenarios;
pub mod workload;

pub use workload::{
    HeapOp, SizeTier, WeightedEdge, Workload, WorkloadConfig, generate_edges, generate_heap_ops,
    generate_workload,
};

/// Returns the path where the huge-tier workload fixture is stored on disk.
///
/// The file lives under `target/bench-fixtures/workload.json` so it is
/// gitignored and shared between the generator binary and the benchmark
/// harness.
pub fn huge_fixture_path() -> PathBuf {
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest
        .join("..")
        .join("..")
        .join("target")
        .join("bench-fixtures")
        .join("workload.json")
}
