//! Huge-tier benchmarks (5M heap ops, 2M edges over 1M elements).
//!
//! Kept separate from the smaller tiers so `cargo bench` stays fast. The
//! fixture is generated once to disk by the `gen-workload` binary and loaded
//! here; setup is cached in a `OnceLock` so deserialization is paid once.
#![allow(clippy::expect_used)]

use std::sync::OnceLock;
use std::time::Duration;

use algokit_bench::{HeapOp, Workload, huge_fixture_path};
use algokit_core::{DisjointSet, MinHeap};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

static SETUP: OnceLock<Workload> = OnceLock::new();

fn get_setup() -> &'static Workload {
    SETUP.get_or_init(|| {
        let path = huge_fixture_path();
        eprintln!("Loading huge workload from {}...", path.display());
        let json = std::fs::read_to_string(&path).expect(
            "Failed to read huge workload. Run `cargo run -p algokit-bench --bin gen-workload` first.",
        );
        let workload: Workload = serde_json::from_str(&json).expect("deserialize huge workload");
        eprintln!(
            "Huge tier ready: {} heap ops, {} edges",
            workload.heap_ops.len(),
            workload.edges.len()
        );
        workload
    })
}

fn bench_huge_script(c: &mut Criterion) {
    let w = get_setup();
    let mut group = c.benchmark_group("huge/priority_queue_script");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(30));
    group.throughput(Throughput::Elements(w.heap_ops.len() as u64));
    group.bench_function(BenchmarkId::from_parameter("Huge"), |b| {
        b.iter(|| {
            let mut queue = MinHeap::new();
            let mut checksum = 0i64;
            for op in &w.heap_ops {
                match *op {
                    HeapOp::Push(key) => queue.push(key),
                    HeapOp::Pop => {
                        if let Ok(top) = queue.pop() {
                            checksum = checksum.wrapping_add(top);
                        }
                    }
                }
            }
            (queue.len(), checksum)
        });
    });
    group.finish();
}

fn bench_huge_unions(c: &mut Criterion) {
    let w = get_setup();
    let mut group = c.benchmark_group("huge/disjoint_set_unions");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(30));
    group.throughput(Throughput::Elements(w.edges.len() as u64));
    group.bench_function(BenchmarkId::from_parameter("Huge"), |b| {
        b.iter(|| {
            let mut ds = DisjointSet::new(w.config.num_elements);
            for edge in &w.edges {
                ds.union(edge.from, edge.to).expect("in range");
            }
            ds.group_count()
        });
    });
    group.finish();
}

criterion_group!(benches, bench_huge_script, bench_huge_unions);
criterion_main!(benches);
