//! Deterministic workload generator.
//!
//! Produces push/pop scripts for the priority queue and weighted edge lists
//! for the disjoint set, sized by [`SizeTier`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Mixed into the seed so the edge stream is independent of the heap stream.
const EDGE_STREAM: u64 = 0x9e37_79b9_7f4a_7c15;

/// Configuration for the workload generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Universe size for the disjoint set.
    pub num_elements: usize,
    /// Length of the heap push/pop script.
    pub num_operations: usize,
    /// Probability that a heap operation is a push (0.0-1.0).
    pub push_ratio: f64,
    /// Pushed keys are drawn from `-key_range..=key_range`.
    pub key_range: i64,
    /// Number of edges over the universe.
    pub num_edges: usize,
    /// Edge weights are drawn from `1..=max_weight`.
    pub max_weight: u32,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 1K heap ops, 200 elements, 300 edges
    Small,
    /// 20K heap ops, 5K elements, 8K edges
    Medium,
    /// 200K heap ops, 50K elements, 100K edges
    Large,
    /// 5M heap ops, 1M elements, 2M edges (fixture only)
    Huge,
}

impl SizeTier {
    /// Returns the default `WorkloadConfig` for this size tier.
    pub fn config(self, seed: u64) -> WorkloadConfig {
        let (num_operations, num_elements, num_edges) = match self {
            SizeTier::Small => (1_000, 200, 300),
            SizeTier::Medium => (20_000, 5_000, 8_000),
            SizeTier::Large => (200_000, 50_000, 100_000),
            SizeTier::Huge => (5_000_000, 1_000_000, 2_000_000),
        };
        WorkloadConfig {
            seed,
            num_elements,
            num_operations,
            push_ratio: 0.6,
            key_range: 1_000_000,
            num_edges,
            max_weight: 1_000,
        }
    }
}

/// One step of a priority-queue script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "key", rename_all = "snake_case")]
pub enum HeapOp {
    /// Insert the key.
    Push(i64),
    /// Remove the top element (may hit an empty queue).
    Pop,
}

/// An undirected weighted edge between two universe elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedEdge {
    /// One endpoint.
    pub from: usize,
    /// The other endpoint.
    pub to: usize,
    /// Edge cost.
    pub weight: u32,
}

/// A complete generated workload, as written to the fixture file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workload {
    /// The configuration that produced this workload.
    pub config: WorkloadConfig,
    /// Priority-queue script.
    pub heap_ops: Vec<HeapOp>,
    /// Edge list over `0..config.num_elements`.
    pub edges: Vec<WeightedEdge>,
}

/// Generates the priority-queue script for `config`.
pub fn generate_heap_ops(config: &WorkloadConfig) -> Vec<HeapOp> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let push_ratio = if config.push_ratio.is_nan() {
        0.0
    } else {
        config.push_ratio.clamp(0.0, 1.0)
    };
    let range = config.key_range.max(0);
    (0..config.num_operations)
        .map(|_| {
            if rng.gen_bool(push_ratio) {
                HeapOp::Push(rng.gen_range(-range..=range))
            } else {
                HeapOp::Pop
            }
        })
        .collect()
}

/// Generates the edge list for `config`.
///
/// Endpoints are distinct whenever the universe has at least two elements.
/// An empty universe yields no edges.
pub fn generate_edges(config: &WorkloadConfig) -> Vec<WeightedEdge> {
    let n = config.num_elements;
    if n == 0 {
        return Vec::new();
    }
    let mut rng = StdRng::seed_from_u64(config.seed ^ EDGE_STREAM);
    let max_weight = config.max_weight.max(1);
    (0..config.num_edges)
        .map(|_| {
            let from = rng.gen_range(0..n);
            let mut to = rng.gen_range(0..n);
            if n > 1 && to == from {
                to = (to + 1) % n;
            }
            WeightedEdge {
                from,
                to,
                weight: rng.gen_range(1..=max_weight),
            }
        })
        .collect()
}

/// Generates both streams for `config`.
pub fn generate_workload(config: &WorkloadConfig) -> Workload {
    Workload {
        config: config.clone(),
        heap_ops: generate_heap_ops(config),
        edges: generate_edges(config),
    }
}
