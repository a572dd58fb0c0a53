//! Generates the huge-tier workload fixture to disk.
//!
//! Writes `target/bench-fixtures/workload.json`, which `benches/huge_workload.rs`
//! loads at benchmark time.

use std::error::Error;
use std::fs;
use std::io::BufWriter;

use algokit_bench::{SizeTier, generate_workload, huge_fixture_path};

fn main() -> Result<(), Box<dyn Error>> {
    let path = huge_fixture_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let config = SizeTier::Huge.config(42);
    eprintln!(
        "Generating Huge tier ({} heap ops, {} edges over {} elements)...",
        config.num_operations, config.num_edges, config.num_elements
    );
    let workload = generate_workload(&config);

    eprintln!("Writing JSON to {}...", path.display());
    let out = fs::File::create(&path)?;
    serde_json::to_writer(BufWriter::new(out), &workload)?;

    let meta = fs::metadata(&path)?;
    eprintln!("JSON: {:.1} MB", meta.len() as f64 / (1024.0 * 1024.0));
    Ok(())
}
