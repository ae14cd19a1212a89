//! Performance profiling example for radius queries
//!
//! Builds a large grid map and runs many radius queries against it.
//! Designed to be used with low-level profilers like `samply`:
//!
//! ```bash
//! samply record cargo run --release --example perf
//! ```

use gridmap::prelude::*;
use std::time::Instant;

const EXTENT: u32 = 100_000;

fn next(rng: &mut u64) -> u32 {
    *rng = rng
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    u32::try_from(*rng >> 40).unwrap_or(0) % EXTENT
}

fn main() -> Result<(), GridMapError> {
    println!("Building large grid map...");
    let mut map = GridMap::new(16, 16, 0, 0, EXTENT, EXTENT)?;

    // Simple LCG random number generator
    let mut rng = 12345_u64;
    let build_start = Instant::now();
    for value in 0..1_000_000 {
        let x = next(&mut rng);
        let y = next(&mut rng);
        map.add(x, y, value)?;
    }
    let build_duration = build_start.elapsed();
    println!("Index built in {:.2}ms", build_duration.as_secs_f64() * 1000.0);

    let mut results = Vec::new();
    let mut found = 0;
    let query_start = Instant::now();
    for _ in 0..100_000 {
        results.clear();
        let cx = next(&mut rng);
        let cy = next(&mut rng);
        map.query_into(cx, cy, 500, &mut results);
        found += results.len();
    }
    let query_duration = query_start.elapsed();

    println!(
        "100000 radius queries in {:.2}ms ({} hits)",
        query_duration.as_secs_f64() * 1000.0,
        found
    );
    println!("{:?}", map.stats());
    Ok(())
}
