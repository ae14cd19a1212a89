//! Find values within a radius of a point.
//!
//! ```bash
//! RUST_LOG=gridmap=debug cargo run --example query_radius
//! ```
use gridmap::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), GridMapError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // threshold 3, depth 2, 10x10 region at the origin
    let mut map = GridMap::new(3, 2, 0, 0, 10, 10)?;
    map.add(1, 1, 100)?;
    map.add(9, 9, 200)?;

    let near = map.query(1, 1, 2);
    println!("Within 2 of (1, 1): {:?}", near);
    assert_eq!(near, vec![100], "Only the point at (1, 1) is that close");

    let mut all = map.query(5, 5, 20);
    all.sort();
    println!("Within 20 of (5, 5): {:?}", all);
    assert_eq!(all, vec![100, 200], "Both points are within 20");

    // Points outside the region are reported, not dropped
    match map.add(20, 20, 300) {
        Err(err) => println!("Rejected: {err}"),
        Ok(()) => unreachable!("(20, 20) lies outside the 10x10 region"),
    }

    println!("{} points stored", map.len());
    Ok(())
}
