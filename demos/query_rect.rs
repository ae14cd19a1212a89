//! Find values inside an inclusive rectangle.
use gridmap::prelude::*;

fn main() -> Result<(), GridMapError> {
    let config = GridMapConfig::default()
        .with_threshold(3)
        .with_max_depth(8)
        .with_extent(256, 256);
    let mut map = GridMap::from_config(config)?;

    // one value per cell of a 256x256 grid, sampled every 16 cells
    for x in (0..256).step_by(16) {
        for y in (0..256).step_by(16) {
            map.add(x, y, i32::try_from(x * 1000 + y).unwrap_or(i32::MAX))?;
        }
    }

    let mut results = map.query_rect(16, 32, 47, 63);
    results.sort();
    println!("In [16, 47] x [32, 63]: {:?}", results);
    assert_eq!(results, vec![16032, 16048, 32032, 32048], "Four grid points fall inside");

    let stats = map.stats();
    println!(
        "{} points in {} leaves / {} internal nodes, depth {}",
        stats.points, stats.leaf_nodes, stats.internal_nodes, stats.max_depth
    );
    Ok(())
}
