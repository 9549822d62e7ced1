//! Scatter a few shapes into a concave region and print where they landed.
//!
//! Usage:
//!   cargo run -p polyscatter --example scatter_demo -- [seed]

use geo::{polygon, MultiPolygon};
use polyscatter::prelude::*;

fn main() -> Result<(), PlaceError> {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2025);
    let region = Region::new(vec![polygon![
        (x: 0.0, y: 0.0),
        (x: 10.0, y: 0.0),
        (x: 10.0, y: 4.0),
        (x: 4.0, y: 4.0),
        (x: 4.0, y: 10.0),
        (x: 0.0, y: 10.0)
    ]])?;
    let tri = polygon![(x: 50.0, y: 50.0), (x: 51.0, y: 50.0), (x: 50.5, y: 51.0)];
    let pair = MultiPolygon::new(vec![
        polygon![(x: 0.0, y: 0.0), (x: 0.5, y: 0.0), (x: 0.5, y: 0.5), (x: 0.0, y: 0.5)],
        polygon![(x: 1.0, y: 0.0), (x: 1.5, y: 0.0), (x: 1.5, y: 0.5), (x: 1.0, y: 0.5)],
    ]);
    let too_big = polygon![(x: 0.0, y: 0.0), (x: 12.0, y: 0.0), (x: 12.0, y: 12.0), (x: 0.0, y: 12.0)];
    let shapes = vec![Shape::from(tri), Shape::from(pair), Shape::from(too_big)];
    let cfg = PlaceCfg {
        seed,
        max_retries: 200,
        ..PlaceCfg::default()
    };
    let (placed, report) = place_all(&shapes, &region, cfg)?;
    for (shape, o) in placed.iter().zip(&report.outcomes) {
        let c = shape.centroid().unwrap_or_else(|| Vec2::new(f64::NAN, f64::NAN));
        println!(
            "shape {}: parts={} attempts={} contained={} centroid=({:.3}, {:.3})",
            o.index,
            shape.part_count(),
            o.attempts,
            o.contained,
            c.x,
            c.y
        );
    }
    println!("failed: {}", report.failed());
    Ok(())
}
