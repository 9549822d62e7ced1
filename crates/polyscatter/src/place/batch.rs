//! Batch runner: place every shape of a layer, order preserved.

use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;

use super::cfg::PlaceCfg;
use super::sample::ReplayToken;
use super::search::{check_shape, Placement, PlacementOutcome, Placer};
use crate::error::PlaceError;
use crate::geom::{Region, Shape};

/// Diagnostics of a batch, one outcome per input shape in input order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BatchReport {
    pub outcomes: Vec<PlacementOutcome>,
}

impl BatchReport {
    /// Shapes returned without full containment.
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.contained).count()
    }

    pub fn failed_indices(&self) -> Vec<usize> {
        self.outcomes
            .iter()
            .filter(|o| !o.contained)
            .map(|o| o.index)
            .collect()
    }

    pub fn total_attempts(&self) -> u64 {
        self.outcomes.iter().map(|o| o.attempts).sum()
    }
}

/// Place all `shapes` inside `region`.
///
/// Output `i` is the placement of input `i`; placements are independent, so
/// outputs may overlap. Shape `i` draws from `ReplayToken { seed, index: i }`,
/// which makes the sequential and parallel paths produce identical layers.
///
/// Every shape is checked for a centroid and finite coordinates before any
/// placement starts.
pub fn place_all(
    shapes: &[Shape],
    region: &Region,
    cfg: PlaceCfg,
) -> Result<(Vec<Shape>, BatchReport), PlaceError> {
    let placer = Placer::new(region, cfg)?;
    for (index, shape) in shapes.iter().enumerate() {
        check_shape(index, shape)?;
    }
    let total = shapes.len();
    tracing::info!(total, parallel = cfg.parallel, "placing geometries");
    let done = AtomicUsize::new(0);
    let place_one = |(index, shape): (usize, &Shape)| -> Result<Placement, PlaceError> {
        let mut rng = ReplayToken {
            seed: cfg.seed,
            index: index as u64,
        }
        .to_std_rng();
        let placed = placer.place(index, shape, &mut rng)?;
        let finished = done.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::info!(done = finished, total, "geometries finished");
        Ok(placed)
    };
    let placements: Vec<Placement> = if cfg.parallel {
        shapes.par_iter().enumerate().map(place_one).collect::<Result<_, _>>()?
    } else {
        shapes.iter().enumerate().map(place_one).collect::<Result<_, _>>()?
    };
    let mut out = Vec::with_capacity(total);
    let mut report = BatchReport {
        outcomes: Vec::with_capacity(total),
    };
    for p in placements {
        out.push(p.shape);
        report.outcomes.push(p.outcome);
    }
    let failed = report.failed();
    if failed > 0 {
        tracing::warn!(failed, total, "some geometries are not fully inside the region");
    }
    Ok((out, report))
}
