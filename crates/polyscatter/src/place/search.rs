//! Placement loop: attempt, check containment, retry or give up.
//!
//! States: ATTEMPT → CHECK → SUCCESS | RETRY → … → GIVE_UP.
//! Giving up is not an error. The last attempted pose is returned with
//! `contained == false` and a `warn!` event naming the shape index.

use rand::Rng;

use super::cfg::PlaceCfg;
use super::extent::correct_extent;
use super::sample::random_point_in_region;
use super::transform::{recenter, rotate_random};
use crate::error::PlaceError;
use crate::geom::{Region, Shape};

/// Per-shape diagnostic record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacementOutcome {
    /// Position of the shape in the input layer.
    pub index: usize,
    /// Attempts made, first one included.
    pub attempts: u64,
    /// Whether the returned shape is fully inside the region.
    pub contained: bool,
}

/// Placed shape plus its diagnostic.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    pub shape: Shape,
    pub outcome: PlacementOutcome,
}

/// Places shapes inside a fixed region under a fixed budget.
#[derive(Clone, Copy, Debug)]
pub struct Placer<'a> {
    region: &'a Region,
    cfg: PlaceCfg,
}

impl<'a> Placer<'a> {
    pub fn new(region: &'a Region, cfg: PlaceCfg) -> Result<Self, PlaceError> {
        cfg.validate()?;
        Ok(Self { region, cfg })
    }

    /// Place one shape. `index` only labels diagnostics.
    ///
    /// Errors are run-level only: a shape without centroid or with non-finite
    /// coordinates, or a region the sampler cannot hit. Exhausting the retry budget returns `Ok` with
    /// `outcome.contained == false`.
    pub fn place<R: Rng>(
        &self,
        index: usize,
        shape: &Shape,
        rng: &mut R,
    ) -> Result<Placement, PlaceError> {
        check_shape(index, shape)?;
        let max_attempts = self.cfg.max_attempts();
        let mut attempts = 0u64;
        loop {
            attempts += 1;
            let candidate = self.attempt(index, shape, rng)?;
            if self.region.contains_shape(&candidate) {
                tracing::debug!(index, attempts, "placed");
                return Ok(Placement {
                    shape: candidate,
                    outcome: PlacementOutcome {
                        index,
                        attempts,
                        contained: true,
                    },
                });
            }
            if attempts >= max_attempts {
                tracing::warn!(
                    index,
                    attempts,
                    "shape failed to be within region; keeping best-effort placement"
                );
                return Ok(Placement {
                    shape: candidate,
                    outcome: PlacementOutcome {
                        index,
                        attempts,
                        contained: false,
                    },
                });
            }
        }
    }

    /// One pass: anchor → recenter → rotate → extent correction.
    fn attempt<R: Rng>(
        &self,
        index: usize,
        shape: &Shape,
        rng: &mut R,
    ) -> Result<Shape, PlaceError> {
        let anchor = random_point_in_region(self.region, self.cfg.max_point_draws, rng)?;
        let moved =
            recenter(shape, anchor).ok_or_else(|| PlaceError::shape(index, "shape has no centroid"))?;
        let rotated = rotate_random(&moved, rng);
        Ok(correct_extent(&rotated, self.region))
    }
}

/// Shapes the loop can move: a centroid exists and every coordinate is finite.
pub(crate) fn check_shape(index: usize, shape: &Shape) -> Result<(), PlaceError> {
    if shape.centroid().is_none() {
        return Err(PlaceError::shape(index, "shape has no centroid"));
    }
    if !shape.is_finite() {
        return Err(PlaceError::shape(index, "shape has non-finite coordinates"));
    }
    Ok(())
}
