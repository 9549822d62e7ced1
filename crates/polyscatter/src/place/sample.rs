//! Random anchors and angles.
//!
//! Model
//! - Anchors are drawn uniformly from the region's box and rejected until one
//!   lies inside the region. With positive region area this terminates almost
//!   surely; `Region::new` rules out zero area and the draw cap bounds the
//!   pathological case of a tiny region in a huge box.
//! - Replay tokens `(seed, index)` give every shape its own reproducible stream.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::PlaceError;
use crate::geom::Region;

/// Replay token making per-shape draws reproducible and independent of
/// scheduling order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer; neighbouring indices get unrelated streams.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Uniform point inside `region` by rejection against its bounding box.
///
/// Errors with `PointSamplingExhausted` after `max_draws` misses.
pub fn random_point_in_region<R: Rng>(
    region: &Region,
    max_draws: u64,
    rng: &mut R,
) -> Result<Vector2<f64>, PlaceError> {
    let b = region.bbox();
    for _ in 0..max_draws {
        let p = Vector2::new(
            rng.gen_range(b.min.x..=b.max.x),
            rng.gen_range(b.min.y..=b.max.y),
        );
        if region.contains_point(p) {
            return Ok(p);
        }
    }
    Err(PlaceError::PointSamplingExhausted { draws: max_draws })
}

/// Uniform angle in degrees on [0, 360).
#[inline]
pub fn random_angle_deg<R: Rng>(rng: &mut R) -> f64 {
    rng.gen_range(0.0..360.0)
}
