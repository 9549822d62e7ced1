//! Constrained random placement.
//!
//! Purpose
//! - Move and rotate each shape of a layer to a random pose that lies fully
//!   inside a region, retrying under a bounded budget and degrading to a
//!   best-effort pose (with a diagnostic) when the budget runs out.
//!
//! Pipeline per attempt
//! - `sample`: uniform anchor inside the region (rejection against its box).
//! - `transform`: recenter the input at the anchor, then rotate by a random angle.
//! - `extent`: wrap parts whose centroid left the region box back by one box
//!   width/height.
//! - `search`: full containment check; retry or give up.
//! - `batch`: per-shape independent placement, order preserved, optionally parallel.
//!
//! Determinism
//! - All sampling takes an injected `Rng`. Batches derive one `StdRng` per
//!   shape from `ReplayToken { seed, index }`, so shape `i` lands in the same
//!   pose whether the batch runs sequentially or on the rayon pool.

mod batch;
mod cfg;
mod extent;
mod sample;
mod search;
mod transform;

pub use batch::{place_all, BatchReport};
pub use cfg::PlaceCfg;
pub use extent::correct_extent;
pub use sample::{random_angle_deg, random_point_in_region, ReplayToken};
pub use search::{Placement, PlacementOutcome, Placer};
pub use transform::{recenter, rotate_random};
