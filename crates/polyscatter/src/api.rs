//! Curated internal API for callers (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for the CLI,
//!   benches and demos. Breaking changes are allowed and expected.

// Geometry kernel adapter
pub use crate::geom::{BBox2, Region, Shape};
// Placement core
pub use crate::place::{
    correct_extent, place_all, random_angle_deg, random_point_in_region, recenter, rotate_random,
    BatchReport, PlaceCfg, Placement, PlacementOutcome, Placer, ReplayToken,
};
pub use crate::PlaceError;
