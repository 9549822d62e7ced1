//! Constrained random placement of polygon layers.
//!
//! Every shape of an input layer is moved to a random anchor inside a region,
//! given a random rotation, wrapped back into the region's extent, and retried
//! until it lies fully inside the region (or the retry budget runs out).
//!
//! Layout
//! - `geom`: kernel adapter over `geo` (shapes, regions, boxes, predicates).
//! - `place`: sampler, transforms, extent correction, placement loop, batch runner.
//! - `api`: curated re-exports for callers (the CLI and benches).
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.

pub mod api;
pub mod error;
pub mod geom;
pub mod place;

pub use error::PlaceError;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Points and offsets are nalgebra vectors throughout the core.
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::PlaceError;
    pub use crate::geom::{BBox2, Region, Shape};
    pub use crate::place::{
        place_all, BatchReport, PlaceCfg, Placement, PlacementOutcome, Placer, ReplayToken,
    };
    pub use nalgebra::Vector2 as Vec2;
}
