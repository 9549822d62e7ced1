//! Geometry kernel adapter.
//!
//! Purpose
//! - Wrap the `geo` polygon algorithms behind the small surface the placement
//!   core needs: rotate about centroid, translate, centroid, bounding box,
//!   point/shape containment, and decomposition into parts.
//! - Points and offsets are `nalgebra::Vector2<f64>`; polygons stay `geo` types.
//!
//! Conventions
//! - Every transform returns a new value. Inputs are never mutated.
//! - Centroids are recomputed on demand, never cached on a shape.
//! - Containment is strict (`geo::Contains`): boundary points are outside.

mod region;
mod types;

pub use region::Region;
pub use types::{BBox2, Shape};

/// Convert a `geo` point to the vector type used by the core.
#[inline]
pub(crate) fn to_vec2(p: geo::Point<f64>) -> nalgebra::Vector2<f64> {
    nalgebra::Vector2::new(p.x(), p.y())
}

#[cfg(test)]
mod tests;
