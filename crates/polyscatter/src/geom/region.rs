//! Constraining region: a validated, read-only polygon collection.
//!
//! A point or shape is inside the region when it lies inside ANY one of its
//! polygons. A multi-part shape must have all of its parts inside the same
//! polygon. The bounding box covers the whole collection.

use geo::{Area, BoundingRect, Contains, Point, Polygon};
use nalgebra::Vector2;

use super::types::{polygon_is_finite, BBox2, Shape};
use crate::error::PlaceError;

#[derive(Clone, Debug)]
pub struct Region {
    polys: Vec<Polygon<f64>>,
    bbox: BBox2,
    area: f64,
}

impl Region {
    /// Validate and freeze a region.
    ///
    /// Rejects empty collections, non-finite coordinates, a degenerate box and
    /// zero total area. Point sampling would never terminate on any of these.
    pub fn new(polys: Vec<Polygon<f64>>) -> Result<Self, PlaceError> {
        if polys.is_empty() {
            return Err(PlaceError::region("region has no polygons"));
        }
        if !polys.iter().all(polygon_is_finite) {
            return Err(PlaceError::region("region has non-finite coordinates"));
        }
        let bbox = polys
            .iter()
            .filter_map(|p| p.bounding_rect().map(BBox2::from))
            .reduce(|a, b| a.union(&b))
            .ok_or_else(|| PlaceError::region("region polygons are empty"))?;
        if bbox.is_degenerate() {
            return Err(PlaceError::region(format!(
                "bounding box {:.6}x{:.6} has no area",
                bbox.width(),
                bbox.height()
            )));
        }
        let area: f64 = polys.iter().map(|p| p.unsigned_area()).sum();
        if !(area > 0.0) {
            return Err(PlaceError::region("total area is zero"));
        }
        Ok(Self { polys, bbox, area })
    }

    /// Flatten shapes into their parts and build a region from them.
    pub fn from_shapes(shapes: &[Shape]) -> Result<Self, PlaceError> {
        Self::new(
            shapes
                .iter()
                .flat_map(|s| s.parts().iter().cloned())
                .collect(),
        )
    }

    #[inline]
    pub fn bbox(&self) -> BBox2 {
        self.bbox
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.area
    }

    #[inline]
    pub fn polygons(&self) -> &[Polygon<f64>] {
        &self.polys
    }

    /// Area of the region over area of its box; the expected hit rate of
    /// rejection sampling.
    pub fn fill_ratio(&self) -> f64 {
        (self.area / (self.bbox.width() * self.bbox.height())).min(1.0)
    }

    pub fn contains_point(&self, p: Vector2<f64>) -> bool {
        let pt = Point::new(p.x, p.y);
        self.polys.iter().any(|r| r.contains(&pt))
    }

    /// Full containment: every part of `shape` inside one region polygon.
    pub fn contains_shape(&self, shape: &Shape) -> bool {
        let parts = shape.parts();
        if parts.is_empty() {
            return false;
        }
        self.polys
            .iter()
            .any(|r| parts.iter().all(|part| r.contains(part)))
    }
}
