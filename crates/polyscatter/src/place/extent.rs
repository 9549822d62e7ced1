//! Extent correction: bring part centroids back into the region's box.
//!
//! Guarantee
//! - Same parts in the same order, each with unchanged local geometry; every
//!   part centroid ends up inside the region box. This is weaker than full
//!   containment, which the placement loop checks separately.
//!
//! Precondition
//! - A centroid sits at most one box width (height) outside the box. The wrap
//!   is a single step, not a modulo. Anchors drawn by `sample` stay inside the
//!   box, so only rotation of multi-part shapes pushes parts out, and never by
//!   more than the shape's own extent.

use geo::{BoundingRect, Polygon};
use nalgebra::Vector2;

use super::transform::recenter;
use crate::geom::{BBox2, Region, Shape};

/// Correct every part of `shape` against the bounding box of `region`.
pub fn correct_extent(shape: &Shape, region: &Region) -> Shape {
    let bbox = region.bbox();
    shape.map_parts(|part| correct_part(part, bbox))
}

fn correct_part(part: &Polygon<f64>, bbox: BBox2) -> Polygon<f64> {
    // Already inside the box: leave it bit-identical.
    match part.bounding_rect() {
        Some(r) if !bbox.contains_bbox(&BBox2::from(r)) => {}
        _ => return part.clone(),
    }
    let single = Shape::Single(part.clone());
    let Some(c) = single.centroid() else {
        return part.clone();
    };
    let target = wrap_once(c, bbox);
    if target == c {
        return part.clone();
    }
    match recenter(&single, target) {
        Some(Shape::Single(moved)) => moved,
        _ => part.clone(),
    }
}

/// Shift each coordinate by one box dimension toward the box if it lies outside.
pub(crate) fn wrap_once(p: Vector2<f64>, bbox: BBox2) -> Vector2<f64> {
    let mut q = p;
    if q.x < bbox.min.x {
        q.x += bbox.width();
    } else if q.x > bbox.max.x {
        q.x -= bbox.width();
    }
    if q.y < bbox.min.y {
        q.y += bbox.height();
    } else if q.y > bbox.max.y {
        q.y -= bbox.height();
    }
    q
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::polygon;
    use nalgebra::vector;

    #[test]
    fn wrap_once_per_axis() {
        let b = BBox2::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(wrap_once(vector![15.0, 5.0], b), vector![5.0, 5.0]);
        assert_eq!(wrap_once(vector![-3.0, 12.0], b), vector![7.0, 2.0]);
        assert_eq!(wrap_once(vector![4.0, 4.0], b), vector![4.0, 4.0]);
        // Single step only: far displacements are not folded back.
        assert_eq!(wrap_once(vector![25.0, 5.0], b), vector![15.0, 5.0]);
    }

    #[test]
    fn wrapped_part_is_recentred_on_wrapped_centroid() {
        let region = Region::new(vec![polygon![
            (x: 0.0, y: 0.0),
            (x: 10.0, y: 0.0),
            (x: 10.0, y: 10.0),
            (x: 0.0, y: 10.0)
        ]])
        .unwrap();
        let part = Shape::from(polygon![
            (x: 12.0, y: -3.0),
            (x: 14.0, y: -3.0),
            (x: 13.0, y: -1.0)
        ]);
        let c = part.centroid().unwrap();
        let target = wrap_once(c, region.bbox());
        assert!(region.bbox().contains_point(target));
        assert_eq!(correct_extent(&part, &region), recenter(&part, target).unwrap());
    }
}
