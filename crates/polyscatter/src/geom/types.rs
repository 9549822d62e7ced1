//! Basic shape and box types.
//!
//! - `BBox2`: closed axis-aligned box, used for sampling and extent wrapping.
//! - `Shape`: single- or multi-part polygon; the tagged variant keeps the
//!   part structure explicit so per-part routines dispatch in one place.

use geo::{Area, BoundingRect, Centroid, MultiPolygon, Polygon, Rect, Rotate, Translate};
use nalgebra::Vector2;

use super::to_vec2;

/// Closed axis-aligned box `[min.x, max.x] × [min.y, max.y]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox2 {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl BBox2 {
    #[inline]
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min: Vector2::new(min_x, min_y),
            max: Vector2::new(max_x, max_y),
        }
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
    #[inline]
    pub fn contains_point(&self, p: Vector2<f64>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
    /// Closed-box containment of another box (touching edges count as inside).
    #[inline]
    pub fn contains_bbox(&self, other: &BBox2) -> bool {
        self.contains_point(other.min) && self.contains_point(other.max)
    }
    /// Smallest box covering both.
    #[inline]
    pub fn union(&self, other: &BBox2) -> BBox2 {
        BBox2 {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }
    /// True when the box cannot support sampling: non-finite or without area.
    pub fn is_degenerate(&self) -> bool {
        let finite = self.min.iter().chain(self.max.iter()).all(|v| v.is_finite());
        !(finite && self.width() > 0.0 && self.height() > 0.0)
    }
}

impl From<Rect<f64>> for BBox2 {
    fn from(r: Rect<f64>) -> Self {
        BBox2::new(r.min().x, r.min().y, r.max().x, r.max().y)
    }
}

/// A shape being placed: one polygon, or an ordered set of polygon parts.
///
/// A `Multi` stays `Multi` through every transform, even with a single part.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Single(Polygon<f64>),
    Multi(MultiPolygon<f64>),
}

impl Shape {
    /// Area centroid of the whole shape (area-weighted over parts).
    /// `None` for empty geometry.
    pub fn centroid(&self) -> Option<Vector2<f64>> {
        match self {
            Shape::Single(p) => p.centroid().map(to_vec2),
            Shape::Multi(mp) => mp.centroid().map(to_vec2),
        }
    }

    pub fn bbox(&self) -> Option<BBox2> {
        match self {
            Shape::Single(p) => p.bounding_rect().map(BBox2::from),
            Shape::Multi(mp) => mp.bounding_rect().map(BBox2::from),
        }
    }

    pub fn area(&self) -> f64 {
        match self {
            Shape::Single(p) => p.unsigned_area(),
            Shape::Multi(mp) => mp.unsigned_area(),
        }
    }

    /// Ordered parts; a single polygon is its own only part.
    pub fn parts(&self) -> &[Polygon<f64>] {
        match self {
            Shape::Single(p) => std::slice::from_ref(p),
            Shape::Multi(mp) => &mp.0,
        }
    }

    #[inline]
    pub fn part_count(&self) -> usize {
        self.parts().len()
    }

    /// Rigid translation of every coordinate by `d`.
    pub fn translate(&self, d: Vector2<f64>) -> Shape {
        match self {
            Shape::Single(p) => Shape::Single(p.translate(d.x, d.y)),
            Shape::Multi(mp) => Shape::Multi(mp.translate(d.x, d.y)),
        }
    }

    /// Rotate counterclockwise by `degrees` about the whole shape's centroid.
    /// Parts of a multi-part shape move as one rigid body.
    pub fn rotate_about_centroid(&self, degrees: f64) -> Shape {
        match self {
            Shape::Single(p) => Shape::Single(p.rotate_around_centroid(degrees)),
            Shape::Multi(mp) => Shape::Multi(mp.rotate_around_centroid(degrees)),
        }
    }

    /// Rebuild a shape of the same variant from mapped parts (order kept).
    pub(crate) fn map_parts<F>(&self, mut f: F) -> Shape
    where
        F: FnMut(&Polygon<f64>) -> Polygon<f64>,
    {
        match self {
            Shape::Single(p) => Shape::Single(f(p)),
            Shape::Multi(mp) => Shape::Multi(MultiPolygon::new(mp.iter().map(f).collect())),
        }
    }

    /// All coordinates finite (exterior and holes of every part).
    pub fn is_finite(&self) -> bool {
        self.parts().iter().all(polygon_is_finite)
    }
}

impl From<Polygon<f64>> for Shape {
    fn from(p: Polygon<f64>) -> Self {
        Shape::Single(p)
    }
}

impl From<MultiPolygon<f64>> for Shape {
    fn from(mp: MultiPolygon<f64>) -> Self {
        Shape::Multi(mp)
    }
}

pub(crate) fn polygon_is_finite(p: &Polygon<f64>) -> bool {
    std::iter::once(p.exterior())
        .chain(p.interiors())
        .flat_map(|ring| ring.coords())
        .all(|c| c.x.is_finite() && c.y.is_finite())
}
