//! Rigid transforms used per attempt.

use nalgebra::Vector2;
use rand::Rng;

use super::sample::random_angle_deg;
use crate::geom::Shape;

/// Translate `shape` so its centroid lands on `target`.
///
/// `None` when the shape has no centroid (empty geometry).
pub fn recenter(shape: &Shape, target: Vector2<f64>) -> Option<Shape> {
    let c = shape.centroid()?;
    Some(shape.translate(target - c))
}

/// Rotate about the shape's own centroid by a uniform angle in [0°, 360°).
pub fn rotate_random<R: Rng>(shape: &Shape, rng: &mut R) -> Shape {
    shape.rotate_about_centroid(random_angle_deg(rng))
}
