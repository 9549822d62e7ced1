use super::*;
use crate::error::PlaceError;
use geo::{polygon, MultiPolygon, Polygon};
use nalgebra::vector;

fn square(x0: f64, y0: f64, side: f64) -> Polygon<f64> {
    polygon![
        (x: x0, y: y0),
        (x: x0 + side, y: y0),
        (x: x0 + side, y: y0 + side),
        (x: x0, y: y0 + side)
    ]
}

#[test]
fn bbox_width_height_and_containment() {
    let b = BBox2::new(0.0, 0.0, 10.0, 4.0);
    assert_eq!(b.width(), 10.0);
    assert_eq!(b.height(), 4.0);
    assert!(b.contains_point(vector![10.0, 4.0]));
    assert!(!b.contains_point(vector![10.5, 4.0]));
    assert!(b.contains_bbox(&BBox2::new(1.0, 1.0, 10.0, 2.0)));
    assert!(!b.contains_bbox(&BBox2::new(-1.0, 1.0, 2.0, 2.0)));
    assert!(!b.is_degenerate());
    assert!(BBox2::new(0.0, 0.0, 0.0, 1.0).is_degenerate());
    assert!(BBox2::new(0.0, 0.0, f64::INFINITY, 1.0).is_degenerate());
}

#[test]
fn shape_parts_and_centroid() {
    let single = Shape::from(square(0.0, 0.0, 2.0));
    assert_eq!(single.part_count(), 1);
    let c = single.centroid().unwrap();
    assert!((c - vector![1.0, 1.0]).norm() < 1e-12);

    // Equal-area parts: centroid is the midpoint of the part centroids.
    let multi = Shape::from(MultiPolygon::new(vec![
        square(0.0, 0.0, 1.0),
        square(4.0, 0.0, 1.0),
    ]));
    assert_eq!(multi.part_count(), 2);
    let c = multi.centroid().unwrap();
    assert!((c - vector![2.5, 0.5]).norm() < 1e-12);
    assert!((multi.area() - 2.0).abs() < 1e-12);
}

#[test]
fn multi_rotation_is_rigid_about_whole_centroid() {
    let multi = Shape::from(MultiPolygon::new(vec![
        square(0.0, 0.0, 1.0),
        square(4.0, 0.0, 1.0),
    ]));
    let rotated = multi.rotate_about_centroid(90.0);
    assert_eq!(rotated.part_count(), 2);
    // Part centroids (0.5,0.5) and (4.5,0.5) swing about (2.5,0.5) onto the y axis.
    let parts: Vec<_> = rotated
        .parts()
        .iter()
        .map(|p| Shape::from(p.clone()).centroid().unwrap())
        .collect();
    assert!((parts[0] - vector![2.5, -1.5]).norm() < 1e-9);
    assert!((parts[1] - vector![2.5, 2.5]).norm() < 1e-9);
}

#[test]
fn translate_moves_bbox() {
    let s = Shape::from(square(0.0, 0.0, 1.0));
    let t = s.translate(vector![3.0, -2.0]);
    let b = t.bbox().unwrap();
    assert!((b.min - vector![3.0, -2.0]).norm() < 1e-12);
    assert!((b.max - vector![4.0, -1.0]).norm() < 1e-12);
    // Input untouched.
    assert_eq!(s.bbox().unwrap().min, vector![0.0, 0.0]);
}

#[test]
fn region_rejects_degenerate_inputs() {
    assert!(matches!(
        Region::new(vec![]),
        Err(PlaceError::DegenerateRegion { .. })
    ));
    // Collinear ring: the box is flat.
    let flat = polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 2.0, y: 0.0)];
    assert!(matches!(
        Region::new(vec![flat]),
        Err(PlaceError::DegenerateRegion { .. })
    ));
    // Zero area with a non-flat box: an L of back-and-forth segments.
    let sliver = polygon![
        (x: 0.0, y: 0.0),
        (x: 1.0, y: 0.0),
        (x: 0.0, y: 0.0),
        (x: 0.0, y: 1.0)
    ];
    assert!(matches!(
        Region::new(vec![sliver]),
        Err(PlaceError::DegenerateRegion { .. })
    ));
    let nan = polygon![(x: 0.0, y: 0.0), (x: f64::NAN, y: 0.0), (x: 1.0, y: 1.0)];
    assert!(matches!(
        Region::new(vec![nan]),
        Err(PlaceError::DegenerateRegion { .. })
    ));
}

#[test]
fn region_box_spans_all_polygons() {
    let r = Region::new(vec![square(0.0, 0.0, 1.0), square(5.0, 2.0, 1.0)]).unwrap();
    assert_eq!(r.bbox(), BBox2::new(0.0, 0.0, 6.0, 3.0));
    assert!((r.area() - 2.0).abs() < 1e-12);
    assert!((r.fill_ratio() - 2.0 / 18.0).abs() < 1e-12);
}

#[test]
fn region_point_and_shape_containment() {
    let r = Region::new(vec![square(0.0, 0.0, 10.0), square(20.0, 0.0, 10.0)]).unwrap();
    assert!(r.contains_point(vector![5.0, 5.0]));
    assert!(r.contains_point(vector![25.0, 5.0]));
    assert!(!r.contains_point(vector![15.0, 5.0]));
    // Boundary points are outside (strict containment).
    assert!(!r.contains_point(vector![0.0, 5.0]));

    assert!(r.contains_shape(&Shape::from(square(1.0, 1.0, 2.0))));
    assert!(!r.contains_shape(&Shape::from(square(9.0, 1.0, 2.0))));

    // Parts split across two region polygons do not count as contained.
    let split = Shape::from(MultiPolygon::new(vec![
        square(1.0, 1.0, 1.0),
        square(21.0, 1.0, 1.0),
    ]));
    assert!(!r.contains_shape(&split));
    let together = Shape::from(MultiPolygon::new(vec![
        square(21.0, 1.0, 1.0),
        square(25.0, 5.0, 1.0),
    ]));
    assert!(r.contains_shape(&together));
}

#[test]
fn shape_finiteness_covers_every_part() {
    assert!(Shape::from(square(0.0, 0.0, 1.0)).is_finite());
    let bad = polygon![(x: 0.0, y: 0.0), (x: f64::INFINITY, y: 0.0), (x: 0.0, y: 1.0)];
    let multi = Shape::from(MultiPolygon::new(vec![square(0.0, 0.0, 1.0), bad]));
    assert!(!multi.is_finite());
}

#[test]
fn region_from_shapes_flattens_parts() {
    let shapes = vec![
        Shape::from(square(0.0, 0.0, 1.0)),
        Shape::from(MultiPolygon::new(vec![
            square(2.0, 0.0, 1.0),
            square(4.0, 0.0, 1.0),
        ])),
    ];
    let r = Region::from_shapes(&shapes).unwrap();
    assert_eq!(r.polygons().len(), 3);
}
