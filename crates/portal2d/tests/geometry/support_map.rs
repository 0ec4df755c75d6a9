use portal2d::bounding_volume::Aabb;
use portal2d::math::{Point, Real, Vector};
use portal2d::shape::{Circle, Dot, Segment, SupportMap};
use portal2d::utils::VectorOps;

use crate::shapes::{rand_box, rand_circle, rand_segment};

#[test]
fn box_support_picks_the_matching_corner() {
    let rect = Aabb::from_top_left(0.0, 0.0, 10.0, 5.0);

    assert_eq!(rect.support_point(&Vector::new(1.0, 1.0)), Point::new(10.0, 5.0));
    assert_eq!(rect.support_point(&Vector::new(-1.0, 1.0)), Point::new(0.0, 5.0));
    assert_eq!(rect.support_point(&Vector::new(1.0, -1.0)), Point::new(10.0, 0.0));
    assert_eq!(rect.support_point(&Vector::new(-1.0, -1.0)), Point::new(0.0, 0.0));
    // Zero components go to the negative side.
    assert_eq!(rect.support_point(&Vector::new(0.0, 1.0)), Point::new(0.0, 5.0));
    assert_eq!(rect.support_point(&Vector::new(1.0, 0.0)), Point::new(10.0, 0.0));
    assert_eq!(rect.support_point(&Vector::zeros()), Point::new(0.0, 0.0));
}

#[test]
fn circle_support_is_on_the_boundary() {
    let circle = Circle::new(Point::new(1.0, 2.0), 3.0);

    assert_relative_eq!(
        circle.support_point(&Vector::new(10.0, 0.0)),
        Point::new(4.0, 2.0)
    );
    assert_relative_eq!(
        circle.support_point(&Vector::new(0.0, -0.5)),
        Point::new(1.0, -1.0)
    );
    assert_eq!(circle.support_point(&Vector::zeros()), circle.center);
}

#[test]
fn segment_support_breaks_ties_toward_the_first_point() {
    let seg = Segment::new(Point::new(0.0, 0.0), Point::new(4.0, 0.0));

    assert_eq!(seg.support_point(&Vector::new(1.0, 0.0)), seg.b);
    assert_eq!(seg.support_point(&Vector::new(-1.0, 3.0)), seg.a);
    assert_eq!(seg.support_point(&Vector::new(0.0, 1.0)), seg.a);
    assert_eq!(seg.support_point(&Vector::zeros()), seg.a);
}

#[test]
fn dot_support_is_the_point() {
    let dot = Dot::new(Point::new(3.0, -1.0));
    assert_eq!(dot.support_point(&Vector::new(1.0, 1.0)), dot.position);
    assert_eq!(dot.support_point(&Vector::zeros()), dot.position);
}

#[test]
fn support_points_are_extremal() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..200 {
        let angle = rng.rand_float() as Real * 6.28;
        let dir = Vector::<Real>::x().rotated(angle) * 3.0;

        let circle = rand_circle(&mut rng);
        let best = circle.support_point(&dir).coords.dot(&dir);
        for k in 0..64 {
            let pt = circle.center + Vector::<Real>::x().rotated(k as Real * 0.1) * circle.radius;
            assert!(pt.coords.dot(&dir) <= best + 1.0e-3);
        }

        let rect = rand_box(&mut rng);
        let best = rect.support_point(&dir).coords.dot(&dir);
        for pt in rect.vertices() {
            assert!(pt.coords.dot(&dir) <= best + 1.0e-3);
        }

        let seg = rand_segment(&mut rng);
        let best = seg.support_point(&dir).coords.dot(&dir);
        assert!(seg.a.coords.dot(&dir) <= best);
        assert!(seg.b.coords.dot(&dir) <= best);
    }
}
