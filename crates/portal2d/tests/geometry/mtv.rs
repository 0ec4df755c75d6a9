use portal2d::bounding_volume::Aabb;
use portal2d::math::{Point, Real, Vector};
use portal2d::query::gjk;
use portal2d::query::mpr;
use portal2d::query::{collide, QueryOptions};
use portal2d::shape::{Circle, Translated};

use crate::shapes::{rand_shape, separation};

#[test]
fn overlapping_boxes_mtv() {
    let opts = QueryOptions::default();
    let b1 = Aabb::from_top_left(0.0, 0.0, 10.0, 10.0);
    let b2 = Aabb::from_top_left(5.0, 0.0, 10.0, 10.0);

    let hit = mpr::mpr(&b1, &b2, &opts).unwrap();
    assert!(hit.intersecting);

    let res = mpr::mtv(&b1, &b2, &hit.portal, &opts).unwrap();
    let translation = res.translation.unwrap();
    assert_relative_eq!(translation, Vector::new(-5.0, 0.0), epsilon = 1.0e-2);
    assert!(res.points.is_some());
}

#[test]
fn overlapping_circles_mtv() {
    let opts = QueryOptions::default();
    let c1 = Circle::new(Point::new(0.0, 0.0), 5.0);
    let c2 = Circle::new(Point::new(8.0, 0.0), 5.0);

    let contact = collide(&c1, &c2, &opts).unwrap();
    assert!(contact.colliding);

    let mtv = contact.mtv.unwrap();
    assert_relative_eq!(mtv.norm(), 2.0, epsilon = 1.0e-2);
    assert!(mtv.x < 0.0);
    assert_relative_eq!(contact.dist, -mtv.norm());
    assert_relative_eq!(contact.normal1.x, 1.0, epsilon = 1.0e-2);
}

#[test]
fn concentric_circles_are_pushed_apart() {
    let opts = QueryOptions::default();
    let c1 = Circle::new(Point::new(3.0, 3.0), 1.0);
    let c2 = Circle::new(Point::new(3.0, 3.0), 2.0);

    let contact = collide(&c1, &c2, &opts).unwrap();
    let mtv = contact.mtv.unwrap();
    assert_relative_eq!(mtv.norm(), 3.0, epsilon = 1.0e-2);
}

#[test]
fn mtv_separates_exactly() {
    let opts = QueryOptions::default();
    let mut rng = oorandom::Rand32::new(42);
    let mut checked = 0;

    for _ in 0..2000 {
        let s1 = rand_shape(&mut rng);
        let s2 = rand_shape(&mut rng);

        if !matches!(separation(&s1, &s2), Some(sep) if sep < -0.2) {
            continue;
        }

        let contact = collide(&s1, &s2, &opts).unwrap();
        assert!(contact.colliding);

        let mtv = contact.mtv.unwrap();
        let len = mtv.norm();

        if len < 0.2 {
            continue;
        }

        let moved = Translated::new(&s1, mtv);
        assert_eq!(
            gjk::intersection_test(&moved, &s2, &opts),
            Ok(false),
            "{:?} moved by {:?} still hits {:?}",
            s1,
            mtv,
            s2
        );

        let depth: Real = -separation(&s1, &s2).unwrap_or(0.0);
        assert!(len >= depth, "{} is shorter than the depth {}", len, depth);

        let short = Translated::new(&s1, mtv * 0.9);
        assert_eq!(
            gjk::intersection_test(&short, &s2, &opts),
            Ok(true),
            "{:?} moved by 0.9 * {:?} no longer hits {:?}",
            s1,
            mtv,
            s2
        );

        checked += 1;
    }

    assert!(checked > 100);
}

#[test]
fn moving_a_circle_by_its_mtv_separates_it() {
    let opts = QueryOptions::default();
    let c1 = Circle::new(Point::origin(), 5.0);

    for (dx, dy) in [(8.0, 0.0), (5.5, 1.3), (-3.0, 4.0), (0.5, -7.5), (2.0, 2.0), (-9.0, -1.0)] {
        let c2 = Circle::new(Point::new(dx, dy), 5.0);
        let exact = 10.0 - Vector::new(dx, dy).norm();
        let mtv = collide(&c1, &c2, &opts).unwrap().mtv.unwrap();

        assert!(mtv.norm() >= exact);
        assert_relative_eq!(mtv.norm(), exact, epsilon = 1.0e-2);
        assert_eq!(
            gjk::intersection_test(&Translated::new(&c1, mtv), &c2, &opts),
            Ok(false)
        );
    }
}
