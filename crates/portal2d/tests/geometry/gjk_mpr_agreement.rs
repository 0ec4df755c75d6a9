use portal2d::bounding_volume::Aabb;
use portal2d::math::{Point, Vector};
use portal2d::query::gjk::{self, ConstantOrigin};
use portal2d::query::mpr;
use portal2d::query::QueryOptions;
use portal2d::shape::{Circle, Dot, Segment};

use crate::shapes::{rand_shape, separation};

#[test]
fn overlapping_boxes() {
    let opts = QueryOptions::default();
    let b1 = Aabb::from_top_left(0.0, 0.0, 10.0, 10.0);
    let b2 = Aabb::from_top_left(5.0, 0.0, 10.0, 10.0);

    assert_eq!(gjk::intersection_test(&b1, &b2, &opts), Ok(true));
    assert!(mpr::mpr(&b1, &b2, &opts).unwrap().intersecting);
}

#[test]
fn touching_shapes_do_not_intersect() {
    let opts = QueryOptions::default();

    let c1 = Circle::new(Point::new(0.0, 0.0), 5.0);
    let c2 = Circle::new(Point::new(10.0, 0.0), 5.0);
    assert!(!mpr::mpr(&c1, &c2, &opts).unwrap().intersecting);

    let b1 = Aabb::from_top_left(0.0, 0.0, 10.0, 10.0);
    let b2 = Aabb::from_top_left(10.0, 0.0, 10.0, 10.0);
    assert_eq!(gjk::intersection_test(&b1, &b2, &opts), Ok(false));
    assert!(!mpr::mpr(&b1, &b2, &opts).unwrap().intersecting);
}

#[test]
fn flat_minkowski_differences_do_not_intersect() {
    let opts = QueryOptions::default();
    let seg = Segment::new(Point::new(-1.0, 0.0), Point::new(1.0, 0.0));
    let dot = Dot::new(Point::origin());

    assert!(!mpr::mpr(&seg, &dot, &opts).unwrap().intersecting);
    assert!(!mpr::mpr(&dot, &dot, &opts).unwrap().intersecting);
}

#[test]
fn origin_inside_shape() {
    let opts = QueryOptions::default();
    let circle = Circle::new(Point::new(1.0, 1.0), 2.0);
    let far = Circle::new(Point::new(5.0, 5.0), 2.0);

    assert_eq!(gjk::intersection_test(&circle, &ConstantOrigin, &opts), Ok(true));
    assert_eq!(gjk::intersection_test(&far, &ConstantOrigin, &opts), Ok(false));
    assert!(mpr::mpr(&circle, &ConstantOrigin, &opts).unwrap().intersecting);
    assert!(!mpr::mpr(&far, &ConstantOrigin, &opts).unwrap().intersecting);
}

#[test]
fn gjk_and_mpr_agree_with_exact_geometry() {
    let opts = QueryOptions::default();
    let mut rng = oorandom::Rand32::new(42);
    let mut checked = 0;

    for _ in 0..2000 {
        let s1 = rand_shape(&mut rng);
        let s2 = rand_shape(&mut rng);

        let expected = match separation(&s1, &s2) {
            // Too close to touching for the tolerances to be meaningful.
            Some(sep) if sep.abs() > 1.0e-2 => sep < 0.0,
            _ => continue,
        };

        let in_gjk = gjk::intersection_test(&s1, &s2, &opts).unwrap();
        let in_mpr = mpr::mpr(&s1, &s2, &opts).unwrap();

        assert_eq!(in_gjk, expected, "GJK failed on {:?} vs {:?}", s1, s2);
        assert_eq!(
            in_mpr.intersecting, expected,
            "MPR failed on {:?} vs {:?}",
            s1, s2
        );
        checked += 1;
    }

    assert!(checked > 500);
}

#[test]
fn agreement_is_symmetric() {
    let opts = QueryOptions::default();
    let mut rng = oorandom::Rand32::new(7);

    for _ in 0..500 {
        let s1 = rand_shape(&mut rng);
        let s2 = rand_shape(&mut rng);

        if !matches!(separation(&s1, &s2), Some(sep) if sep.abs() > 1.0e-2) {
            continue;
        }

        let forward = gjk::intersection_test(&s1, &s2, &opts).unwrap();
        let backward = gjk::intersection_test(&s2, &s1, &opts).unwrap();
        assert_eq!(forward, backward);

        let shifted = s1.translated(&Vector::new(0.25, -0.5));
        let shifted_other = s2.translated(&Vector::new(0.25, -0.5));
        assert_eq!(
            gjk::intersection_test(&shifted, &shifted_other, &opts).unwrap(),
            forward
        );
    }
}
