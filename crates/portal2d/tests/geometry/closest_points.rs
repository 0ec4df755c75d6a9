use portal2d::bounding_volume::Aabb;
use portal2d::math::{Point, Vector};
use portal2d::query::gjk;
use portal2d::query::{closest_points, collide, ClosestPoints, QueryOptions};
use portal2d::shape::{Circle, ConvexShape, Segment};

use crate::shapes::{rand_circle, separation};

#[test]
fn separated_circles() {
    let opts = QueryOptions::default();
    let c1 = Circle::new(Point::new(0.0, 0.0), 5.0);
    let c2 = Circle::new(Point::new(12.0, 0.0), 5.0);

    assert_eq!(gjk::intersection_test(&c1, &c2, &opts), Ok(false));

    match closest_points(&c1, &c2, &opts).unwrap() {
        ClosestPoints::WithinDistance {
            point1,
            point2,
            distance,
            ..
        } => {
            assert_relative_eq!(distance, 2.0, epsilon = 1.0e-2);
            assert_relative_eq!(point1, Point::new(5.0, 0.0), epsilon = 1.0e-1);
            assert_relative_eq!(point2, Point::new(7.0, 0.0), epsilon = 1.0e-1);
        }
        ClosestPoints::Intersecting => panic!("The circles do not intersect."),
    }

    let contact = collide(&c1, &c2, &opts).unwrap();
    assert!(!contact.colliding);
    assert!(contact.mtv.is_none());
    assert_relative_eq!(contact.dist, 2.0, epsilon = 1.0e-2);
}

#[test]
fn touching_circles() {
    let opts = QueryOptions::default();
    let c1 = Circle::new(Point::new(0.0, 0.0), 5.0);
    let c2 = Circle::new(Point::new(10.0, 0.0), 5.0);

    let contact = collide(&c1, &c2, &opts).unwrap();
    assert!(!contact.colliding);
    assert!(contact.mtv.is_none());
    assert_relative_eq!(contact.dist, 0.0, epsilon = 1.0e-3);
}

#[test]
fn box_and_segment() {
    let opts = QueryOptions::default();
    let rect = Aabb::from_top_left(0.0, 0.0, 4.0, 4.0);
    let seg = Segment::new(Point::new(-5.0, 7.0), Point::new(5.0, 7.0));

    let res = closest_points(&rect, &seg, &opts).unwrap();
    assert_relative_eq!(res.distance(), 3.0, epsilon = 1.0e-3);

    let flipped = closest_points(&seg, &rect, &opts).unwrap();
    assert_relative_eq!(flipped.distance(), 3.0, epsilon = 1.0e-3);
}

#[test]
fn intersecting_shapes_have_no_distance() {
    let opts = QueryOptions::default();
    let c1: ConvexShape = Circle::new(Point::new(0.0, 0.0), 5.0).into();
    let c2 = c1.translated(&Vector::new(1.0, 1.0));

    assert_eq!(
        closest_points(&c1, &c2, &opts),
        Ok(ClosestPoints::Intersecting)
    );
}

#[test]
fn distance_matches_exact_geometry() {
    let opts = QueryOptions::default();
    let mut rng = oorandom::Rand32::new(42);
    let mut checked = 0;

    for _ in 0..500 {
        let c1 = rand_circle(&mut rng);
        let c2 = rand_circle(&mut rng);
        let sep = separation(&c1.into(), &c2.into()).unwrap();

        if sep < 1.0e-2 {
            continue;
        }

        match closest_points(&c1, &c2, &opts).unwrap() {
            ClosestPoints::WithinDistance {
                point1,
                point2,
                distance,
                ..
            } => {
                assert_relative_eq!(distance, sep, epsilon = 5.0e-3);
                assert_relative_eq!((point1 - c1.center).norm(), c1.radius, epsilon = 5.0e-2);
                assert_relative_eq!((point2 - c2.center).norm(), c2.radius, epsilon = 5.0e-2);
            }
            ClosestPoints::Intersecting => panic!("{:?} and {:?} are {} apart.", c1, c2, sep),
        }

        checked += 1;
    }

    assert!(checked > 100);
}
