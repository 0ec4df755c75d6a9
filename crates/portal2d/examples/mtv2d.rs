extern crate nalgebra as na;

use na::Point2;
use portal2d::bounding_volume::Aabb;
use portal2d::query::{self, gjk, mpr, QueryOptions};
use portal2d::shape::{Circle, Segment};

fn main() {
    let opts = QueryOptions::default();

    /*
     * Initialize the shapes.
     */
    let box1 = Aabb::from_top_left(0.0, 0.0, 10.0, 10.0);
    let box2 = Aabb::from_top_left(5.0, 0.0, 10.0, 10.0);
    let circle1 = Circle::new(Point2::new(0.0, 0.0), 5.0);
    let circle2 = Circle::new(Point2::new(12.0, 0.0), 5.0);
    let ground = Segment::new(Point2::new(-20.0, 7.0), Point2::new(20.0, 7.0));

    /*
     * Boolean tests.
     */
    let boxes_hit = gjk::intersection_test(&box1, &box2, &opts).unwrap();
    let circles_hit = gjk::intersection_test(&circle1, &circle2, &opts).unwrap();
    println!("Boxes intersect: {}", boxes_hit);
    println!("Circles intersect: {}", circles_hit);

    /*
     * Penetration.
     */
    let hit = mpr::mpr(&box1, &box2, &opts).unwrap();
    if hit.intersecting {
        let res = mpr::mtv(&box1, &box2, &hit.portal, &opts).unwrap();
        println!(
            "Boxes MTV: {:?} after {} refinements",
            res.translation, res.iterations
        );
    }

    /*
     * Distances.
     */
    let dist = query::closest_points(&circle1, &circle2, &opts).unwrap();
    println!("Circles distance: {}", dist.distance());

    let contact = query::collide(&circle1, &ground, &opts).unwrap();
    println!(
        "Circle vs ground: colliding {}, dist {}, normal {:?}",
        contact.colliding, contact.dist, contact.normal1
    );
}
