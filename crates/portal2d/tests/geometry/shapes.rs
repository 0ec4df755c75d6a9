//! Random shapes with known exact geometry, shared by the geometry tests.

use portal2d::bounding_volume::Aabb;
use portal2d::math::{Point, Real, Vector};
use portal2d::shape::{Circle, ConvexShape, Segment};

pub fn rand_real(rng: &mut oorandom::Rand32, min: Real, max: Real) -> Real {
    min + (max - min) * rng.rand_float() as Real
}

pub fn rand_point(rng: &mut oorandom::Rand32, extent: Real) -> Point<Real> {
    Point::new(
        rand_real(rng, -extent, extent),
        rand_real(rng, -extent, extent),
    )
}

pub fn rand_circle(rng: &mut oorandom::Rand32) -> Circle {
    Circle::new(rand_point(rng, 10.0), rand_real(rng, 0.5, 5.0))
}

pub fn rand_box(rng: &mut oorandom::Rand32) -> Aabb {
    let pt = rand_point(rng, 10.0);
    Aabb::from_top_left(pt.x, pt.y, rand_real(rng, 0.5, 8.0), rand_real(rng, 0.5, 8.0))
}

pub fn rand_segment(rng: &mut oorandom::Rand32) -> Segment {
    Segment::new(rand_point(rng, 10.0), rand_point(rng, 10.0))
}

/// Distance from a point to a box, zero inside of it.
pub fn point_box_distance(pt: &Point<Real>, rect: &Aabb) -> Real {
    let dx = (rect.mins.x - pt.x).max(pt.x - rect.maxs.x).max(0.0);
    let dy = (rect.mins.y - pt.y).max(pt.y - rect.maxs.y).max(0.0);
    Vector::new(dx, dy).norm()
}

/// Signed separation of two shapes with known exact geometry: positive when separated, negative
/// when penetrating, zero when touching. `None` for pairs without an exact formula.
pub fn separation(s1: &ConvexShape, s2: &ConvexShape) -> Option<Real> {
    match (s1, s2) {
        (ConvexShape::Circle(c1), ConvexShape::Circle(c2)) => {
            Some((c2.center - c1.center).norm() - c1.radius - c2.radius)
        }
        (ConvexShape::Rect(r1), ConvexShape::Rect(r2)) => {
            let gap_x = (r2.mins.x - r1.maxs.x).max(r1.mins.x - r2.maxs.x);
            let gap_y = (r2.mins.y - r1.maxs.y).max(r1.mins.y - r2.maxs.y);

            if gap_x > 0.0 && gap_y > 0.0 {
                Some(Vector::new(gap_x, gap_y).norm())
            } else {
                Some(gap_x.max(gap_y))
            }
        }
        (ConvexShape::Circle(c), ConvexShape::Rect(r))
        | (ConvexShape::Rect(r), ConvexShape::Circle(c)) => {
            let dist = point_box_distance(&c.center, r);

            if dist > 0.0 {
                Some(dist - c.radius)
            } else {
                // The center is inside: only the sign matters to the callers.
                Some(-c.radius)
            }
        }
        (ConvexShape::Circle(c), ConvexShape::Segment(s))
        | (ConvexShape::Segment(s), ConvexShape::Circle(c)) => {
            let (proj, _) = s.project_point_and_get_location(&c.center);
            Some((proj - c.center).norm() - c.radius)
        }
        _ => None,
    }
}

pub fn rand_shape(rng: &mut oorandom::Rand32) -> ConvexShape {
    match rng.rand_range(0..3) {
        0 => rand_circle(rng).into(),
        1 => rand_box(rng).into(),
        _ => rand_segment(rng).into(),
    }
}
