use na::Unit;

use crate::bounding_volume::{Aabb, HasAabb};
use crate::math::{Point, Real, Vector};
use crate::shape::{Circle, Dot, Segment, SupportMap};

/// The kind of a [`ConvexShape`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum ShapeType {
    /// A single point.
    Dot,
    /// A circle.
    Circle,
    /// A segment (line or chain link).
    Segment,
    /// An axis-aligned box.
    Rect,
}

/// One of the convex shapes a proxy can resolve to.
///
/// This enum is the shape-kind dispatch of the support function.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum ConvexShape {
    /// A single point.
    Dot(Dot),
    /// A circle.
    Circle(Circle),
    /// A segment.
    Segment(Segment),
    /// An axis-aligned box.
    Rect(Aabb),
}

impl ConvexShape {
    /// The kind of this shape.
    pub fn shape_type(&self) -> ShapeType {
        match self {
            ConvexShape::Dot(_) => ShapeType::Dot,
            ConvexShape::Circle(_) => ShapeType::Circle,
            ConvexShape::Segment(_) => ShapeType::Segment,
            ConvexShape::Rect(_) => ShapeType::Rect,
        }
    }

    /// A copy of this shape moved by `translation`.
    #[must_use]
    pub fn translated(&self, translation: &Vector<Real>) -> ConvexShape {
        match *self {
            ConvexShape::Dot(d) => ConvexShape::Dot(Dot::new(d.position + translation)),
            ConvexShape::Circle(c) => {
                ConvexShape::Circle(Circle::new(c.center + translation, c.radius))
            }
            ConvexShape::Segment(s) => {
                ConvexShape::Segment(Segment::new(s.a + translation, s.b + translation))
            }
            ConvexShape::Rect(r) => ConvexShape::Rect(r.translated(translation)),
        }
    }

    /// The reference point of this shape: the point itself, the circle center,
    /// the first vertex of a segment, or the top-left corner of a box.
    pub fn position(&self) -> Point<Real> {
        match self {
            ConvexShape::Dot(d) => d.position,
            ConvexShape::Circle(c) => c.center,
            ConvexShape::Segment(s) => s.a,
            ConvexShape::Rect(r) => r.mins,
        }
    }
}

impl SupportMap for ConvexShape {
    #[inline]
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        match self {
            ConvexShape::Dot(d) => d.support_point(dir),
            ConvexShape::Circle(c) => c.support_point(dir),
            ConvexShape::Segment(s) => s.support_point(dir),
            ConvexShape::Rect(r) => r.support_point(dir),
        }
    }

    #[inline]
    fn support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        match self {
            ConvexShape::Dot(d) => d.support_point_toward(dir),
            ConvexShape::Circle(c) => c.support_point_toward(dir),
            ConvexShape::Segment(s) => s.support_point_toward(dir),
            ConvexShape::Rect(r) => r.support_point_toward(dir),
        }
    }

    #[inline]
    fn center(&self) -> Point<Real> {
        match self {
            ConvexShape::Dot(d) => d.center(),
            ConvexShape::Circle(c) => c.center(),
            ConvexShape::Segment(s) => s.center(),
            ConvexShape::Rect(r) => SupportMap::center(r),
        }
    }
}

impl HasAabb for ConvexShape {
    fn aabb(&self) -> Aabb {
        match self {
            ConvexShape::Dot(d) => d.aabb(),
            ConvexShape::Circle(c) => c.aabb(),
            ConvexShape::Segment(s) => s.aabb(),
            ConvexShape::Rect(r) => *r,
        }
    }
}

impl From<Dot> for ConvexShape {
    fn from(d: Dot) -> Self {
        ConvexShape::Dot(d)
    }
}

impl From<Circle> for ConvexShape {
    fn from(c: Circle) -> Self {
        ConvexShape::Circle(c)
    }
}

impl From<Segment> for ConvexShape {
    fn from(s: Segment) -> Self {
        ConvexShape::Segment(s)
    }
}

impl From<Aabb> for ConvexShape {
    fn from(r: Aabb) -> Self {
        ConvexShape::Rect(r)
    }
}
