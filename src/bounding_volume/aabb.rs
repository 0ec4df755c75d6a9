//! Axis Aligned Bounding Box.

use crate::bounding_volume::BoundingVolume;
use crate::math::{Point, Real, Vector, DIM};
use num::Bounded;

/// An Axis-Aligned Bounding Box (AABB).
///
/// - **mins**: the corner with the smallest coordinates. With the `+y`-down convention
///   of this crate this is the top-left corner.
/// - **maxs**: the corner with the largest coordinates (bottom-right).
/// - **Invariant**: `mins.x ≤ maxs.x` and `mins.y ≤ maxs.y`.
///
/// An `Aabb` is both the broad-phase bounding volume and the box shape of the
/// narrow-phase (it implements [`SupportMap`](crate::shape::SupportMap)).
///
/// # Example
///
/// ```rust
/// use portal2d::bounding_volume::{Aabb, BoundingVolume};
/// use portal2d::math::Point;
///
/// let a = Aabb::from_top_left(0.0, 0.0, 10.0, 10.0);
/// let b = Aabb::from_top_left(5.0, 0.0, 10.0, 10.0);
///
/// assert!(a.intersects(&b));
/// assert_eq!(a.center(), Point::new(5.0, 5.0));
/// assert_eq!(a.merged(&b).maxs, Point::new(15.0, 10.0));
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates (top-left corner).
    pub mins: Point<Real>,
    /// The point with maximum coordinates (bottom-right corner).
    pub maxs: Point<Real>,
}

/// Objects that can produce an axis-aligned bounding box of themselves.
///
/// This is the adapter the [`QuadTree`](crate::partitioning::QuadTree) uses to
/// locate the objects it stores.
pub trait HasAabb {
    /// The bounding box of `self`.
    fn aabb(&self) -> Aabb;
}

impl HasAabb for Aabb {
    #[inline]
    fn aabb(&self) -> Aabb {
        *self
    }
}

impl<T: HasAabb + ?Sized> HasAabb for &T {
    #[inline]
    fn aabb(&self) -> Aabb {
        (**self).aabb()
    }
}

impl Aabb {
    /// Creates a box from its top-left corner `mins` and bottom-right corner `maxs`.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates a box from its top-left corner `(x, y)`, its width `w` and its height `h`.
    #[inline]
    pub fn from_top_left(x: Real, y: Real, w: Real, h: Real) -> Aabb {
        Aabb::new(Point::new(x, y), Point::new(x + w, y + h))
    }

    /// An empty box, with `mins` at `+Real::MAX` and `maxs` at `-Real::MAX`.
    ///
    /// Merging anything into it yields that thing.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Point::from(Vector::repeat(<Real as Bounded>::max_value())),
            Point::from(Vector::repeat(-<Real as Bounded>::max_value())),
        )
    }

    /// Creates a box from its center and half its width and height.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// The smallest box containing every point of `pts`.
    pub fn from_points<'a, I>(pts: I) -> Self
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        pts.into_iter().fold(Aabb::new_invalid(), |acc, pt| {
            Aabb::new(acc.mins.inf(pt), acc.maxs.sup(pt))
        })
    }

    /// The center of this box.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// Half the width and height of this box.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        self.extents() * 0.5
    }

    /// The width and height of this box.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// This box moved by `translation`.
    #[inline]
    #[must_use]
    pub fn translated(&self, translation: &Vector<Real>) -> Self {
        Aabb::new(self.mins + translation, self.maxs + translation)
    }

    /// The box covering `self` at its current position and at its position translated by `delta`.
    ///
    /// This bounds the whole area swept by `self` along the straight motion `delta`.
    #[inline]
    #[must_use]
    pub fn swept(&self, delta: &Vector<Real>) -> Self {
        self.merged(&self.translated(delta))
    }

    /// Is `point` inside of this box or on its boundary?
    #[inline]
    pub fn contains_point(&self, point: &Point<Real>) -> bool {
        (0..DIM).all(|i| point[i] >= self.mins[i] && point[i] <= self.maxs[i])
    }

    /// The corners of this box: top-left, bottom-left, bottom-right, top-right.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 4] {
        [
            self.mins,
            Point::new(self.mins.x, self.maxs.y),
            self.maxs,
            Point::new(self.maxs.x, self.mins.y),
        ]
    }

    /// Splits this box at its center into the four quadrants of a quad-tree node.
    ///
    /// The parts are ordered top-left, top-right, bottom-left, bottom-right.
    #[inline]
    pub fn split_at_center(&self) -> [Aabb; 4] {
        let center = self.center();

        [
            Aabb::new(self.mins, center),
            Aabb::new(
                Point::new(center.x, self.mins.y),
                Point::new(self.maxs.x, center.y),
            ),
            Aabb::new(
                Point::new(self.mins.x, center.y),
                Point::new(center.x, self.maxs.y),
            ),
            Aabb::new(center, self.maxs),
        ]
    }
}

impl BoundingVolume for Aabb {
    #[inline]
    fn center(&self) -> Point<Real> {
        self.center()
    }

    #[inline]
    fn intersects(&self, other: &Aabb) -> bool {
        self.mins.x <= other.maxs.x
            && self.mins.y <= other.maxs.y
            && other.mins.x <= self.maxs.x
            && other.mins.y <= self.maxs.y
    }

    #[inline]
    fn contains(&self, other: &Aabb) -> bool {
        self.contains_point(&other.mins) && self.contains_point(&other.maxs)
    }

    #[inline]
    fn merge(&mut self, other: &Aabb) {
        *self = self.merged(other);
    }

    #[inline]
    fn merged(&self, other: &Aabb) -> Aabb {
        Aabb::new(self.mins.inf(&other.mins), self.maxs.sup(&other.maxs))
    }

    #[inline]
    fn loosened(&self, margin: Real) -> Aabb {
        assert!(margin >= 0.0, "The margin of a loosened box must be positive.");
        let margin = Vector::repeat(margin);
        Aabb::new(self.mins - margin, self.maxs + margin)
    }
}
