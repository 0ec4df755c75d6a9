use crate::math::{Point, Real};

/// A coarse approximation of the area covered by a shape, used to prune the pairs of shapes
/// the narrow-phase has to look at.
pub trait BoundingVolume: Sized {
    /// A point inside of this bounding volume, ideally its center.
    fn center(&self) -> Point<Real>;

    /// Do `self` and `other` overlap? Volumes that only touch overlap.
    fn intersects(&self, other: &Self) -> bool;

    /// Is `other` completely inside of `self`?
    fn contains(&self, other: &Self) -> bool;

    /// Grows `self` so it also covers `other`.
    fn merge(&mut self, other: &Self);

    /// The smallest volume covering both `self` and `other`.
    fn merged(&self, other: &Self) -> Self;

    /// This volume grown by `margin` on every side.
    fn loosened(&self, margin: Real) -> Self;
}
