//! Traits for support mapping based shapes.

use crate::math::{Point, Real, Vector};
use na::Unit;

/// Traits of convex shapes representable by a support mapping function.
///
/// This is the only thing the narrow-phase algorithms ([`gjk`](crate::query::gjk) and
/// [`mpr`](crate::query::mpr)) know about a shape: adding a new kind of shape only
/// requires implementing this trait.
pub trait SupportMap {
    /// Evaluates the support function of this shape.
    ///
    /// A support function is a function associating a vector to the shape point which maximizes
    /// their dot product. `dir` does not have to be normalized and may be zero, in which case any
    /// point of the shape may be returned.
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real>;

    /// Same as `self.support_point` except that `dir` is normalized.
    fn support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        self.support_point(dir.as_ref())
    }

    /// A point strictly inside of this shape (or on it, for shapes without interior).
    fn center(&self) -> Point<Real>;
}

impl<S: SupportMap + ?Sized> SupportMap for &S {
    #[inline]
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        (**self).support_point(dir)
    }

    #[inline]
    fn support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        (**self).support_point_toward(dir)
    }

    #[inline]
    fn center(&self) -> Point<Real> {
        (**self).center()
    }
}
