//! Extra 2D vector operations not provided by nalgebra.

use crate::math::{Real, UnitVector, Vector};

/// 2D vector operations used by the narrow-phase algorithms.
///
/// Every derived quantity (length, heading) is computed on access from the
/// vector components.
pub trait VectorOps: Sized {
    /// The vector rotated by +90 degrees: `(-y, x)`.
    fn ccw_perp(&self) -> Self;

    /// The vector rotated by -90 degrees: `(y, -x)`.
    fn cw_perp(&self) -> Self;

    /// The vector triple product `(self × b) × c`, i.e., `b * (self · c) - self * (b · c)`.
    ///
    /// With `self = c = ab` and `b = ao` this is the component of `ao` perpendicular
    /// to `ab`.
    fn triple(&self, b: &Self, c: &Self) -> Self;

    /// Projects `self` on the line spanned by `axis`.
    ///
    /// Returns the zero vector if `axis` is (almost) zero.
    fn project_on(&self, axis: &Self) -> Self;

    /// Rotates `self` by `angle` radians.
    fn rotated(&self, angle: Real) -> Self;

    /// The angle between `self` and the `x` axis, in `]-pi, pi]`.
    fn heading(&self) -> Real;

    /// Normalizes `self`, or returns `fallback` if `self` is too small to be normalized.
    fn unit_or(&self, fallback: UnitVector<Real>) -> UnitVector<Real>;
}

impl VectorOps for Vector<Real> {
    #[inline]
    fn ccw_perp(&self) -> Self {
        Vector::new(-self.y, self.x)
    }

    #[inline]
    fn cw_perp(&self) -> Self {
        Vector::new(self.y, -self.x)
    }

    #[inline]
    fn triple(&self, b: &Self, c: &Self) -> Self {
        b * self.dot(c) - self * b.dot(c)
    }

    #[inline]
    fn project_on(&self, axis: &Self) -> Self {
        let sq_len = axis.norm_squared();

        if sq_len <= crate::math::DEFAULT_EPSILON {
            Vector::zeros()
        } else {
            axis * (self.dot(axis) / sq_len)
        }
    }

    #[inline]
    fn rotated(&self, angle: Real) -> Self {
        let (sin, cos) = angle.sin_cos();
        Vector::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    #[inline]
    fn heading(&self) -> Real {
        self.y.atan2(self.x)
    }

    #[inline]
    fn unit_or(&self, fallback: UnitVector<Real>) -> UnitVector<Real> {
        UnitVector::try_new(*self, crate::math::DEFAULT_EPSILON).unwrap_or(fallback)
    }
}
