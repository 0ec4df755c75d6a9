//! Tolerant floating-point comparisons.

use crate::math::{Point, Real};

/// Tests if `a` and `b` are equal up to the absolute tolerance `tol`.
///
/// NaN is never equal to anything, including itself.
#[inline]
pub fn fuzzy_eq(a: Real, b: Real, tol: Real) -> bool {
    abs_diff_eq!(a, b, epsilon = tol)
}

/// Tests if `a` is zero up to the absolute tolerance `tol`.
#[inline]
pub fn fuzzy_zero(a: Real, tol: Real) -> bool {
    fuzzy_eq(a, 0.0, tol)
}

/// Tests if two points are closer than `tol` from each other.
#[inline]
pub fn points_coincide(a: &Point<Real>, b: &Point<Real>, tol: Real) -> bool {
    (a - b).norm_squared() <= tol * tol
}
