use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;

/// The support map of the single point `(0, 0)`.
///
/// The CSO of a shape and `ConstantOrigin` is the shape itself, so pairing a shape with it turns
/// the narrow-phase queries into queries about the origin: e.g. [`mpr`](crate::query::mpr::mpr)
/// then tells if the origin is strictly inside of the shape.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ConstantOrigin;

impl SupportMap for ConstantOrigin {
    #[inline]
    fn support_point(&self, _: &Vector<Real>) -> Point<Real> {
        Point::origin()
    }

    #[inline]
    fn center(&self) -> Point<Real> {
        Point::origin()
    }
}
