use na::Unit;

use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;

/// A shape moved by a constant translation.
///
/// This lets queries be run on a displaced shape (e.g., a shape moved by its
/// minimum translation vector, or by its swept delta) without building a new one.
pub struct Translated<'a, S: ?Sized + SupportMap> {
    /// The translated shape.
    pub shape: &'a S,
    /// The translation applied to the shape.
    pub translation: Vector<Real>,
}

impl<'a, S: ?Sized + SupportMap> Translated<'a, S> {
    /// Wraps `shape` so it appears translated by `translation`.
    pub fn new(shape: &'a S, translation: Vector<Real>) -> Self {
        Translated { shape, translation }
    }
}

impl<S: ?Sized + SupportMap> SupportMap for Translated<'_, S> {
    #[inline]
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        self.shape.support_point(dir) + self.translation
    }

    #[inline]
    fn support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        self.shape.support_point_toward(dir) + self.translation
    }

    #[inline]
    fn center(&self) -> Point<Real> {
        self.shape.center() + self.translation
    }
}
