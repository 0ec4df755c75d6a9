use arrayvec::ArrayVec;

use crate::query::gjk::CSOPoint;

/// A simplex of dimension up to 2, made of points of the Minkowski difference.
///
/// Its slots are named `a`, `b` and `c`. The intersection test keeps the most recent
/// support point in `a`. Each slot owns its point: overwriting a slot drops the point it
/// previously held. Slots must be filled in order; setting `b` while `a` is empty, or `c`
/// while `b` is empty, is a logic error and panics.
#[derive(Clone, Debug, Default)]
pub struct Simplex {
    vertices: ArrayVec<CSOPoint, 3>,
}

impl Simplex {
    /// Creates a new empty simplex.
    pub fn new() -> Simplex {
        Simplex {
            vertices: ArrayVec::new(),
        }
    }

    /// The number of points of this simplex.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Is this simplex empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The points of this simplex, `a` first.
    #[inline]
    pub fn points(&self) -> &[CSOPoint] {
        &self.vertices
    }

    /// The point in slot `a`.
    #[inline]
    pub fn a(&self) -> Option<&CSOPoint> {
        self.vertices.first()
    }

    /// The point in slot `b`.
    #[inline]
    pub fn b(&self) -> Option<&CSOPoint> {
        self.vertices.get(1)
    }

    /// The point in slot `c`.
    #[inline]
    pub fn c(&self) -> Option<&CSOPoint> {
        self.vertices.get(2)
    }

    /// Sets the point of slot `a`.
    pub fn set_a(&mut self, pt: CSOPoint) {
        self.set(0, pt)
    }

    /// Sets the point of slot `b`.
    ///
    /// Panics if slot `a` is empty.
    pub fn set_b(&mut self, pt: CSOPoint) {
        self.set(1, pt)
    }

    /// Sets the point of slot `c`.
    ///
    /// Panics if slot `b` is empty.
    pub fn set_c(&mut self, pt: CSOPoint) {
        self.set(2, pt)
    }

    fn set(&mut self, i: usize, pt: CSOPoint) {
        assert!(
            i <= self.vertices.len(),
            "Simplex slot {} set before the slots preceding it.",
            i
        );

        if i == self.vertices.len() {
            self.vertices.push(pt);
        } else {
            self.vertices[i] = pt;
        }
    }

    /// Makes `pt` the new `a`, shifting the previous points to the next slots.
    ///
    /// Panics if the simplex already has three points.
    pub fn push_front(&mut self, pt: CSOPoint) {
        assert!(!self.vertices.is_full(), "Cannot grow a 2-simplex.");
        self.vertices.insert(0, pt);
    }

    /// Removes the point at slot `i` (0 for `a`), shifting the following points.
    pub fn remove(&mut self, i: usize) -> CSOPoint {
        self.vertices.remove(i)
    }

    /// Keeps only the first `len` points.
    pub fn truncate(&mut self, len: usize) {
        self.vertices.truncate(len)
    }

    /// Drops every point of this simplex.
    pub fn clear(&mut self) {
        self.vertices.clear()
    }
}
