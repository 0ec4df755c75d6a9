use crate::math::Real;

/// Tolerances and limits shared by the narrow-phase queries.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct QueryOptions {
    /// The maximum number of iterations of any refinement loop.
    pub max_iterations: u32,
    /// Two shapes closer than this are considered touching by the distance refinement,
    /// which also stops once an iteration improves the distance by less than this.
    pub touching_tolerance: Real,
    /// The minimum refinement angle, in radians: the MTV search stops once the portal it
    /// refines subtends a smaller angle than this.
    pub mrt: Real,
    /// The tolerance used to decide if two Minkowski-difference points coincide.
    pub epsilon: Real,
}

impl QueryOptions {
    /// The default options.
    pub const DEFAULT: QueryOptions = QueryOptions {
        max_iterations: 100,
        touching_tolerance: 1.0e-3,
        mrt: 0.01,
        epsilon: 1.0e-5,
    };
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}
