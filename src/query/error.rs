use core::fmt;

/// The iterative algorithm that failed to converge.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Algorithm {
    /// The GJK boolean intersection test.
    Gjk,
    /// The GJK closest-points (distance) refinement.
    GjkDistance,
    /// The MPR portal discovery and refinement.
    Mpr,
    /// The minimum translation vector search.
    Mtv,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Gjk => "GJK",
            Algorithm::GjkDistance => "GJK distance",
            Algorithm::Mpr => "MPR",
            Algorithm::Mtv => "MTV",
        };
        f.pad(name)
    }
}

/// Errors returned by the narrow-phase queries.
///
/// The refinement loops terminate on geometric convergence. They are also bounded
/// by [`QueryOptions::max_iterations`](crate::query::QueryOptions::max_iterations) so that a
/// pathological pair of shapes cannot stall a simulation step: hitting that bound is reported
/// with this error rather than with a guessed answer.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The algorithm did not converge within the allowed number of iterations.
    #[error("{algorithm} did not converge after {iterations} iterations")]
    NoConvergence {
        /// The algorithm that failed.
        algorithm: Algorithm,
        /// The number of iterations performed.
        iterations: u32,
    },
}

impl QueryError {
    pub(crate) fn no_convergence(algorithm: Algorithm, iterations: u32) -> Self {
        log::debug!("{algorithm} hit its iteration limit ({iterations}).");
        QueryError::NoConvergence {
            algorithm,
            iterations,
        }
    }
}
