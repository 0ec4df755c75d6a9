//! The GJK algorithm for intersection tests, and its Minkowski-difference building blocks.

pub use self::cso_point::CSOPoint;
pub use self::gjk::intersection_test;
pub use self::simplex::Simplex;
pub use self::special_support_maps::ConstantOrigin;

mod cso_point;
mod gjk;
mod simplex;
mod special_support_maps;
