//! Various unsorted geometrical and logical operators.

pub use self::fuzzy::{fuzzy_eq, fuzzy_zero, points_coincide};
pub use self::sorted_pair::SortedPair;
pub use self::vector_ops::VectorOps;

pub(crate) use self::consts::*;

mod consts;
mod fuzzy;
pub mod hashmap;
mod sorted_pair;
mod vector_ops;
