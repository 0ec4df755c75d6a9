//! Minkowski Portal Refinement, and the minimum translation vector search seeded by its portals.

pub use self::mpr::{mpr, MprResult};
pub use self::mtv::{mtv, MtvResult};
pub use self::portal::{Portal, PortalValidity};

mod mpr;
mod mtv;
mod portal;
