//! Non-persistent geometric queries.
//!
//! # General cases
//! The most general methods provided by this module are:
//!
//! * [`collide()`] to compute the contact between two shapes, penetrating or not.
//! * [`closest_points()`] to compute the closest points between two separated shapes.
//! * [`gjk::intersection_test()`] to determine if two shapes are intersecting or not.
//! * [`mpr::mpr()`] and [`mpr::mtv()`] to find the minimum translation vector of two
//!   intersecting shapes.
//!
//! Every query works on any pair of shapes implementing [`SupportMap`](crate::shape::SupportMap),
//! and is tuned with [`QueryOptions`].

pub use self::closest_points::{closest_points, ClosestPoints};
pub use self::contact::{collide, Contact};
pub use self::error::{Algorithm, QueryError};
pub use self::query_options::QueryOptions;

mod closest_points;
mod contact;
mod error;
pub mod gjk;
pub mod mpr;
mod query_options;
