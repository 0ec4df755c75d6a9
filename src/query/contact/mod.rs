//! One-call collision query combining intersection, penetration and distance.

pub use self::contact::{collide, Contact};

mod contact;
