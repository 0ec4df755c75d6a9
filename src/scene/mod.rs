//! The scene the collision core reads from.
//!
//! A scene is a tree of [`Group`]s holding [`Primitive`]s. Groups translate their content and,
//! when they are kinematic or dynamic, may mirror it. The scene is never mutated by the
//! collision queries: each step reads it through a [`CollisionFrame`](crate::frame::CollisionFrame).

pub use self::group::{Group, GroupId, GroupKind, Mirror};
pub use self::primitive::{Primitive, PrimitiveId, PrimitiveShape};
pub use self::scene::{Ancestors, Scene, SceneError};

mod group;
mod primitive;
mod scene;
