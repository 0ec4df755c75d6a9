//! Per-step views of the scene: proxies, swept broad-phase and time-of-impact islands.
//!
//! A [`CollisionFrame`] is built at the beginning of a simulation step. Primitives and the
//! motion of their groups are registered first; the first proxy request then seals the frame
//! and every proxy is resolved lazily, once, from the (unmodified) scene.

pub use self::broad_phase::swept_pairs;
pub use self::collision_frame::{CollisionFrame, FrameError};
pub use self::island::{IslandError, IslandHandle, IslandMembership, TOIIsland, TOIIslands};
pub use self::proxy::{Proxy, ProxyHandle};

mod broad_phase;
mod collision_frame;
mod island;
mod proxy;
