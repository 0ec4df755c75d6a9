use core::cell::OnceCell;

use na::Unit;

use crate::bounding_volume::{Aabb, HasAabb};
use crate::frame::IslandHandle;
use crate::math::{Point, Real, Vector};
use crate::scene::{GroupId, Mirror, Primitive, PrimitiveId, PrimitiveShape, Scene};
use crate::shape::{Circle, ConvexShape, Dot, Segment, SupportMap};

/// The index of a proxy in its [`CollisionFrame`](crate::frame::CollisionFrame).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProxyHandle(pub(crate) usize);

impl ProxyHandle {
    /// The raw index of this proxy.
    pub fn index(self) -> usize {
        self.0
    }
}

/// The geometry of a primitive for one simulation step, resolved in scene space.
#[derive(Clone, Debug)]
pub struct Proxy {
    primitive: PrimitiveId,
    parent: GroupId,
    shape: ConvexShape,
    pub(crate) delta: OnceCell<Option<Vector<Real>>>,
    pub(crate) island: Option<IslandHandle>,
}

impl Proxy {
    pub(crate) fn new(scene: &Scene, id: PrimitiveId, primitive: &Primitive) -> Self {
        let parent = primitive.parent();
        let mirror = scene.enclosing_mirror(parent);
        let offset = scene.world_translation(parent);

        Proxy {
            primitive: id,
            parent,
            shape: resolve_shape(primitive.origin(), primitive.shape(), mirror, &offset),
            delta: OnceCell::new(),
            island: None,
        }
    }

    /// The primitive this proxy stands for.
    pub fn primitive(&self) -> PrimitiveId {
        self.primitive
    }

    /// The group of the primitive.
    pub fn parent(&self) -> GroupId {
        self.parent
    }

    /// The resolved geometry.
    pub fn shape(&self) -> &ConvexShape {
        &self.shape
    }

    /// The resolved position: the point, circle center, first segment endpoint or top-left
    /// corner of the primitive.
    pub fn position(&self) -> Point<Real> {
        self.shape.position()
    }

    /// The TOI island this proxy belongs to.
    pub fn island(&self) -> Option<IslandHandle> {
        self.island
    }

    /// The bounding box of this proxy over a step during which it moves by `delta`.
    pub fn swept_aabb(&self, delta: Option<&Vector<Real>>) -> Aabb {
        let aabb = self.shape.aabb();

        match delta {
            Some(delta) => aabb.swept(delta),
            None => aabb,
        }
    }
}

/// Resolves a primitive in scene space.
///
/// The mirroring happens in the space of the group, before it gets translated by `offset`.
/// Mirroring a single axis reverses the orientation of the plane, so the segment endpoints are
/// swapped to keep their normal on the mirrored side.
fn resolve_shape(
    origin: &Point<Real>,
    shape: &PrimitiveShape,
    mirror: Mirror,
    offset: &Vector<Real>,
) -> ConvexShape {
    match *shape {
        PrimitiveShape::Point => Dot::new(mirror.apply(origin) + offset).into(),
        PrimitiveShape::Circle { radius } => {
            Circle::new(mirror.apply(origin) + offset, radius).into()
        }
        PrimitiveShape::Line { a, b } | PrimitiveShape::ChainLink { a, b, .. } => {
            let mut segment = Segment::new(
                mirror.apply(&(origin + a)) + offset,
                mirror.apply(&(origin + b)) + offset,
            );

            if mirror.reverses_orientation() {
                segment.swap();
            }

            segment.into()
        }
        PrimitiveShape::Box { w, h } => {
            let size = Vector::new(w, h);
            let top_left = mirror.apply_to_box(origin, &size) + offset;
            Aabb::new(top_left, top_left + size).into()
        }
    }
}

impl SupportMap for Proxy {
    #[inline]
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        self.shape.support_point(dir)
    }

    #[inline]
    fn support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        self.shape.support_point_toward(dir)
    }

    #[inline]
    fn center(&self) -> Point<Real> {
        self.shape.center()
    }
}

impl HasAabb for Proxy {
    #[inline]
    fn aabb(&self) -> Aabb {
        self.shape.aabb()
    }
}
