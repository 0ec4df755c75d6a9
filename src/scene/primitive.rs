use crate::math::{Point, Real, Vector};
use crate::scene::GroupId;

/// The index of a primitive in its [`Scene`](crate::scene::Scene).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PrimitiveId(pub(crate) usize);

impl PrimitiveId {
    /// The raw index of this primitive.
    pub fn index(self) -> usize {
        self.0
    }
}

/// The geometry of a primitive, relative to its origin.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum PrimitiveShape {
    /// A point at the origin.
    Point,
    /// A circle centered at the origin.
    Circle {
        /// The circle radius.
        radius: Real,
    },
    /// A line segment.
    Line {
        /// The first endpoint, relative to the origin.
        a: Vector<Real>,
        /// The second endpoint, relative to the origin.
        b: Vector<Real>,
    },
    /// A segment of a chain of segments.
    ChainLink {
        /// The first endpoint, relative to the origin.
        a: Vector<Real>,
        /// The second endpoint, relative to the origin.
        b: Vector<Real>,
        /// The next link of the chain.
        link: Option<PrimitiveId>,
    },
    /// An axis-aligned box whose top-left corner is the origin.
    Box {
        /// The box width.
        w: Real,
        /// The box height.
        h: Real,
    },
}

/// A shape attached to a group of the scene.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Primitive {
    pub(crate) parent: GroupId,
    pub(crate) origin: Point<Real>,
    pub(crate) shape: PrimitiveShape,
}

impl Primitive {
    /// The group this primitive is attached to.
    pub fn parent(&self) -> GroupId {
        self.parent
    }

    /// The origin of this primitive, in the space of its group.
    pub fn origin(&self) -> &Point<Real> {
        &self.origin
    }

    /// The geometry of this primitive.
    pub fn shape(&self) -> &PrimitiveShape {
        &self.shape
    }
}
