use crate::math::{Point, Real, Vector};
use crate::scene::PrimitiveId;

/// The index of a group in its [`Scene`](crate::scene::Scene).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct GroupId(pub(crate) usize);

impl GroupId {
    /// The raw index of this group.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Horizontal and vertical mirroring of the content of a group.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Mirror {
    /// Mirror along the `x` axis: `x` becomes `-x`.
    pub flip_x: bool,
    /// Mirror along the `y` axis: `y` becomes `-y`.
    pub flip_y: bool,
}

impl Mirror {
    /// No mirroring.
    pub const NONE: Mirror = Mirror {
        flip_x: false,
        flip_y: false,
    };

    /// Creates a new mirror.
    pub fn new(flip_x: bool, flip_y: bool) -> Self {
        Mirror { flip_x, flip_y }
    }

    /// Does this mirror flip anything?
    pub fn is_identity(&self) -> bool {
        !self.flip_x && !self.flip_y
    }

    /// Does this mirror reverse the orientation of the plane, i.e., flip exactly one axis?
    pub fn reverses_orientation(&self) -> bool {
        self.flip_x != self.flip_y
    }

    /// Mirrors a point.
    pub fn apply(&self, pt: &Point<Real>) -> Point<Real> {
        Point::new(
            if self.flip_x { -pt.x } else { pt.x },
            if self.flip_y { -pt.y } else { pt.y },
        )
    }

    /// Mirrors a box given by its top-left corner and size, returning its new top-left corner.
    pub fn apply_to_box(&self, top_left: &Point<Real>, size: &Vector<Real>) -> Point<Real> {
        Point::new(
            if self.flip_x {
                -top_left.x - size.x
            } else {
                top_left.x
            },
            if self.flip_y {
                -top_left.y - size.y
            } else {
                top_left.y
            },
        )
    }
}

/// The role of a group.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum GroupKind {
    /// The root of the scene. Its translation is ignored.
    Root,
    /// A group that never moves.
    Static,
    /// A group moved by the game logic.
    Kinematic(Mirror),
    /// A group moved by the simulation.
    Dynamic(Mirror),
}

impl GroupKind {
    /// The mirroring applied to the content of this group, if it is kinematic or dynamic.
    pub fn mirror(&self) -> Option<Mirror> {
        match self {
            GroupKind::Kinematic(mirror) | GroupKind::Dynamic(mirror) => Some(*mirror),
            GroupKind::Root | GroupKind::Static => None,
        }
    }

    /// Is this a kinematic or dynamic group?
    pub fn is_body(&self) -> bool {
        self.mirror().is_some()
    }
}

/// A node of the scene tree.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Group {
    pub(crate) kind: GroupKind,
    pub(crate) parent: Option<GroupId>,
    pub(crate) translation: Vector<Real>,
    pub(crate) groups: Vec<GroupId>,
    pub(crate) primitives: Vec<PrimitiveId>,
    pub(crate) body: Option<PrimitiveId>,
}

impl Group {
    pub(crate) fn new(kind: GroupKind, parent: Option<GroupId>, translation: Vector<Real>) -> Self {
        Group {
            kind,
            parent,
            translation,
            groups: Vec::new(),
            primitives: Vec::new(),
            body: None,
        }
    }

    /// The role of this group.
    pub fn kind(&self) -> GroupKind {
        self.kind
    }

    /// The parent of this group, `None` for the root.
    pub fn parent(&self) -> Option<GroupId> {
        self.parent
    }

    /// The translation of this group relative to its parent.
    pub fn translation(&self) -> &Vector<Real> {
        &self.translation
    }

    /// The child groups.
    pub fn groups(&self) -> &[GroupId] {
        &self.groups
    }

    /// The primitives directly attached to this group.
    pub fn primitives(&self) -> &[PrimitiveId] {
        &self.primitives
    }

    /// The primitive standing for this group as a body, if any.
    pub fn body(&self) -> Option<PrimitiveId> {
        self.body
    }
}
