use slab::Slab;

use crate::math::{Point, Real, Vector};
use crate::scene::{Group, GroupId, GroupKind, Mirror, Primitive, PrimitiveId, PrimitiveShape};

/// Errors raised by a misuse of the scene.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// The group does not exist.
    #[error("unknown group {0:?}")]
    UnknownGroup(GroupId),
    /// The primitive does not exist.
    #[error("unknown primitive {0:?}")]
    UnknownPrimitive(PrimitiveId),
    /// A body was given a primitive that is not one of its children.
    #[error("primitive {primitive:?} is not parented to group {group:?}")]
    NotParented {
        /// The group.
        group: GroupId,
        /// The primitive.
        primitive: PrimitiveId,
    },
    /// Only kinematic and dynamic groups have a body.
    #[error("group {0:?} is neither kinematic nor dynamic")]
    NotABody(GroupId),
}

/// A tree of groups and primitives.
#[derive(Clone, Debug)]
pub struct Scene {
    groups: Slab<Group>,
    primitives: Slab<Primitive>,
    root: GroupId,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Creates a scene made of its root group only.
    pub fn new() -> Self {
        let mut groups = Slab::new();
        let root = GroupId(groups.insert(Group::new(GroupKind::Root, None, Vector::zeros())));

        Scene {
            groups,
            primitives: Slab::new(),
            root,
        }
    }

    /// The root group.
    pub fn root(&self) -> GroupId {
        self.root
    }

    /// Gets a group.
    pub fn group(&self, id: GroupId) -> Result<&Group, SceneError> {
        self.groups.get(id.0).ok_or(SceneError::UnknownGroup(id))
    }

    fn group_mut(&mut self, id: GroupId) -> Result<&mut Group, SceneError> {
        self.groups.get_mut(id.0).ok_or(SceneError::UnknownGroup(id))
    }

    /// Gets a primitive.
    pub fn primitive(&self, id: PrimitiveId) -> Result<&Primitive, SceneError> {
        self.primitives
            .get(id.0)
            .ok_or(SceneError::UnknownPrimitive(id))
    }

    /// Iterates through all the primitives.
    pub fn primitives(&self) -> impl Iterator<Item = (PrimitiveId, &Primitive)> {
        self.primitives.iter().map(|(i, p)| (PrimitiveId(i), p))
    }

    /// Adds a group under `parent`, translated by `translation` relative to it.
    pub fn add_group(
        &mut self,
        parent: GroupId,
        kind: GroupKind,
        translation: Vector<Real>,
    ) -> Result<GroupId, SceneError> {
        let _ = self.group(parent)?;
        let id = GroupId(self.groups.insert(Group::new(kind, Some(parent), translation)));
        self.group_mut(parent)?.groups.push(id);
        Ok(id)
    }

    /// Adds a primitive to `parent`, with `origin` expressed in the space of that group.
    pub fn add_primitive(
        &mut self,
        parent: GroupId,
        origin: Point<Real>,
        shape: PrimitiveShape,
    ) -> Result<PrimitiveId, SceneError> {
        let _ = self.group(parent)?;
        let id = PrimitiveId(self.primitives.insert(Primitive {
            parent,
            origin,
            shape,
        }));
        self.group_mut(parent)?.primitives.push(id);
        Ok(id)
    }

    /// Moves a group relative to its parent.
    pub fn set_translation(
        &mut self,
        group: GroupId,
        translation: Vector<Real>,
    ) -> Result<(), SceneError> {
        self.group_mut(group)?.translation = translation;
        Ok(())
    }

    /// Makes `primitive` the body of the kinematic or dynamic `group`.
    ///
    /// The primitive must be attached directly to `group`.
    pub fn set_body(&mut self, group: GroupId, primitive: PrimitiveId) -> Result<(), SceneError> {
        if self.primitive(primitive)?.parent != group {
            return Err(SceneError::NotParented { group, primitive });
        }

        let target = self.group_mut(group)?;

        if !target.kind.is_body() {
            return Err(SceneError::NotABody(group));
        }

        target.body = Some(primitive);
        Ok(())
    }

    /// Iterates from `group` up to the root, both included.
    pub fn ancestors(&self, group: GroupId) -> Ancestors<'_> {
        Ancestors {
            scene: self,
            next: Some(group),
        }
    }

    /// The mirroring of the closest kinematic or dynamic group among `group` and its ancestors.
    pub fn enclosing_mirror(&self, group: GroupId) -> Mirror {
        self.ancestors(group)
            .find_map(|(_, g)| g.kind.mirror())
            .unwrap_or(Mirror::NONE)
    }

    /// The translation of the space of `group` relative to the scene, i.e., the sum of the
    /// translations of `group` and its ancestors. The root translation is ignored.
    pub fn world_translation(&self, group: GroupId) -> Vector<Real> {
        self.ancestors(group)
            .filter(|(_, g)| g.kind != GroupKind::Root)
            .fold(Vector::zeros(), |acc, (_, g)| acc + g.translation)
    }
}

/// Iterator through a group and its ancestors, see [`Scene::ancestors`].
pub struct Ancestors<'a> {
    scene: &'a Scene,
    next: Option<GroupId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = (GroupId, &'a Group);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let group = self.scene.groups.get(id.0)?;
        self.next = group.parent;
        Some((id, group))
    }
}
