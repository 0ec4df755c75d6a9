use slab::Slab;

use crate::bounding_volume::Aabb;
use crate::frame::{
    swept_pairs, IslandError, IslandHandle, IslandMembership, Proxy, ProxyHandle, TOIIslands,
};
use crate::math::{Real, Vector};
use crate::partitioning::QuadTreeSettings;
use crate::scene::{GroupId, PrimitiveId, Scene, SceneError};
use crate::utils::hashmap::{HashMap, HashSet};
use crate::utils::SortedPair;

/// Errors raised by a misuse of a [`CollisionFrame`].
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// Primitives and deltas can no longer be added once a proxy was requested.
    #[error("the collision frame is sealed")]
    Sealed,
    /// The primitive was not added to this frame.
    #[error("primitive {0:?} is not part of this collision frame")]
    NotInFrame(PrimitiveId),
    /// The proxy does not exist in this frame.
    #[error("unknown proxy {0:?}")]
    UnknownProxy(ProxyHandle),
    /// The scene rejected the request.
    #[error(transparent)]
    Scene(#[from] SceneError),
    /// Grouping into islands failed.
    #[error(transparent)]
    Island(#[from] IslandError),
}

/// The primitives taking part in one simulation step, and their proxies.
///
/// Primitives and group motions are registered first. The first proxy request seals the frame:
/// from then on, proxies are created lazily, at most once per primitive, and the frame rejects
/// any new primitive or delta.
#[derive(Debug)]
pub struct CollisionFrame<'s> {
    scene: &'s Scene,
    primitives: Vec<PrimitiveId>,
    added: HashSet<PrimitiveId>,
    deltas: HashMap<GroupId, Vector<Real>>,
    proxies: Slab<Proxy>,
    proxy_of: HashMap<PrimitiveId, ProxyHandle>,
    sealed: bool,
}

impl<'s> CollisionFrame<'s> {
    /// Creates an empty frame reading from `scene`.
    pub fn new(scene: &'s Scene) -> Self {
        CollisionFrame {
            scene,
            primitives: Vec::new(),
            added: HashSet::new(),
            deltas: HashMap::new(),
            proxies: Slab::new(),
            proxy_of: HashMap::new(),
            sealed: false,
        }
    }

    /// The scene this frame reads from.
    pub fn scene(&self) -> &'s Scene {
        self.scene
    }

    /// Was a proxy requested already?
    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// The primitives added to this frame, in insertion order.
    pub fn primitives(&self) -> &[PrimitiveId] {
        &self.primitives
    }

    /// Adds a primitive to this frame.
    ///
    /// Returns `false` if it was added already.
    pub fn add_primitive(&mut self, primitive: PrimitiveId) -> Result<bool, FrameError> {
        if self.sealed {
            return Err(FrameError::Sealed);
        }

        let _ = self.scene.primitive(primitive)?;

        if !self.added.insert(primitive) {
            return Ok(false);
        }

        self.primitives.push(primitive);
        Ok(true)
    }

    /// Adds every primitive of `group` and of its descendants.
    ///
    /// Returns the number of primitives that were not part of the frame yet.
    pub fn add_group(&mut self, group: GroupId) -> Result<usize, FrameError> {
        let scene = self.scene;
        let mut stack = vec![group];
        let mut added = 0;

        while let Some(id) = stack.pop() {
            let group = scene.group(id)?;

            for primitive in group.primitives() {
                if self.add_primitive(*primitive)? {
                    added += 1;
                }
            }

            stack.extend_from_slice(group.groups());
        }

        Ok(added)
    }

    /// Declares that `group` moves by `delta` during this step.
    pub fn assume_delta(&mut self, group: GroupId, delta: Vector<Real>) -> Result<(), FrameError> {
        if self.sealed {
            return Err(FrameError::Sealed);
        }

        let _ = self.scene.group(group)?;
        let _ = self.deltas.insert(group, delta);
        Ok(())
    }

    /// The motion of `group` during this step, `None` if it does not move.
    pub fn delta_for(&self, group: GroupId) -> Option<Vector<Real>> {
        self.deltas.get(&group).copied()
    }

    /// The proxy of `primitive`, created on the first request.
    ///
    /// Seals the frame.
    pub fn proxy_for(&mut self, primitive: PrimitiveId) -> Result<ProxyHandle, FrameError> {
        if !self.added.contains(&primitive) {
            return Err(FrameError::NotInFrame(primitive));
        }

        if !self.sealed {
            log::debug!(
                "Collision frame sealed with {} primitives and {} moving groups.",
                self.primitives.len(),
                self.deltas.len()
            );
            self.sealed = true;
        }

        if let Some(handle) = self.proxy_of.get(&primitive) {
            return Ok(*handle);
        }

        let proxy = Proxy::new(self.scene, primitive, self.scene.primitive(primitive)?);
        let handle = ProxyHandle(self.proxies.insert(proxy));
        let _ = self.proxy_of.insert(primitive, handle);
        Ok(handle)
    }

    /// The proxies of every primitive of this frame, in insertion order.
    ///
    /// Seals the frame.
    pub fn proxies_for_all(&mut self) -> Result<Vec<ProxyHandle>, FrameError> {
        let primitives = self.primitives.clone();
        primitives
            .into_iter()
            .map(|primitive| self.proxy_for(primitive))
            .collect()
    }

    /// Gets a proxy.
    pub fn proxy(&self, handle: ProxyHandle) -> Result<&Proxy, FrameError> {
        self.proxies
            .get(handle.0)
            .ok_or(FrameError::UnknownProxy(handle))
    }

    /// Iterates through the proxies created so far.
    pub fn proxies(&self) -> impl Iterator<Item = (ProxyHandle, &Proxy)> {
        self.proxies.iter().map(|(i, p)| (ProxyHandle(i), p))
    }

    /// The motion of the group of a proxy, looked up once then cached in the proxy.
    pub fn proxy_delta(&self, handle: ProxyHandle) -> Result<Option<Vector<Real>>, FrameError> {
        let proxy = self.proxy(handle)?;
        Ok(*proxy.delta.get_or_init(|| self.delta_for(proxy.parent())))
    }

    /// The bounding box of a proxy, extended to cover its motion during this step.
    pub fn swept_aabb(&self, handle: ProxyHandle) -> Result<Aabb, FrameError> {
        let delta = self.proxy_delta(handle)?;
        Ok(self.proxy(handle)?.swept_aabb(delta.as_ref()))
    }

    /// The pairs of proxies whose swept bounding boxes intersect.
    ///
    /// Creates the proxy of every primitive of this frame, hence seals it.
    pub fn candidate_pairs(
        &mut self,
        settings: &QuadTreeSettings,
    ) -> Result<Vec<SortedPair<ProxyHandle>>, FrameError> {
        let entries = self
            .proxies_for_all()?
            .into_iter()
            .map(|handle| Ok((handle, self.swept_aabb(handle)?)))
            .collect::<Result<Vec<_>, FrameError>>()?;

        Ok(swept_pairs(&entries, settings))
    }

    /// Groups the proxies whose swept motions may interact into islands.
    ///
    /// Every candidate pair with at least one moving proxy ends up in the same island. Proxies
    /// that cannot hit anything during this step are left out of every island.
    ///
    /// Each call starts from scratch: the islands returned by a previous call no longer
    /// match the back-references of the proxies.
    pub fn build_islands(
        &mut self,
        settings: &QuadTreeSettings,
    ) -> Result<TOIIslands<ProxyHandle>, FrameError> {
        let pairs = self.candidate_pairs(settings)?;
        let mut islands = TOIIslands::new();

        for (_, proxy) in self.proxies.iter_mut() {
            proxy.island = None;
        }

        for pair in pairs {
            let (a, b) = (*pair.first(), *pair.second());

            if self.proxy_delta(a)?.is_none() && self.proxy_delta(b)?.is_none() {
                continue;
            }

            match (self.island_of(a), self.island_of(b)) {
                (None, None) => {
                    let _ = islands.create(self, Some(a), Some(b))?;
                }
                (Some(island), None) => {
                    let _ = islands.add(self, island, b, false)?;
                }
                (None, Some(island)) => {
                    let _ = islands.add(self, island, a, false)?;
                }
                (Some(island_a), Some(island_b)) => {
                    let _ = islands.absorb(self, island_a, island_b)?;
                }
            }
        }

        Ok(islands)
    }
}

impl IslandMembership<ProxyHandle> for CollisionFrame<'_> {
    fn island_of(&self, member: ProxyHandle) -> Option<IslandHandle> {
        self.proxies.get(member.0).and_then(|proxy| proxy.island)
    }

    fn set_island_of(&mut self, member: ProxyHandle, island: Option<IslandHandle>) {
        if let Some(proxy) = self.proxies.get_mut(member.0) {
            proxy.island = island;
        }
    }
}
