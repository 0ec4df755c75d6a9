use core::hash::Hash;

use slab::Slab;

use crate::utils::hashmap::HashMap;

/// A generational handle to an island of a [`TOIIslands`].
///
/// The slot of a released island is reused by the next island created, but under a new
/// generation: handles to the released island are rejected from then on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IslandHandle {
    index: usize,
    generation: u32,
}

impl IslandHandle {
    /// The raw index of this island's slot.
    pub fn index(self) -> usize {
        self.index
    }

    /// The generation of this island's slot when the island was created.
    pub fn generation(self) -> u32 {
        self.generation
    }
}

/// Errors raised when grouping members into islands.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum IslandError {
    /// The candidate already belongs to another island.
    #[error("already a member of island {island:?}")]
    AlreadyMember {
        /// The island the candidate belongs to.
        island: IslandHandle,
    },
    /// The island does not exist, or was released.
    #[error("unknown island {0:?}")]
    UnknownIsland(IslandHandle),
}

/// Storage of the back-reference from an island member to its island.
pub trait IslandMembership<K> {
    /// The island `member` belongs to.
    fn island_of(&self, member: K) -> Option<IslandHandle>;
    /// Sets the island `member` belongs to.
    fn set_island_of(&mut self, member: K, island: Option<IslandHandle>);
}

impl<K: Copy + Eq + Hash> IslandMembership<K> for HashMap<K, IslandHandle> {
    fn island_of(&self, member: K) -> Option<IslandHandle> {
        self.get(&member).copied()
    }

    fn set_island_of(&mut self, member: K, island: Option<IslandHandle>) {
        match island {
            Some(island) => {
                let _ = self.insert(member, island);
            }
            None => {
                let _ = self.remove(&member);
            }
        }
    }
}

/// A set of members whose motions may interact during the current step.
///
/// Islands carry no geometry: they only group their members, and are linked to their siblings
/// in a doubly-linked list.
#[derive(Clone, Debug)]
pub struct TOIIsland<K> {
    generation: u32,
    members: Vec<K>,
    prev: Option<IslandHandle>,
    next: Option<IslandHandle>,
}

impl<K> TOIIsland<K> {
    /// The members of this island.
    pub fn members(&self) -> &[K] {
        &self.members
    }

    /// The previous island of the chain.
    pub fn prev(&self) -> Option<IslandHandle> {
        self.prev
    }

    /// The next island of the chain.
    pub fn next(&self) -> Option<IslandHandle> {
        self.next
    }
}

/// A pool of [`TOIIsland`]s, chained in a doubly-linked list.
///
/// A member belongs to at most one island. The back-reference from a member to its island is
/// kept by an [`IslandMembership`] registry passed to every operation that changes it.
#[derive(Clone, Debug)]
pub struct TOIIslands<K> {
    islands: Slab<TOIIsland<K>>,
    generation: u32,
    head: Option<IslandHandle>,
    tail: Option<IslandHandle>,
}

impl<K> Default for TOIIslands<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> TOIIslands<K> {
    /// Creates an empty pool.
    pub fn new() -> Self {
        TOIIslands {
            islands: Slab::new(),
            generation: 0,
            head: None,
            tail: None,
        }
    }

    /// The number of live islands.
    pub fn len(&self) -> usize {
        self.islands.len()
    }

    /// Is this pool empty?
    pub fn is_empty(&self) -> bool {
        self.islands.is_empty()
    }

    /// Gets an island.
    ///
    /// Returns `None` if the island was released, even if its slot was reused since.
    pub fn get(&self, island: IslandHandle) -> Option<&TOIIsland<K>> {
        self.islands
            .get(island.index)
            .filter(|i| i.generation == island.generation)
    }

    /// The members of an island.
    pub fn members(&self, island: IslandHandle) -> Result<&[K], IslandError> {
        self.get(island)
            .map(TOIIsland::members)
            .ok_or(IslandError::UnknownIsland(island))
    }

    /// Iterates through the islands linked in the chain, from its head.
    pub fn iter_chain(&self) -> impl Iterator<Item = IslandHandle> + '_ {
        core::iter::successors(self.head, move |island| {
            self.get(*island).and_then(|i| i.next)
        })
    }

    fn island_mut(&mut self, island: IslandHandle) -> Result<&mut TOIIsland<K>, IslandError> {
        self.islands
            .get_mut(island.index)
            .filter(|i| i.generation == island.generation)
            .ok_or(IslandError::UnknownIsland(island))
    }

    /// Links `island` in the chain right after `after`, or at its head if `after` is `None`.
    ///
    /// The island is first cut out of the chain if it was linked already.
    pub fn link_after(
        &mut self,
        island: IslandHandle,
        after: Option<IslandHandle>,
    ) -> Result<(), IslandError> {
        self.cut_out(island)?;

        let next = match after {
            Some(after) => {
                let after_island = self.island_mut(after)?;
                let next = after_island.next;
                after_island.next = Some(island);
                next
            }
            None => {
                let next = self.head;
                self.head = Some(island);
                next
            }
        };

        match next {
            Some(next) => self.island_mut(next)?.prev = Some(island),
            None => self.tail = Some(island),
        }

        let linked = self.island_mut(island)?;
        linked.prev = after;
        linked.next = next;
        Ok(())
    }

    /// Unlinks `island` from the chain. Its siblings get linked to each other.
    pub fn cut_out(&mut self, island: IslandHandle) -> Result<(), IslandError> {
        let (prev, next) = {
            let cut = self.island_mut(island)?;
            (cut.prev.take(), cut.next.take())
        };

        let linked = self.head == Some(island) || prev.is_some();

        if !linked {
            return Ok(());
        }

        match prev {
            Some(prev) => self.island_mut(prev)?.next = next,
            None => self.head = next,
        }

        match next {
            Some(next) => self.island_mut(next)?.prev = prev,
            None => self.tail = prev,
        }

        Ok(())
    }
}

impl<K: Copy + Eq> TOIIslands<K> {
    /// Creates a new island, seeded with up to two members, and links it at the end of the
    /// chain.
    ///
    /// Fails, without creating anything, if one of the seeds already belongs to an island.
    pub fn create<R: IslandMembership<K>>(
        &mut self,
        registry: &mut R,
        a: Option<K>,
        b: Option<K>,
    ) -> Result<IslandHandle, IslandError> {
        for seed in a.iter().chain(b.iter()) {
            if let Some(island) = self.island_of(&*registry, *seed) {
                return Err(IslandError::AlreadyMember { island });
            }
        }

        let generation = self.generation;
        self.generation = self.generation.wrapping_add(1);

        let index = self.islands.insert(TOIIsland {
            generation,
            members: Vec::new(),
            prev: None,
            next: None,
        });
        let island = IslandHandle { index, generation };
        self.link_after(island, self.tail)?;

        for seed in a.into_iter().chain(b) {
            let _ = self.add(registry, island, seed, false)?;
        }

        Ok(island)
    }

    /// Adds `candidate` to `island`.
    ///
    /// Returns `false` if the candidate already was a member of `island`. If it belongs to
    /// another island, this fails unless `force` is set, in which case it is moved out of it.
    pub fn add<R: IslandMembership<K>>(
        &mut self,
        registry: &mut R,
        island: IslandHandle,
        candidate: K,
        force: bool,
    ) -> Result<bool, IslandError> {
        let _ = self.island_mut(island)?;

        match self.island_of(&*registry, candidate) {
            Some(current) if current == island => return Ok(false),
            Some(current) if !force => {
                return Err(IslandError::AlreadyMember { island: current })
            }
            Some(current) => {
                if let Ok(previous) = self.island_mut(current) {
                    previous.members.retain(|m| *m != candidate);
                }
            }
            None => {}
        }

        self.island_mut(island)?.members.push(candidate);
        registry.set_island_of(candidate, Some(island));
        Ok(true)
    }

    /// Moves every member of `other` into `into`, then releases `other`.
    ///
    /// Returns the number of members moved.
    pub fn absorb<R: IslandMembership<K>>(
        &mut self,
        registry: &mut R,
        into: IslandHandle,
        other: IslandHandle,
    ) -> Result<usize, IslandError> {
        if into == other {
            return Ok(0);
        }

        let _ = self.island_mut(into)?;
        let members = core::mem::take(&mut self.island_mut(other)?.members);

        for member in &members {
            registry.set_island_of(*member, None);
            let _ = self.add(registry, into, *member, true)?;
        }

        self.release(registry, other)?;
        Ok(members.len())
    }

    /// Unlinks `island`, clears the back-references of its members, and returns it to the
    /// pool.
    pub fn release<R: IslandMembership<K>>(
        &mut self,
        registry: &mut R,
        island: IslandHandle,
    ) -> Result<(), IslandError> {
        self.cut_out(island)?;
        let released = self.islands.remove(island.index);

        for member in released.members {
            if registry.island_of(member) == Some(island) {
                registry.set_island_of(member, None);
            }
        }

        Ok(())
    }

    /// The island `member` belongs to, according to `registry`.
    pub fn island_of<R: IslandMembership<K>>(
        &self,
        registry: &R,
        member: K,
    ) -> Option<IslandHandle> {
        registry
            .island_of(member)
            .filter(|island| self.get(*island).is_some())
    }
}
