use core::mem;

use slab::Slab;
use smallvec::SmallVec;

use crate::bounding_volume::{Aabb, HasAabb};

/// Tuning of a [`QuadTree`].
///
/// Both limits are soft: a node holding more than `max_objects` objects is only split if it is
/// shallower than `max_levels`, and objects straddling the split lines stay at the split node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct QuadTreeSettings {
    /// The number of objects a leaf holds before it is split.
    pub max_objects: usize,
    /// The maximum depth of a split node. The root is at level 0.
    pub max_levels: usize,
}

impl Default for QuadTreeSettings {
    fn default() -> Self {
        QuadTreeSettings {
            max_objects: 10,
            max_levels: 5,
        }
    }
}

#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
/// The quadrants of a quad-tree node overlapped by a bounding box.
pub struct Quadrants(u8);

bitflags::bitflags! {
    impl Quadrants: u8 {
        /// The top-left quadrant (smallest `x` and `y`).
        const TOP_LEFT = 1;
        /// The top-right quadrant.
        const TOP_RIGHT = 1 << 1;
        /// The bottom-left quadrant.
        const BOT_LEFT = 1 << 2;
        /// The bottom-right quadrant (largest `x` and `y`).
        const BOT_RIGHT = 1 << 3;
    }
}

impl Quadrants {
    /// The quadrants of `bounds` overlapped by `aabb`.
    ///
    /// An `aabb` touching a split line belongs to the quadrants on both of its sides.
    pub fn of(bounds: &Aabb, aabb: &Aabb) -> Self {
        let mid = bounds.center();
        let top = aabb.mins.y <= mid.y;
        let bottom = aabb.maxs.y >= mid.y;
        let left = aabb.mins.x <= mid.x;
        let right = aabb.maxs.x >= mid.x;

        let mut result = Quadrants::empty();
        result.set(Quadrants::TOP_LEFT, top && left);
        result.set(Quadrants::TOP_RIGHT, top && right);
        result.set(Quadrants::BOT_LEFT, bottom && left);
        result.set(Quadrants::BOT_RIGHT, bottom && right);
        result
    }

    /// The index of the quadrant (in the order of [`Aabb::split_at_center`]) if `self` is
    /// made of exactly one quadrant.
    pub fn single(self) -> Option<usize> {
        match self.bits() {
            1 => Some(0),
            2 => Some(1),
            4 => Some(2),
            8 => Some(3),
            _ => None,
        }
    }

    /// Does `self` contain the quadrant with the given index?
    #[inline]
    pub fn has_index(self, i: usize) -> bool {
        self.bits() & (1 << i) != 0
    }
}

#[derive(Clone, Debug)]
struct QuadTreeNode<T> {
    bounds: Aabb,
    level: usize,
    objects: Vec<T>,
    children: Option<[usize; 4]>,
}

impl<T> QuadTreeNode<T> {
    fn new(bounds: Aabb, level: usize) -> Self {
        QuadTreeNode {
            bounds,
            level,
            objects: Vec::new(),
            children: None,
        }
    }
}

/// A region quad-tree of objects with bounding boxes, used as a broad-phase.
///
/// Nodes are allocated from a slab: releasing a node puts it back in the pool, and
/// [`reset`](QuadTree::reset) lets the same tree be rebuilt every step without reallocating.
#[derive(Clone, Debug)]
pub struct QuadTree<T> {
    nodes: Slab<QuadTreeNode<T>>,
    root: usize,
    settings: QuadTreeSettings,
    len: usize,
}

impl<T: HasAabb> QuadTree<T> {
    /// Creates an empty quad-tree covering `bounds`.
    ///
    /// Objects outside of `bounds` may still be inserted: they end up in the border nodes.
    pub fn new(bounds: Aabb, settings: QuadTreeSettings) -> Self {
        let mut nodes = Slab::new();
        let root = nodes.insert(QuadTreeNode::new(bounds, 0));

        QuadTree {
            nodes,
            root,
            settings,
            len: 0,
        }
    }

    /// The bounds of the root node.
    pub fn bounds(&self) -> &Aabb {
        &self.nodes[self.root].bounds
    }

    /// The settings of this tree.
    pub fn settings(&self) -> &QuadTreeSettings {
        &self.settings
    }

    /// The number of objects in this tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Is this tree empty?
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of live nodes of this tree.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The number of levels of this tree: 1 if the root was never split.
    pub fn depth(&self) -> usize {
        self.nodes
            .iter()
            .map(|(_, node)| node.level + 1)
            .max()
            .unwrap_or(0)
    }

    /// Inserts an object.
    ///
    /// The object is pushed down as long as it fits in a single quadrant of the split nodes it
    /// traverses.
    pub fn insert(&mut self, object: T) {
        let aabb = object.aabb();
        let mut id = self.root;

        while let Some(children) = self.nodes[id].children {
            match Quadrants::of(&self.nodes[id].bounds, &aabb).single() {
                Some(quadrant) => id = children[quadrant],
                None => break,
            }
        }

        let node = &mut self.nodes[id];
        node.objects.push(object);
        self.len += 1;

        if node.children.is_none()
            && node.objects.len() > self.settings.max_objects
            && node.level < self.settings.max_levels
        {
            self.split(id);
        }
    }

    fn split(&mut self, id: usize) {
        let bounds = self.nodes[id].bounds;
        let level = self.nodes[id].level + 1;
        let children = bounds
            .split_at_center()
            .map(|part| self.nodes.insert(QuadTreeNode::new(part, level)));

        let objects = mem::take(&mut self.nodes[id].objects);
        self.nodes[id].children = Some(children);

        for object in objects {
            match Quadrants::of(&bounds, &object.aabb()).single() {
                Some(quadrant) => self.nodes[children[quadrant]].objects.push(object),
                None => self.nodes[id].objects.push(object),
            }
        }

        log::trace!(
            "Quad-tree node {} split at level {}; {} objects straddle its split lines.",
            id,
            level - 1,
            self.nodes[id].objects.len()
        );
    }

    /// Appends to `out` every object that may intersect `query`.
    ///
    /// These are the objects of every node whose quadrant is overlapped by `query`, so `out`
    /// may contain objects that do not actually intersect it.
    pub fn retrieve<'a>(&'a self, query: &Aabb, out: &mut Vec<&'a T>) {
        let mut stack: SmallVec<[usize; 32]> = SmallVec::new();
        stack.push(self.root);

        while let Some(id) = stack.pop() {
            let node = &self.nodes[id];
            out.extend(node.objects.iter());

            if let Some(children) = node.children {
                let quadrants = Quadrants::of(&node.bounds, query);

                for (i, child) in children.iter().enumerate() {
                    if quadrants.has_index(i) {
                        stack.push(*child);
                    }
                }
            }
        }
    }

    /// Removes every object and every node but the root, which keeps its bounds.
    ///
    /// Children are released before their parent. The released nodes are pooled and reused by
    /// the next splits.
    pub fn release(&mut self) {
        let mut stack: SmallVec<[usize; 32]> = SmallVec::new();
        stack.push(self.root);

        while let Some(id) = stack.pop() {
            let node = &mut self.nodes[id];
            node.objects.clear();

            if let Some(children) = node.children.take() {
                stack.extend(children);
            }

            if id != self.root {
                let _ = self.nodes.remove(id);
            }
        }

        self.len = 0;
    }

    /// Empties this tree and makes its root cover `bounds`.
    pub fn reset(&mut self, bounds: Aabb) {
        self.release();
        self.nodes[self.root].bounds = bounds;
    }
}
