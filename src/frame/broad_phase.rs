use crate::bounding_volume::{Aabb, BoundingVolume, HasAabb};
use crate::partitioning::{QuadTree, QuadTreeSettings};
use crate::utils::hashmap::HashSet;
use crate::utils::SortedPair;

struct Entry<K> {
    key: K,
    aabb: Aabb,
}

impl<K> HasAabb for Entry<K> {
    fn aabb(&self) -> Aabb {
        self.aabb
    }
}

/// The pairs of keys whose bounding boxes intersect, in increasing order.
///
/// Candidates are retrieved from a quad-tree covering all the boxes, then de-duplicated and
/// filtered with an exact bounding-box test. Boxes that only touch do form a pair.
pub fn swept_pairs<K>(entries: &[(K, Aabb)], settings: &QuadTreeSettings) -> Vec<SortedPair<K>>
where
    K: Copy + Ord + core::hash::Hash,
{
    let Some(bounds) = entries
        .iter()
        .map(|(_, aabb)| *aabb)
        .reduce(|acc, aabb| acc.merged(&aabb))
    else {
        return Vec::new();
    };

    let mut tree = QuadTree::new(bounds, *settings);

    for (key, aabb) in entries {
        tree.insert(Entry {
            key: *key,
            aabb: *aabb,
        });
    }

    let mut pairs = HashSet::new();
    let mut candidates = Vec::new();

    for (key, aabb) in entries {
        candidates.clear();
        tree.retrieve(aabb, &mut candidates);

        for candidate in &candidates {
            if candidate.key != *key && candidate.aabb.intersects(aabb) {
                let _ = pairs.insert(SortedPair::new(*key, candidate.key));
            }
        }
    }

    let mut pairs: Vec<_> = pairs.into_iter().collect();
    pairs.sort_unstable();
    pairs
}
