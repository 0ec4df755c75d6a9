use std::collections::BTreeSet;

use portal2d::bounding_volume::{Aabb, BoundingVolume, HasAabb};
use portal2d::math::Real;
use portal2d::partitioning::{QuadTree, QuadTreeSettings};

#[derive(Clone, Debug)]
struct Tagged {
    id: usize,
    aabb: Aabb,
}

impl HasAabb for Tagged {
    fn aabb(&self) -> Aabb {
        self.aabb
    }
}

fn rand_objects(rng: &mut oorandom::Rand32, count: usize) -> Vec<Tagged> {
    (0..count)
        .map(|id| {
            let x = rng.rand_float() as Real * 1100.0 - 50.0;
            let y = rng.rand_float() as Real * 1100.0 - 50.0;
            let w = rng.rand_float() as Real * 40.0;
            let h = rng.rand_float() as Real * 40.0;
            Tagged {
                id,
                aabb: Aabb::from_top_left(x, y, w, h),
            }
        })
        .collect()
}

fn retrieved_ids(tree: &QuadTree<Tagged>, query: &Aabb) -> BTreeSet<usize> {
    let mut out = Vec::new();
    tree.retrieve(query, &mut out);
    out.iter().map(|obj| obj.id).collect()
}

#[test]
fn retrieve_finds_every_intersecting_object() {
    let mut rng = oorandom::Rand32::new(42);
    let objects = rand_objects(&mut rng, 500);
    let settings = QuadTreeSettings {
        max_objects: 4,
        max_levels: 6,
    };
    let mut tree = QuadTree::new(Aabb::from_top_left(0.0, 0.0, 1000.0, 1000.0), settings);

    for obj in &objects {
        tree.insert(obj.clone());
    }

    assert_eq!(tree.len(), objects.len());
    assert!(tree.depth() > 1);

    for query in rand_objects(&mut rng, 100) {
        let retrieved = retrieved_ids(&tree, &query.aabb);

        for obj in &objects {
            if obj.aabb.intersects(&query.aabb) {
                assert!(
                    retrieved.contains(&obj.id),
                    "{:?} missed by {:?}",
                    obj,
                    query
                );
            }
        }
    }
}

#[test]
fn retrieved_objects_are_reported_once() {
    let mut rng = oorandom::Rand32::new(3);
    let objects = rand_objects(&mut rng, 200);
    let mut tree = QuadTree::new(
        Aabb::from_top_left(0.0, 0.0, 1000.0, 1000.0),
        QuadTreeSettings::default(),
    );

    for obj in &objects {
        tree.insert(obj.clone());
    }

    let mut out = Vec::new();
    tree.retrieve(&Aabb::from_top_left(-100.0, -100.0, 1200.0, 1200.0), &mut out);
    assert_eq!(out.len(), objects.len());
}

#[test]
fn reset_then_rebuild_is_idempotent() {
    let mut rng = oorandom::Rand32::new(42);
    let objects = rand_objects(&mut rng, 300);
    let queries = rand_objects(&mut rng, 50);
    let bounds = Aabb::from_top_left(0.0, 0.0, 1000.0, 1000.0);

    let mut fresh = QuadTree::new(bounds, QuadTreeSettings::default());
    for obj in &objects {
        fresh.insert(obj.clone());
    }

    let mut reused = QuadTree::new(
        Aabb::from_top_left(500.0, 500.0, 10.0, 10.0),
        QuadTreeSettings::default(),
    );
    for _ in 0..3 {
        reused.reset(bounds);
        assert!(reused.is_empty());
        assert_eq!(reused.node_count(), 1);

        for obj in &objects {
            reused.insert(obj.clone());
        }

        assert_eq!(reused.bounds(), fresh.bounds());
        assert_eq!(reused.len(), fresh.len());
        assert_eq!(reused.node_count(), fresh.node_count());
        assert_eq!(reused.depth(), fresh.depth());

        for query in &queries {
            assert_eq!(
                retrieved_ids(&reused, &query.aabb),
                retrieved_ids(&fresh, &query.aabb)
            );
        }
    }
}
