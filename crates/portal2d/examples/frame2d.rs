extern crate nalgebra as na;

use na::{Point2, Vector2};
use portal2d::frame::CollisionFrame;
use portal2d::partitioning::QuadTreeSettings;
use portal2d::query::{self, QueryOptions};
use portal2d::scene::{GroupKind, Mirror, PrimitiveShape, Scene};

fn main() {
    /*
     * Build a small scene: a mirrored player falling on a floor next to a crate.
     */
    let mut scene = Scene::new();
    let root = scene.root();

    let level = scene
        .add_group(root, GroupKind::Static, Vector2::zeros())
        .unwrap();
    let floor = scene
        .add_primitive(
            level,
            Point2::new(0.0, 100.0),
            PrimitiveShape::Line {
                a: Vector2::zeros(),
                b: Vector2::new(200.0, 0.0),
            },
        )
        .unwrap();
    let _ = scene
        .add_primitive(level, Point2::new(150.0, 80.0), PrimitiveShape::Box { w: 20.0, h: 20.0 })
        .unwrap();

    let player = scene
        .add_group(
            root,
            GroupKind::Dynamic(Mirror::new(true, false)),
            Vector2::new(50.0, 80.0),
        )
        .unwrap();
    let body = scene
        .add_primitive(player, Point2::new(0.0, 0.0), PrimitiveShape::Circle { radius: 8.0 })
        .unwrap();
    scene.set_body(player, body).unwrap();

    /*
     * One simulation step.
     */
    let mut frame = CollisionFrame::new(&scene);
    let _ = frame.add_group(root).unwrap();
    frame
        .assume_delta(player, Vector2::new(0.0, 15.0))
        .unwrap();

    let islands = frame.build_islands(&QuadTreeSettings::default()).unwrap();
    println!("{} islands", islands.len());

    for island in islands.iter_chain() {
        println!("Island {:?}: {:?}", island, islands.members(island).unwrap());
    }

    let opts = QueryOptions::default();
    let body = frame.proxy_for(body).unwrap();
    let floor = frame.proxy_for(floor).unwrap();
    let contact = query::collide(
        frame.proxy(body).unwrap(),
        frame.proxy(floor).unwrap(),
        &opts,
    )
    .unwrap();
    println!(
        "Player to floor: {} (moving by {:?})",
        contact.dist,
        frame.proxy_delta(body).unwrap()
    );
}
