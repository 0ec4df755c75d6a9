use portal2d::bounding_volume::Aabb;
use portal2d::frame::CollisionFrame;
use portal2d::math::{Point, Vector};
use portal2d::scene::{GroupKind, Mirror, PrimitiveShape, Scene};
use portal2d::shape::ConvexShape;

const FLIPS: [Mirror; 4] = [
    Mirror {
        flip_x: false,
        flip_y: false,
    },
    Mirror {
        flip_x: true,
        flip_y: false,
    },
    Mirror {
        flip_x: false,
        flip_y: true,
    },
    Mirror {
        flip_x: true,
        flip_y: true,
    },
];

#[test]
fn mirrored_lines_keep_their_normal_on_the_mirrored_side() {
    let expected_normals = [
        Vector::new(0.0, 1.0),
        Vector::new(0.0, 1.0),
        Vector::new(0.0, -1.0),
        Vector::new(0.0, -1.0),
    ];

    for (mirror, expected) in FLIPS.iter().zip(expected_normals.iter()) {
        let mut scene = Scene::new();
        let root = scene.root();
        let body = scene
            .add_group(root, GroupKind::Kinematic(*mirror), Vector::new(100.0, 50.0))
            .unwrap();
        let line = scene
            .add_primitive(
                body,
                Point::new(1.0, 1.0),
                PrimitiveShape::Line {
                    a: Vector::zeros(),
                    b: Vector::new(2.0, 0.0),
                },
            )
            .unwrap();

        let mut frame = CollisionFrame::new(&scene);
        assert_eq!(frame.add_group(body), Ok(1));
        let handle = frame.proxy_for(line).unwrap();

        match frame.proxy(handle).unwrap().shape() {
            ConvexShape::Segment(seg) => {
                let normal = seg.normal().unwrap();
                assert_relative_eq!(normal.into_inner(), *expected);

                let ends = [
                    mirror.apply(&Point::new(1.0, 1.0)) + Vector::new(100.0, 50.0),
                    mirror.apply(&Point::new(3.0, 1.0)) + Vector::new(100.0, 50.0),
                ];
                assert!(ends.contains(&seg.a));
                assert!(ends.contains(&seg.b));
            }
            shape => panic!("Unexpected resolved shape: {:?}", shape),
        }
    }
}

#[test]
fn mirrored_boxes_stay_axis_aligned() {
    for mirror in FLIPS.iter() {
        let mut scene = Scene::new();
        let root = scene.root();
        let body = scene
            .add_group(root, GroupKind::Dynamic(*mirror), Vector::new(100.0, 50.0))
            .unwrap();
        let rect = scene
            .add_primitive(body, Point::new(1.0, 2.0), PrimitiveShape::Box { w: 4.0, h: 3.0 })
            .unwrap();

        let mut frame = CollisionFrame::new(&scene);
        let _ = frame.add_primitive(rect).unwrap();
        let handle = frame.proxy_for(rect).unwrap();

        let x = if mirror.flip_x { -5.0 } else { 1.0 };
        let y = if mirror.flip_y { -5.0 } else { 2.0 };
        let expected = Aabb::from_top_left(x + 100.0, y + 50.0, 4.0, 3.0);

        assert_eq!(
            frame.proxy(handle).unwrap().shape(),
            &ConvexShape::Rect(expected)
        );
        assert_eq!(frame.proxy(handle).unwrap().position(), expected.mins);
    }
}

#[test]
fn nested_translations_ignore_the_root() {
    let mut scene = Scene::new();
    let root = scene.root();
    scene
        .set_translation(root, Vector::new(1000.0, 1000.0))
        .unwrap();
    let level = scene
        .add_group(root, GroupKind::Static, Vector::new(10.0, 0.0))
        .unwrap();
    let body = scene
        .add_group(level, GroupKind::Kinematic(Mirror::NONE), Vector::new(5.0, 5.0))
        .unwrap();
    let circle = scene
        .add_primitive(body, Point::new(1.0, 1.0), PrimitiveShape::Circle { radius: 2.0 })
        .unwrap();
    let dot = scene
        .add_primitive(level, Point::new(-1.0, 0.0), PrimitiveShape::Point)
        .unwrap();

    let mut frame = CollisionFrame::new(&scene);
    assert_eq!(frame.add_group(root), Ok(2));

    let circle = frame.proxy_for(circle).unwrap();
    let dot = frame.proxy_for(dot).unwrap();
    assert_eq!(
        frame.proxy(circle).unwrap().position(),
        Point::new(16.0, 6.0)
    );
    assert_eq!(frame.proxy(dot).unwrap().position(), Point::new(9.0, 0.0));
}

#[test]
fn swept_bounds_cover_the_motion() {
    let mut scene = Scene::new();
    let root = scene.root();
    let body = scene
        .add_group(root, GroupKind::Dynamic(Mirror::NONE), Vector::zeros())
        .unwrap();
    let circle = scene
        .add_primitive(body, Point::new(10.0, 10.0), PrimitiveShape::Circle { radius: 1.0 })
        .unwrap();

    let mut frame = CollisionFrame::new(&scene);
    let _ = frame.add_primitive(circle).unwrap();
    frame.assume_delta(body, Vector::new(-5.0, 2.0)).unwrap();

    let handle = frame.proxy_for(circle).unwrap();
    assert_eq!(frame.proxy_delta(handle), Ok(Some(Vector::new(-5.0, 2.0))));
    assert_eq!(
        frame.swept_aabb(handle),
        Ok(Aabb::new(Point::new(4.0, 9.0), Point::new(11.0, 13.0)))
    );
}
