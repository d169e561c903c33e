use super::*;
use crate::foundation::core::{Transform, Vec2};
use crate::geometry::rect::Face;
use crate::geometry::resolve::AXIS_SNAP_DEG;
use crate::scene::hitbox::Hitbox;

fn unit(x: f64, y: f64) -> Transform {
    Transform::at(Vec2::new(x, y), Vec2::new(1.0, 1.0))
}

fn listening(t: Transform, layer: i32) -> Hitbox {
    Hitbox::new(t, layer).on_collide(|_, _| {})
}

#[test]
fn scaled_hitbox_hits_right_face() {
    let mut objects = Arena::new();
    let o = objects.insert(
        Object::new(Transform::at(Vec2::ZERO, Vec2::new(2.0, 2.0)))
            .with_hitbox("H", listening(unit(1.0, 0.0), 0)),
    );
    let p = objects.insert(Object::new(unit(3.0, 0.0)).with_hitbox("H2", Hitbox::new(unit(0.0, 0.0), 0)));

    let hits = sweep(&objects, AXIS_SNAP_DEG);
    assert_eq!(
        hits,
        vec![Collision {
            object: o,
            hitbox: "H".into(),
            other: p,
            other_hitbox: "H2".into(),
            face: Face::Right,
        }]
    );
}

#[test]
fn layers_hidden_and_absolute_objects_are_skipped() {
    let mut objects = Arena::new();
    objects.insert(Object::new(unit(0.0, 0.0)).with_hitbox("a", listening(unit(0.0, 0.0), 1)));
    objects.insert(Object::new(unit(0.5, 0.0)).with_hitbox("b", Hitbox::new(unit(0.0, 0.0), 2)));
    objects.insert(
        Object::new(unit(0.5, 0.0))
            .with_hidden(true)
            .with_hitbox("c", Hitbox::new(unit(0.0, 0.0), 1)),
    );
    objects.insert(
        Object::new(unit(0.5, 0.0))
            .with_absolute(true)
            .with_hitbox("d", Hitbox::new(unit(0.0, 0.0), 1)),
    );
    assert!(sweep(&objects, AXIS_SNAP_DEG).is_empty());
}

#[test]
fn both_sides_report_when_both_listen() {
    let mut objects = Arena::new();
    let a = objects.insert(Object::new(unit(0.0, 0.0)).with_hitbox("a", listening(unit(0.0, 0.0), 0)));
    let b = objects.insert(Object::new(unit(0.0, 0.8)).with_hitbox("b", listening(unit(0.0, 0.0), 0)));
    let hits = sweep(&objects, AXIS_SNAP_DEG);
    assert_eq!(hits.len(), 2);
    assert_eq!((hits[0].object, hits[0].face), (a, Face::Bottom));
    assert_eq!((hits[1].object, hits[1].face), (b, Face::Top));
}

#[test]
fn touching_edges_do_not_collide_and_own_hitboxes_never_pair() {
    let mut objects = Arena::new();
    objects.insert(
        Object::new(unit(0.0, 0.0))
            .with_hitbox("a", listening(unit(0.0, 0.0), 0))
            .with_hitbox("b", Hitbox::new(unit(0.2, 0.0), 0)),
    );
    objects.insert(Object::new(unit(1.0, 0.0)).with_hitbox("edge", Hitbox::new(unit(0.0, 0.0), 0)));
    assert!(sweep(&objects, AXIS_SNAP_DEG).is_empty());
}
