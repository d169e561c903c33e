use super::*;
use crate::animation::ease::Ease;
use crate::engine::opts::EngineOpts;
use crate::foundation::core::Canvas;
use crate::scene::def::{ButtonData, HitboxDef, KindData, ObjectData, ObjectDef, SurfaceDef};
use crate::scene::object::{BUTTON_HOVER, BUTTON_IDLE};

fn engine() -> Engine {
    Engine::headless(EngineOpts::default(), Canvas::new(800, 600).unwrap()).unwrap()
}

fn linear(ms: f64) -> TimelineSpec {
    TimelineSpec::new(ms, Ease::Linear)
}

fn unit(x: f64, y: f64) -> Transform {
    Transform::at(Vec2::new(x, y), Vec2::new(1.0, 1.0))
}

fn spawn(e: &mut Engine, x: f64, y: f64) -> ObjectId {
    let object = Object::new(unit(x, y))
        .with_surface("body", Surface::color(Rgba8::WHITE, Transform::default()))
        .with_hitbox("body", Hitbox::new(Transform::default(), 0));
    e.insert_object(object)
}

fn labelled_button(e: &mut Engine) -> (ObjectId, ObjectId) {
    let data = ObjectData::at(unit(0.0, 0.0))
        .with_surface(BUTTON_IDLE, SurfaceDef::default())
        .with_surface(BUTTON_HOVER, SurfaceDef::default());
    let id = e
        .create_object(ObjectDef {
            data,
            kind: KindData::Button(ButtonData {
                enabled: true,
                label: Some(Box::new(ObjectData::at(unit(1.0, 0.0)))),
            }),
        })
        .unwrap();
    let label = e.object(id).and_then(|o| o.label()).unwrap();
    (id, label)
}

#[test]
fn rescale_round_trip_restores_children_exactly() {
    let mut e = engine();
    let local = Transform {
        translate: Vec2::new(0.3, -0.7),
        scale: Vec2::new(0.6, 1.1),
        rotation: 15.0,
        pivot: Vec2::new(0.1, 0.2),
    };
    let id = e.insert_object(
        Object::new(Transform::default())
            .with_hitbox("h", Hitbox::new(local, 0))
            .with_surface("s", Surface::color(Rgba8::WHITE, local)),
    );
    e.set_scale(id, Vec2::new(2.0, 2.0)).unwrap();
    e.set_scale(id, Vec2::new(1.0, 1.0)).unwrap();
    assert_eq!(*e.get_hitbox(id, "h").unwrap().transform(), local);
    assert_eq!(*e.get_surface(id, "s").unwrap().transform(), local);
}

#[test]
fn hitbox_world_rect_includes_object_scale() {
    let mut e = engine();
    let id = e.insert_object(
        Object::new(Transform::at(Vec2::ZERO, Vec2::new(2.0, 2.0)))
            .with_hitbox("h", Hitbox::new(unit(1.0, 0.0), 0)),
    );
    let rect = e.get_hitbox_world_rect(id, "h").unwrap();
    assert_eq!(rect, Rect::new(2.0, 0.0, 2.0, 2.0));
}

#[test]
fn hitbox_setters_edit_the_unscaled_transform() {
    let mut e = engine();
    let id = e.insert_object(
        Object::new(Transform::at(Vec2::ZERO, Vec2::new(2.0, 2.0)))
            .with_hitbox("h", Hitbox::new(unit(0.0, 0.0), 0)),
    );
    e.set_hitbox_translate(id, "h", Vec2::new(1.0, 0.5)).unwrap();
    e.set_hitbox_scale(id, "h", Vec2::new(0.5, 0.5)).unwrap();
    let hitbox = e.get_hitbox(id, "h").unwrap();
    assert_eq!(hitbox.default_transform().translate, Vec2::new(1.0, 0.5));
    assert_eq!(hitbox.transform().translate, Vec2::new(2.0, 1.0));
    assert_eq!(hitbox.transform().scale, Vec2::new(1.0, 1.0));

    e.set_hitbox_collision_index(id, "h", 4).unwrap();
    assert_eq!(e.get_hitbox(id, "h").unwrap().collision_index(), 4);
}

#[test]
fn stale_handles_and_missing_children_are_lookup_errors() {
    let mut e = engine();
    let id = spawn(&mut e, 0.0, 0.0);
    assert!(e.set_hitbox_translate(id, "nope", Vec2::ZERO).unwrap_err().is_lookup());
    assert!(e.get_surface(id, "nope").unwrap_err().is_lookup());
    assert!(e.remove_hitbox(id, "nope").unwrap_err().is_lookup());

    e.destroy_object(id);
    assert!(e.set_translate(id, Vec2::ZERO).unwrap_err().is_lookup());
    assert!(e.translate(id).unwrap_err().is_lookup());
    assert!(e.tween_scale(id, Vec2::ZERO, linear(10.0)).unwrap_err().is_lookup());
    assert_eq!(e.timeline_count(), 0);
}

#[test]
fn wrong_surface_variant_is_a_validation_error() {
    let mut e = engine();
    let id = spawn(&mut e, 0.0, 0.0);
    let err = e.set_border(id, "body", 2.0, true).unwrap_err();
    assert!(matches!(err, VantageError::Validation(_)));
    assert!(e.set_surface_texture(id, "body", "hero").is_err());
    assert!(e.set_sprite_frame(id, "body", 1).is_err());
}

#[test]
fn translate_tween_steps_through_the_setter() {
    let mut e = engine();
    let id = spawn(&mut e, 0.0, 0.0);
    let t = e.tween_translate(id, Vec2::new(4.0, -8.0), linear(1000.0)).unwrap();
    e.update(0.25);
    assert_eq!(e.translate(id).unwrap(), Vec2::new(1.0, -2.0));
    e.update(0.25);
    assert_eq!(e.translate(id).unwrap(), Vec2::new(2.0, -4.0));
    e.update(0.5);
    assert_eq!(e.translate(id).unwrap(), Vec2::new(4.0, -8.0));
    assert!(!e.is_timeline_active(t));
}

#[test]
fn scalar_tweens_round_integers() {
    let mut e = engine();
    let id = spawn(&mut e, 0.0, 0.0);
    e.tween_opacity(id, 0, linear(1000.0)).unwrap();
    e.tween_index(id, 3, linear(1000.0)).unwrap();
    e.tween_rotation(id, 90.0, linear(1000.0)).unwrap();
    e.update(0.5);
    let object = e.object(id).unwrap();
    assert_eq!(object.opacity(), 128);
    assert_eq!(object.index(), 2);
    assert_eq!(e.rotation(id).unwrap(), 45.0);
}

#[test]
fn surface_color_tween_reaches_target() {
    let mut e = engine();
    let id = spawn(&mut e, 0.0, 0.0);
    e.tween_surface_color(id, "body", Rgba8::rgba(0, 0, 0, 0), linear(100.0))
        .unwrap();
    e.update(0.25);
    assert_eq!(
        e.get_surface(id, "body").unwrap().color_value(),
        Rgba8::rgba(0, 0, 0, 0)
    );
}

#[test]
fn child_tween_survives_child_removal() {
    let mut e = engine();
    let id = spawn(&mut e, 0.0, 0.0);
    let t = e
        .tween_hitbox_translate(id, "body", Vec2::new(2.0, 0.0), linear(1000.0))
        .unwrap();
    e.update(0.25);
    assert_eq!(
        e.get_hitbox(id, "body").unwrap().default_transform().translate,
        Vec2::new(0.5, 0.0)
    );
    e.remove_hitbox(id, "body").unwrap();
    e.update(0.25);
    assert!(e.is_timeline_active(t));
    e.update(0.5);
    assert!(!e.is_timeline_active(t));
}

#[test]
fn delayed_flags_apply_after_the_wait() {
    let mut e = engine();
    let id = spawn(&mut e, 0.0, 0.0);
    e.set_hidden_after(id, true, 400.0).unwrap();
    e.set_absolute_after(id, true, 400.0).unwrap();
    e.set_surface_hidden_after(id, "body", true, 200.0).unwrap();
    e.update(0.25);
    assert!(e.get_surface(id, "body").unwrap().is_hidden());
    assert!(!e.object(id).unwrap().is_hidden());
    e.update(0.25);
    let object = e.object(id).unwrap();
    assert!(object.is_hidden());
    assert!(object.absolute());
}

#[test]
fn label_follows_translate_hidden_and_absolute() {
    let mut e = engine();
    let (id, label) = labelled_button(&mut e);
    assert_eq!(e.translate(label).unwrap(), Vec2::new(1.0, 0.0));

    e.set_translate(id, Vec2::new(3.0, 2.0)).unwrap();
    assert_eq!(e.translate(label).unwrap(), Vec2::new(4.0, 2.0));

    e.set_hidden(id, true).unwrap();
    e.set_absolute(id, true).unwrap();
    let l = e.object(label).unwrap();
    assert!(l.is_hidden());
    assert!(l.absolute());

    e.set_transform(id, unit(0.0, 0.0)).unwrap();
    assert_eq!(e.translate(label).unwrap(), Vec2::new(1.0, 0.0));
}

#[test]
fn sprite_controls() {
    let mut e = engine();
    let mut sprite = SpriteSurface::new("walk", Vec2::new(16.0, 16.0), 4, 100.0);
    sprite.looping = false;
    let id = e.insert_object(Object::new(unit(0.0, 0.0)).with_surface(
        "walk",
        Surface::new(SurfaceKind::Sprite(sprite), Transform::default()),
    ));
    let frame = |e: &Engine| match e.get_surface(id, "walk").unwrap().kind() {
        SurfaceKind::Sprite(s) => (s.frame(), s.is_playing()),
        _ => unreachable!(),
    };

    e.update(0.25);
    assert_eq!(frame(&e), (2, true));
    e.update(0.25);
    assert_eq!(frame(&e), (3, false));

    e.set_sprite_playing(id, "walk", true).unwrap();
    assert_eq!(frame(&e), (0, true));

    e.set_sprite_frame(id, "walk", 99).unwrap();
    assert_eq!(frame(&e), (3, true));

    e.set_sprite_playing(id, "walk", false).unwrap();
    e.set_sprite_frame(id, "walk", 1).unwrap();
    e.update(1.0);
    assert_eq!(frame(&e), (1, false));
}

#[test]
fn surface_flags() {
    let mut e = engine();
    let id = spawn(&mut e, 0.0, 0.0);
    e.set_surface_blend(id, "body", BlendMode::Add).unwrap();
    e.set_surface_scale_mode(id, "body", ScaleMode::Nearest).unwrap();
    e.set_surface_index(id, "body", -2).unwrap();
    e.set_surface_hidden(id, "body", true).unwrap();
    let s = e.get_surface(id, "body").unwrap();
    assert_eq!(s.blend(), BlendMode::Add);
    assert_eq!(s.scale_mode(), ScaleMode::Nearest);
    assert_eq!(s.index(), -2);
    assert!(s.is_hidden());
}

#[test]
fn added_children_update_the_bounding_radius() {
    let mut e = engine();
    let id = spawn(&mut e, 0.0, 0.0);
    let before = e.object(id).unwrap().max_radius();
    e.add_hitbox(
        id,
        "far",
        HitboxDef {
            transform: unit(5.0, 0.0),
            ..HitboxDef::default()
        }
        .build(),
    )
    .unwrap();
    assert!(e.object(id).unwrap().max_radius() > before);
    e.remove_hitbox(id, "far").unwrap();
    assert_eq!(e.object(id).unwrap().max_radius(), before);
}
