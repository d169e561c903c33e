use super::*;
use crate::foundation::core::Rgba8;
use crate::geometry::resolve::AXIS_SNAP_DEG;

fn unit(x: f64, y: f64) -> Transform {
    Transform::at(Vec2::new(x, y), Vec2::new(1.0, 1.0))
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn max_radius_grows_with_farther_hitbox_and_shrinks_back() {
    let mut o = Object::new(unit(5.0, 5.0)).with_hitbox("body", Hitbox::new(unit(0.0, 0.0), 0));
    let before = o.max_radius();
    assert!(close(before, 0.5_f64.hypot(0.5)));

    o.add_hitbox("far", Hitbox::new(unit(4.0, 0.0), 0));
    assert!(o.max_radius() > before);
    assert!(close(o.max_radius(), 4.5_f64.hypot(0.5)));

    o.remove_hitbox("far");
    assert!(close(o.max_radius(), before));
}

#[test]
fn max_radius_tracks_rotation_and_surfaces() {
    let mut o = Object::new(unit(0.0, 0.0)).with_surface(
        "bar",
        Surface::color(Rgba8::WHITE, Transform::at(Vec2::new(2.0, 0.0), Vec2::new(2.0, 1.0))),
    );
    let r = o.max_radius();
    assert!(close(r, 3.0_f64.hypot(0.5)));
    o.set_rotation(90.0);
    assert!(close(o.max_radius(), r));
    o.set_translate(Vec2::new(10.0, 10.0));
    assert!(close(o.max_radius(), r));
}

#[test]
fn rescale_does_not_drift() {
    let hb = Transform {
        translate: Vec2::new(1.0, -0.5),
        scale: Vec2::new(0.5, 2.0),
        rotation: 30.0,
        pivot: Vec2::new(0.25, 0.0),
    };
    let mut o = Object::new(Transform::default())
        .with_hitbox("h", Hitbox::new(hb, 0))
        .with_surface("s", Surface::color(Rgba8::WHITE, hb));
    o.set_scale(Vec2::new(2.0, 2.0));
    assert_eq!(o.hitbox("h").map(|h| h.transform().translate), Some(Vec2::new(2.0, -1.0)));
    o.set_scale(Vec2::new(3.0, -3.0));
    o.set_scale(Vec2::new(1.0, 1.0));
    assert_eq!(o.hitbox("h").map(|h| *h.transform()), Some(hb));
    assert_eq!(o.surface("s").map(|s| *s.transform()), Some(hb));
}

#[test]
fn children_added_after_scaling_are_scaled() {
    let mut o = Object::new(Transform::at(Vec2::ZERO, Vec2::new(2.0, 2.0)));
    o.add_hitbox("h", Hitbox::new(unit(1.0, 0.0), 0));
    let h = o.hitbox("h").map(|h| *h.transform());
    assert_eq!(h.map(|t| t.translate), Some(Vec2::new(2.0, 0.0)));
    assert_eq!(h.map(|t| t.scale), Some(Vec2::new(2.0, 2.0)));
    assert_eq!(o.hitbox("h").map(|h| h.default_transform().translate), Some(Vec2::new(1.0, 0.0)));
}

#[test]
fn edit_child_transform_updates_default_then_effective() {
    let mut o = Object::new(Transform::at(Vec2::ZERO, Vec2::new(2.0, 2.0)))
        .with_hitbox("h", Hitbox::new(unit(0.0, 0.0), 0));
    assert!(o.edit_hitbox_transform("h", |t| t.translate = Vec2::new(3.0, 0.0)));
    assert!(!o.edit_hitbox_transform("missing", |_| {}));
    let world = o.hitbox_world_rect("h", AXIS_SNAP_DEG);
    assert_eq!(world.map(|r| r.center()), Some(Vec2::new(6.0, 0.0)));
    assert!(close(o.max_radius(), 7.0_f64.hypot(1.0)));
}

#[test]
fn paint_surfaces_sorted_by_index_then_name() {
    let t = unit(0.0, 0.0);
    let o = Object::new(t)
        .with_surface("b", Surface::color(Rgba8::WHITE, t).with_index(1))
        .with_surface("a", Surface::color(Rgba8::WHITE, t).with_index(1))
        .with_surface("z", Surface::color(Rgba8::WHITE, t).with_index(-1));
    let names: Vec<&str> = o.paint_surfaces().into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, ["z", "a", "b"]);
}

#[test]
fn button_shows_one_surface_per_state() {
    let t = unit(0.0, 0.0);
    let mut o = Object::new(t)
        .with_kind(ObjectKind::Button)
        .with_surface(BUTTON_IDLE, Surface::color(Rgba8::WHITE, t))
        .with_surface(BUTTON_HOVER, Surface::color(Rgba8::BLACK, t));
    o.interaction = Some(Interaction {
        enabled: true,
        ..Interaction::default()
    });
    o.sync_widget_surfaces();
    let shown = |o: &Object| -> Vec<String> {
        o.surfaces()
            .iter()
            .filter(|(_, s)| !s.is_hidden())
            .map(|(n, _)| n.clone())
            .collect()
    };
    assert_eq!(shown(&o), [BUTTON_IDLE]);

    if let Some(i) = o.interaction.as_mut() {
        i.hovered = true;
    }
    o.sync_widget_surfaces();
    assert_eq!(shown(&o), [BUTTON_HOVER]);

    // Disabled without a dedicated surface falls back to idle even while hovered.
    if let Some(i) = o.interaction.as_mut() {
        i.enabled = false;
    }
    o.sync_widget_surfaces();
    assert_eq!(shown(&o), [BUTTON_IDLE]);
}

#[test]
fn checkbox_follows_checked_flag() {
    let t = unit(0.0, 0.0);
    let mut o = Object::new(t)
        .with_kind(ObjectKind::Checkbox)
        .with_surface(CHECKBOX_UNCHECKED, Surface::color(Rgba8::WHITE, t))
        .with_surface(CHECKBOX_CHECKED, Surface::color(Rgba8::BLACK, t));
    o.checked = Some(true);
    o.sync_widget_surfaces();
    assert!(o.surface(CHECKBOX_UNCHECKED).is_some_and(|s| s.is_hidden()));
    assert!(o.surface(CHECKBOX_CHECKED).is_some_and(|s| !s.is_hidden()));
}

#[test]
fn max_radius_covers_snapped_hitbox_under_off_center_pivot() {
    let mut o = Object::new(Transform {
        pivot: Vec2::new(10.0, 0.0),
        ..unit(0.0, 0.0)
    })
    .with_hitbox("h", Hitbox::new(unit(0.0, 0.0), 0));
    o.set_rotation(46.0);
    let rect = o.hitbox_world_rect("h", AXIS_SNAP_DEG).unwrap();
    let farthest = rect.corners().iter().map(|c| c.hypot()).fold(0.0, f64::max);
    assert!(farthest > 14.0);
    assert!(o.max_radius() >= farthest - 1e-9);

    o.set_hitbox_snap_deg(0.0);
    let free = o.hitbox_world_rect("h", 0.0).unwrap();
    assert!(free.center().hypot() < 8.0);
    assert!(o.max_radius() < farthest);
}
