use super::*;

const ALL: [Flip; 4] = [Flip::None, Flip::X, Flip::Y, Flip::XY];

#[test]
fn flip_follows_scale_signs() {
    assert_eq!(Flip::from_scale(Vec2::new(1.0, 1.0)), Flip::None);
    assert_eq!(Flip::from_scale(Vec2::new(-1.0, 1.0)), Flip::X);
    assert_eq!(Flip::from_scale(Vec2::new(1.0, -2.0)), Flip::Y);
    assert_eq!(Flip::from_scale(Vec2::new(-3.0, -2.0)), Flip::XY);
}

#[test]
fn rotation_rules_per_flip() {
    assert_eq!(Flip::None.flip_rotation(30.0), 30.0);
    assert_eq!(Flip::X.flip_rotation(30.0), -30.0);
    assert_eq!(Flip::Y.flip_rotation(30.0), 150.0);
    assert_eq!(Flip::XY.flip_rotation(30.0), 210.0);
}

#[test]
fn flipping_twice_on_the_same_axis_is_identity() {
    let pivot = Vec2::new(0.75, -2.5);
    for f in [Flip::X, Flip::Y] {
        for r in [0.0, 15.0, 90.0, 212.5, -40.0] {
            assert_eq!(f.flip_rotation(f.flip_rotation(r)), r);
            assert_eq!(f.flip_angle(f.flip_angle(r)), r);
        }
        assert_eq!(f.flip_offset(f.flip_offset(pivot)), pivot);
        assert_eq!(f.then(f), Flip::None);
    }
    let twice = Flip::XY.flip_rotation(Flip::XY.flip_rotation(10.0));
    assert_eq!(crate::foundation::math::normalize_degrees(twice), 10.0);
}

#[test]
fn composition_is_per_axis_xor() {
    assert_eq!(Flip::X.then(Flip::Y), Flip::XY);
    assert_eq!(Flip::XY.then(Flip::Y), Flip::X);
    for a in ALL {
        assert_eq!(a.then(Flip::None), a);
        for b in ALL {
            assert_eq!(a.then(b), b.then(a));
        }
    }
}

#[test]
fn decomposition_reproduces_the_true_mirror() {
    // mirror-x then half turn must equal the per-axis mirror for every flip.
    let v = Vec2::new(2.0, 1.0);
    for f in ALL {
        let mut d = v;
        if f.render_flip() == Flip::X {
            d.x = -d.x;
        }
        let d = crate::foundation::math::rotate_point(d, Vec2::ZERO, f.turn());
        assert_eq!(d, f.flip_offset(v), "{f:?}");
    }
}

#[test]
fn flip_rect_mirrors_across_center() {
    let r = Rect::new(3.0, 1.0, 2.0, 1.0);
    let m = Flip::X.flip_rect(r, Vec2::new(1.0, 0.0));
    assert_eq!(m, Rect::new(-1.0, 1.0, 2.0, 1.0));
    let m = Flip::Y.flip_rect(r, Vec2::new(1.0, 0.0));
    assert_eq!(m, Rect::new(3.0, -1.0, 2.0, 1.0));
}
