use super::*;

const ALL: [Ease; 13] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::InSine,
    Ease::OutSine,
    Ease::InOutSine,
    Ease::InBack,
    Ease::OutBack,
    Ease::OutBounce,
];

#[test]
fn endpoints_are_exact() {
    for e in ALL {
        assert_eq!(e.apply(0.0), 0.0, "{e:?}");
        assert_eq!(e.apply(1.0), 1.0, "{e:?}");
    }
}

#[test]
fn input_is_clamped() {
    for e in ALL {
        assert_eq!(e.apply(-3.0), 0.0);
        assert_eq!(e.apply(7.0), 1.0);
    }
}

#[test]
fn in_out_variants_are_symmetric_at_half() {
    for e in [Ease::InOutQuad, Ease::InOutCubic, Ease::InOutSine] {
        assert!((e.apply(0.5) - 0.5).abs() < 1e-12, "{e:?}");
    }
}

#[test]
fn back_curves_leave_the_unit_range() {
    assert!(Ease::InBack.apply(0.2) < 0.0);
    assert!(Ease::OutBack.apply(0.8) > 1.0);
}

#[test]
fn bounce_stays_in_range_and_is_continuous_at_the_end() {
    for i in 0..=100 {
        let v = Ease::OutBounce.apply(f64::from(i) / 100.0);
        assert!((0.0..=1.0 + 1e-12).contains(&v));
    }
    assert!((Ease::OutBounce.apply(0.999_999) - 1.0).abs() < 1e-4);
}

#[test]
fn deserializes_from_variant_name() {
    let e: Ease = serde_json::from_str("\"OutCubic\"").unwrap();
    assert_eq!(e, Ease::OutCubic);
}
