use crate::foundation::core::{Rgba8, Transform, Vec2};

/// Interpolation contract for tweened value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with factor `t`. Eased factors may leave `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for i32 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        let v = f64::from(*a) + (f64::from(*b) - f64::from(*a)) * t;
        v.round().clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
    }
}

impl Lerp for u8 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        let a = f64::from(*a);
        let b = f64::from(*b);
        (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl Lerp for Rgba8 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            r: u8::lerp(&a.r, &b.r, t),
            g: u8::lerp(&a.g, &b.g, t),
            b: u8::lerp(&a.b, &b.b, t),
            a: u8::lerp(&a.a, &b.a, t),
        }
    }
}

impl Lerp for Transform {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            translate: <Vec2 as Lerp>::lerp(&a.translate, &b.translate, t),
            scale: <Vec2 as Lerp>::lerp(&a.scale, &b.scale, t),
            rotation: f64::lerp(&a.rotation, &b.rotation, t),
            pivot: <Vec2 as Lerp>::lerp(&a.pivot, &b.pivot, t),
        }
    }
}
