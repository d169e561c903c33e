//! Flip algebra.
//!
//! A flip is a mirror derived from the sign of a scale. Every flip decomposes into an
//! optional horizontal mirror followed by a half turn:
//!
//! | flip | mirror x | turn |
//! |------|----------|------|
//! | None | no       | 0°   |
//! | X    | yes      | 0°   |
//! | Y    | yes      | 180° |
//! | XY   | no       | 180° |
//!
//! Mirroring a rotation negates it when the flip mirrors, then adds the turn. That gives
//! `-r` for X, `180 - r` for Y and `r + 180` for XY. Positions mirror across the flip
//! center on the flipped axes.

use crate::foundation::core::Vec2;
use crate::geometry::rect::Rect;

/// Mirror state derived from scale signs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Flip {
    /// No mirroring.
    #[default]
    None,
    /// Horizontal mirror (negative x scale).
    X,
    /// Vertical mirror (negative y scale).
    Y,
    /// Both axes; equivalent to a half turn.
    XY,
}

impl Flip {
    /// Build from per-axis mirror bits.
    pub fn from_axes(x: bool, y: bool) -> Self {
        match (x, y) {
            (false, false) => Self::None,
            (true, false) => Self::X,
            (false, true) => Self::Y,
            (true, true) => Self::XY,
        }
    }

    /// Flip implied by negative scale components.
    pub fn from_scale(scale: Vec2) -> Self {
        Self::from_axes(scale.x < 0.0, scale.y < 0.0)
    }

    /// Mirrors on the x axis.
    pub fn flips_x(self) -> bool {
        matches!(self, Self::X | Self::XY)
    }

    /// Mirrors on the y axis.
    pub fn flips_y(self) -> bool {
        matches!(self, Self::Y | Self::XY)
    }

    /// Flips applied one after another. Mirrors on the same axis cancel.
    pub fn then(self, other: Flip) -> Self {
        Self::from_axes(
            self.flips_x() ^ other.flips_x(),
            self.flips_y() ^ other.flips_y(),
        )
    }

    /// Whether the flip reverses orientation (and so negates rotations).
    pub fn mirrors(self) -> bool {
        matches!(self, Self::X | Self::Y)
    }

    /// Half turn contributed by the flip itself.
    pub fn turn(self) -> f64 {
        if self.flips_y() { 180.0 } else { 0.0 }
    }

    /// The flip a rasterizer applies before rotating: only the horizontal mirror survives
    /// the decomposition, the rest is carried in the rotation.
    pub fn render_flip(self) -> Self {
        if self.mirrors() { Self::X } else { Self::None }
    }

    /// Rotation of positions under this flip: negated when mirroring, otherwise unchanged.
    pub fn flip_angle(self, deg: f64) -> f64 {
        if self.mirrors() { -deg } else { deg }
    }

    /// Displayed rotation under this flip: [`Flip::flip_angle`] plus [`Flip::turn`].
    pub fn flip_rotation(self, deg: f64) -> f64 {
        self.flip_angle(deg) + self.turn()
    }

    /// Mirror an offset across the flip center.
    pub fn flip_offset(self, v: Vec2) -> Vec2 {
        Vec2::new(
            if self.flips_x() { -v.x } else { v.x },
            if self.flips_y() { -v.y } else { v.y },
        )
    }

    /// Mirror a rect's center across `center`. Extent is unchanged.
    pub fn flip_rect(self, rect: Rect, center: Vec2) -> Rect {
        rect.with_center(center + self.flip_offset(rect.center() - center))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/flip.rs"]
mod tests;
