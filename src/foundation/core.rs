use crate::foundation::error::{VantageError, VantageResult};
use crate::foundation::math::mul_components;

pub use kurbo::Vec2;

/// Window size in physical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a validated canvas with non-zero extents.
    pub fn new(width: u32, height: u32) -> VantageResult<Self> {
        if width == 0 || height == 0 {
            return Err(VantageError::validation("Canvas width/height must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Height divided by width.
    pub fn aspect(self) -> f64 {
        if self.width == 0 {
            return 0.0;
        }
        f64::from(self.height) / f64::from(self.width)
    }
}

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Default for Rgba8 {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Rgba8 {
    /// Opaque white.
    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::rgba(0, 0, 0, 255);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Build a color from straight channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Return the same color with alpha scaled by `opacity / 255`.
    pub fn with_opacity(self, opacity: u8) -> Self {
        let a = (u16::from(self.a) * u16::from(opacity) + 127) / 255;
        Self { a: a as u8, ..self }
    }
}

/// Placement of an object, surface or hitbox.
///
/// `translate` is the center of the placed rect, `scale` its full extent (a negative
/// component mirrors on that axis), `rotation` is in degrees and `pivot` is an offset from
/// `translate` around which rotation and flips are anchored.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Transform {
    /// Center position.
    pub translate: Vec2,
    /// Full extent; negative components flip.
    pub scale: Vec2,
    /// Rotation in degrees, unrestricted range.
    pub rotation: f64,
    /// Rotation/flip anchor as an offset from `translate`.
    pub pivot: Vec2,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translate: Vec2::ZERO,
            scale: Vec2::new(1.0, 1.0),
            rotation: 0.0,
            pivot: Vec2::ZERO,
        }
    }
}

impl Transform {
    /// Transform at `translate` with extent `scale` and no rotation.
    pub fn at(translate: Vec2, scale: Vec2) -> Self {
        Self {
            translate,
            scale,
            ..Self::default()
        }
    }

    /// Return `true` when either scale component is zero.
    pub fn is_degenerate(&self) -> bool {
        self.scale.x == 0.0 || self.scale.y == 0.0
    }

    /// Absolute extent, ignoring flips.
    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.scale.x.abs(), self.scale.y.abs())
    }

    /// Scale this (child) transform by a parent's absolute scale.
    ///
    /// Rotation is left untouched; translate, scale and pivot are multiplied component-wise.
    pub fn scaled_by(&self, factor: Vec2) -> Self {
        let factor = Vec2::new(factor.x.abs(), factor.y.abs());
        Self {
            translate: mul_components(self.translate, factor),
            scale: mul_components(self.scale, factor),
            rotation: self.rotation,
            pivot: mul_components(self.pivot, factor),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
