use smallvec::SmallVec;

use crate::foundation::core::{Rgba8, Vec2};
use crate::foundation::ids::TextureHandle;
use crate::geometry::flip::Flip;
use crate::geometry::rect::Rect;
use crate::scene::surface::{BlendMode, ScaleMode};

/// Point list of a polygon; quads stay inline.
pub type PolygonPoints = SmallVec<[Vec2; 4]>;

/// Textured quad in pixel space.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TexturedQuad {
    /// Texture to sample.
    pub texture: TextureHandle,
    /// Center-based destination rect, unrotated.
    pub dest: Rect,
    /// Center-based source crop in texture pixels; `None` samples the whole texture.
    pub src: Option<Rect>,
    /// Clockwise rotation in degrees around `dest`'s center, applied after `flip`.
    pub rotation: f64,
    /// Mirror applied before `rotation`.
    pub flip: Flip,
    /// Color modulation, alpha already multiplied by object opacity.
    pub tint: Rgba8,
    /// Blend mode.
    pub blend: BlendMode,
    /// Sampling filter.
    pub scale_mode: ScaleMode,
}

/// Closed polygon in pixel space.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PolygonShape {
    /// Vertices in drawing order.
    pub points: PolygonPoints,
    /// Fill or stroke color.
    pub color: Rgba8,
    /// Fill instead of stroking.
    pub filled: bool,
    /// Stroke width in pixels; ignored when `filled`.
    pub thickness: f64,
}

/// One draw call.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum DrawOp {
    /// Texture or sprite surface.
    Textured(TexturedQuad),
    /// Color fill, border or debug outline.
    Polygon(PolygonShape),
}

/// Ordered draw calls for one frame.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct DrawList {
    /// Draw calls, back to front.
    pub ops: Vec<DrawOp>,
}

impl DrawList {
    /// Number of draw calls.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// No draw calls.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub(crate) fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }
}
