use crate::foundation::core::{Rgba8, Transform, Vec2};
use crate::geometry::rect::Rect;

/// How a surface's pixels combine with what is already drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum BlendMode {
    /// Alpha blending.
    #[default]
    Blend,
    /// Additive.
    Add,
    /// Multiplicative.
    Multiply,
    /// Overwrite destination.
    None,
}

/// Texture sampling when a surface is scaled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ScaleMode {
    /// Bilinear filtering.
    #[default]
    Linear,
    /// Nearest-neighbour sampling.
    Nearest,
}

/// Named image, optionally cropped.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextureSurface {
    /// Texture name in the registry.
    pub texture: String,
    /// Center-based crop in texture pixels; `None` draws the whole texture.
    #[serde(default)]
    pub crop: Option<Rect>,
}

/// Frame-animated strip of equally sized frames laid out left to right.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpriteSurface {
    /// Texture name in the registry.
    pub texture: String,
    /// Top-left of the first frame in texture pixels.
    pub origin: Vec2,
    /// Size of one frame in texture pixels.
    pub frame_size: Vec2,
    /// Number of frames in the strip.
    pub frames: u32,
    /// Horizontal gap between frames in texture pixels.
    pub spacing: f64,
    /// Time each frame is shown; `<= 0` freezes the sprite.
    pub delay_ms: f64,
    /// Wrap to the first frame after the last one.
    pub looping: bool,
    /// Freeze while the engine is globally paused.
    pub pause_sensitive: bool,
    #[serde(skip)]
    frame: u32,
    #[serde(skip)]
    elapsed_ms: f64,
    #[serde(skip, default = "default_playing")]
    playing: bool,
}

fn default_playing() -> bool {
    true
}

impl Default for SpriteSurface {
    fn default() -> Self {
        Self {
            texture: String::new(),
            origin: Vec2::ZERO,
            frame_size: Vec2::ZERO,
            frames: 0,
            spacing: 0.0,
            delay_ms: 0.0,
            looping: true,
            pause_sensitive: true,
            frame: 0,
            elapsed_ms: 0.0,
            playing: true,
        }
    }
}

impl SpriteSurface {
    /// Strip of `frames` frames of `frame_size`, each shown for `delay_ms`.
    pub fn new(texture: impl Into<String>, frame_size: Vec2, frames: u32, delay_ms: f64) -> Self {
        Self {
            texture: texture.into(),
            frame_size,
            frames,
            delay_ms,
            ..Self::default()
        }
    }

    /// Frame currently shown.
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Whether frames are still advancing.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Jump to `frame` (clamped to the last frame) and restart its delay.
    pub fn set_frame(&mut self, frame: u32) {
        self.frame = frame.min(self.frames.saturating_sub(1));
        self.elapsed_ms = 0.0;
    }

    /// Restart from the first frame.
    pub fn restart(&mut self) {
        self.frame = 0;
        self.elapsed_ms = 0.0;
        self.playing = true;
    }

    /// Stop or resume frame advancement.
    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    /// Frame index points inside the strip.
    pub fn has_valid_frame(&self) -> bool {
        self.frames > 0
            && self.frame < self.frames
            && self.frame_size.x > 0.0
            && self.frame_size.y > 0.0
    }

    /// Center-based crop of the current frame.
    pub fn frame_crop(&self) -> Rect {
        let step = self.frame_size.x + self.spacing;
        Rect::new(
            self.origin.x + f64::from(self.frame) * step + self.frame_size.x / 2.0,
            self.origin.y + self.frame_size.y / 2.0,
            self.frame_size.x,
            self.frame_size.y,
        )
    }

    /// Advance by wall time.
    pub fn advance(&mut self, dt_ms: f64, globally_paused: bool) {
        if !self.playing
            || self.frames == 0
            || self.delay_ms <= 0.0
            || (self.pause_sensitive && globally_paused)
        {
            return;
        }
        self.elapsed_ms += dt_ms.max(0.0);
        while self.elapsed_ms >= self.delay_ms {
            self.elapsed_ms -= self.delay_ms;
            if self.frame + 1 < self.frames {
                self.frame += 1;
            } else if self.looping {
                self.frame = 0;
            } else {
                self.playing = false;
                self.elapsed_ms = 0.0;
                break;
            }
        }
    }
}

/// Outline shape of a border surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BorderShape {
    /// Rectangle outline.
    #[default]
    Rect,
    /// Ellipse inscribed in the rect.
    Ellipse,
}

/// Stroked or filled outline.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BorderSurface {
    /// Stroke thickness in pixels.
    pub thickness: f64,
    /// Fill the shape instead of stroking it.
    pub filled: bool,
    /// Outline shape.
    pub shape: BorderShape,
}

impl Default for BorderSurface {
    fn default() -> Self {
        Self {
            thickness: 1.0,
            filled: false,
            shape: BorderShape::Rect,
        }
    }
}

/// Surface variants.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type")]
pub enum SurfaceKind {
    /// Named image.
    Texture(TextureSurface),
    /// Frame-animated image.
    Sprite(SpriteSurface),
    /// Flat fill of the surface color.
    Color,
    /// Outline.
    Border(BorderSurface),
}

impl Default for SurfaceKind {
    fn default() -> Self {
        Self::Color
    }
}

/// Drawable owned by an object.
///
/// `default` is the local transform as authored; `transform` is the effective transform
/// after the owner's scale is applied. Only `default` is ever edited directly.
#[derive(Clone, Debug, PartialEq)]
pub struct Surface {
    pub(crate) kind: SurfaceKind,
    pub(crate) transform: Transform,
    pub(crate) default: Transform,
    pub(crate) color: Rgba8,
    pub(crate) blend: BlendMode,
    pub(crate) scale_mode: ScaleMode,
    pub(crate) index: i32,
    pub(crate) hidden: bool,
}

impl Surface {
    /// Surface of `kind` at local `transform`, white, unhidden.
    pub fn new(kind: SurfaceKind, transform: Transform) -> Self {
        Self {
            kind,
            transform,
            default: transform,
            color: Rgba8::WHITE,
            blend: BlendMode::default(),
            scale_mode: ScaleMode::default(),
            index: 0,
            hidden: false,
        }
    }

    /// Whole-texture surface.
    pub fn texture(texture: impl Into<String>, transform: Transform) -> Self {
        Self::new(
            SurfaceKind::Texture(TextureSurface {
                texture: texture.into(),
                crop: None,
            }),
            transform,
        )
    }

    /// Flat color fill.
    pub fn color(color: Rgba8, transform: Transform) -> Self {
        Self::new(SurfaceKind::Color, transform).with_color(color)
    }

    /// Builder: tint / fill color.
    pub fn with_color(mut self, color: Rgba8) -> Self {
        self.color = color;
        self
    }

    /// Builder: paint order among the owner's surfaces.
    pub fn with_index(mut self, index: i32) -> Self {
        self.index = index;
        self
    }

    /// Builder: blend mode.
    pub fn with_blend(mut self, blend: BlendMode) -> Self {
        self.blend = blend;
        self
    }

    /// Builder: scale mode.
    pub fn with_scale_mode(mut self, scale_mode: ScaleMode) -> Self {
        self.scale_mode = scale_mode;
        self
    }

    /// Builder: start hidden.
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Variant data.
    pub fn kind(&self) -> &SurfaceKind {
        &self.kind
    }

    /// Effective local transform (owner scale applied).
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Authored local transform.
    pub fn default_transform(&self) -> &Transform {
        &self.default
    }

    /// Tint or fill color.
    pub fn color_value(&self) -> Rgba8 {
        self.color
    }

    /// Blend mode.
    pub fn blend(&self) -> BlendMode {
        self.blend
    }

    /// Scale mode.
    pub fn scale_mode(&self) -> ScaleMode {
        self.scale_mode
    }

    /// Paint order among the owner's surfaces.
    pub fn index(&self) -> i32 {
        self.index
    }

    /// Explicitly hidden.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Texture name, or `None` for untextured variants.
    pub fn texture_name(&self) -> Option<&str> {
        match &self.kind {
            SurfaceKind::Texture(t) => Some(&t.texture),
            SurfaceKind::Sprite(s) => Some(&s.texture),
            SurfaceKind::Color | SurfaceKind::Border(_) => None,
        }
    }

    /// Source crop in texture pixels.
    pub fn source_crop(&self) -> Option<Rect> {
        match &self.kind {
            SurfaceKind::Texture(t) => t.crop,
            SurfaceKind::Sprite(s) => Some(s.frame_crop()),
            SurfaceKind::Color | SurfaceKind::Border(_) => None,
        }
    }

    /// Not hidden, not transparent, not degenerate, and (for sprites) on a valid frame.
    pub fn is_visible(&self) -> bool {
        if self.hidden || self.color.a == 0 || self.transform.is_degenerate() {
            return false;
        }
        match &self.kind {
            SurfaceKind::Sprite(s) => s.has_valid_frame(),
            SurfaceKind::Texture(t) => !t.texture.is_empty(),
            SurfaceKind::Color | SurfaceKind::Border(_) => true,
        }
    }

    pub(crate) fn rescale(&mut self, owner_scale: Vec2) {
        self.transform = self.default.scaled_by(owner_scale);
    }

    pub(crate) fn sprite_mut(&mut self) -> Option<&mut SpriteSurface> {
        match &mut self.kind {
            SurfaceKind::Sprite(s) => Some(s),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/surface.rs"]
mod tests;
