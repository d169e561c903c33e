//! In-memory collaborators.

use std::collections::BTreeSet;

use anyhow::anyhow;

use crate::foundation::core::Canvas;
use crate::foundation::error::VantageResult;
use crate::foundation::ids::{ChannelId, SoundHandle, TextureHandle};
use crate::platform::{AssetLoader, AudioMixer, CursorKind, Rasterizer, Window};
use crate::render::plan::{DrawOp, PolygonShape, TexturedQuad};

/// Fixed-size window without a display.
#[derive(Clone, Debug)]
pub struct HeadlessWindow {
    canvas: Canvas,
    cursor: CursorKind,
}

impl HeadlessWindow {
    /// Window of the given size.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            cursor: CursorKind::Arrow,
        }
    }

    /// Last cursor requested.
    pub fn cursor(&self) -> CursorKind {
        self.cursor
    }
}

impl Window for HeadlessWindow {
    fn size(&self) -> Canvas {
        self.canvas
    }

    fn set_cursor(&mut self, cursor: CursorKind) {
        self.cursor = cursor;
    }
}

/// Hands out sequential handles without reading anything.
#[derive(Clone, Debug, Default)]
pub struct NullAssets {
    next: u32,
    missing: BTreeSet<String>,
}

impl NullAssets {
    /// Loader that accepts every path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: make loads of `path` fail.
    pub fn with_missing(mut self, path: impl Into<String>) -> Self {
        self.missing.insert(path.into());
        self
    }

    fn issue(&mut self, path: &str) -> VantageResult<u32> {
        if self.missing.contains(path) {
            return Err(anyhow!("asset not found: {path}").into());
        }
        self.next += 1;
        Ok(self.next)
    }
}

impl AssetLoader for NullAssets {
    fn load_texture(&mut self, path: &str) -> VantageResult<TextureHandle> {
        self.issue(path).map(TextureHandle)
    }

    fn load_sound(&mut self, path: &str) -> VantageResult<SoundHandle> {
        self.issue(path).map(SoundHandle)
    }
}

/// Mixer that only counts what it was asked to play.
#[derive(Clone, Debug, Default)]
pub struct NullAudio {
    played: Vec<SoundHandle>,
    paused: bool,
}

impl NullAudio {
    /// Silent mixer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sounds started so far.
    pub fn played(&self) -> &[SoundHandle] {
        &self.played
    }

    /// Last pause state forwarded by the engine.
    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

impl AudioMixer for NullAudio {
    fn play(
        &mut self,
        sound: SoundHandle,
        _loops: i32,
        _pause_sensitive: bool,
    ) -> VantageResult<ChannelId> {
        self.played.push(sound);
        Ok(ChannelId(self.played.len() as i32 - 1))
    }

    fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }
}

/// Rasterizer that keeps every draw call.
#[derive(Clone, Debug, Default)]
pub struct RecordingRasterizer {
    /// Recorded draw calls in submission order.
    pub ops: Vec<DrawOp>,
}

impl RecordingRasterizer {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Textured quads recorded so far.
    pub fn quads(&self) -> impl Iterator<Item = &TexturedQuad> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Textured(q) => Some(q),
            DrawOp::Polygon(_) => None,
        })
    }

    /// Polygons recorded so far.
    pub fn polygons(&self) -> impl Iterator<Item = &PolygonShape> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Polygon(p) => Some(p),
            DrawOp::Textured(_) => None,
        })
    }
}

impl Rasterizer for RecordingRasterizer {
    fn draw_textured_rect(&mut self, quad: &TexturedQuad) -> VantageResult<()> {
        self.ops.push(DrawOp::Textured(quad.clone()));
        Ok(())
    }

    fn draw_polygon(&mut self, polygon: &PolygonShape) -> VantageResult<()> {
        self.ops.push(DrawOp::Polygon(polygon.clone()));
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/platform/headless.rs"]
mod tests;
