//! Collaborator seams.
//!
//! The engine core never touches a window system, a file system, an audio device or a GPU
//! directly. It talks to them through the traits below; [`headless`] provides in-memory
//! implementations for tests and tooling.

use crate::foundation::core::Canvas;
use crate::foundation::error::VantageResult;
use crate::foundation::ids::{ChannelId, SoundHandle, TextureHandle};
use crate::render::plan::{PolygonShape, TexturedQuad};

pub mod headless;

/// Mouse cursor shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum CursorKind {
    /// Default arrow.
    #[default]
    Arrow,
    /// Hand shown over clickable objects.
    Pointer,
}

/// Host window.
pub trait Window {
    /// Current drawable size in pixels.
    fn size(&self) -> Canvas;

    /// Change the cursor shape.
    fn set_cursor(&mut self, cursor: CursorKind);
}

/// Loads assets from the host and hands out opaque handles.
pub trait AssetLoader {
    /// Load the texture at `path`.
    fn load_texture(&mut self, path: &str) -> VantageResult<TextureHandle>;

    /// Load the sound at `path`.
    fn load_sound(&mut self, path: &str) -> VantageResult<SoundHandle>;
}

/// Plays loaded sounds.
pub trait AudioMixer {
    /// Start `sound`; `loops` extra repetitions, `-1` forever.
    fn play(
        &mut self,
        sound: SoundHandle,
        loops: i32,
        pause_sensitive: bool,
    ) -> VantageResult<ChannelId>;

    /// Follow the engine's global pause for pause-sensitive channels.
    fn set_paused(&mut self, _paused: bool) {}
}

/// Executes draw calls.
pub trait Rasterizer {
    /// Draw a textured quad.
    fn draw_textured_rect(&mut self, quad: &TexturedQuad) -> VantageResult<()>;

    /// Draw a filled or stroked polygon.
    fn draw_polygon(&mut self, polygon: &PolygonShape) -> VantageResult<()>;
}
