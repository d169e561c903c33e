//! Vantage is the core of a 2D scene engine.
//!
//! It owns everything between "the application asked for a change" and "the rasterizer is
//! told what to draw":
//!
//! - Objects carrying named surfaces and hitboxes, stored behind generation-checked handles
//! - A transform resolver composing flips, pivots and rotations of objects and their children
//! - A camera mapping world and interface space onto window pixels
//! - A timeline scheduler driving eased, looping, pause-aware animations
//! - A per-frame hitbox collision sweep and pointer hit-testing for buttons and checkboxes
//!
//! Windowing, asset decoding, audio and rasterization are collaborators behind the traits in
//! [`platform`]; [`platform::headless`] implements them in memory.
//!
//! ```
//! use vantage::{Engine, EngineOpts, Canvas, Ease, TimelineSpec, Vec2};
//! use vantage::{ObjectData, ObjectDef, Transform};
//!
//! let mut engine = Engine::headless(EngineOpts::default(), Canvas::new(640, 480)?)?;
//! let ship = engine.create_object(ObjectDef::basic(ObjectData::at(Transform::default())))?;
//! engine.tween_translate(ship, Vec2::new(4.0, 0.0), TimelineSpec::new(100.0, Ease::OutQuad))?;
//! for _ in 0..10 {
//!     engine.update(1.0 / 60.0);
//! }
//! assert_eq!(engine.translate(ship)?, Vec2::new(4.0, 0.0));
//! # Ok::<(), vantage::VantageError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod camera;
pub(crate) mod engine;
pub(crate) mod geometry;
pub(crate) mod render;
pub(crate) mod scene;

/// Collaborator traits and in-memory implementations.
pub mod platform;

pub use crate::foundation::core::{Canvas, Rgba8, Transform, Vec2};
pub use crate::foundation::error::{VantageError, VantageResult};
pub use crate::foundation::ids::{ChannelId, ObjectId, SoundHandle, TextureHandle, TimelineId};
pub use crate::foundation::math::{normalize_degrees, rotate_point, snap_degrees};

pub use crate::geometry::flip::Flip;
pub use crate::geometry::rect::{Face, Rect};
pub use crate::geometry::resolve::{
    AXIS_SNAP_DEG, Placement, resolve, resolve_rect, resolve_rotation, resolve_self,
};

pub use crate::camera::viewport::{Camera, Padding};
pub use crate::render::compose::submit;
pub use crate::render::pixel::{
    level_point_to_pixel, level_to_pixel, pixel_point_to_level, pixel_to_level, screen_rotation,
};
pub use crate::render::plan::{DrawList, DrawOp, PolygonPoints, PolygonShape, TexturedQuad};

pub use crate::animation::ease::Ease;
pub use crate::animation::lerp::Lerp;
pub use crate::animation::scheduler::{CompletedFn, UpdateFn};
pub use crate::animation::timeline::{Loops, MIN_DURATION_MS, Tick, TimelineSpec, TimelineState};

pub use crate::scene::def::{
    ButtonData, CheckboxData, HitboxDef, KindData, ObjectData, ObjectDef, SurfaceDef,
};
pub use crate::scene::hitbox::{Collision, CollisionFn, HITBOX_DEBUG_COLOR, Hitbox};
pub use crate::scene::object::{
    BUTTON_DISABLED, BUTTON_HOVER, BUTTON_IDLE, CHECKBOX_CHECKED, CHECKBOX_UNCHECKED,
    CLICK_HITBOX, ClickFn, Object, ObjectKind, POINTER_LAYER,
};
pub use crate::scene::surface::{
    BlendMode, BorderShape, BorderSurface, ScaleMode, SpriteSurface, Surface, SurfaceKind,
    TextureSurface,
};

pub use crate::engine::context::Engine;
pub use crate::engine::opts::EngineOpts;
pub use crate::engine::registry::{Registry, SoundRegistry, TextureRegistry};

pub use crate::platform::CursorKind;
