use crate::engine::context::Engine;
use crate::foundation::core::{Rgba8, Transform, Vec2};
use crate::foundation::ids::ObjectId;
use crate::geometry::rect::Face;

/// One detected overlap, reported to the hitbox that owns the callback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Collision {
    /// Object whose hitbox holds the callback.
    pub object: ObjectId,
    /// Name of that hitbox.
    pub hitbox: String,
    /// Object that was hit.
    pub other: ObjectId,
    /// Name of the hitbox that was hit.
    pub other_hitbox: String,
    /// Side of `hitbox` that `other_hitbox` penetrated.
    pub face: Face,
}

/// Collision callback.
pub type CollisionFn = Box<dyn FnMut(&mut Engine, &Collision)>;

/// Default debug outline color.
pub const HITBOX_DEBUG_COLOR: Rgba8 = Rgba8::rgba(255, 0, 0, 160);

/// Named collision rect owned by an object.
pub struct Hitbox {
    pub(crate) transform: Transform,
    pub(crate) default: Transform,
    pub(crate) color: Rgba8,
    pub(crate) collision_index: i32,
    pub(crate) on_collide: Option<CollisionFn>,
}

impl std::fmt::Debug for Hitbox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hitbox")
            .field("transform", &self.transform)
            .field("default", &self.default)
            .field("color", &self.color)
            .field("collision_index", &self.collision_index)
            .field("has_callback", &self.on_collide.is_some())
            .finish()
    }
}

impl Hitbox {
    /// Hitbox at local `transform` in collision layer `collision_index`.
    pub fn new(transform: Transform, collision_index: i32) -> Self {
        Self {
            transform,
            default: transform,
            color: HITBOX_DEBUG_COLOR,
            collision_index,
            on_collide: None,
        }
    }

    /// Builder: callback fired for every overlap in the same layer.
    pub fn on_collide(mut self, f: impl FnMut(&mut Engine, &Collision) + 'static) -> Self {
        self.on_collide = Some(Box::new(f));
        self
    }

    /// Builder: debug outline color.
    pub fn with_color(mut self, color: Rgba8) -> Self {
        self.color = color;
        self
    }

    /// Effective local transform (owner scale applied).
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Authored local transform.
    pub fn default_transform(&self) -> &Transform {
        &self.default
    }

    /// Debug outline color.
    pub fn color(&self) -> Rgba8 {
        self.color
    }

    /// Layer; only hitboxes with equal indices collide.
    pub fn collision_index(&self) -> i32 {
        self.collision_index
    }

    /// Whether a collision callback is installed.
    pub fn has_callback(&self) -> bool {
        self.on_collide.is_some()
    }

    pub(crate) fn rescale(&mut self, owner_scale: Vec2) {
        self.transform = self.default.scaled_by(owner_scale);
    }
}
