//! Declarative object definitions.
//!
//! Everything an object carries except callbacks can be described in JSON and turned into a
//! live object by [`crate::Engine::create_object`].

use std::collections::BTreeMap;

use crate::foundation::core::{Rgba8, Transform};
use crate::scene::hitbox::{HITBOX_DEBUG_COLOR, Hitbox};
use crate::scene::object::{Object, ObjectKind};
use crate::scene::surface::{BlendMode, ScaleMode, Surface, SurfaceKind};

/// Surface description.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SurfaceDef {
    /// Local transform before object scale.
    pub transform: Transform,
    /// Tint or fill color.
    pub color: Rgba8,
    /// Blend mode.
    pub blend: BlendMode,
    /// Scale mode.
    pub scale_mode: ScaleMode,
    /// Paint order among the object's surfaces.
    pub index: i32,
    /// Start hidden.
    pub hidden: bool,
    /// Variant data.
    pub kind: SurfaceKind,
}

impl SurfaceDef {
    /// Live surface.
    pub fn build(self) -> Surface {
        Surface::new(self.kind, self.transform)
            .with_color(self.color)
            .with_blend(self.blend)
            .with_scale_mode(self.scale_mode)
            .with_index(self.index)
            .with_hidden(self.hidden)
    }
}

/// Hitbox description.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HitboxDef {
    /// Local transform before object scale.
    pub transform: Transform,
    /// Collision layer.
    pub collision_index: i32,
    /// Debug outline color.
    pub color: Rgba8,
}

impl Default for HitboxDef {
    fn default() -> Self {
        Self {
            transform: Transform::default(),
            collision_index: 0,
            color: HITBOX_DEBUG_COLOR,
        }
    }
}

impl HitboxDef {
    /// Live hitbox without a callback.
    pub fn build(self) -> Hitbox {
        Hitbox::new(self.transform, self.collision_index).with_color(self.color)
    }
}

/// Fields shared by every object kind.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ObjectData {
    /// Object transform.
    pub transform: Transform,
    /// Opacity multiplied into every surface.
    pub opacity: u8,
    /// Interface space instead of world space.
    pub absolute: bool,
    /// Paint order.
    pub index: i32,
    /// Start hidden.
    pub hidden: bool,
    /// Surfaces by name.
    pub surfaces: BTreeMap<String, SurfaceDef>,
    /// Hitboxes by name.
    pub hitboxes: BTreeMap<String, HitboxDef>,
}

impl Default for ObjectData {
    fn default() -> Self {
        Self {
            transform: Transform::default(),
            opacity: u8::MAX,
            absolute: false,
            index: 0,
            hidden: false,
            surfaces: BTreeMap::new(),
            hitboxes: BTreeMap::new(),
        }
    }
}

impl ObjectData {
    /// Data at `transform` with nothing attached.
    pub fn at(transform: Transform) -> Self {
        Self {
            transform,
            ..Self::default()
        }
    }

    /// Builder: add a surface.
    pub fn with_surface(mut self, name: impl Into<String>, surface: SurfaceDef) -> Self {
        self.surfaces.insert(name.into(), surface);
        self
    }

    /// Builder: add a hitbox.
    pub fn with_hitbox(mut self, name: impl Into<String>, hitbox: HitboxDef) -> Self {
        self.hitboxes.insert(name.into(), hitbox);
        self
    }

    pub(crate) fn build(self, kind: ObjectKind) -> Object {
        let mut object = Object::new(self.transform)
            .with_kind(kind)
            .with_opacity(self.opacity)
            .with_absolute(self.absolute)
            .with_index(self.index)
            .with_hidden(self.hidden);
        for (name, surface) in self.surfaces {
            object.add_surface(name, surface.build());
        }
        for (name, hitbox) in self.hitboxes {
            object.add_hitbox(name, hitbox.build());
        }
        object
    }
}

fn enabled_by_default() -> bool {
    true
}

/// Button-specific data.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ButtonData {
    /// Accepts pointer input.
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    /// Label child, created and destroyed together with the button.
    #[serde(default)]
    pub label: Option<Box<ObjectData>>,
}

impl Default for ButtonData {
    fn default() -> Self {
        Self {
            enabled: true,
            label: None,
        }
    }
}

/// Checkbox-specific data.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CheckboxData {
    /// Accepts pointer input.
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    /// Initial state.
    #[serde(default)]
    pub checked: bool,
}

impl Default for CheckboxData {
    fn default() -> Self {
        Self {
            enabled: true,
            checked: false,
        }
    }
}

/// Kind tag plus kind-specific data.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type")]
pub enum KindData {
    /// Plain object.
    #[default]
    Basic,
    /// Clickable button.
    Button(ButtonData),
    /// Two-state toggle.
    Checkbox(CheckboxData),
}

impl KindData {
    /// Variant tag.
    pub fn kind(&self) -> ObjectKind {
        match self {
            Self::Basic => ObjectKind::Basic,
            Self::Button(_) => ObjectKind::Button,
            Self::Checkbox(_) => ObjectKind::Checkbox,
        }
    }
}

/// Complete object description.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ObjectDef {
    /// Shared fields.
    #[serde(flatten)]
    pub data: ObjectData,
    /// Kind-specific data; basic when omitted.
    #[serde(default)]
    pub kind: KindData,
}

impl ObjectDef {
    /// Basic object.
    pub fn basic(data: ObjectData) -> Self {
        Self {
            data,
            kind: KindData::Basic,
        }
    }

    /// Parse a definition from JSON.
    pub fn from_json_str(json: &str) -> crate::VantageResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/def.rs"]
mod tests;
