use std::collections::BTreeMap;

use crate::engine::context::Engine;
use crate::foundation::core::{Transform, Vec2};
use crate::foundation::ids::ObjectId;
use crate::geometry::rect::Rect;
use crate::geometry::resolve::{AXIS_SNAP_DEG, Placement, resolve};
use crate::scene::hitbox::Hitbox;
use crate::scene::surface::Surface;

/// Surface names a button switches between.
pub const BUTTON_IDLE: &str = "idle";
/// Shown while the pointer is over an enabled button.
pub const BUTTON_HOVER: &str = "hover";
/// Shown while a button is disabled (falls back to idle when absent).
pub const BUTTON_DISABLED: &str = "disabled";
/// Shown while a checkbox is unchecked.
pub const CHECKBOX_UNCHECKED: &str = "unchecked";
/// Shown while a checkbox is checked.
pub const CHECKBOX_CHECKED: &str = "checked";
/// Hitbox used for pointer hit-testing of interactive objects.
pub const CLICK_HITBOX: &str = "click";
/// Collision layer of automatically created click hitboxes.
pub const POINTER_LAYER: i32 = i32::MIN;

/// Click callback of buttons and checkboxes.
pub type ClickFn = Box<dyn FnMut(&mut Engine, ObjectId)>;

/// Object variant tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ObjectKind {
    /// Surfaces and hitboxes only.
    #[default]
    Basic,
    /// Clickable with idle/hover/disabled surfaces and an optional label child.
    Button,
    /// Clickable two-state toggle.
    Checkbox,
}

impl ObjectKind {
    /// Responds to pointer input.
    pub fn is_interactive(self) -> bool {
        matches!(self, Self::Button | Self::Checkbox)
    }
}

/// Pointer state of an interactive object.
#[derive(Default)]
pub(crate) struct Interaction {
    pub(crate) enabled: bool,
    pub(crate) hovered: bool,
    pub(crate) pressed: bool,
    pub(crate) on_click: Option<ClickFn>,
}

/// A scene object: a transform plus name-keyed surfaces and hitboxes.
///
/// Child transforms are stored twice: the authored default and the effective value
/// (`default` scaled by `abs(object scale)`). Changing the object's scale recomputes every
/// effective value from its default, so repeated rescaling never accumulates error.
pub struct Object {
    kind: ObjectKind,
    transform: Transform,
    opacity: u8,
    absolute: bool,
    index: i32,
    hidden: bool,
    surfaces: BTreeMap<String, Surface>,
    hitboxes: BTreeMap<String, Hitbox>,
    max_radius: f64,
    hitbox_snap_deg: f64,
    pub(crate) interaction: Option<Interaction>,
    pub(crate) checked: Option<bool>,
    pub(crate) label: Option<ObjectId>,
}

impl std::fmt::Debug for Object {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Object")
            .field("kind", &self.kind)
            .field("transform", &self.transform)
            .field("opacity", &self.opacity)
            .field("absolute", &self.absolute)
            .field("index", &self.index)
            .field("hidden", &self.hidden)
            .field("surfaces", &self.surfaces.keys().collect::<Vec<_>>())
            .field("hitboxes", &self.hitboxes.keys().collect::<Vec<_>>())
            .field("max_radius", &self.max_radius)
            .field("hitbox_snap_deg", &self.hitbox_snap_deg)
            .finish()
    }
}

impl Object {
    /// Empty basic object at `transform`, fully opaque.
    pub fn new(transform: Transform) -> Self {
        Self {
            kind: ObjectKind::Basic,
            transform,
            opacity: u8::MAX,
            absolute: false,
            index: 0,
            hidden: false,
            surfaces: BTreeMap::new(),
            hitboxes: BTreeMap::new(),
            max_radius: 0.0,
            hitbox_snap_deg: AXIS_SNAP_DEG,
            interaction: None,
            checked: None,
            label: None,
        }
    }

    pub(crate) fn with_kind(mut self, kind: ObjectKind) -> Self {
        self.kind = kind;
        self
    }

    /// Builder: add a surface.
    pub fn with_surface(mut self, name: impl Into<String>, surface: Surface) -> Self {
        self.add_surface(name, surface);
        self
    }

    /// Builder: add a hitbox.
    pub fn with_hitbox(mut self, name: impl Into<String>, hitbox: Hitbox) -> Self {
        self.add_hitbox(name, hitbox);
        self
    }

    /// Builder: opacity.
    pub fn with_opacity(mut self, opacity: u8) -> Self {
        self.opacity = opacity;
        self
    }

    /// Builder: paint order.
    pub fn with_index(mut self, index: i32) -> Self {
        self.index = index;
        self
    }

    /// Builder: place in interface space.
    pub fn with_absolute(mut self, absolute: bool) -> Self {
        self.absolute = absolute;
        self
    }

    /// Builder: start hidden.
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Variant tag.
    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    /// Object transform in world (or interface) space.
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Opacity multiplied into every surface's alpha.
    pub fn opacity(&self) -> u8 {
        self.opacity
    }

    /// Placed in interface space rather than world space.
    pub fn absolute(&self) -> bool {
        self.absolute
    }

    /// Paint order among objects of the same space.
    pub fn index(&self) -> i32 {
        self.index
    }

    /// Skipped by rendering, collision and input.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Conservative bounding-circle radius around `transform().translate`.
    pub fn max_radius(&self) -> f64 {
        self.max_radius
    }

    /// Surfaces by name.
    pub fn surfaces(&self) -> &BTreeMap<String, Surface> {
        &self.surfaces
    }

    /// Surface called `name`.
    pub fn surface(&self, name: &str) -> Option<&Surface> {
        self.surfaces.get(name)
    }

    /// Hitboxes by name.
    pub fn hitboxes(&self) -> &BTreeMap<String, Hitbox> {
        &self.hitboxes
    }

    /// Hitbox called `name`.
    pub fn hitbox(&self, name: &str) -> Option<&Hitbox> {
        self.hitboxes.get(name)
    }

    /// Owned label child of a button.
    pub fn label(&self) -> Option<ObjectId> {
        self.label
    }

    /// Accepts pointer input. Always `false` for basic objects.
    pub fn is_enabled(&self) -> bool {
        self.interaction.as_ref().is_some_and(|i| i.enabled)
    }

    /// Pointer is over this object.
    pub fn is_hovered(&self) -> bool {
        self.interaction.as_ref().is_some_and(|i| i.hovered)
    }

    /// Checkbox state; `None` for other kinds.
    pub fn is_checked(&self) -> Option<bool> {
        self.checked
    }

    /// Surfaces in paint order: by `index`, then by name.
    pub fn paint_surfaces(&self) -> Vec<(&str, &Surface)> {
        let mut out: Vec<(&str, &Surface)> = self
            .surfaces
            .iter()
            .map(|(name, s)| (name.as_str(), s))
            .collect();
        out.sort_by_key(|(_, s)| s.index);
        out
    }

    /// World placement of surface `name`.
    pub fn surface_placement(&self, name: &str, snap_deg: f64) -> Option<Placement> {
        self.surfaces
            .get(name)
            .map(|s| resolve(&self.transform, &s.transform, snap_deg))
    }

    /// World placement of hitbox `name`.
    pub fn hitbox_placement(&self, name: &str, snap_deg: f64) -> Option<Placement> {
        self.hitboxes
            .get(name)
            .map(|h| resolve(&self.transform, &h.transform, snap_deg))
    }

    /// Axis-aligned world rect of hitbox `name`.
    pub fn hitbox_world_rect(&self, name: &str, snap_deg: f64) -> Option<Rect> {
        self.hitbox_placement(name, snap_deg).map(|p| p.rect)
    }

    /// Recompute the bounding radius from every child's rotated corners.
    ///
    /// Hitboxes also count with the snapped rect that collision and hit-testing use, which
    /// can sit elsewhere when the pivot is off center.
    pub fn refresh_max_radius(&mut self) -> f64 {
        let origin = self.transform.translate;
        let mut corners: Vec<Vec2> = Vec::new();
        for surface in self.surfaces.values() {
            corners.extend(resolve(&self.transform, &surface.transform, 0.0).oriented_corners());
        }
        for hitbox in self.hitboxes.values() {
            corners.extend(resolve(&self.transform, &hitbox.transform, 0.0).oriented_corners());
            let snapped = resolve(&self.transform, &hitbox.transform, self.hitbox_snap_deg);
            corners.extend(snapped.rect.corners());
        }
        let radius = corners
            .iter()
            .map(|corner| (*corner - origin).hypot())
            .fold(0.0, f64::max);
        self.max_radius = radius;
        radius
    }

    /// Snap step the engine resolves hitboxes with.
    pub fn hitbox_snap_deg(&self) -> f64 {
        self.hitbox_snap_deg
    }

    pub(crate) fn set_hitbox_snap_deg(&mut self, snap_deg: f64) {
        self.hitbox_snap_deg = snap_deg;
        self.refresh_max_radius();
    }

    pub(crate) fn set_translate(&mut self, translate: Vec2) {
        self.transform.translate = translate;
        self.refresh_max_radius();
    }

    pub(crate) fn set_scale(&mut self, scale: Vec2) {
        self.transform.scale = scale;
        for s in self.surfaces.values_mut() {
            s.rescale(scale);
        }
        for h in self.hitboxes.values_mut() {
            h.rescale(scale);
        }
        self.refresh_max_radius();
    }

    pub(crate) fn set_rotation(&mut self, rotation: f64) {
        self.transform.rotation = rotation;
        self.refresh_max_radius();
    }

    pub(crate) fn set_pivot(&mut self, pivot: Vec2) {
        self.transform.pivot = pivot;
        self.refresh_max_radius();
    }

    pub(crate) fn set_opacity(&mut self, opacity: u8) {
        self.opacity = opacity;
    }

    pub(crate) fn set_index(&mut self, index: i32) {
        self.index = index;
    }

    pub(crate) fn set_absolute(&mut self, absolute: bool) {
        self.absolute = absolute;
    }

    pub(crate) fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Insert or replace a surface; its transform becomes the new default snapshot.
    pub(crate) fn add_surface(&mut self, name: impl Into<String>, mut surface: Surface) {
        surface.default = surface.transform;
        surface.rescale(self.transform.scale);
        self.surfaces.insert(name.into(), surface);
        self.refresh_max_radius();
    }

    pub(crate) fn remove_surface(&mut self, name: &str) -> Option<Surface> {
        let removed = self.surfaces.remove(name);
        if removed.is_some() {
            self.refresh_max_radius();
        }
        removed
    }

    pub(crate) fn surface_mut(&mut self, name: &str) -> Option<&mut Surface> {
        self.surfaces.get_mut(name)
    }

    /// Insert or replace a hitbox; its transform becomes the new default snapshot.
    pub(crate) fn add_hitbox(&mut self, name: impl Into<String>, mut hitbox: Hitbox) {
        hitbox.default = hitbox.transform;
        hitbox.rescale(self.transform.scale);
        self.hitboxes.insert(name.into(), hitbox);
        self.refresh_max_radius();
    }

    pub(crate) fn remove_hitbox(&mut self, name: &str) -> Option<Hitbox> {
        let removed = self.hitboxes.remove(name);
        if removed.is_some() {
            self.refresh_max_radius();
        }
        removed
    }

    pub(crate) fn hitbox_mut(&mut self, name: &str) -> Option<&mut Hitbox> {
        self.hitboxes.get_mut(name)
    }

    /// Edit the default transform of surface `name` and re-derive its effective one.
    pub(crate) fn edit_surface_transform(
        &mut self,
        name: &str,
        edit: impl FnOnce(&mut Transform),
    ) -> bool {
        let scale = self.transform.scale;
        let Some(surface) = self.surfaces.get_mut(name) else {
            return false;
        };
        edit(&mut surface.default);
        surface.rescale(scale);
        self.refresh_max_radius();
        true
    }

    /// Edit the default transform of hitbox `name` and re-derive its effective one.
    pub(crate) fn edit_hitbox_transform(
        &mut self,
        name: &str,
        edit: impl FnOnce(&mut Transform),
    ) -> bool {
        let scale = self.transform.scale;
        let Some(hitbox) = self.hitboxes.get_mut(name) else {
            return false;
        };
        edit(&mut hitbox.default);
        hitbox.rescale(scale);
        self.refresh_max_radius();
        true
    }

    pub(crate) fn advance_sprites(&mut self, dt_ms: f64, globally_paused: bool) {
        for surface in self.surfaces.values_mut() {
            if let Some(sprite) = surface.sprite_mut() {
                sprite.advance(dt_ms, globally_paused);
            }
        }
    }

    /// Show exactly the surface matching the current widget state.
    pub(crate) fn sync_widget_surfaces(&mut self) {
        let (candidates, shown): (&[&str], &str) = match self.kind {
            ObjectKind::Basic => return,
            ObjectKind::Button => {
                let enabled = self.is_enabled();
                let shown = if !enabled && self.surfaces.contains_key(BUTTON_DISABLED) {
                    BUTTON_DISABLED
                } else if enabled && self.is_hovered() {
                    BUTTON_HOVER
                } else {
                    BUTTON_IDLE
                };
                (&[BUTTON_IDLE, BUTTON_HOVER, BUTTON_DISABLED], shown)
            }
            ObjectKind::Checkbox => {
                let shown = if self.checked.unwrap_or(false) {
                    CHECKBOX_CHECKED
                } else {
                    CHECKBOX_UNCHECKED
                };
                (&[CHECKBOX_UNCHECKED, CHECKBOX_CHECKED], shown)
            }
        };
        for name in candidates {
            if let Some(surface) = self.surfaces.get_mut(*name) {
                surface.hidden = *name != shown;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/object.rs"]
mod tests;
