//! Pointer hit-testing for buttons and checkboxes.
//!
//! Candidates are tested topmost first. The bounding radius rejects far objects cheaply;
//! the hitbox world rects (same resolver and snap as collision) decide the hit, so the
//! clickable area matches what is drawn.

use crate::engine::context::Engine;
use crate::foundation::core::Vec2;
use crate::foundation::error::{VantageError, VantageResult};
use crate::foundation::ids::ObjectId;
use crate::platform::CursorKind;
use crate::render::compose::paint_order;
use crate::render::pixel::pixel_point_to_level;
use crate::scene::object::{Object, ObjectKind};

impl Engine {
    /// Last pointer position in window pixels.
    pub fn pointer_position(&self) -> Vec2 {
        self.pointer.position
    }

    /// Interactive object under the pointer.
    pub fn hovered(&self) -> Option<ObjectId> {
        self.pointer.hovered
    }

    /// Topmost enabled interactive object under `pixel`.
    pub fn pick(&self, pixel: Vec2) -> Option<ObjectId> {
        let snap = self.opts.hitbox_snap_deg;
        paint_order(&self.objects).into_iter().rev().find(|id| {
            self.objects
                .get(*id)
                .is_some_and(|o| self.hits(o, pixel, snap))
        })
    }

    fn hits(&self, object: &Object, pixel: Vec2, snap_deg: f64) -> bool {
        if !object.kind().is_interactive() || !object.is_enabled() || object.is_hidden() {
            return false;
        }
        let point = pixel_point_to_level(&self.camera, pixel, object.absolute());
        if (point - object.transform().translate).hypot() > object.max_radius() {
            return false;
        }
        object
            .hitboxes()
            .keys()
            .filter_map(|name| object.hitbox_world_rect(name, snap_deg))
            .any(|rect| rect.contains(point))
    }

    /// Pointer moved to `pixel`; updates hover state and the cursor.
    pub fn pointer_moved(&mut self, pixel: Vec2) {
        self.pointer.position = pixel;
        self.refresh_hover();
    }

    pub(crate) fn refresh_hover(&mut self) {
        let hit = self.pick(self.pointer.position);
        if hit == self.pointer.hovered {
            return;
        }
        if let Some(previous) = self.pointer.hovered.and_then(|id| self.objects.get_mut(id)) {
            if let Some(i) = previous.interaction.as_mut() {
                i.hovered = false;
            }
            previous.sync_widget_surfaces();
        }
        if let Some(current) = hit.and_then(|id| self.objects.get_mut(id)) {
            if let Some(i) = current.interaction.as_mut() {
                i.hovered = true;
            }
            current.sync_widget_surfaces();
        }
        self.pointer.hovered = hit;
        self.apply_cursor(if hit.is_some() {
            CursorKind::Pointer
        } else {
            CursorKind::Arrow
        });
    }

    /// Primary button went down.
    pub fn pointer_pressed(&mut self) {
        let Some(id) = self.pointer.hovered else {
            return;
        };
        if let Some(i) = self
            .objects
            .get_mut(id)
            .and_then(|o| o.interaction.as_mut())
        {
            i.pressed = true;
            self.pointer.pressed = Some(id);
        }
    }

    /// Primary button went up; clicks the pressed object if the pointer is still over it.
    pub fn pointer_released(&mut self) {
        let Some(pressed) = self.pointer.pressed.take() else {
            return;
        };
        if let Some(i) = self
            .objects
            .get_mut(pressed)
            .and_then(|o| o.interaction.as_mut())
        {
            i.pressed = false;
        }
        if self.pick(self.pointer.position) == Some(pressed) {
            self.click(pressed);
        }
    }

    /// Click `id` as if by pointer: checkboxes toggle, then the click callback fires.
    pub fn click(&mut self, id: ObjectId) {
        let Some(object) = self.objects.get_mut(id) else {
            return;
        };
        if object.kind() == ObjectKind::Checkbox {
            object.checked = Some(!object.checked.unwrap_or(false));
            object.sync_widget_surfaces();
        }
        let Some(mut callback) = object.interaction.as_mut().and_then(|i| i.on_click.take())
        else {
            return;
        };
        tracing::trace!(%id, "click");
        callback(self, id);
        if let Some(i) = self
            .objects
            .get_mut(id)
            .and_then(|o| o.interaction.as_mut())
        {
            i.on_click.get_or_insert(callback);
        }
    }

    /// Install (or replace) the click callback of a button or checkbox.
    pub fn on_click(
        &mut self,
        id: ObjectId,
        callback: impl FnMut(&mut Engine, ObjectId) + 'static,
    ) -> VantageResult<()> {
        let interaction = self
            .lookup_mut(id)?
            .interaction
            .as_mut()
            .ok_or_else(|| not_interactive(id))?;
        interaction.on_click = Some(Box::new(callback));
        Ok(())
    }

    /// Enable or disable a button or checkbox.
    pub fn set_enabled(&mut self, id: ObjectId, enabled: bool) -> VantageResult<()> {
        let object = self.lookup_mut(id)?;
        let interaction = object
            .interaction
            .as_mut()
            .ok_or_else(|| not_interactive(id))?;
        interaction.enabled = enabled;
        if !enabled {
            interaction.pressed = false;
        }
        object.sync_widget_surfaces();
        if !enabled && self.pointer.pressed == Some(id) {
            self.pointer.pressed = None;
        }
        self.refresh_hover();
        Ok(())
    }

    /// Set a checkbox without firing its callback.
    pub fn set_checked(&mut self, id: ObjectId, checked: bool) -> VantageResult<()> {
        let object = self.lookup_mut(id)?;
        if object.kind() != ObjectKind::Checkbox {
            return Err(VantageError::validation(format!(
                "object {id} is not a checkbox"
            )));
        }
        object.checked = Some(checked);
        object.sync_widget_surfaces();
        Ok(())
    }
}

fn not_interactive(id: ObjectId) -> VantageError {
    VantageError::validation(format!("object {id} is not a button or checkbox"))
}

#[cfg(test)]
#[path = "../../tests/unit/engine/input.rs"]
mod tests;
