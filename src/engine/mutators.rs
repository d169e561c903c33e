//! Object, hitbox and surface field access.
//!
//! Every setter has an immediate form and, for interpolable fields, a timed form returning
//! the driving timeline. Timed forms capture the current value as the start, interpolate
//! toward the target and write through the immediate setter, so a tween and a direct call
//! behave identically at every step. Boolean fields have a delayed form instead.
//!
//! Child transforms are edited in their unscaled (default) form; the owner's scale is
//! applied on top.

use crate::animation::timeline::TimelineSpec;
use crate::engine::context::Engine;
use crate::foundation::core::{Rgba8, Transform, Vec2};
use crate::foundation::error::{VantageError, VantageResult};
use crate::foundation::ids::{ObjectId, TimelineId};
use crate::geometry::rect::Rect;
use crate::scene::hitbox::{Collision, Hitbox};
use crate::scene::object::Object;
use crate::scene::surface::{BlendMode, ScaleMode, SpriteSurface, Surface, SurfaceKind};

fn missing_child(what: &str, id: ObjectId, name: &str) -> VantageError {
    tracing::warn!(%id, name, what, "child not found");
    VantageError::lookup(format!("{what} '{name}' not found on object {id}"))
}

fn wrong_variant(id: ObjectId, name: &str, expected: &str) -> VantageError {
    VantageError::validation(format!(
        "surface '{name}' on object {id} is not a {expected} surface"
    ))
}

impl Engine {
    /// Object translate.
    pub fn translate(&self, id: ObjectId) -> VantageResult<Vec2> {
        Ok(self.lookup(id)?.transform().translate)
    }

    /// Object scale.
    pub fn scale(&self, id: ObjectId) -> VantageResult<Vec2> {
        Ok(self.lookup(id)?.transform().scale)
    }

    /// Object rotation in degrees.
    pub fn rotation(&self, id: ObjectId) -> VantageResult<f64> {
        Ok(self.lookup(id)?.transform().rotation)
    }

    /// Object pivot offset.
    pub fn pivot(&self, id: ObjectId) -> VantageResult<Vec2> {
        Ok(self.lookup(id)?.transform().pivot)
    }

    /// Move an object (and its label by the same amount).
    pub fn set_translate(&mut self, id: ObjectId, translate: Vec2) -> VantageResult<()> {
        let object = self.lookup_mut(id)?;
        let delta = translate - object.transform().translate;
        object.set_translate(translate);
        let label = object.label();
        if let Some(label) = label.and_then(|l| self.objects.get_mut(l)) {
            let moved = label.transform().translate + delta;
            label.set_translate(moved);
        }
        Ok(())
    }

    /// Resize an object; child transforms are re-derived from their defaults.
    pub fn set_scale(&mut self, id: ObjectId, scale: Vec2) -> VantageResult<()> {
        self.lookup_mut(id)?.set_scale(scale);
        Ok(())
    }

    /// Rotate an object around its pivot.
    pub fn set_rotation(&mut self, id: ObjectId, rotation: f64) -> VantageResult<()> {
        self.lookup_mut(id)?.set_rotation(rotation);
        Ok(())
    }

    /// Move the rotation and flip anchor.
    pub fn set_pivot(&mut self, id: ObjectId, pivot: Vec2) -> VantageResult<()> {
        self.lookup_mut(id)?.set_pivot(pivot);
        Ok(())
    }

    /// Replace the whole object transform.
    pub fn set_transform(&mut self, id: ObjectId, transform: Transform) -> VantageResult<()> {
        self.set_translate(id, transform.translate)?;
        let object = self.lookup_mut(id)?;
        object.set_scale(transform.scale);
        object.set_rotation(transform.rotation);
        object.set_pivot(transform.pivot);
        Ok(())
    }

    /// Opacity multiplied into every surface.
    pub fn set_opacity(&mut self, id: ObjectId, opacity: u8) -> VantageResult<()> {
        self.lookup_mut(id)?.set_opacity(opacity);
        Ok(())
    }

    /// Paint order.
    pub fn set_index(&mut self, id: ObjectId, index: i32) -> VantageResult<()> {
        self.lookup_mut(id)?.set_index(index);
        Ok(())
    }

    /// Move between world and interface space (the label follows).
    pub fn set_absolute(&mut self, id: ObjectId, absolute: bool) -> VantageResult<()> {
        self.update_with_label(id, |o| o.set_absolute(absolute))
    }

    /// Hide or show an object (the label follows).
    pub fn set_hidden(&mut self, id: ObjectId, hidden: bool) -> VantageResult<()> {
        self.update_with_label(id, |o| o.set_hidden(hidden))
    }

    fn update_with_label(&mut self, id: ObjectId, edit: impl Fn(&mut Object)) -> VantageResult<()> {
        let object = self.lookup_mut(id)?;
        edit(object);
        let label = object.label();
        if let Some(label) = label.and_then(|l| self.objects.get_mut(l)) {
            edit(label);
        }
        Ok(())
    }

    /// Tween the translate toward `target`.
    pub fn tween_translate(
        &mut self,
        id: ObjectId,
        target: Vec2,
        spec: TimelineSpec,
    ) -> VantageResult<TimelineId> {
        let start = self.translate(id)?;
        Ok(self.tween_owned(id, spec, start, target, move |e, v| {
            e.set_translate(id, v)
        }))
    }

    /// Tween the scale toward `target`.
    pub fn tween_scale(
        &mut self,
        id: ObjectId,
        target: Vec2,
        spec: TimelineSpec,
    ) -> VantageResult<TimelineId> {
        let start = self.scale(id)?;
        Ok(self.tween_owned(id, spec, start, target, move |e, v| e.set_scale(id, v)))
    }

    /// Tween the rotation toward `target` degrees (numerically, not shortest arc).
    pub fn tween_rotation(
        &mut self,
        id: ObjectId,
        target: f64,
        spec: TimelineSpec,
    ) -> VantageResult<TimelineId> {
        let start = self.rotation(id)?;
        Ok(self.tween_owned(id, spec, start, target, move |e, v| {
            e.set_rotation(id, v)
        }))
    }

    /// Tween the pivot toward `target`.
    pub fn tween_pivot(
        &mut self,
        id: ObjectId,
        target: Vec2,
        spec: TimelineSpec,
    ) -> VantageResult<TimelineId> {
        let start = self.pivot(id)?;
        Ok(self.tween_owned(id, spec, start, target, move |e, v| e.set_pivot(id, v)))
    }

    /// Tween the opacity toward `target`.
    pub fn tween_opacity(
        &mut self,
        id: ObjectId,
        target: u8,
        spec: TimelineSpec,
    ) -> VantageResult<TimelineId> {
        let start = self.lookup(id)?.opacity();
        Ok(self.tween_owned(id, spec, start, target, move |e, v| {
            e.set_opacity(id, v)
        }))
    }

    /// Tween the paint index toward `target`, rounding each step.
    pub fn tween_index(
        &mut self,
        id: ObjectId,
        target: i32,
        spec: TimelineSpec,
    ) -> VantageResult<TimelineId> {
        let start = self.lookup(id)?.index();
        Ok(self.tween_owned(id, spec, start, target, move |e, v| e.set_index(id, v)))
    }

    /// Switch space after `delay_ms`.
    pub fn set_absolute_after(
        &mut self,
        id: ObjectId,
        absolute: bool,
        delay_ms: f64,
    ) -> VantageResult<TimelineId> {
        self.lookup(id)?;
        Ok(self.delay_owned(id, delay_ms, move |e| e.set_absolute(id, absolute)))
    }

    /// Hide or show after `delay_ms`.
    pub fn set_hidden_after(
        &mut self,
        id: ObjectId,
        hidden: bool,
        delay_ms: f64,
    ) -> VantageResult<TimelineId> {
        self.lookup(id)?;
        Ok(self.delay_owned(id, delay_ms, move |e| e.set_hidden(id, hidden)))
    }

    /// Attach (or replace) a hitbox.
    pub fn add_hitbox(
        &mut self,
        id: ObjectId,
        name: impl Into<String>,
        hitbox: Hitbox,
    ) -> VantageResult<()> {
        self.lookup_mut(id)?.add_hitbox(name, hitbox);
        Ok(())
    }

    /// Detach a hitbox.
    pub fn remove_hitbox(&mut self, id: ObjectId, name: &str) -> VantageResult<Hitbox> {
        self.lookup_mut(id)?
            .remove_hitbox(name)
            .ok_or_else(|| missing_child("hitbox", id, name))
    }

    /// Hitbox `name` of object `id`.
    pub fn get_hitbox(&self, id: ObjectId, name: &str) -> VantageResult<&Hitbox> {
        self.lookup(id)?
            .hitbox(name)
            .ok_or_else(|| missing_child("hitbox", id, name))
    }

    /// Axis-aligned world rect of a hitbox, as used by collision and input.
    pub fn get_hitbox_world_rect(&self, id: ObjectId, name: &str) -> VantageResult<Rect> {
        self.lookup(id)?
            .hitbox_world_rect(name, self.opts.hitbox_snap_deg)
            .ok_or_else(|| missing_child("hitbox", id, name))
    }

    fn edit_hitbox(
        &mut self,
        id: ObjectId,
        name: &str,
        edit: impl FnOnce(&mut Transform),
    ) -> VantageResult<()> {
        if self.lookup_mut(id)?.edit_hitbox_transform(name, edit) {
            Ok(())
        } else {
            Err(missing_child("hitbox", id, name))
        }
    }

    fn hitbox_default(&self, id: ObjectId, name: &str) -> VantageResult<Transform> {
        Ok(*self.get_hitbox(id, name)?.default_transform())
    }

    /// Hitbox local translate before object scale.
    pub fn set_hitbox_translate(&mut self, id: ObjectId, name: &str, v: Vec2) -> VantageResult<()> {
        self.edit_hitbox(id, name, |t| t.translate = v)
    }

    /// Hitbox local scale before object scale.
    pub fn set_hitbox_scale(&mut self, id: ObjectId, name: &str, v: Vec2) -> VantageResult<()> {
        self.edit_hitbox(id, name, |t| t.scale = v)
    }

    /// Hitbox local rotation.
    pub fn set_hitbox_rotation(&mut self, id: ObjectId, name: &str, deg: f64) -> VantageResult<()> {
        self.edit_hitbox(id, name, |t| t.rotation = deg)
    }

    /// Hitbox local pivot before object scale.
    pub fn set_hitbox_pivot(&mut self, id: ObjectId, name: &str, v: Vec2) -> VantageResult<()> {
        self.edit_hitbox(id, name, |t| t.pivot = v)
    }

    /// Move a hitbox to another collision layer.
    pub fn set_hitbox_collision_index(
        &mut self,
        id: ObjectId,
        name: &str,
        index: i32,
    ) -> VantageResult<()> {
        let hitbox = self
            .lookup_mut(id)?
            .hitbox_mut(name)
            .ok_or_else(|| missing_child("hitbox", id, name))?;
        hitbox.collision_index = index;
        Ok(())
    }

    /// Install (or replace) a hitbox's collision callback.
    pub fn set_hitbox_callback(
        &mut self,
        id: ObjectId,
        name: &str,
        callback: impl FnMut(&mut Engine, &Collision) + 'static,
    ) -> VantageResult<()> {
        let hitbox = self
            .lookup_mut(id)?
            .hitbox_mut(name)
            .ok_or_else(|| missing_child("hitbox", id, name))?;
        hitbox.on_collide = Some(Box::new(callback));
        Ok(())
    }

    /// Tween a hitbox's local translate.
    pub fn tween_hitbox_translate(
        &mut self,
        id: ObjectId,
        name: &str,
        target: Vec2,
        spec: TimelineSpec,
    ) -> VantageResult<TimelineId> {
        let start = self.hitbox_default(id, name)?.translate;
        let name = name.to_owned();
        Ok(self.tween_owned(id, spec, start, target, move |e, v| {
            e.set_hitbox_translate(id, &name, v)
        }))
    }

    /// Tween a hitbox's local scale.
    pub fn tween_hitbox_scale(
        &mut self,
        id: ObjectId,
        name: &str,
        target: Vec2,
        spec: TimelineSpec,
    ) -> VantageResult<TimelineId> {
        let start = self.hitbox_default(id, name)?.scale;
        let name = name.to_owned();
        Ok(self.tween_owned(id, spec, start, target, move |e, v| {
            e.set_hitbox_scale(id, &name, v)
        }))
    }

    /// Tween a hitbox's local rotation.
    pub fn tween_hitbox_rotation(
        &mut self,
        id: ObjectId,
        name: &str,
        target: f64,
        spec: TimelineSpec,
    ) -> VantageResult<TimelineId> {
        let start = self.hitbox_default(id, name)?.rotation;
        let name = name.to_owned();
        Ok(self.tween_owned(id, spec, start, target, move |e, v| {
            e.set_hitbox_rotation(id, &name, v)
        }))
    }

    /// Tween a hitbox's local pivot.
    pub fn tween_hitbox_pivot(
        &mut self,
        id: ObjectId,
        name: &str,
        target: Vec2,
        spec: TimelineSpec,
    ) -> VantageResult<TimelineId> {
        let start = self.hitbox_default(id, name)?.pivot;
        let name = name.to_owned();
        Ok(self.tween_owned(id, spec, start, target, move |e, v| {
            e.set_hitbox_pivot(id, &name, v)
        }))
    }

    /// Attach (or replace) a surface.
    pub fn add_surface(
        &mut self,
        id: ObjectId,
        name: impl Into<String>,
        surface: Surface,
    ) -> VantageResult<()> {
        self.lookup_mut(id)?.add_surface(name, surface);
        Ok(())
    }

    /// Detach a surface.
    pub fn remove_surface(&mut self, id: ObjectId, name: &str) -> VantageResult<Surface> {
        self.lookup_mut(id)?
            .remove_surface(name)
            .ok_or_else(|| missing_child("surface", id, name))
    }

    /// Surface `name` of object `id`.
    pub fn get_surface(&self, id: ObjectId, name: &str) -> VantageResult<&Surface> {
        self.lookup(id)?
            .surface(name)
            .ok_or_else(|| missing_child("surface", id, name))
    }

    fn surface_mut(&mut self, id: ObjectId, name: &str) -> VantageResult<&mut Surface> {
        self.lookup_mut(id)?
            .surface_mut(name)
            .ok_or_else(|| missing_child("surface", id, name))
    }

    fn edit_surface(
        &mut self,
        id: ObjectId,
        name: &str,
        edit: impl FnOnce(&mut Transform),
    ) -> VantageResult<()> {
        if self.lookup_mut(id)?.edit_surface_transform(name, edit) {
            Ok(())
        } else {
            Err(missing_child("surface", id, name))
        }
    }

    fn surface_default(&self, id: ObjectId, name: &str) -> VantageResult<Transform> {
        Ok(*self.get_surface(id, name)?.default_transform())
    }

    /// Surface local translate before object scale.
    pub fn set_surface_translate(&mut self, id: ObjectId, name: &str, v: Vec2) -> VantageResult<()> {
        self.edit_surface(id, name, |t| t.translate = v)
    }

    /// Surface local scale before object scale.
    pub fn set_surface_scale(&mut self, id: ObjectId, name: &str, v: Vec2) -> VantageResult<()> {
        self.edit_surface(id, name, |t| t.scale = v)
    }

    /// Surface local rotation.
    pub fn set_surface_rotation(
        &mut self,
        id: ObjectId,
        name: &str,
        deg: f64,
    ) -> VantageResult<()> {
        self.edit_surface(id, name, |t| t.rotation = deg)
    }

    /// Surface local pivot before object scale.
    pub fn set_surface_pivot(&mut self, id: ObjectId, name: &str, v: Vec2) -> VantageResult<()> {
        self.edit_surface(id, name, |t| t.pivot = v)
    }

    /// Tint or fill color.
    pub fn set_surface_color(&mut self, id: ObjectId, name: &str, color: Rgba8) -> VantageResult<()> {
        self.surface_mut(id, name)?.color = color;
        Ok(())
    }

    /// Paint order among the object's surfaces.
    pub fn set_surface_index(&mut self, id: ObjectId, name: &str, index: i32) -> VantageResult<()> {
        self.surface_mut(id, name)?.index = index;
        Ok(())
    }

    /// Hide or show one surface.
    pub fn set_surface_hidden(&mut self, id: ObjectId, name: &str, hidden: bool) -> VantageResult<()> {
        self.surface_mut(id, name)?.hidden = hidden;
        Ok(())
    }

    /// Blend mode.
    pub fn set_surface_blend(&mut self, id: ObjectId, name: &str, blend: BlendMode) -> VantageResult<()> {
        self.surface_mut(id, name)?.blend = blend;
        Ok(())
    }

    /// Sampling filter.
    pub fn set_surface_scale_mode(
        &mut self,
        id: ObjectId,
        name: &str,
        mode: ScaleMode,
    ) -> VantageResult<()> {
        self.surface_mut(id, name)?.scale_mode = mode;
        Ok(())
    }

    /// Texture name of a texture or sprite surface.
    pub fn set_surface_texture(
        &mut self,
        id: ObjectId,
        name: &str,
        texture: impl Into<String>,
    ) -> VantageResult<()> {
        match &mut self.surface_mut(id, name)?.kind {
            SurfaceKind::Texture(t) => t.texture = texture.into(),
            SurfaceKind::Sprite(s) => s.texture = texture.into(),
            SurfaceKind::Color | SurfaceKind::Border(_) => {
                return Err(wrong_variant(id, name, "textured"));
            }
        }
        Ok(())
    }

    /// Source crop of a texture surface.
    pub fn set_surface_crop(
        &mut self,
        id: ObjectId,
        name: &str,
        crop: Option<Rect>,
    ) -> VantageResult<()> {
        match &mut self.surface_mut(id, name)?.kind {
            SurfaceKind::Texture(t) => {
                t.crop = crop;
                Ok(())
            }
            _ => Err(wrong_variant(id, name, "texture")),
        }
    }

    fn sprite_mut(&mut self, id: ObjectId, name: &str) -> VantageResult<&mut SpriteSurface> {
        self.surface_mut(id, name)?
            .sprite_mut()
            .ok_or_else(|| wrong_variant(id, name, "sprite"))
    }

    /// Jump a sprite to `frame`.
    pub fn set_sprite_frame(&mut self, id: ObjectId, name: &str, frame: u32) -> VantageResult<()> {
        self.sprite_mut(id, name)?.set_frame(frame);
        Ok(())
    }

    /// Start or stop a sprite; starting a finished one-shot sprite restarts it.
    pub fn set_sprite_playing(
        &mut self,
        id: ObjectId,
        name: &str,
        playing: bool,
    ) -> VantageResult<()> {
        let sprite = self.sprite_mut(id, name)?;
        if playing && !sprite.is_playing() && !sprite.looping {
            sprite.restart();
        } else {
            sprite.set_playing(playing);
        }
        Ok(())
    }

    /// Frame delay of a sprite.
    pub fn set_sprite_delay(&mut self, id: ObjectId, name: &str, delay_ms: f64) -> VantageResult<()> {
        self.sprite_mut(id, name)?.delay_ms = delay_ms;
        Ok(())
    }

    /// Stroke thickness and fill of a border surface.
    pub fn set_border(
        &mut self,
        id: ObjectId,
        name: &str,
        thickness: f64,
        filled: bool,
    ) -> VantageResult<()> {
        match &mut self.surface_mut(id, name)?.kind {
            SurfaceKind::Border(b) => {
                b.thickness = thickness;
                b.filled = filled;
                Ok(())
            }
            _ => Err(wrong_variant(id, name, "border")),
        }
    }

    /// Tween a surface's local translate.
    pub fn tween_surface_translate(
        &mut self,
        id: ObjectId,
        name: &str,
        target: Vec2,
        spec: TimelineSpec,
    ) -> VantageResult<TimelineId> {
        let start = self.surface_default(id, name)?.translate;
        let name = name.to_owned();
        Ok(self.tween_owned(id, spec, start, target, move |e, v| {
            e.set_surface_translate(id, &name, v)
        }))
    }

    /// Tween a surface's local scale.
    pub fn tween_surface_scale(
        &mut self,
        id: ObjectId,
        name: &str,
        target: Vec2,
        spec: TimelineSpec,
    ) -> VantageResult<TimelineId> {
        let start = self.surface_default(id, name)?.scale;
        let name = name.to_owned();
        Ok(self.tween_owned(id, spec, start, target, move |e, v| {
            e.set_surface_scale(id, &name, v)
        }))
    }

    /// Tween a surface's local rotation.
    pub fn tween_surface_rotation(
        &mut self,
        id: ObjectId,
        name: &str,
        target: f64,
        spec: TimelineSpec,
    ) -> VantageResult<TimelineId> {
        let start = self.surface_default(id, name)?.rotation;
        let name = name.to_owned();
        Ok(self.tween_owned(id, spec, start, target, move |e, v| {
            e.set_surface_rotation(id, &name, v)
        }))
    }

    /// Tween a surface's local pivot.
    pub fn tween_surface_pivot(
        &mut self,
        id: ObjectId,
        name: &str,
        target: Vec2,
        spec: TimelineSpec,
    ) -> VantageResult<TimelineId> {
        let start = self.surface_default(id, name)?.pivot;
        let name = name.to_owned();
        Ok(self.tween_owned(id, spec, start, target, move |e, v| {
            e.set_surface_pivot(id, &name, v)
        }))
    }

    /// Tween a surface's color.
    pub fn tween_surface_color(
        &mut self,
        id: ObjectId,
        name: &str,
        target: Rgba8,
        spec: TimelineSpec,
    ) -> VantageResult<TimelineId> {
        let start = self.get_surface(id, name)?.color_value();
        let name = name.to_owned();
        Ok(self.tween_owned(id, spec, start, target, move |e, v| {
            e.set_surface_color(id, &name, v)
        }))
    }

    /// Hide or show one surface after `delay_ms`.
    pub fn set_surface_hidden_after(
        &mut self,
        id: ObjectId,
        name: &str,
        hidden: bool,
        delay_ms: f64,
    ) -> VantageResult<TimelineId> {
        self.get_surface(id, name)?;
        let name = name.to_owned();
        Ok(self.delay_owned(id, delay_ms, move |e| {
            e.set_surface_hidden(id, &name, hidden)
        }))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/mutators.rs"]
mod tests;
