//! Pairwise hitbox sweep.
//!
//! Hitbox counts are small, so every listening hitbox is tested against every hitbox of
//! every other object in the same collision layer. Overlaps are collected first and
//! dispatched afterwards by the engine, so callbacks never observe a half-finished sweep.

use crate::foundation::arena::Arena;
use crate::foundation::ids::ObjectId;
use crate::geometry::rect::Rect;
use crate::geometry::resolve::resolve;
use crate::scene::hitbox::Collision;
use crate::scene::object::Object;

struct Probe<'a> {
    object: ObjectId,
    hitbox: &'a str,
    layer: i32,
    rect: Rect,
    listening: bool,
}

/// All overlaps of listening hitboxes among visible world-space objects.
///
/// Events are ordered by listening object (arena slot order), then hitbox name, then the
/// other object and hitbox in the same order.
pub(crate) fn sweep(objects: &Arena<ObjectId, Object>, snap_deg: f64) -> Vec<Collision> {
    let probes: Vec<Probe<'_>> = objects
        .iter()
        .filter(|(_, o)| !o.is_hidden() && !o.absolute())
        .flat_map(|(id, o)| {
            o.hitboxes().iter().map(move |(name, h)| Probe {
                object: id,
                hitbox: name.as_str(),
                layer: h.collision_index(),
                rect: resolve(o.transform(), h.transform(), snap_deg).rect,
                listening: h.has_callback(),
            })
        })
        .collect();

    let mut hits = Vec::new();
    for a in probes.iter().filter(|p| p.listening) {
        for b in &probes {
            if b.object == a.object || b.layer != a.layer {
                continue;
            }
            if !a.rect.collides(&b.rect) {
                continue;
            }
            if let Some(face) = a.rect.collided_face(&b.rect) {
                hits.push(Collision {
                    object: a.object,
                    hitbox: a.hitbox.to_owned(),
                    other: b.object,
                    other_hitbox: b.hitbox.to_owned(),
                    face,
                });
            }
        }
    }
    hits
}

#[cfg(test)]
#[path = "../../tests/unit/scene/collision.rs"]
mod tests;
