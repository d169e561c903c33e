//! Composition of an object transform with a child (surface or hitbox) transform.
//!
//! The child's world placement is computed in a fixed order:
//!
//! 1. Derive the parent and child flips from their scale signs.
//! 2. Flip the parent's pivot and rotation by the parent flip.
//! 3. Flip the child's rect, pivot and rotation by the parent flip (mirrored across the
//!    parent's center).
//! 4. Flip the child's pivot and rotation again by the child's own flip.
//! 5. Rotate the child rect and child pivot around the parent's flipped pivot by the
//!    parent's flipped rotation.
//! 6. Rotate the child rect around the rotated child pivot by the child's doubly flipped
//!    rotation.
//!
//! Flips are applied before rotations and the parent before the child. Reordering changes
//! results whenever a flip and a non-zero rotation meet.
//!
//! Positions are rotated by the flip-adjusted angle ([`Flip::flip_angle`]); the half turn a
//! flip carries ([`Flip::turn`]) is already expressed by the mirrored positions and only
//! enters the displayed rotation.

use crate::foundation::core::{Transform, Vec2};
use crate::foundation::math::{is_multiple_of, normalize_degrees, rotate_point, snap_degrees};
use crate::geometry::flip::Flip;
use crate::geometry::rect::Rect;

/// Snap used by consumers that need axis-aligned results (hitboxes, grid lines).
pub const AXIS_SNAP_DEG: f64 = 90.0;

/// Final world-space placement of a child.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Placement {
    /// Center-based bounds. Width and height are exchanged whenever the net angle is not a
    /// multiple of 180 degrees; snapped callers only ever see quarter and half turns.
    pub rect: Rect,
    /// Unrotated extent of the child.
    pub extent: Vec2,
    /// Orientation of the child's geometry in world space, in degrees (not normalized).
    pub angle: f64,
    /// Displayed rotation in `[0, 360)`, to be applied together with `flip`.
    pub rotation: f64,
    /// Mirror a rasterizer applies before `rotation`.
    pub flip: Flip,
    /// Combined parent and child flip.
    pub net_flip: Flip,
}

impl Placement {
    /// Center of the placed child.
    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }

    /// Corners of the child's true (rotated) outline, starting from its top-left.
    pub fn oriented_corners(&self) -> [Vec2; 4] {
        Rect::from_center(self.center(), self.extent).rotated_corners(self.center(), self.angle)
    }
}

fn snap(deg: f64, snap_deg: f64) -> f64 {
    snap_degrees(deg, snap_deg)
}

fn reorients(deg: f64) -> bool {
    !is_multiple_of(deg, 180.0)
}

/// World placement of `child`, expressed relative to `parent`.
///
/// `child.translate`, `child.scale` and `child.pivot` are the effective local values (already
/// multiplied by the parent's absolute scale). `snap_deg` rounds both rotations to a
/// multiple of the given step before they are applied; `0` disables snapping.
pub fn resolve(parent: &Transform, child: &Transform, snap_deg: f64) -> Placement {
    // 1.
    let parent_flip = Flip::from_scale(parent.scale);
    let child_flip = Flip::from_scale(child.scale);

    // 2.
    let parent_center = parent.translate;
    let parent_pivot = parent_center + parent_flip.flip_offset(parent.pivot);
    let parent_angle = snap(parent_flip.flip_angle(parent.rotation), snap_deg);

    // 3.
    let local = Rect::from_center(parent_center + child.translate, child.extent());
    let local = parent_flip.flip_rect(local, parent_center);
    let child_pivot = parent_flip.flip_offset(child.pivot);
    let child_angle = parent_flip.flip_angle(child.rotation);

    // 4.
    let child_pivot = child_flip.flip_offset(child_pivot);
    let child_angle = snap(child_flip.flip_angle(child_angle), snap_deg);

    // 5.
    let pivot_world = rotate_point(local.center() + child_pivot, parent_pivot, parent_angle);
    let placed = local.rotate_center(parent_pivot, parent_angle);

    // 6.
    let placed = placed.rotate_center(pivot_world, child_angle);

    let angle = parent_angle + child_angle;
    let net_flip = parent_flip.then(child_flip);
    let rect = if reorients(angle) {
        placed.transposed()
    } else {
        placed
    };

    Placement {
        rect,
        extent: child.extent(),
        angle,
        rotation: normalize_degrees(angle + net_flip.turn()),
        flip: net_flip.render_flip(),
        net_flip,
    }
}

/// World rect of `child` under `parent`.
pub fn resolve_rect(parent: &Transform, child: &Transform, snap_deg: f64) -> Rect {
    resolve(parent, child, snap_deg).rect
}

/// Displayed rotation of `child` under `parent`, normalized into `[0, 360)`.
pub fn resolve_rotation(parent: &Transform, child: &Transform, snap_deg: f64) -> f64 {
    resolve(parent, child, snap_deg).rotation
}

/// Placement of the parent's own rect (its extent rotated around its pivot).
pub fn resolve_self(parent: &Transform, snap_deg: f64) -> Placement {
    let own = Transform::at(Vec2::ZERO, parent.extent());
    resolve(parent, &own, snap_deg)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/resolve.rs"]
mod tests;
