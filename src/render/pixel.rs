//! Conversion between level units (world or interface) and window pixels.

use crate::camera::viewport::Camera;
use crate::foundation::core::Vec2;
use crate::geometry::rect::Rect;

fn invert(camera: &Camera, v: Vec2) -> Vec2 {
    Vec2::new(
        if camera.invert_x() { -v.x } else { v.x },
        if camera.invert_y() { -v.y } else { v.y },
    )
}

/// Map a level-space point to window pixels.
///
/// `absolute` selects interface space (no camera translate, interface block size).
pub fn level_point_to_pixel(camera: &Camera, point: Vec2, absolute: bool) -> Vec2 {
    let scale = camera.get_scale(camera.width_for(absolute));
    let block = camera.block_size(absolute);
    let local = if absolute {
        point
    } else {
        point - camera.translate()
    };
    (invert(camera, local) + scale / 2.0) * block
}

/// Map a window pixel back to level space. Exact inverse of [`level_point_to_pixel`].
pub fn pixel_point_to_level(camera: &Camera, pixel: Vec2, absolute: bool) -> Vec2 {
    let scale = camera.get_scale(camera.width_for(absolute));
    let block = camera.block_size(absolute);
    let inverted = pixel / block - scale / 2.0;
    if absolute {
        return invert(camera, inverted);
    }
    // The camera translate is added in inverted space, then the inversion is undone.
    let shifted = inverted + invert(camera, camera.translate());
    invert(camera, shifted)
}

/// Map a center-based level rect to a center-based pixel rect.
pub fn level_to_pixel(camera: &Camera, rect: Rect, absolute: bool) -> Rect {
    let block = camera.block_size(absolute);
    Rect::from_center(
        level_point_to_pixel(camera, rect.center(), absolute),
        rect.size() * block,
    )
}

/// Map a center-based pixel rect back to level units.
pub fn pixel_to_level(camera: &Camera, rect: Rect, absolute: bool) -> Rect {
    let block = camera.block_size(absolute);
    Rect::from_center(
        pixel_point_to_level(camera, rect.center(), absolute),
        rect.size() / block,
    )
}

/// Rotation as seen on screen. A single inverted axis reverses the sense of rotation.
pub fn screen_rotation(camera: &Camera, rotation: f64) -> f64 {
    if camera.invert_x() ^ camera.invert_y() {
        crate::foundation::math::normalize_degrees(-rotation)
    } else {
        rotation
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pixel.rs"]
mod tests;
