use crate::camera::viewport::Camera;
use crate::engine::opts::EngineOpts;
use crate::engine::registry::TextureRegistry;
use crate::foundation::arena::Arena;
use crate::foundation::core::Vec2;
use crate::foundation::error::VantageResult;
use crate::foundation::ids::ObjectId;
use crate::foundation::math::rotate_point;
use crate::geometry::rect::Rect;
use crate::geometry::resolve::{Placement, resolve};
use crate::platform::Rasterizer;
use crate::render::pixel::{level_point_to_pixel, level_to_pixel, screen_rotation};
use crate::render::plan::{DrawList, DrawOp, PolygonPoints, PolygonShape, TexturedQuad};
use crate::scene::object::Object;
use crate::scene::surface::{BorderShape, SurfaceKind};

/// Visible objects back to front: world before interface, then `index`, then `y`, then
/// `x`, then handle.
pub(crate) fn paint_order(objects: &Arena<ObjectId, Object>) -> Vec<ObjectId> {
    let mut visible: Vec<(ObjectId, &Object)> =
        objects.iter().filter(|(_, o)| !o.is_hidden()).collect();
    visible.sort_by(|(a_id, a), (b_id, b)| {
        let (at, bt) = (a.transform().translate, b.transform().translate);
        a.absolute()
            .cmp(&b.absolute())
            .then(a.index().cmp(&b.index()))
            .then(at.y.total_cmp(&bt.y))
            .then(at.x.total_cmp(&bt.x))
            .then(a_id.cmp(b_id))
    });
    visible.into_iter().map(|(id, _)| id).collect()
}

fn to_pixels(camera: &Camera, points: &[Vec2], absolute: bool) -> PolygonPoints {
    points
        .iter()
        .map(|p| level_point_to_pixel(camera, *p, absolute))
        .collect()
}

fn ellipse_outline(placement: &Placement, segments: u32) -> Vec<Vec2> {
    let center = placement.center();
    let radii = placement.extent / 2.0;
    (0..segments)
        .map(|i| {
            let t = std::f64::consts::TAU * f64::from(i) / f64::from(segments);
            let local = Vec2::new(radii.x * t.cos(), radii.y * t.sin());
            rotate_point(center + local, center, placement.angle)
        })
        .collect()
}

/// Draw calls for every visible surface of every on-screen object.
///
/// Surfaces are resolved without rotation snapping. Textured surfaces whose texture is not
/// registered are skipped. With `debug_hitboxes`, each object's hitbox world rects follow
/// its surfaces as outlines.
pub(crate) fn compose(
    objects: &Arena<ObjectId, Object>,
    camera: &Camera,
    textures: &TextureRegistry,
    opts: &EngineOpts,
) -> DrawList {
    let mut list = DrawList::default();
    for id in paint_order(objects) {
        let Some(object) = objects.get(id) else {
            continue;
        };
        if !camera.contains_object(object) {
            continue;
        }
        let absolute = object.absolute();

        for (name, surface) in object.paint_surfaces() {
            if !surface.is_visible() {
                continue;
            }
            let tint = surface.color_value().with_opacity(object.opacity());
            if tint.a == 0 {
                continue;
            }
            let placement = resolve(object.transform(), surface.transform(), 0.0);
            match surface.kind() {
                SurfaceKind::Texture(_) | SurfaceKind::Sprite(_) => {
                    let Some(texture) = surface.texture_name().and_then(|n| textures.get(n))
                    else {
                        tracing::debug!(%id, surface = name, "texture not loaded, surface skipped");
                        continue;
                    };
                    let dest = Rect::from_center(placement.center(), placement.extent);
                    list.push(DrawOp::Textured(TexturedQuad {
                        texture,
                        dest: level_to_pixel(camera, dest, absolute),
                        src: surface.source_crop(),
                        rotation: screen_rotation(camera, placement.rotation),
                        flip: placement.flip,
                        tint,
                        blend: surface.blend(),
                        scale_mode: surface.scale_mode(),
                    }));
                }
                SurfaceKind::Color => list.push(DrawOp::Polygon(PolygonShape {
                    points: to_pixels(camera, &placement.oriented_corners(), absolute),
                    color: tint,
                    filled: true,
                    thickness: 0.0,
                })),
                SurfaceKind::Border(border) => {
                    let outline = match border.shape {
                        BorderShape::Rect => placement.oriented_corners().to_vec(),
                        BorderShape::Ellipse => ellipse_outline(&placement, opts.ellipse_segments),
                    };
                    list.push(DrawOp::Polygon(PolygonShape {
                        points: to_pixels(camera, &outline, absolute),
                        color: tint,
                        filled: border.filled,
                        thickness: border.thickness,
                    }));
                }
            }
        }

        if opts.debug_hitboxes {
            for hitbox in object.hitboxes().values() {
                let rect = resolve(object.transform(), hitbox.transform(), opts.hitbox_snap_deg).rect;
                list.push(DrawOp::Polygon(PolygonShape {
                    points: to_pixels(camera, &rect.corners(), absolute),
                    color: hitbox.color(),
                    filled: false,
                    thickness: 1.0,
                }));
            }
        }
    }
    list
}

/// Hand every draw call to `rasterizer` in order.
pub fn submit(list: &DrawList, rasterizer: &mut dyn Rasterizer) -> VantageResult<()> {
    for op in &list.ops {
        match op {
            DrawOp::Textured(quad) => rasterizer.draw_textured_rect(quad)?,
            DrawOp::Polygon(polygon) => rasterizer.draw_polygon(polygon)?,
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/compose.rs"]
mod tests;
