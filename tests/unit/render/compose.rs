use super::*;
use crate::foundation::core::{Canvas, Rgba8, Transform};
use crate::foundation::ids::TextureHandle;
use crate::platform::headless::RecordingRasterizer;
use crate::scene::hitbox::Hitbox;
use crate::scene::surface::{BorderSurface, Surface};

struct Scene {
    objects: Arena<ObjectId, Object>,
    camera: Camera,
    textures: TextureRegistry,
    opts: EngineOpts,
}

impl Scene {
    fn new() -> Self {
        Self {
            objects: Arena::new(),
            camera: Camera::new(Canvas::new(800, 600).unwrap(), 20.0, 20.0).unwrap(),
            textures: TextureRegistry::new(),
            opts: EngineOpts::default(),
        }
    }

    fn add(&mut self, object: Object) -> ObjectId {
        self.objects.insert(object)
    }

    fn compose(&self) -> DrawList {
        compose(&self.objects, &self.camera, &self.textures, &self.opts)
    }
}

fn unit(x: f64, y: f64) -> Transform {
    Transform::at(Vec2::new(x, y), Vec2::new(1.0, 1.0))
}

fn square(x: f64, y: f64, color: Rgba8) -> Object {
    Object::new(unit(x, y)).with_surface("fill", Surface::color(color, Transform::default()))
}

fn close(a: Vec2, b: Vec2) -> bool {
    (a - b).hypot() < 1e-9
}

fn polygons(list: &DrawList) -> Vec<&PolygonShape> {
    list.ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Polygon(p) => Some(p),
            DrawOp::Textured(_) => None,
        })
        .collect()
}

fn quads(list: &DrawList) -> Vec<&TexturedQuad> {
    list.ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Textured(q) => Some(q),
            DrawOp::Polygon(_) => None,
        })
        .collect()
}

#[test]
fn paint_order_sorts_by_space_index_then_position() {
    let mut scene = Scene::new();
    let hud = scene.add(square(0.0, 0.0, Rgba8::WHITE).with_absolute(true).with_index(-5));
    let front = scene.add(square(0.0, 0.0, Rgba8::WHITE).with_index(3));
    let low = scene.add(square(0.0, 2.0, Rgba8::WHITE));
    let high = scene.add(square(0.0, -2.0, Rgba8::WHITE));
    let left = scene.add(square(-1.0, -2.0, Rgba8::WHITE));
    scene.add(square(0.0, 0.0, Rgba8::WHITE).with_hidden(true));

    assert_eq!(paint_order(&scene.objects), vec![left, high, low, front, hud]);
}

#[test]
fn color_surface_becomes_filled_quad_in_pixels() {
    let mut scene = Scene::new();
    scene.add(square(0.0, 0.0, Rgba8::rgb(10, 20, 30)));
    let list = scene.compose();
    let polys = polygons(&list);
    assert_eq!(polys.len(), 1);
    let poly = polys[0];
    assert!(poly.filled);
    assert_eq!(poly.color, Rgba8::rgb(10, 20, 30));
    assert_eq!(poly.points.len(), 4);
    for expected in [
        Vec2::new(380.0, 280.0),
        Vec2::new(420.0, 280.0),
        Vec2::new(420.0, 320.0),
        Vec2::new(380.0, 320.0),
    ] {
        assert!(poly.points.iter().any(|p| close(*p, expected)));
    }
}

#[test]
fn off_screen_and_transparent_objects_are_dropped() {
    let mut scene = Scene::new();
    scene.add(square(50.0, 0.0, Rgba8::WHITE));
    scene.add(square(0.0, 0.0, Rgba8::WHITE).with_opacity(0));
    scene.add(square(0.0, 0.0, Rgba8::rgba(255, 255, 255, 0)));
    assert!(scene.compose().is_empty());
}

#[test]
fn object_opacity_scales_tint_alpha() {
    let mut scene = Scene::new();
    scene.add(square(0.0, 0.0, Rgba8::rgba(255, 0, 0, 128)).with_opacity(128));
    let list = scene.compose();
    assert_eq!(polygons(&list)[0].color.a, 64);
}

#[test]
fn textures_resolve_through_registry_or_are_skipped() {
    let mut scene = Scene::new();
    let surface = Surface::texture("hero", Transform::default());
    scene.add(Object::new(unit(0.0, 0.0)).with_surface("img", surface.clone()));
    assert!(scene.compose().is_empty());

    scene.textures.insert("hero", TextureHandle(7));
    let list = scene.compose();
    let quads = quads(&list);
    assert_eq!(quads.len(), 1);
    assert_eq!(quads[0].texture, TextureHandle(7));
    assert_eq!(quads[0].dest, Rect::new(400.0, 300.0, 40.0, 40.0));
    assert_eq!(quads[0].tint, Rgba8::WHITE);
}

#[test]
fn mirrored_object_flips_its_quad() {
    let mut scene = Scene::new();
    scene.textures.insert("hero", TextureHandle(1));
    scene.add(
        Object::new(Transform::at(Vec2::ZERO, Vec2::new(-1.0, 1.0)))
            .with_surface("img", Surface::texture("hero", Transform::default())),
    );
    let list = scene.compose();
    assert!(quads(&list)[0].flip.flips_x());
}

#[test]
fn hidden_surfaces_are_skipped_but_siblings_drawn() {
    let mut scene = Scene::new();
    scene.add(
        square(0.0, 0.0, Rgba8::WHITE).with_surface(
            "ghost",
            Surface::color(Rgba8::BLACK, Transform::default()).with_hidden(true),
        ),
    );
    assert_eq!(scene.compose().len(), 1);
}

#[test]
fn surfaces_paint_by_index() {
    let mut scene = Scene::new();
    scene.add(
        Object::new(unit(0.0, 0.0))
            .with_surface("a", Surface::color(Rgba8::BLACK, Transform::default()).with_index(2))
            .with_surface("b", Surface::color(Rgba8::WHITE, Transform::default())),
    );
    let list = scene.compose();
    let colors: Vec<Rgba8> = polygons(&list).iter().map(|p| p.color).collect();
    assert_eq!(colors, vec![Rgba8::WHITE, Rgba8::BLACK]);
}

#[test]
fn ellipse_border_uses_configured_segments() {
    let mut scene = Scene::new();
    scene.opts.ellipse_segments = 12;
    let border = BorderSurface {
        thickness: 2.0,
        filled: false,
        shape: BorderShape::Ellipse,
    };
    scene.add(Object::new(unit(0.0, 0.0)).with_surface(
        "ring",
        Surface::new(SurfaceKind::Border(border), Transform::default()),
    ));
    let list = scene.compose();
    let ring = polygons(&list)[0];
    assert_eq!(ring.points.len(), 12);
    assert!(!ring.filled);
    assert_eq!(ring.thickness, 2.0);
    assert!(close(ring.points[0], Vec2::new(420.0, 300.0)));
}

#[test]
fn debug_hitboxes_follow_surfaces() {
    let mut scene = Scene::new();
    scene.opts.debug_hitboxes = true;
    scene.add(
        square(0.0, 0.0, Rgba8::WHITE)
            .with_hitbox("h", Hitbox::new(Transform::default(), 0).with_color(Rgba8::rgb(0, 255, 0))),
    );
    let list = scene.compose();
    let polys = polygons(&list);
    assert_eq!(polys.len(), 2);
    assert!(polys[0].filled);
    assert!(!polys[1].filled);
    assert_eq!(polys[1].color, Rgba8::rgb(0, 255, 0));
}

#[test]
fn submit_forwards_every_op_in_order() {
    let mut scene = Scene::new();
    scene.textures.insert("hero", TextureHandle(3));
    scene.add(square(0.0, 0.0, Rgba8::WHITE));
    scene.add(
        Object::new(unit(1.0, 1.0))
            .with_surface("img", Surface::texture("hero", Transform::default())),
    );
    let list = scene.compose();
    let mut raster = RecordingRasterizer::new();
    submit(&list, &mut raster).unwrap();
    assert_eq!(raster.ops, list.ops);
    assert_eq!(raster.quads().count(), 1);
    assert_eq!(raster.polygons().count(), 1);
}
