use super::*;
use crate::foundation::core::Canvas;

fn camera() -> Camera {
    Camera::new(Canvas::new(800, 600).unwrap(), 20.0, 40.0).unwrap()
}

fn close(a: Vec2, b: Vec2) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[test]
fn camera_center_maps_to_window_center() {
    let mut cam = camera();
    cam.set_translate(Vec2::new(7.0, -3.0));
    let px = level_point_to_pixel(&cam, Vec2::new(7.0, -3.0), false);
    assert_eq!(px, Vec2::new(400.0, 300.0));
    let px = level_point_to_pixel(&cam, Vec2::ZERO, true);
    assert_eq!(px, Vec2::new(400.0, 300.0));
}

#[test]
fn block_size_depends_on_space() {
    let cam = camera();
    let r = level_to_pixel(&cam, Rect::new(1.0, 0.0, 2.0, 1.0), false);
    assert_eq!(r, Rect::new(440.0, 300.0, 80.0, 40.0));
    let r = level_to_pixel(&cam, Rect::new(1.0, 0.0, 2.0, 1.0), true);
    assert_eq!(r, Rect::new(420.0, 300.0, 40.0, 20.0));
}

#[test]
fn inverted_origin_mirrors_axes() {
    let mut cam = camera();
    cam.set_inversion(false, true);
    let up = level_point_to_pixel(&cam, Vec2::new(0.0, 1.0), false);
    assert_eq!(up, Vec2::new(400.0, 260.0));
}

#[test]
fn round_trip_holds_for_every_inversion() {
    let world = Rect::new(3.25, -1.5, 2.0, 0.5);
    for (ix, iy) in [(false, false), (true, false), (false, true), (true, true)] {
        let mut cam = camera();
        cam.set_translate(Vec2::new(-4.5, 2.25));
        cam.set_inversion(ix, iy);
        for absolute in [false, true] {
            let back = pixel_to_level(&cam, level_to_pixel(&cam, world, absolute), absolute);
            assert!(close(back.center(), world.center()), "{ix} {iy} {absolute}");
            assert!(close(back.size(), world.size()));
        }
    }
}

#[test]
fn single_inversion_reverses_rotation() {
    let mut cam = camera();
    assert_eq!(screen_rotation(&cam, 30.0), 30.0);
    cam.set_inversion(true, false);
    assert_eq!(screen_rotation(&cam, 30.0), 330.0);
    cam.set_inversion(true, true);
    assert_eq!(screen_rotation(&cam, 30.0), 30.0);
}
