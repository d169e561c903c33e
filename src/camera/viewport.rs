use crate::foundation::core::{Canvas, Vec2};
use crate::foundation::error::{VantageError, VantageResult};
use crate::geometry::rect::Rect;
use crate::scene::object::Object;

/// Reference frame duration for [`Camera::smoothing`], in milliseconds.
const SMOOTHING_FRAME_MS: f64 = 1000.0 / 60.0;

/// Per-edge dead zone, in world units, used while following a target.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Padding {
    /// Margin from the left edge.
    pub left: f64,
    /// Margin from the right edge.
    pub right: f64,
    /// Margin from the top (min y) edge.
    pub top: f64,
    /// Margin from the bottom (max y) edge.
    pub bottom: f64,
}

impl Padding {
    /// Same margin on every edge.
    pub fn uniform(v: f64) -> Self {
        Self {
            left: v,
            right: v,
            top: v,
            bottom: v,
        }
    }
}

/// Viewport over world space plus a fixed interface space.
///
/// Heights are never stored: they derive from the window aspect ratio (see
/// [`Camera::get_scale`]).
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    translate: Vec2,
    game_width: f64,
    interface_width: f64,
    smoothing: f64,
    padding: Padding,
    invert_x: bool,
    invert_y: bool,
    canvas: Canvas,
}

impl Camera {
    /// Camera centered on the origin.
    pub fn new(canvas: Canvas, game_width: f64, interface_width: f64) -> VantageResult<Self> {
        let mut camera = Self {
            translate: Vec2::ZERO,
            game_width: 1.0,
            interface_width: 1.0,
            smoothing: 0.0,
            padding: Padding::default(),
            invert_x: false,
            invert_y: false,
            canvas,
        };
        camera.set_game_width(game_width)?;
        camera.set_interface_width(interface_width)?;
        Ok(camera)
    }

    /// World position of the viewport center.
    pub fn translate(&self) -> Vec2 {
        self.translate
    }

    /// Move the viewport instantly.
    pub fn set_translate(&mut self, translate: Vec2) {
        self.translate = translate;
    }

    /// Visible world units across the window.
    pub fn game_width(&self) -> f64 {
        self.game_width
    }

    /// Set the visible world units across the window.
    pub fn set_game_width(&mut self, width: f64) -> VantageResult<()> {
        self.game_width = validate_width(width, "game_width")?;
        Ok(())
    }

    /// Visible interface units across the window.
    pub fn interface_width(&self) -> f64 {
        self.interface_width
    }

    /// Set the visible interface units across the window.
    pub fn set_interface_width(&mut self, width: f64) -> VantageResult<()> {
        self.interface_width = validate_width(width, "interface_width")?;
        Ok(())
    }

    /// Follow smoothing in `[0, 1)`; `0` snaps to the target.
    pub fn smoothing(&self) -> f64 {
        self.smoothing
    }

    /// Set the follow smoothing, clamped into `[0, 0.999]`.
    pub fn set_smoothing(&mut self, smoothing: f64) {
        self.smoothing = smoothing.clamp(0.0, 0.999);
    }

    /// Follow dead zone.
    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Set the follow dead zone.
    pub fn set_padding(&mut self, padding: Padding) {
        self.padding = padding;
    }

    /// Whether increasing world x runs toward the left of the window.
    pub fn invert_x(&self) -> bool {
        self.invert_x
    }

    /// Whether increasing world y runs toward the top of the window.
    pub fn invert_y(&self) -> bool {
        self.invert_y
    }

    /// Set origin inversion per axis.
    pub fn set_inversion(&mut self, invert_x: bool, invert_y: bool) {
        self.invert_x = invert_x;
        self.invert_y = invert_y;
    }

    /// Window size the camera maps onto.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Update the window size (after a resize).
    pub fn set_canvas(&mut self, canvas: Canvas) {
        self.canvas = canvas;
    }

    /// Visible extent for a viewport `width`: `(width, width * height_px / width_px)`.
    pub fn get_scale(&self, width: f64) -> Vec2 {
        Vec2::new(width, width * self.canvas.aspect())
    }

    /// Visible world extent.
    pub fn game_scale(&self) -> Vec2 {
        self.get_scale(self.game_width)
    }

    /// Visible interface extent.
    pub fn interface_scale(&self) -> Vec2 {
        self.get_scale(self.interface_width)
    }

    /// Viewport width for the requested space.
    pub fn width_for(&self, absolute: bool) -> f64 {
        if absolute {
            self.interface_width
        } else {
            self.game_width
        }
    }

    /// Pixels per unit for the requested space.
    pub fn block_size(&self, absolute: bool) -> f64 {
        f64::from(self.canvas.width) / self.width_for(absolute)
    }

    /// Visible world rect.
    pub fn world_rect(&self) -> Rect {
        Rect::from_center(self.translate, self.game_scale())
    }

    /// Visible interface rect (always centered on the interface origin).
    pub fn interface_rect(&self) -> Rect {
        Rect::from_center(Vec2::ZERO, self.interface_scale())
    }

    /// Conservative visibility test against the object's bounding circle.
    pub fn contains_object(&self, object: &Object) -> bool {
        let view = if object.absolute() {
            self.interface_rect()
        } else {
            self.world_rect()
        };
        view.collides_circle(object.transform().translate, object.max_radius())
    }

    /// Move toward keeping `target` inside the padded viewport.
    ///
    /// The remaining distance decays by `smoothing` per 60 Hz frame, scaled to `dt_ms`.
    pub fn follow(&mut self, target: Vec2, dt_ms: f64) {
        let desired = self.follow_destination(target);
        if self.smoothing <= 0.0 || dt_ms <= 0.0 {
            self.translate = desired;
            return;
        }
        let keep = self.smoothing.powf(dt_ms / SMOOTHING_FRAME_MS);
        self.translate = desired + (self.translate - desired) * keep;
    }

    /// Translate that brings `target` just inside the padded viewport.
    pub fn follow_destination(&self, target: Vec2) -> Vec2 {
        let view = self.world_rect();
        let half = view.size() / 2.0;
        let left = (self.padding.left).min(half.x);
        let right = (self.padding.right).min(half.x);
        let top = (self.padding.top).min(half.y);
        let bottom = (self.padding.bottom).min(half.y);

        let mut desired = self.translate;
        let min_x = view.min_x() + left;
        let max_x = view.max_x() - right;
        if target.x < min_x {
            desired.x -= min_x - target.x;
        } else if target.x > max_x {
            desired.x += target.x - max_x;
        }
        let min_y = view.min_y() + top;
        let max_y = view.max_y() - bottom;
        if target.y < min_y {
            desired.y -= min_y - target.y;
        } else if target.y > max_y {
            desired.y += target.y - max_y;
        }
        desired
    }
}

fn validate_width(width: f64, what: &str) -> VantageResult<f64> {
    if !width.is_finite() || width <= 0.0 {
        return Err(VantageError::validation(format!(
            "camera {what} must be finite and > 0"
        )));
    }
    Ok(width)
}

#[cfg(test)]
#[path = "../../tests/unit/camera/viewport.rs"]
mod tests;
