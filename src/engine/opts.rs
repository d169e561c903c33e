use crate::camera::viewport::Padding;
use crate::foundation::error::{VantageError, VantageResult};
use crate::geometry::resolve::AXIS_SNAP_DEG;

/// Engine construction options.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineOpts {
    /// World units visible across the window.
    pub game_width: f64,
    /// Interface units visible across the window.
    pub interface_width: f64,
    /// Camera follow smoothing in `[0, 1)`.
    pub camera_smoothing: f64,
    /// Camera follow dead zone.
    pub camera_padding: Padding,
    /// World x grows toward the left of the window.
    pub invert_x: bool,
    /// World y grows toward the top of the window.
    pub invert_y: bool,
    /// Draw hitbox outlines.
    pub debug_hitboxes: bool,
    /// Rotation snap used for hitbox world rects (collision, input, debug outlines).
    pub hitbox_snap_deg: f64,
    /// Segments used to approximate ellipse borders.
    pub ellipse_segments: u32,
}

impl Default for EngineOpts {
    fn default() -> Self {
        Self {
            game_width: 20.0,
            interface_width: 20.0,
            camera_smoothing: 0.0,
            camera_padding: Padding::default(),
            invert_x: false,
            invert_y: false,
            debug_hitboxes: false,
            hitbox_snap_deg: AXIS_SNAP_DEG,
            ellipse_segments: 32,
        }
    }
}

impl EngineOpts {
    /// Parse options from JSON; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> VantageResult<Self> {
        let opts: Self = serde_json::from_str(json)?;
        opts.validate()?;
        Ok(opts)
    }

    /// Check invariants the engine relies on.
    pub fn validate(&self) -> VantageResult<()> {
        for (name, width) in [
            ("game_width", self.game_width),
            ("interface_width", self.interface_width),
        ] {
            if !width.is_finite() || width <= 0.0 {
                return Err(VantageError::validation(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        if !(0.0..1.0).contains(&self.camera_smoothing) {
            return Err(VantageError::validation(
                "camera_smoothing must be in [0, 1)",
            ));
        }
        let p = self.camera_padding;
        if [p.left, p.right, p.top, p.bottom]
            .iter()
            .any(|v| !v.is_finite() || *v < 0.0)
        {
            return Err(VantageError::validation(
                "camera_padding must be finite and >= 0",
            ));
        }
        if !self.hitbox_snap_deg.is_finite() || self.hitbox_snap_deg < 0.0 {
            return Err(VantageError::validation(
                "hitbox_snap_deg must be finite and >= 0",
            ));
        }
        if self.ellipse_segments < 3 {
            return Err(VantageError::validation("ellipse_segments must be >= 3"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/opts.rs"]
mod tests;
