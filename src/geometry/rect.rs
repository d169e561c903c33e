use crate::foundation::core::Vec2;
use crate::foundation::math::rotate_point;

/// Side of an axis-aligned rect that was penetrated first.
///
/// Faces follow screen orientation: `Top` is toward decreasing y.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Face {
    /// Toward decreasing y.
    Top,
    /// Toward increasing x.
    Right,
    /// Toward increasing y.
    Bottom,
    /// Toward decreasing x.
    Left,
}

impl Face {
    /// The face on the other rect that touches this one.
    pub fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }
}

/// Axis-aligned rect stored as center and full extent.
///
/// `(x, y)` is always the **center**; `(w, h)` is the full width and height.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    /// Center x.
    pub x: f64,
    /// Center y.
    pub y: f64,
    /// Full width.
    pub w: f64,
    /// Full height.
    pub h: f64,
}

impl Rect {
    /// Build from center and extent.
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Build from center and size vectors.
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::new(center.x, center.y, size.x, size.y)
    }

    /// Center point.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Full extent.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    /// Left edge.
    pub fn min_x(&self) -> f64 {
        self.x - self.w / 2.0
    }

    /// Right edge.
    pub fn max_x(&self) -> f64 {
        self.x + self.w / 2.0
    }

    /// Top edge.
    pub fn min_y(&self) -> f64 {
        self.y - self.h / 2.0
    }

    /// Bottom edge.
    pub fn max_y(&self) -> f64 {
        self.y + self.h / 2.0
    }

    /// Same extent, moved to `center`.
    pub fn with_center(self, center: Vec2) -> Self {
        Self::from_center(center, self.size())
    }

    /// Width and height exchanged.
    pub fn transposed(self) -> Self {
        Self::new(self.x, self.y, self.h, self.w)
    }

    /// Strict overlap test on both axes.
    pub fn collides(&self, other: &Rect) -> bool {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx.abs() < (self.w + other.w) / 2.0 && dy.abs() < (self.h + other.h) / 2.0
    }

    /// Face of `self` through which `other` penetrates, by minimal penetration depth.
    ///
    /// Returns `None` when the rects do not overlap. Ties between the axes resolve to the
    /// x axis.
    pub fn collided_face(&self, other: &Rect) -> Option<Face> {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let depth_x = (self.w + other.w) / 2.0 - dx.abs();
        let depth_y = (self.h + other.h) / 2.0 - dy.abs();
        if depth_x <= 0.0 || depth_y <= 0.0 {
            return None;
        }
        if depth_x <= depth_y {
            Some(if dx >= 0.0 { Face::Right } else { Face::Left })
        } else {
            Some(if dy >= 0.0 { Face::Bottom } else { Face::Top })
        }
    }

    /// Return `true` if `point` lies inside the rect, edges included.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min_x()
            && point.x <= self.max_x()
            && point.y >= self.min_y()
            && point.y <= self.max_y()
    }

    /// Strict overlap with a circle.
    pub fn collides_circle(&self, center: Vec2, radius: f64) -> bool {
        let nearest = Vec2::new(
            center.x.clamp(self.min_x(), self.max_x()),
            center.y.clamp(self.min_y(), self.max_y()),
        );
        let d = center - nearest;
        if d.x == 0.0 && d.y == 0.0 {
            return true;
        }
        d.hypot2() < radius * radius
    }

    /// Corners in order top-left, top-right, bottom-right, bottom-left (pre-rotation).
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.min_x(), self.min_y()),
            Vec2::new(self.max_x(), self.min_y()),
            Vec2::new(self.max_x(), self.max_y()),
            Vec2::new(self.min_x(), self.max_y()),
        ]
    }

    /// Corners rotated by `deg` around `pivot`, same order as [`Rect::corners`].
    pub fn rotated_corners(&self, pivot: Vec2, deg: f64) -> [Vec2; 4] {
        self.corners().map(|c| rotate_point(c, pivot, deg))
    }

    /// Rect whose center is rotated around `pivot`. Extent is unchanged.
    pub fn rotate_center(self, pivot: Vec2, deg: f64) -> Self {
        self.with_center(rotate_point(self.center(), pivot, deg))
    }

    /// Rect with every component multiplied by `factor`.
    pub fn scale(self, factor: f64) -> Self {
        Self::new(
            self.x * factor,
            self.y * factor,
            self.w * factor,
            self.h * factor,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/rect.rs"]
mod tests;
