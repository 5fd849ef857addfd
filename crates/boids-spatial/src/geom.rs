//! Axis-aligned boxes and circles used as index boundaries and query ranges.
//!
//! Coordinates follow screen convention: `y` grows downward, so the "top"
//! edge of a box is its minimum `y`.

use boids_core::Vec2;

// ── Aabb ──────────────────────────────────────────────────────────────────────

/// Axis-aligned bounding box stored as center + extents.
///
/// Half-extents are derived once at construction; the fields are private so
/// they can never disagree with the full extents.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    center:      Vec2,
    width:       f32,
    height:      f32,
    half_width:  f32,
    half_height: f32,
}

impl Aabb {
    pub fn new(center_x: f32, center_y: f32, width: f32, height: f32) -> Self {
        Self {
            center: Vec2::new(center_x, center_y),
            width,
            height,
            half_width: width / 2.0,
            half_height: height / 2.0,
        }
    }

    /// The box covering `[0, width] × [0, height]`.
    pub fn from_extent(width: f32, height: f32) -> Self {
        Self::new(width / 2.0, height / 2.0, width, height)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.half_width
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.half_width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y - self.half_height
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y + self.half_height
    }

    /// Inclusive on every edge.
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Separating-axis test; touching edges count as intersecting.
    pub fn intersects(&self, other: &Aabb) -> bool {
        !(self.left() > other.right()
            || self.right() < other.left()
            || self.top() > other.bottom()
            || self.bottom() < other.top())
    }

    /// Clamp the circle center into the box and compare squared distances,
    /// so no square root is taken.
    pub fn intersects_circle(&self, circle: &Circle) -> bool {
        let closest_x = circle.center.x.min(self.right()).max(self.left());
        let closest_y = circle.center.y.min(self.bottom()).max(self.top());
        let dx = circle.center.x - closest_x;
        let dy = circle.center.y - closest_y;
        dx * dx + dy * dy <= circle.radius * circle.radius
    }

    /// The four equal quadrants in `[top-left, top-right, bottom-left, bottom-right]` order.
    pub fn quadrants(&self) -> [Aabb; 4] {
        let qw = self.width / 4.0;
        let qh = self.height / 4.0;
        let hw = self.half_width;
        let hh = self.half_height;
        let Vec2 { x, y } = self.center;
        [
            Aabb::new(x - qw, y - qh, hw, hh),
            Aabb::new(x + qw, y - qh, hw, hh),
            Aabb::new(x - qw, y + qh, hw, hh),
            Aabb::new(x + qw, y + qh, hw, hh),
        ]
    }
}

// ── Circle ────────────────────────────────────────────────────────────────────

/// Circular query range.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    #[inline]
    pub fn new(center_x: f32, center_y: f32, radius: f32) -> Self {
        Self { center: Vec2::new(center_x, center_y), radius }
    }

    #[inline]
    pub fn around(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Euclidean distance from the center is at most `radius`.
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        self.center.distance(point) <= self.radius
    }
}

// ── Region ────────────────────────────────────────────────────────────────────

/// A shape usable as a range query against a spatial index.
///
/// `overlaps` drives subtree pruning and must never return `false` for a
/// boundary that contains a point for which `contains` is `true`.
pub trait Region {
    fn contains(&self, point: Vec2) -> bool;

    fn overlaps(&self, boundary: &Aabb) -> bool;
}

impl Region for Circle {
    #[inline]
    fn contains(&self, point: Vec2) -> bool {
        Circle::contains(self, point)
    }

    #[inline]
    fn overlaps(&self, boundary: &Aabb) -> bool {
        boundary.intersects_circle(self)
    }
}

impl Region for Aabb {
    #[inline]
    fn contains(&self, point: Vec2) -> bool {
        Aabb::contains(self, point)
    }

    #[inline]
    fn overlaps(&self, boundary: &Aabb) -> bool {
        boundary.intersects(self)
    }
}
