//! Planar value types shared by the sampler and the scatter step.

use serde::{Deserialize, Serialize};

/// A point in the 2D sampling plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Componentwise sum, used to offset a frontier point by an annulus draw.
    #[inline]
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    #[inline]
    pub fn distance_squared(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn distance(self, other: Self) -> f32 {
        self.distance_squared(other).sqrt()
    }
}

/// An axis-aligned rectangle `[min, max]`, inclusive on all edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Point2,
    pub max: Point2,
}

impl Rect {
    pub fn new(min: Point2, max: Point2) -> Self {
        Self { min, max }
    }

    /// Rectangle spanning the origin to `(width, height)`.
    pub fn from_size(width: f32, height: f32) -> Self {
        Self { min: Point2::default(), max: Point2::new(width, height) }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Containment test, inclusive of the boundary on every edge.
    #[inline]
    pub fn contains(&self, p: Point2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_inclusive_on_all_edges() {
        let r = Rect::from_size(10.0, 5.0);
        assert!(r.contains(Point2::new(0.0, 0.0)));
        assert!(r.contains(Point2::new(10.0, 5.0)));
        assert!(r.contains(Point2::new(10.0, 0.0)));
        assert!(!r.contains(Point2::new(10.1, 2.0)));
        assert!(!r.contains(Point2::new(5.0, -0.1)));
    }

    #[test]
    fn distance_matches_squared_distance() {
        let a = Point2::new(1.0, 2.0);
        let b = Point2::new(4.0, 6.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
        assert!((a.distance_squared(b) - 25.0).abs() < 1e-6);
    }
}
