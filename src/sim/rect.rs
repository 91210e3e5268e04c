//! Axis-aligned rectangle geometry
//!
//! Every collidable entity in the world is an AABB. Edges are derived from
//! the stored top-left position and size, never stored themselves.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box. `pos` is the top-left corner; y grows
/// downward. Width and height must be positive (enforced at level load).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Interval overlap on both axes. Touching edges count as overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() <= other.right()
            && self.right() >= other.left()
            && self.top() <= other.bottom()
            && self.bottom() >= other.top()
    }

    /// Check if a point is inside the rectangle (edges inclusive)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Shift the rectangle in place (scroll and integration both use this)
    pub fn translate(&mut self, delta: Vec2) {
        self.pos += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.center(), Vec2::new(25.0, 40.0));
    }

    #[test]
    fn test_overlaps_separated() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        // Separated vertically
        let c = Rect::new(0.0, 30.0, 10.0, 10.0);
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_overlaps_touching_edges_count() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Shares the x=10 edge exactly
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        // Shares only the corner at (10, 10)
        let c = Rect::new(10.0, 10.0, 5.0, 5.0);
        assert!(a.overlaps(&c));
    }

    #[test]
    fn test_overlaps_contained() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 10.0, 10.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_contains_point() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Vec2::new(5.0, 5.0)));
        assert!(r.contains(Vec2::new(10.0, 10.0))); // edge inclusive
        assert!(!r.contains(Vec2::new(10.1, 5.0)));
    }

    #[test]
    fn test_translate() {
        let mut r = Rect::new(0.0, 0.0, 10.0, 10.0);
        r.translate(Vec2::new(-5.0, 3.0));
        assert_eq!(r.pos, Vec2::new(-5.0, 3.0));
        assert_eq!(r.size, Vec2::new(10.0, 10.0));
    }
}
