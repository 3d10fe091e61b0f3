//! Axis-aligned collision primitives
//!
//! Every entity is a box anchored at its top-left corner. Projectiles are
//! treated as points.

use glam::Vec2;

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Top-left corner
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Square box of side `side` anchored at `min`
    pub fn square(min: Vec2, side: f32) -> Self {
        Self::new(min, Vec2::splat(side))
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Point containment, inclusive on the top-left edges and exclusive on
    /// the bottom-right edges
    pub fn contains_point(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.min.x && point.x < max.x && point.y >= self.min.y && point.y < max.y
    }

    /// Overlap test; boxes that merely share an edge do not intersect
    pub fn intersects(&self, other: &Aabb) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.min.x < b_max.x && other.min.x < a_max.x && self.min.y < b_max.y && other.min.y < a_max.y
    }
}

/// Check if a point lies inside the arena rectangle `[0, width] × [0, height]`
#[inline]
pub fn point_in_arena(point: Vec2, width: f32, height: f32) -> bool {
    point.x >= 0.0 && point.x <= width && point.y >= 0.0 && point.y <= height
}

/// Clamp a box's top-left corner so the whole box stays inside the arena
#[inline]
pub fn clamp_to_arena(min: Vec2, size: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new(
        min.x.clamp(0.0, (width - size).max(0.0)),
        min.y.clamp(0.0, (height - size).max(0.0)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_point_edges() {
        let b = Aabb::square(Vec2::new(10.0, 10.0), 48.0);
        assert!(b.contains_point(Vec2::new(10.0, 10.0)));
        assert!(b.contains_point(Vec2::new(57.9, 57.9)));
        assert!(!b.contains_point(Vec2::new(58.0, 30.0)));
        assert!(!b.contains_point(Vec2::new(9.9, 30.0)));
    }

    #[test]
    fn test_intersects() {
        let a = Aabb::square(Vec2::ZERO, 64.0);
        let b = Aabb::square(Vec2::new(60.0, 60.0), 48.0);
        let c = Aabb::square(Vec2::new(64.0, 0.0), 48.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        // Touching edges only
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_center() {
        let b = Aabb::square(Vec2::new(100.0, 200.0), 64.0);
        assert_eq!(b.center(), Vec2::new(132.0, 232.0));
    }

    #[test]
    fn test_point_in_arena() {
        assert!(point_in_arena(Vec2::new(0.0, 768.0), 1024.0, 768.0));
        assert!(!point_in_arena(Vec2::new(-0.1, 5.0), 1024.0, 768.0));
        assert!(!point_in_arena(Vec2::new(5.0, 768.1), 1024.0, 768.0));
    }

    #[test]
    fn test_clamp_to_arena() {
        let p = clamp_to_arena(Vec2::new(-5.0, 900.0), 64.0, 1024.0, 768.0);
        assert_eq!(p, Vec2::new(0.0, 704.0));
    }
}
