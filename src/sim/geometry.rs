//! Axis-aligned obstacle geometry
//!
//! Obstacles are rectangles in screen space (y grows downward). The physics
//! step assumes every rectangle has positive extent, so construction is the
//! only place degenerate input is handled.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Rejected obstacle geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// Width or height is zero or negative
    Degenerate { width: f32, height: f32 },
    /// A coordinate is NaN or infinite
    NonFinite,
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::Degenerate { width, height } => {
                write!(f, "obstacle has no area ({width} x {height})")
            }
            GeometryError::NonFinite => write!(f, "obstacle has non-finite coordinates"),
        }
    }
}

impl std::error::Error for GeometryError {}

/// Side of a rectangle, in tie-break order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    /// Unit normal pointing out of the rectangle through this side
    pub fn outward_normal(self) -> Vec2 {
        match self {
            Edge::Left => Vec2::NEG_X,
            Edge::Right => Vec2::X,
            Edge::Top => Vec2::NEG_Y,
            Edge::Bottom => Vec2::Y,
        }
    }
}

/// A static rectangular obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Obstacle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Result<Self, GeometryError> {
        if ![x, y, width, height].iter().all(|v| v.is_finite()) {
            return Err(GeometryError::NonFinite);
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(GeometryError::Degenerate { width, height });
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Point containment, edges included
    pub fn contains_point(&self, p: Vec2) -> bool {
        self.left() <= p.x && p.x <= self.right() && self.top() <= p.y && p.y <= self.bottom()
    }

    /// Area overlap with another rectangle (touching edges do not count)
    pub fn intersects(&self, other: &Obstacle) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Area overlap with the square of half extent `half` centered on `center`
    pub fn overlaps_square(&self, center: Vec2, half: f32) -> bool {
        self.left() < center.x + half
            && center.x - half < self.right()
            && self.top() < center.y + half
            && center.y - half < self.bottom()
    }

    /// Nearest edge to a point inside the rectangle, with its distance.
    ///
    /// Ties resolve in left, right, top, bottom order. The order is arbitrary
    /// (a point on a corner has no single physical normal) but stable.
    pub fn nearest_edge(&self, p: Vec2) -> (Edge, f32) {
        let candidates = [
            (Edge::Left, p.x - self.left()),
            (Edge::Right, self.right() - p.x),
            (Edge::Top, p.y - self.top()),
            (Edge::Bottom, self.bottom() - p.y),
        ];
        let mut best = candidates[0];
        for &candidate in &candidates[1..] {
            if candidate.1 < best.1 {
                best = candidate;
            }
        }
        best
    }
}

/// Distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a - b).length()
}

/// Mirror `vel` off a surface with unit `normal` if it is heading into it.
///
/// Velocity already moving away is returned unchanged, so a ball pushed out
/// of a wall can never be turned back into it.
#[inline]
pub fn reflect_away(vel: Vec2, normal: Vec2) -> Vec2 {
    let along = vel.dot(normal);
    if along < 0.0 {
        vel - 2.0 * along * normal
    } else {
        vel
    }
}

/// Whether two circles overlap (touching does not count)
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    distance(a, b) < a_radius + b_radius
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> Obstacle {
        Obstacle::new(100.0, 100.0, 80.0, 40.0).unwrap()
    }

    #[test]
    fn test_rejects_degenerate_rects() {
        assert_eq!(
            Obstacle::new(0.0, 0.0, 0.0, 10.0),
            Err(GeometryError::Degenerate {
                width: 0.0,
                height: 10.0
            })
        );
        assert!(Obstacle::new(0.0, 0.0, 10.0, -1.0).is_err());
        assert_eq!(
            Obstacle::new(f32::NAN, 0.0, 10.0, 10.0),
            Err(GeometryError::NonFinite)
        );
    }

    #[test]
    fn test_contains_point_is_inclusive() {
        let r = rect();
        assert!(r.contains_point(Vec2::new(100.0, 100.0)));
        assert!(r.contains_point(Vec2::new(180.0, 140.0)));
        assert!(!r.contains_point(Vec2::new(180.1, 120.0)));
    }

    #[test]
    fn test_intersects_ignores_touching() {
        let r = rect();
        let touching = Obstacle::new(180.0, 100.0, 10.0, 10.0).unwrap();
        let overlapping = Obstacle::new(179.0, 139.0, 10.0, 10.0).unwrap();
        assert!(!r.intersects(&touching));
        assert!(r.intersects(&overlapping));
        assert!(overlapping.intersects(&r));
    }

    #[test]
    fn test_overlaps_square() {
        let r = rect();
        // Square spanning 58..102 on x reaches into the left face; 56..100 only touches it
        assert!(r.overlaps_square(Vec2::new(80.0, 120.0), 22.0));
        assert!(!r.overlaps_square(Vec2::new(78.0, 120.0), 22.0));
        assert!(r.overlaps_square(Vec2::new(140.0, 120.0), 5.0));
    }

    #[test]
    fn test_nearest_edge() {
        let r = rect();
        assert_eq!(r.nearest_edge(Vec2::new(102.0, 120.0)).0, Edge::Left);
        assert_eq!(r.nearest_edge(Vec2::new(178.0, 120.0)).0, Edge::Right);
        assert_eq!(r.nearest_edge(Vec2::new(140.0, 101.0)).0, Edge::Top);
        assert_eq!(r.nearest_edge(Vec2::new(140.0, 139.0)).0, Edge::Bottom);
    }

    #[test]
    fn test_nearest_edge_tie_break_order() {
        let r = rect();
        // Top-left corner: left and top tie, left wins
        assert_eq!(r.nearest_edge(Vec2::new(100.0, 100.0)).0, Edge::Left);
        // Bottom-right corner: right and bottom tie, right wins
        assert_eq!(r.nearest_edge(Vec2::new(180.0, 140.0)).0, Edge::Right);
        // Top-right corner: right and top tie, right wins
        assert_eq!(r.nearest_edge(Vec2::new(180.0, 100.0)).0, Edge::Right);
    }

    #[test]
    fn test_reflect_away() {
        let n = Edge::Left.outward_normal();
        assert_eq!(reflect_away(Vec2::new(8.0, 1.0), n), Vec2::new(-8.0, 1.0));
        // Already leaving: untouched
        assert_eq!(reflect_away(Vec2::new(-8.0, 1.0), n), Vec2::new(-8.0, 1.0));
        // Grazing along the surface: untouched
        assert_eq!(reflect_away(Vec2::new(0.0, 3.0), n), Vec2::new(0.0, 3.0));
    }

    #[test]
    fn test_circles_overlap() {
        assert!(circles_overlap(Vec2::ZERO, 22.0, Vec2::new(28.0, 0.0), 7.0));
        assert!(!circles_overlap(Vec2::ZERO, 22.0, Vec2::new(29.0, 0.0), 7.0));
    }
}
