//! Hitbox geometry: axis-aligned rectangles and convex polygons.
//!
//! Bullets, planes and power-ups carry axis-aligned rect hitboxes; the player
//! craft carries a triangular wedge. The polygon–rect test is a true-area
//! intersection (separating axis theorem), not a bounding-box overlap, so a
//! bullet grazing the corner of the player's bounding box without touching
//! the wedge itself does not register.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::types::{Position, Size};

/// Axis-aligned rectangle in screen space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Hitbox of an entity from its position and extent.
    pub fn from_entity(pos: Position, size: Size) -> Self {
        Self::new(pos.x, pos.y, size.w, size.h)
    }

    /// Strict overlap: shared edges or corners do not count as intersection.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }

    /// The four corners, counter-clockwise from the top-left.
    fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.x, self.y),
            Vec2::new(self.x, self.y + self.h),
            Vec2::new(self.x + self.w, self.y + self.h),
            Vec2::new(self.x + self.w, self.y),
        ]
    }
}

/// A convex polygon in screen space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub vertices: Vec<Vec2>,
}

impl Polygon {
    /// Build from model-space vertices translated to a screen position.
    /// Vertices must describe a convex shape.
    pub fn translated(model: &[(f32, f32)], origin: Position) -> Self {
        Self {
            vertices: model
                .iter()
                .map(|&(vx, vy)| Vec2::new(origin.x + vx, origin.y + vy))
                .collect(),
        }
    }

    /// Axis-aligned bounding rect.
    pub fn bounds(&self) -> Rect {
        let mut min = Vec2::splat(f32::INFINITY);
        let mut max = Vec2::splat(f32::NEG_INFINITY);
        for v in &self.vertices {
            min = min.min(*v);
            max = max.max(*v);
        }
        Rect::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// True-area intersection with an axis-aligned rect.
    ///
    /// Separating axis theorem over the rect's two axes plus one normal per
    /// polygon edge. Touching without overlap does not intersect, matching
    /// `Rect::intersects`.
    pub fn intersects_rect(&self, rect: &Rect) -> bool {
        if self.vertices.len() < 3 || rect.w <= 0.0 || rect.h <= 0.0 {
            return false;
        }

        let corners = rect.corners();

        // Rect axes first: cheap, and rejects most far-apart pairs.
        let mut axes = vec![Vec2::X, Vec2::Y];
        for i in 0..self.vertices.len() {
            let edge = self.vertices[(i + 1) % self.vertices.len()] - self.vertices[i];
            axes.push(Vec2::new(-edge.y, edge.x));
        }

        for axis in axes {
            let (poly_min, poly_max) = project(&self.vertices, axis);
            let (rect_min, rect_max) = project(&corners, axis);
            if poly_max <= rect_min || rect_max <= poly_min {
                return false;
            }
        }
        true
    }
}

/// Project points onto an axis, returning the (min, max) interval.
fn project(points: &[Vec2], axis: Vec2) -> (f32, f32) {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for p in points {
        let d = p.dot(axis);
        min = min.min(d);
        max = max.max(d);
    }
    (min, max)
}
