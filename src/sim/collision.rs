//! Axis-aligned collision testing
//!
//! Overlap is strict: rectangles that merely touch along an edge or a
//! corner do not collide. macroquad's `Rect::overlaps` is edge-inclusive,
//! which would make a pixel-perfect graze lethal.

use macroquad::math::Rect;

/// Strict AABB overlap test.
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.w && b.x < a.x + a.w && a.y < b.y + b.h && b.y < a.y + a.h
}
