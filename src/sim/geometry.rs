//! Axis-aligned rectangle geometry
//!
//! Everything in the game is a box: the avatar, each pipe, the board itself.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle, y growing downwards
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// True if the two rectangles share a positive-area region.
///
/// All four comparisons are strict, so rectangles that merely touch along an
/// edge or a corner do not overlap.
#[inline]
pub fn overlaps(a: Rect, b: Rect) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}
