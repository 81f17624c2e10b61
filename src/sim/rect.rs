//! Axis-aligned rectangles shared by the ball, paddle and bricks
//!
//! Screen coordinates: origin at the top-left corner, y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Rectangle covering a screen of the given size
    pub fn from_size(size: Vec2) -> Self {
        Self {
            pos: Vec2::ZERO,
            size,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
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

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.pos = center - self.size * 0.5;
    }

    pub fn set_center_x(&mut self, x: f32) {
        self.pos.x = x - self.size.x * 0.5;
    }

    pub fn set_top(&mut self, top: f32) {
        self.pos.y = top;
    }

    pub fn set_bottom(&mut self, bottom: f32) {
        self.pos.y = bottom - self.size.y;
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.pos += delta;
    }

    /// Strict overlap test: rectangles that only share an edge do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Move this rectangle the minimum distance needed to lie inside `bounds`.
    ///
    /// A rectangle larger than `bounds` on an axis is centred on that axis.
    pub fn clamp_within(&mut self, bounds: &Rect) {
        self.pos.x = clamp_axis(self.pos.x, self.size.x, bounds.pos.x, bounds.size.x);
        self.pos.y = clamp_axis(self.pos.y, self.size.y, bounds.pos.y, bounds.size.y);
    }
}

fn clamp_axis(pos: f32, len: f32, bound_pos: f32, bound_len: f32) -> f32 {
    if len >= bound_len {
        bound_pos + (bound_len - len) / 2.0
    } else {
        pos.clamp(bound_pos, bound_pos + bound_len - len)
    }
}
