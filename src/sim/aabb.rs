//! Axis-aligned bounding box geometry
//!
//! A box is stored as its top-left corner plus size. Edges and centre are derived
//! and can be assigned; assigning one moves the box without resizing it.
//!
//! Every comparison is strict: boxes that only share an edge neither overlap nor
//! contain one another.

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    x: f32,
    y: f32,
    w: f32,
    h: f32,
}

impl Aabb {
    /// Box from its top-left corner and size (negative sizes are clamped to zero)
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            x,
            y,
            w: w.max(0.0),
            h: h.max(0.0),
        }
    }

    /// Box of the given size centred on `center`
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let mut aabb = Self::new(0.0, 0.0, size.x, size.y);
        aabb.set_center(center);
        aabb
    }

    /// Top-left corner
    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn set_position(&mut self, pos: Vec2) {
        self.x = pos.x;
        self.y = pos.y;
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.w
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.h
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    #[inline]
    pub fn set_center(&mut self, center: Vec2) {
        self.x = center.x - self.w / 2.0;
        self.y = center.y - self.h / 2.0;
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn set_top(&mut self, value: f32) {
        self.y = value;
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn set_left(&mut self, value: f32) {
        self.x = value;
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn set_right(&mut self, value: f32) {
        self.x = value - self.w;
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn set_bottom(&mut self, value: f32) {
        self.y = value - self.h;
    }

    /// Strict point containment (points on an edge are outside)
    pub fn contains(&self, point: Vec2) -> bool {
        self.left() < point.x
            && point.x < self.right()
            && self.top() < point.y
            && point.y < self.bottom()
    }

    /// True iff this box lies strictly inside `parent`'s four edges
    pub fn is_bounded_within(&self, parent: &Aabb) -> bool {
        parent.left() < self.left()
            && self.right() < parent.right()
            && parent.top() < self.top()
            && self.bottom() < parent.bottom()
    }

    /// Minkowski difference `self - other`
    ///
    /// Its half-extents are the sum of both boxes' half-extents and it is centred
    /// on `self.center - other.center`. The boxes overlap exactly when the origin
    /// lies inside it.
    pub fn minkowski_difference(&self, other: &Aabb) -> Aabb {
        let half = (self.size() + other.size()) / 2.0;
        let center = self.center() - other.center();
        Aabb {
            x: center.x - half.x,
            y: center.y - half.y,
            w: half.x * 2.0,
            h: half.y * 2.0,
        }
    }

    /// Strict overlap test (touching edges do not overlap)
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.minkowski_difference(other).contains(Vec2::ZERO)
    }
}
