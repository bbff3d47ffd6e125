//! Controllers and their collider segments
//!
//! A controller of height `H` split into `C` colliders is divided into `2C - 1`
//! equal slices. Collider `i` covers slice `2i`, so solid segments alternate with
//! gaps the ball can pass through, like the figures on a foosball rod.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::entity::Paddle;
use crate::config::{ControllerConfig, PaddleConfig};

/// Which half of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Horizontal sign of a ball bouncing away from this side's paddles
    pub fn bounce_sign(&self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }

    pub fn opponent(&self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A solid segment rigidly attached to its controller
#[derive(Debug, Clone, PartialEq)]
pub struct Collider {
    pub paddle: Paddle,
    /// Distance from the controller's top edge to this segment's top edge
    pub offset: f32,
}

/// One controllable paddle and the colliders slaved to it
#[derive(Debug, Clone, PartialEq)]
pub struct PaddleGroup {
    side: Side,
    /// Position in the side's stack, 0 nearest the wall
    index: usize,
    controller: Paddle,
    colliders: Vec<Collider>,
}

impl PaddleGroup {
    pub fn new(side: Side, index: usize, layout: &ControllerConfig, paddles: &PaddleConfig) -> Self {
        let controller = Paddle::new(paddles.width, layout.height, paddles.speed);

        let count = layout.collider_count.max(1);
        let segment = layout.height / (2 * count - 1) as f32;
        let colliders = (0..count)
            .map(|i| Collider {
                paddle: Paddle::new(paddles.width, segment, 0.0),
                offset: 2.0 * i as f32 * segment,
            })
            .collect();

        let mut group = Self {
            side,
            index,
            controller,
            colliders,
        };
        group.align_colliders();
        group
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn controller(&self) -> &Paddle {
        &self.controller
    }

    #[inline]
    pub fn colliders(&self) -> &[Collider] {
        &self.colliders
    }

    /// Vertical input: +1 down, -1 up, 0 still
    pub fn set_direction(&mut self, vertical: f32) {
        self.controller.direction = Vec2::new(0.0, vertical);
    }

    /// Integrate the controller and drag the colliders along
    pub fn update(&mut self, delta: f32) {
        self.controller.update(delta);
        self.align_colliders();
    }

    pub fn align_colliders(&mut self) {
        for collider in &mut self.colliders {
            collider.paddle.align_to(&self.controller, collider.offset);
        }
    }

    /// Snap the controller back inside the field, one pixel clear of the wall
    pub fn clamp_to(&mut self, field: &Aabb) {
        let bounds = *self.controller.bounds();
        if bounds.top() < field.top() {
            self.controller.set_top_edge(field.top() + 1.0);
        } else if bounds.bottom() > field.bottom() {
            self.controller.set_bottom_edge(field.bottom() - 1.0);
        } else {
            return;
        }
        self.align_colliders();
    }

    /// Centre vertically and push back toward the own wall by `gap * (index + 1)`
    pub fn reset(&mut self, field: &Aabb, gap: f32) {
        self.controller.set_position(field.center());
        self.controller.direction = Vec2::ZERO;
        let offset = gap * (self.index + 1) as f32;
        match self.side {
            Side::Left => self.controller.set_left_edge(field.left() + offset),
            Side::Right => self.controller.set_right_edge(field.right() - offset),
        }
        self.align_colliders();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn field() -> Aabb {
        Aabb::new(0.0, 0.0, 400.0, 400.0)
    }

    fn group(side: Side, index: usize, height: f32, collider_count: u32) -> PaddleGroup {
        let paddles = GameConfig::default().paddles;
        let layout = ControllerConfig {
            height,
            collider_count,
        };
        PaddleGroup::new(side, index, &layout, &paddles)
    }

    #[test]
    fn test_single_collider_covers_controller() {
        let mut g = group(Side::Left, 0, 100.0, 1);
        g.reset(&field(), 64.0);
        assert_eq!(g.colliders().len(), 1);
        assert_eq!(g.colliders()[0].paddle.bounds(), g.controller().bounds());
    }

    #[test]
    fn test_collider_segments_alternate() {
        let mut g = group(Side::Left, 0, 240.0, 3);
        g.reset(&field(), 64.0);
        // 240 / (2*3 - 1) = 48
        let top = g.controller().bounds().top();
        let tops: Vec<f32> = g.colliders().iter().map(|c| c.paddle.bounds().top()).collect();
        assert_eq!(tops, vec![top, top + 96.0, top + 192.0]);
        for collider in g.colliders() {
            assert_eq!(collider.paddle.bounds().height(), 48.0);
            assert_eq!(collider.paddle.speed, 0.0);
        }
        // Last segment ends flush with the controller
        assert_eq!(
            g.colliders()[2].paddle.bounds().bottom(),
            g.controller().bounds().bottom()
        );
    }

    #[test]
    fn test_reset_positions() {
        let mut left = group(Side::Left, 0, 100.0, 1);
        let mut right = group(Side::Right, 0, 100.0, 1);
        left.reset(&field(), 64.0);
        right.reset(&field(), 64.0);
        assert_eq!(left.controller().bounds().left(), 64.0);
        assert_eq!(right.controller().bounds().right(), 336.0);
        assert_eq!(left.controller().position().y, 200.0);

        let mut stacked = group(Side::Right, 1, 120.0, 2);
        stacked.reset(&field(), 64.0);
        assert_eq!(stacked.controller().bounds().right(), 272.0);
    }

    #[test]
    fn test_update_drags_colliders() {
        let mut g = group(Side::Right, 0, 100.0, 2);
        g.reset(&field(), 64.0);
        g.set_direction(1.0);
        g.update(40.0);
        // 0.25 px/ms * 40 ms
        assert_eq!(g.controller().position().y, 210.0);
        assert_eq!(
            g.colliders()[0].paddle.bounds().top(),
            g.controller().bounds().top()
        );
        assert_eq!(
            g.colliders()[1].paddle.bounds().left(),
            g.controller().bounds().left()
        );
    }

    #[test]
    fn test_clamp_to_field() {
        let mut g = group(Side::Left, 0, 100.0, 1);
        g.reset(&field(), 64.0);
        g.set_direction(-1.0);
        g.update(1000.0);
        assert!(g.controller().bounds().top() < 0.0);
        g.clamp_to(&field());
        assert_eq!(g.controller().bounds().top(), 1.0);
        assert_eq!(g.colliders()[0].paddle.bounds().top(), 1.0);

        g.set_direction(1.0);
        g.update(4000.0);
        g.clamp_to(&field());
        assert_eq!(g.controller().bounds().bottom(), 399.0);
    }

    #[test]
    fn test_side_helpers() {
        assert_eq!(Side::Left.bounce_sign(), 1.0);
        assert_eq!(Side::Right.bounce_sign(), -1.0);
        assert_eq!(Side::Left.opponent(), Side::Right);
    }
}
