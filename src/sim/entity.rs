//! Simulated objects: the shared [`Entity`] body and its thin variants
//!
//! An entity's position is its box centre; there is no separate position state.

use std::ops::{Deref, DerefMut};

use glam::Vec2;

use super::aabb::Aabb;
use crate::render::Canvas;

/// Box, heading and scalar speed
///
/// `direction` is not required to be unit length; its magnitude multiplies `speed`.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    bounds: Aabb,
    pub direction: Vec2,
    pub speed: f32,
}

impl Entity {
    /// Entity of the given size centred on `position`, at rest
    pub fn new(position: Vec2, size: Vec2, speed: f32) -> Self {
        Self {
            bounds: Aabb::from_center_size(position, size),
            direction: Vec2::ZERO,
            speed,
        }
    }

    #[inline]
    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.bounds.center()
    }

    #[inline]
    pub fn set_position(&mut self, center: Vec2) {
        self.bounds.set_center(center);
    }

    pub fn set_left_edge(&mut self, value: f32) {
        self.bounds.set_left(value);
    }

    pub fn set_right_edge(&mut self, value: f32) {
        self.bounds.set_right(value);
    }

    pub fn set_top_edge(&mut self, value: f32) {
        self.bounds.set_top(value);
    }

    pub fn set_bottom_edge(&mut self, value: f32) {
        self.bounds.set_bottom(value);
    }

    /// Put this entity's left edge on `parent`'s and its top `offset` below `parent`'s top
    pub fn align_to(&mut self, parent: &Entity, offset: f32) {
        self.bounds.set_left(parent.bounds.left());
        self.bounds.set_top(parent.bounds.top() + offset);
    }

    /// Integrate position by `direction * speed * delta`
    pub fn update(&mut self, delta: f32) {
        let center = self.position() + self.direction * self.speed * delta;
        self.bounds.set_center(center);
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.direction != Vec2::ZERO
    }

    /// Box-box overlap, strict
    pub fn is_colliding(&self, other: &Entity) -> bool {
        self.bounds.overlaps(&other.bounds)
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        let pos = self.bounds.position();
        let size = self.bounds.size();
        canvas.rect(pos.x, pos.y, size.x, size.y);
    }
}

/// A controller or one of its collider segments
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle(Entity);

impl Paddle {
    pub fn new(width: f32, height: f32, speed: f32) -> Self {
        Self(Entity::new(Vec2::ZERO, Vec2::new(width, height), speed))
    }
}

impl Deref for Paddle {
    type Target = Entity;

    fn deref(&self) -> &Entity {
        &self.0
    }
}

impl DerefMut for Paddle {
    fn deref_mut(&mut self) -> &mut Entity {
        &mut self.0
    }
}

/// The ball; its collision shape is the square that bounds it
#[derive(Debug, Clone, PartialEq)]
pub struct Ball(Entity);

impl Ball {
    pub fn new(radius: f32) -> Self {
        let diameter = radius * 2.0;
        Self(Entity::new(Vec2::ZERO, Vec2::splat(diameter), 0.0))
    }

    pub fn radius(&self) -> f32 {
        self.0.bounds().width() / 2.0
    }

    /// Integrate, then report `delta` to `on_motion` if the ball is in play
    ///
    /// A ball held at centre for a serve has a zero direction and reports nothing.
    pub fn update(&mut self, delta: f32, mut on_motion: impl FnMut(f32)) {
        self.0.update(delta);
        if self.0.is_moving() {
            on_motion(delta);
        }
    }

    /// Hold at `center` with no heading or speed
    pub fn stop_at(&mut self, center: Vec2) {
        self.0.set_position(center);
        self.0.direction = Vec2::ZERO;
        self.0.speed = 0.0;
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        let center = self.0.position();
        canvas.circle(center.x, center.y, self.radius() * 2.0);
    }
}

impl Deref for Ball {
    type Target = Entity;

    fn deref(&self) -> &Entity {
        &self.0
    }
}

impl DerefMut for Ball {
    fn deref_mut(&mut self) -> &mut Entity {
        &mut self.0
    }
}

/// Scoring zone behind a paddle line; drawn for debugging, never collided with
#[derive(Debug, Clone, PartialEq)]
pub struct Goal(Entity);

impl Goal {
    pub fn new(width: f32, height: f32) -> Self {
        Self(Entity::new(Vec2::ZERO, Vec2::new(width, height), 0.0))
    }
}

impl Deref for Goal {
    type Target = Entity;

    fn deref(&self) -> &Entity {
        &self.0
    }
}

impl DerefMut for Goal {
    fn deref_mut(&mut self) -> &mut Entity {
        &mut self.0
    }
}
