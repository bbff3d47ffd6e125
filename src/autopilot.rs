//! Computer player for headless runs
//!
//! Presses each side's bound keys so that the collider nearest the ball lines up
//! with it. A side the ball is moving away from drifts back to the middle. A slow
//! wobble on the target keeps rallies from settling into identical loops.

use crate::input::HeldKeys;
use crate::sim::{Game, Side};

/// Fraction of a collider's height treated as "lined up"
const DEAD_ZONE: f32 = 0.25;
/// Wobble amplitude as a fraction of the tracking collider's height
const WOBBLE: f32 = 0.3;

#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    frames: u64,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys to hold for the next frame of `game`
    pub fn keys(&mut self, game: &Game) -> HeldKeys {
        self.frames += 1;
        let mut keys = HeldKeys::new();
        if game.is_over() {
            return keys;
        }

        let inputs = game.config().inputs;
        for (side, binding) in [(Side::Left, inputs.p1), (Side::Right, inputs.p2)] {
            let target = self.target_y(game, side);
            let Some((center, height)) = nearest_collider(game, side, target) else {
                continue;
            };

            let dead_zone = height * DEAD_ZONE;
            let wobble = (self.frames as f32 * 0.01).sin() * height * WOBBLE;
            let error = target + wobble - center;
            if error > dead_zone {
                keys.press(binding.down);
            } else if error < -dead_zone {
                keys.press(binding.up);
            }
        }
        keys
    }

    fn target_y(&self, game: &Game, side: Side) -> f32 {
        let ball = game.ball();
        let incoming = match side {
            Side::Left => ball.direction.x < 0.0,
            Side::Right => ball.direction.x > 0.0,
        };
        if ball.is_moving() && incoming {
            ball.position().y
        } else {
            game.field().center().y
        }
    }
}

/// Centre y and height of the collider on `side` closest to `y`
fn nearest_collider(game: &Game, side: Side, y: f32) -> Option<(f32, f32)> {
    game.groups_on(side)
        .flat_map(|group| group.colliders())
        .map(|collider| {
            let bounds = collider.paddle.bounds();
            (bounds.center().y, bounds.height())
        })
        .min_by(|a, b| {
            (a.0 - y)
                .abs()
                .partial_cmp(&(b.0 - y).abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
}
