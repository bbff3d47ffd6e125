//! Per-frame pipeline
//!
//! Every frame runs input, update, collide, draw in that order. Once the match
//! is over only the draw step runs.

use super::collision::{BoundaryContact, bounce_direction, boundary_contact, reflect_off_wall};
use super::paddle_group::Side;
use super::state::{Game, GamePhase};
use crate::consts::*;
use crate::input::{KeyInput, axis};
use crate::render::Canvas;

impl Game {
    /// Advance one frame of `delta` milliseconds and draw it
    pub fn process(&mut self, delta: f32, keys: &dyn KeyInput, canvas: &mut dyn Canvas) {
        match self.phase {
            GamePhase::GameOver => {
                self.draw(canvas);
                self.draw_game_over(canvas);
            }
            GamePhase::Serving | GamePhase::Rallying => {
                self.input(keys);
                self.update(delta);
                self.collide();
                self.draw(canvas);
            }
        }
    }

    fn input(&mut self, keys: &dyn KeyInput) {
        let bindings = self.config.inputs;
        for group in &mut self.groups {
            let binding = match group.side() {
                Side::Left => bindings.p1,
                Side::Right => bindings.p2,
            };
            group.set_direction(axis(keys, binding.up, binding.down));
        }
    }

    fn update(&mut self, delta: f32) {
        for group in &mut self.groups {
            group.update(delta);
        }

        let ledger = &mut self.ledger;
        self.ball.update(delta, |d| ledger.log_ball_motion(d));

        self.advance_serve_timer(delta);
    }

    fn collide(&mut self) {
        // Paddles <--> field
        for group in &mut self.groups {
            group.clamp_to(&self.field);
        }

        // Ball <--> colliders, left side first, one bounce per frame
        if let Some((side, center_y, height)) = self
            .struck_collider(Side::Left)
            .or_else(|| self.struck_collider(Side::Right))
        {
            self.bounce_ball_off(side, center_y, height);
        }

        // Ball <--> walls and goals
        match boundary_contact(self.ball.bounds(), &self.field) {
            Some(contact @ (BoundaryContact::Top | BoundaryContact::Bottom)) => {
                self.ball.direction = reflect_off_wall(self.ball.direction, contact);
            }
            Some(contact) => {
                if let Some(scorer) = contact.scorer() {
                    self.score_point(scorer);
                }
            }
            None => {}
        }
    }

    /// First collider on `side` the ball overlaps, as (side, centre y, height)
    fn struck_collider(&self, side: Side) -> Option<(Side, f32, f32)> {
        self.groups_on(side)
            .flat_map(|group| group.colliders())
            .find(|collider| self.ball.is_colliding(&collider.paddle))
            .map(|collider| {
                let bounds = collider.paddle.bounds();
                (side, bounds.center().y, bounds.height())
            })
    }

    /// Send the ball back off a collider owned by `side`, one speed step faster
    fn bounce_ball_off(&mut self, side: Side, paddle_y: f32, paddle_height: f32) {
        let ball_y = self.ball.position().y;
        self.ball.direction = bounce_direction(ball_y, paddle_y, paddle_height, side);
        self.ball.speed += self.config.ball.speed_step;
        self.ledger.log_hit(side);
        log::debug!(
            "Bounce off {:?} collider: direction {:?}, speed {:.3}",
            side,
            self.ball.direction,
            self.ball.speed
        );
    }

    /// Scores, colliders, ball, then the debug overlay
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        let text_size = self.config.score.text_size;
        canvas.text(
            &self.score.left.to_string(),
            text_size + TEXT_MARGIN,
            text_size + TEXT_MARGIN,
        );
        canvas.text(
            &self.score.right.to_string(),
            self.field.right() - (text_size + RIGHT_TEXT_MARGIN),
            text_size + TEXT_MARGIN,
        );

        for group in &self.groups {
            for collider in group.colliders() {
                collider.paddle.draw(canvas);
            }
        }
        self.ball.draw(canvas);

        self.draw_debug(canvas);
    }

    /// Goal outlines and the running point time, when enabled
    pub fn draw_debug(&self, canvas: &mut dyn Canvas) {
        if self.config.debug.goals {
            for goal in &self.goals {
                goal.draw(canvas);
            }
        }
        if self.config.debug.point_time {
            let seconds = (self.ledger.state().point_duration / 1000.0).floor() as u32;
            canvas.text(
                &seconds.to_string(),
                self.field.center().x,
                self.config.score.text_size + TEXT_MARGIN,
            );
        }
    }

    fn draw_game_over(&self, canvas: &mut dyn Canvas) {
        let center = self.field.center();
        canvas.text(GAME_OVER_TEXT, center.x, center.y);
    }
}
