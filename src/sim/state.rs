//! Match state: field, paddles, ball, score and ledger
//!
//! A [`Game`] owns every entity for its whole life. A new match is a new `Game`;
//! nothing is carried over.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::entity::{Ball, Goal};
use super::ledger::PointLedger;
use super::paddle_group::{PaddleGroup, Side};
use crate::config::GameConfig;
use crate::consts::SERVE_LIFT;
use crate::error::ConfigError;

/// Where the match is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball held at centre, release timer running
    Serving,
    /// Ball in play
    Rallying,
    /// A side reached the score limit; only drawing happens from here on
    GameOver,
}

/// Points per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn winner(&self, limit: u32) -> Option<Side> {
        if self.left >= limit {
            Some(Side::Left)
        } else if self.right >= limit {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// One match
#[derive(Debug, Clone)]
pub struct Game {
    pub(super) config: GameConfig,
    pub(super) field: Aabb,
    /// Left groups first, then right, each side ordered wall-outward
    pub(super) groups: Vec<PaddleGroup>,
    pub(super) goals: [Goal; 2],
    pub(super) ball: Ball,
    pub(super) score: Score,
    pub(super) ledger: PointLedger,
    pub(super) phase: GamePhase,
    /// Milliseconds until the pending serve; `None` when no serve is pending
    pub(super) release_in: Option<f32>,
    pub(super) rng: Pcg32,
    seed: u64,
}

impl Game {
    /// Validate `config` and set up a match ready to serve
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        if let Err(err) = config.validate() {
            log::warn!("Rejected game configuration: {}", err);
            return Err(err);
        }

        let field = Aabb::new(0.0, 0.0, config.field.width, config.field.height);

        let mut groups = Vec::with_capacity(config.paddles.controllers.len() * 2);
        for side in [Side::Left, Side::Right] {
            for (index, controller) in config.paddles.controllers.iter().enumerate() {
                groups.push(PaddleGroup::new(side, index, controller, &config.paddles));
            }
        }

        let goal_height = config.goal_height();
        let goals = [
            Goal::new(config.goal.width, goal_height),
            Goal::new(config.goal.width, goal_height),
        ];

        let ball = Ball::new(config.ball.radius);

        let mut game = Self {
            config,
            field,
            groups,
            goals,
            ball,
            score: Score::new(),
            ledger: PointLedger::new(),
            phase: GamePhase::Serving,
            release_in: None,
            rng: Pcg32::seed_from_u64(seed),
            seed,
        };

        game.reset_goals();
        game.reset_paddles();
        game.reset_ball();

        log::info!(
            "New game: {} controller(s) per side, {} collider(s) per side, first to {} (seed {})",
            game.config.paddles.controllers.len(),
            game.config.paddles.colliders_per_side(),
            game.config.score.limit,
            seed
        );

        Ok(game)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn field(&self) -> &Aabb {
        &self.field
    }

    pub fn groups(&self) -> &[PaddleGroup] {
        &self.groups
    }

    pub fn groups_on(&self, side: Side) -> impl Iterator<Item = &PaddleGroup> + '_ {
        self.groups.iter().filter(move |g| g.side() == side)
    }

    pub fn goals(&self) -> &[Goal; 2] {
        &self.goals
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn ledger(&self) -> &PointLedger {
        &self.ledger
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Winning side once the match is over
    pub fn winner(&self) -> Option<Side> {
        if self.is_over() {
            self.score.winner(self.config.score.limit)
        } else {
            None
        }
    }

    /// Hold the ball at centre and schedule a serve after the activation delay
    ///
    /// Replaces any serve that is still pending.
    pub fn reset_ball(&mut self) {
        if self.is_over() {
            return;
        }
        self.ball.stop_at(self.field.center());
        self.release_in = Some(self.config.ball.activation_delay);
        self.phase = GamePhase::Serving;
        self.ledger.save_config(&self.config);
    }

    /// Centre every controller, then push each back toward its own wall
    pub fn reset_paddles(&mut self) {
        let gap = self.config.paddles.gap;
        for group in &mut self.groups {
            group.reset(&self.field, gap);
        }
    }

    fn reset_goals(&mut self) {
        let center = self.field.center();
        let [left, right] = &mut self.goals;
        left.set_position(center);
        left.set_left_edge(self.field.left());
        right.set_position(center);
        right.set_right_edge(self.field.right());
    }

    /// Count down the pending serve; fires once the delay has fully elapsed
    pub(super) fn advance_serve_timer(&mut self, delta: f32) {
        if let Some(remaining) = self.release_in {
            let remaining = remaining - delta;
            if remaining <= 0.0 {
                self.release_ball();
            } else {
                self.release_in = Some(remaining);
            }
        }
    }

    /// Launch toward a random side, slightly upward, at the initial speed
    fn release_ball(&mut self) {
        let sign = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.ball.direction = Vec2::new(sign, -SERVE_LIFT);
        self.ball.speed = self.config.ball.initial_speed;
        self.release_in = None;
        self.phase = GamePhase::Rallying;
        log::debug!("Serve toward {}", if sign > 0.0 { "right" } else { "left" });
    }

    /// Award a point, record it, and either serve again or end the match
    pub(super) fn score_point(&mut self, side: Side) {
        self.score.increment(side);
        let game_over = self.score.get(side) >= self.config.score.limit;
        let record = self.ledger.log_point(side.into(), game_over);
        log::info!(
            "Point {} to {:?} after {:.0} ms ({}-{})",
            record.id,
            side,
            record.duration,
            self.score.left,
            self.score.right
        );

        if game_over {
            self.ball.stop_at(self.field.center());
            self.release_in = None;
            self.phase = GamePhase::GameOver;
            log::info!(
                "Game over: {:?} wins {}-{}",
                side,
                self.score.left,
                self.score.right
            );
        } else {
            self.reset_ball();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameMode;

    #[test]
    fn test_new_game_layout() {
        let game = Game::new(GameConfig::default(), 1).unwrap();
        assert_eq!(game.phase(), GamePhase::Serving);
        assert_eq!(game.groups().len(), 2);
        assert_eq!(game.ball().position(), Vec2::new(200.0, 200.0));
        assert!(!game.ball().is_moving());
        assert_eq!(game.score(), Score::new());
        assert!(game.ledger().is_empty());

        let left = game.groups_on(Side::Left).next().unwrap();
        let right = game.groups_on(Side::Right).next().unwrap();
        assert_eq!(left.controller().bounds().left(), 64.0);
        assert_eq!(right.controller().bounds().right(), 336.0);
    }

    #[test]
    fn test_foosball_layout() {
        let game = Game::new(GameMode::Foosball.config(), 1).unwrap();
        assert_eq!(game.groups().len(), 4);
        let lefts: Vec<f32> = game
            .groups_on(Side::Left)
            .map(|g| g.controller().bounds().left())
            .collect();
        assert_eq!(lefts, vec![64.0, 128.0]);
        let rights: Vec<f32> = game
            .groups_on(Side::Right)
            .map(|g| g.controller().bounds().right())
            .collect();
        assert_eq!(rights, vec![336.0, 272.0]);

        let [left_goal, right_goal] = game.goals();
        assert_eq!(left_goal.bounds().left(), 0.0);
        assert_eq!(right_goal.bounds().right(), 400.0);
        assert_eq!(left_goal.bounds().height(), 100.0);
        assert_eq!(left_goal.position().y, 200.0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = GameConfig::default();
        config.paddles.controllers[0].collider_count = 0;
        assert!(matches!(
            Game::new(config, 1),
            Err(ConfigError::NoColliders { index: 0 })
        ));
    }

    #[test]
    fn test_reset_ball_replaces_pending_serve() {
        let mut game = Game::new(GameConfig::default(), 1).unwrap();
        game.advance_serve_timer(1000.0);
        assert_eq!(game.release_in, Some(200.0));

        game.reset_ball();
        assert_eq!(game.release_in, Some(1200.0));
        game.advance_serve_timer(1000.0);
        assert!(!game.ball().is_moving());
        game.advance_serve_timer(200.0);
        assert!(game.ball().is_moving());
        assert_eq!(game.phase(), GamePhase::Rallying);
        assert_eq!(game.release_in, None);
    }

    #[test]
    fn test_serve_direction() {
        let mut lefts = 0;
        let mut rights = 0;
        for seed in 0..64 {
            let mut game = Game::new(GameConfig::default(), seed).unwrap();
            game.advance_serve_timer(1200.0);
            let dir = game.ball().direction;
            assert_eq!(dir.y, -SERVE_LIFT, "serve always climbs");
            assert_eq!(dir.x.abs(), 1.0);
            assert_eq!(game.ball().speed, 0.2);
            if dir.x > 0.0 {
                rights += 1;
            } else {
                lefts += 1;
            }
        }
        assert!(lefts > 0 && rights > 0, "side is randomised");
    }

    #[test]
    fn test_same_seed_same_serve() {
        let mut a = Game::new(GameConfig::default(), 42).unwrap();
        let mut b = Game::new(GameConfig::default(), 42).unwrap();
        a.advance_serve_timer(1200.0);
        b.advance_serve_timer(1200.0);
        assert_eq!(a.ball().direction, b.ball().direction);
    }

    #[test]
    fn test_score_point_to_game_over() {
        let mut config = GameConfig::default();
        config.score.limit = 2;
        let mut game = Game::new(config, 1).unwrap();

        game.score_point(Side::Right);
        assert_eq!(game.score().right, 1);
        assert_eq!(game.phase(), GamePhase::Serving);
        assert_eq!(game.winner(), None);

        game.score_point(Side::Right);
        assert_eq!(game.phase(), GamePhase::GameOver);
        assert_eq!(game.winner(), Some(Side::Right));
        assert_eq!(game.release_in, None);

        let records = game.ledger().aggregate();
        assert_eq!(records.len(), 2);
        assert!(!records[0].game_over);
        assert!(records[1].game_over);

        // No serve is scheduled once the match is over
        game.reset_ball();
        assert_eq!(game.release_in, None);
    }

    #[test]
    fn test_score_winner() {
        let mut score = Score::new();
        score.increment(Side::Left);
        assert_eq!(score.winner(2), None);
        score.increment(Side::Left);
        assert_eq!(score.winner(2), Some(Side::Left));
        assert_eq!(score.get(Side::Right), 0);
    }
}
