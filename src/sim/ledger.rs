//! Point-by-point match analytics
//!
//! The ledger keeps a working state for the point in progress and freezes it into
//! an immutable [`PointRecord`] when the point ends.

use serde::{Deserialize, Serialize};

use super::paddle_group::Side;
use crate::config::GameConfig;

/// Who won a point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoredBy {
    Left,
    Right,
    None,
}

impl From<Side> for ScoredBy {
    fn from(side: Side) -> Self {
        match side {
            Side::Left => ScoredBy::Left,
            Side::Right => ScoredBy::Right,
        }
    }
}

/// One completed point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointRecord {
    /// 1-based point number within the match
    #[serde(rename = "point")]
    pub id: u32,
    /// Milliseconds the ball was actually moving
    pub duration: f32,
    pub scored_by: ScoredBy,
    pub game_over: bool,
    pub left_hits: u32,
    pub right_hits: u32,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub paddle_speed: f32,
}

/// Working counters for the point in progress
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerState {
    pub point_duration: f32,
    pub left_hits: u32,
    pub right_hits: u32,
    /// Side that registered the last hit; a side cannot register twice in a row
    pub last_hit: Option<Side>,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub paddle_speed: f32,
}

/// Append-only list of points plus the working state
#[derive(Debug, Clone, Default)]
pub struct PointLedger {
    records: Vec<PointRecord>,
    state: LedgerState,
}

impl PointLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current working state
    pub fn state(&self) -> &LedgerState {
        &self.state
    }

    /// Recorded points, oldest first
    pub fn aggregate(&self) -> &[PointRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Freeze the working state into a record and start a fresh one
    pub fn log_point(&mut self, scored_by: ScoredBy, game_over: bool) -> &PointRecord {
        let state = std::mem::take(&mut self.state);
        self.records.push(PointRecord {
            id: self.records.len() as u32 + 1,
            duration: state.point_duration,
            scored_by,
            game_over,
            left_hits: state.left_hits,
            right_hits: state.right_hits,
            ball_size: state.ball_size,
            ball_speed: state.ball_speed,
            paddle_speed: state.paddle_speed,
        });
        &self.records[self.records.len() - 1]
    }

    pub fn log_hit(&mut self, side: Side) {
        if self.state.last_hit == Some(side) {
            return;
        }
        match side {
            Side::Left => self.state.left_hits += 1,
            Side::Right => self.state.right_hits += 1,
        }
        self.state.last_hit = Some(side);
    }

    pub fn log_left_hit(&mut self) {
        self.log_hit(Side::Left);
    }

    pub fn log_right_hit(&mut self) {
        self.log_hit(Side::Right);
    }

    /// Only call while the ball is moving
    pub fn log_ball_motion(&mut self, delta: f32) {
        self.state.point_duration += delta;
    }

    /// Snapshot the config values recorded with the point in progress
    pub fn save_config(&mut self, config: &GameConfig) {
        self.state.ball_size = config.ball.radius;
        self.state.ball_speed = config.ball.initial_speed;
        self.state.paddle_speed = config.paddles.speed;
    }
}
