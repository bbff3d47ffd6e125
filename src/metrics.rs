//! Post-match metrics export
//!
//! One entry per match, holding every recorded point and the handful of
//! configuration values needed to compare matches. Writing the JSON somewhere is
//! left to the caller.

use serde::{Deserialize, Serialize};

use crate::sim::{Game, PointRecord, ScoredBy};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BallSnapshot {
    pub radius: f32,
    pub initial_speed: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaddleSnapshot {
    pub speed: f32,
    /// Collider segments on one side, summed over its controllers
    pub per_player_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigSnapshot {
    pub ball: BallSnapshot,
    pub paddles: PaddleSnapshot,
}

/// Exported record of one match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchMetrics {
    /// 1-based match number within the session
    #[serde(rename = "match")]
    pub match_number: usize,
    pub points: Vec<PointRecord>,
    pub config: ConfigSnapshot,
}

impl MatchMetrics {
    pub fn from_game(match_number: usize, game: &Game) -> Self {
        let config = game.config();
        Self {
            match_number,
            points: game.ledger().aggregate().to_vec(),
            config: ConfigSnapshot {
                ball: BallSnapshot {
                    radius: config.ball.radius,
                    initial_speed: config.ball.initial_speed,
                },
                paddles: PaddleSnapshot {
                    speed: config.paddles.speed,
                    per_player_count: config.paddles.colliders_per_side(),
                },
            },
        }
    }

    /// Milliseconds of play across all points
    pub fn total_duration(&self) -> f32 {
        self.points.iter().map(|p| p.duration).sum()
    }

    /// Longest point by ball-in-motion time
    pub fn longest_point(&self) -> Option<&PointRecord> {
        self.points.iter().max_by(|a, b| {
            a.duration
                .partial_cmp(&b.duration)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }

    /// Points won by each side as (left, right)
    pub fn points_won(&self) -> (usize, usize) {
        let left = self
            .points
            .iter()
            .filter(|p| p.scored_by == ScoredBy::Left)
            .count();
        let right = self
            .points
            .iter()
            .filter(|p| p.scored_by == ScoredBy::Right)
            .count();
        (left, right)
    }
}

/// Pretty-printed JSON array of matches
pub fn to_json(matches: &[MatchMetrics]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameMode;
    use crate::sim::PointLedger;

    fn record(id: u32, duration: f32, scored_by: ScoredBy) -> PointRecord {
        let mut ledger = PointLedger::new();
        for _ in 1..id {
            ledger.log_point(ScoredBy::None, false);
        }
        ledger.log_ball_motion(duration);
        ledger.log_point(scored_by, false).clone()
    }

    #[test]
    fn test_snapshot_from_game() {
        let game = Game::new(GameMode::Foosball.config(), 3).unwrap();
        let metrics = MatchMetrics::from_game(2, &game);
        assert_eq!(metrics.match_number, 2);
        assert!(metrics.points.is_empty());
        assert_eq!(metrics.config.paddles.per_player_count, 5);
        assert_eq!(metrics.config.ball.radius, 6.0);
        assert_eq!(metrics.config.ball.initial_speed, 0.2);
    }

    #[test]
    fn test_json_shape() {
        let game = Game::new(GameMode::TwoPaddle.config(), 3).unwrap();
        let json = to_json(&[MatchMetrics::from_game(1, &game)]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let first = &value[0];
        assert_eq!(first["match"], 1);
        assert!(first["points"].as_array().unwrap().is_empty());
        assert_eq!(first["config"]["paddles"]["perPlayerCount"], 2);
        assert!(first["config"]["ball"].get("initialSpeed").is_some());

        let parsed: Vec<MatchMetrics> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0], MatchMetrics::from_game(1, &game));
    }

    #[test]
    fn test_summaries() {
        let game = Game::new(GameMode::Pong.config(), 3).unwrap();
        let mut metrics = MatchMetrics::from_game(1, &game);
        metrics.points = vec![
            record(1, 500.0, ScoredBy::Left),
            record(2, 2500.0, ScoredBy::Right),
            record(3, 1000.0, ScoredBy::Right),
        ];
        assert_eq!(metrics.total_duration(), 4000.0);
        assert_eq!(metrics.longest_point().map(|p| p.id), Some(2));
        assert_eq!(metrics.points_won(), (1, 2));
    }
}
