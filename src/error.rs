//! Configuration errors
//!
//! The simulation itself has no fallible operations once a game exists, so every
//! failure is caught when a [`GameConfig`](crate::config::GameConfig) is turned
//! into a game.

/// Reasons a configuration is rejected at game-creation time
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A length or speed that must be strictly positive was not
    #[error("{field} must be positive and finite (got {value})")]
    NotPositive { field: &'static str, value: f32 },

    /// A value that may be zero was negative or NaN
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f32 },

    /// Score limit of zero would end the match before it starts
    #[error("score limit must be at least 1")]
    ZeroScoreLimit,

    /// No paddle controllers on a side
    #[error("at least one paddle controller is required")]
    NoControllers,

    /// A controller with no colliders could never touch the ball
    #[error("controller {index} has a collider count of zero")]
    NoColliders { index: usize },

    /// Stacked controllers would cross the centre line
    #[error("{count} controllers with gap {gap} do not fit in half of a field {width} wide")]
    ControllersOverflow { count: usize, gap: f32, width: f32 },

    /// A controller that cannot sit between the walls with a pixel to spare
    #[error("controller {index} ({height} tall) does not fit a field {field_height} high with 1px wall margins")]
    ControllerTooTall {
        index: usize,
        height: f32,
        field_height: f32,
    },

    /// Malformed JSON configuration
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}
