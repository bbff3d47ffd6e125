//! Rally Pong - paddle-and-ball arcade simulation
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (geometry, collisions, match state, ledger)
//! - `config`: Match configuration, built-in modes and mutations
//! - `session`: Multi-match host and metrics aggregation
//! - `metrics`: Serializable export of recorded points
//! - `input` / `render`: Ports to the host's keyboard and canvas
//! - `autopilot`: Computer player used by the headless driver

pub mod autopilot;
pub mod config;
pub mod error;
pub mod input;
pub mod metrics;
pub mod render;
pub mod session;
pub mod sim;

pub use config::{GameConfig, GameMode, Mutations};
pub use error::ConfigError;
pub use session::Session;
pub use sim::{Game, GamePhase};

/// Tuning constants
pub mod consts {
    /// Frame length used by headless drivers (60 Hz, in milliseconds)
    pub const FRAME_MS: f32 = 1000.0 / 60.0;

    /// Largest return angle off a paddle, reached at an offset of one paddle height
    pub const BOUNCE_RANGE_DEGREES: f32 = 90.0;
    /// Upward component of the serve direction (the horizontal component is ±1)
    pub const SERVE_LIFT: f32 = 0.5;

    /// Score text inset from the top-left corner
    pub const TEXT_MARGIN: f32 = 4.0;
    /// Extra inset for the right-hand score
    pub const RIGHT_TEXT_MARGIN: f32 = 16.0;
    pub const GAME_OVER_TEXT: &str = "GAME OVER";
}
