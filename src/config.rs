//! Game configuration, built-in modes and gameplay mutations
//!
//! Units are pixels and milliseconds; every speed is in pixels per millisecond.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Score display and match length
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreConfig {
    pub text_size: f32,
    /// First side to reach this many points wins
    pub limit: u32,
}

/// Playing field size (origin at the top-left corner)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub width: f32,
    pub height: f32,
}

/// One stacked paddle on a side
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerConfig {
    pub height: f32,
    /// Number of solid segments the controller is split into
    pub collider_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaddleConfig {
    pub width: f32,
    /// Distance between a wall and the first controller, and between stacked controllers
    pub gap: f32,
    pub speed: f32,
    /// Controllers per side, nearest the wall first
    pub controllers: Vec<ControllerConfig>,
}

impl PaddleConfig {
    /// Total collider segments on one side
    pub fn colliders_per_side(&self) -> u32 {
        self.controllers.iter().map(|c| c.collider_count).sum()
    }
}

/// Goal geometry, only used for drawing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalConfig {
    pub width: f32,
    /// Goal height is `field.height / height_ratio`
    pub height_ratio: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BallConfig {
    pub radius: f32,
    pub initial_speed: f32,
    /// Added to the ball speed on every paddle bounce
    pub speed_step: f32,
    pub vertical_english: f32,
    /// Milliseconds the ball rests at centre before each serve
    pub activation_delay: f32,
}

/// Up/down key codes for one player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub up: u32,
    pub down: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Left side
    pub p1: KeyBinding,
    /// Right side
    pub p2: KeyBinding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugConfig {
    /// Draw goal outlines
    pub goals: bool,
    /// Draw the running point time
    pub point_time: bool,
}

/// Complete configuration for one match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub score: ScoreConfig,
    pub field: FieldConfig,
    pub paddles: PaddleConfig,
    pub goal: GoalConfig,
    pub ball: BallConfig,
    pub inputs: InputConfig,
    pub debug: DebugConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            score: ScoreConfig {
                text_size: 12.0,
                limit: 3,
            },
            field: FieldConfig {
                width: 400.0,
                height: 400.0,
            },
            paddles: PaddleConfig {
                width: 4.0,
                gap: 64.0,
                speed: PaddleSpeed::Normal.value(),
                controllers: vec![ControllerConfig {
                    height: 100.0,
                    collider_count: 1,
                }],
            },
            goal: GoalConfig {
                width: 8.0,
                height_ratio: 1.0,
            },
            ball: BallConfig {
                radius: BallSize::Normal.radius(),
                initial_speed: 0.2,
                speed_step: 0.05,
                vertical_english: 0.05,
                activation_delay: 1200.0,
            },
            // A/Z and K/M
            inputs: InputConfig {
                p1: KeyBinding { up: 65, down: 90 },
                p2: KeyBinding { up: 75, down: 77 },
            },
            debug: DebugConfig {
                goals: false,
                point_time: true,
            },
        }
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

impl GameConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject anything that would produce degenerate geometry mid-match
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("score.textSize", self.score.text_size)?;
        if self.score.limit == 0 {
            return Err(ConfigError::ZeroScoreLimit);
        }

        positive("field.width", self.field.width)?;
        positive("field.height", self.field.height)?;

        positive("paddles.width", self.paddles.width)?;
        non_negative("paddles.gap", self.paddles.gap)?;
        non_negative("paddles.speed", self.paddles.speed)?;
        if self.paddles.controllers.is_empty() {
            return Err(ConfigError::NoControllers);
        }
        for (index, controller) in self.paddles.controllers.iter().enumerate() {
            positive("paddles.controllers.height", controller.height)?;
            if controller.collider_count == 0 {
                return Err(ConfigError::NoColliders { index });
            }
            // Clamping keeps a controller one pixel clear of both walls
            if controller.height > self.field.height - 2.0 {
                return Err(ConfigError::ControllerTooTall {
                    index,
                    height: controller.height,
                    field_height: self.field.height,
                });
            }
        }

        // The innermost controller must stay on its own half
        let count = self.paddles.controllers.len();
        let reach = self.paddles.gap * count as f32 + self.paddles.width;
        if reach >= self.field.width / 2.0 {
            return Err(ConfigError::ControllersOverflow {
                count,
                gap: self.paddles.gap,
                width: self.field.width,
            });
        }

        non_negative("goal.width", self.goal.width)?;
        positive("goal.heightRatio", self.goal.height_ratio)?;

        positive("ball.radius", self.ball.radius)?;
        positive("ball.initialSpeed", self.ball.initial_speed)?;
        non_negative("ball.speedStep", self.ball.speed_step)?;
        non_negative("ball.verticalEnglish", self.ball.vertical_english)?;
        non_negative("ball.activationDelay", self.ball.activation_delay)?;

        Ok(())
    }

    /// Goal height derived from the field and ratio
    pub fn goal_height(&self) -> f32 {
        self.field.height / self.goal.height_ratio
    }
}

/// Built-in game modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    Pong,
    TwoPaddle,
    Foosball,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Pong => "pong",
            GameMode::TwoPaddle => "two-paddle",
            GameMode::Foosball => "foosball",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pong" => Some(GameMode::Pong),
            "two-paddle" | "twopaddle" | "two_paddle" => Some(GameMode::TwoPaddle),
            "foosball" | "fuseball" => Some(GameMode::Foosball),
            _ => None,
        }
    }

    /// Base configuration for this mode (before mutations)
    pub fn config(&self) -> GameConfig {
        let mut config = GameConfig::default();
        match self {
            GameMode::Pong => {}
            GameMode::TwoPaddle => {
                config.paddles.controllers = vec![ControllerConfig {
                    height: 100.0,
                    collider_count: 2,
                }];
            }
            GameMode::Foosball => {
                config.paddles.controllers = vec![
                    ControllerConfig {
                        height: 240.0,
                        collider_count: 3,
                    },
                    ControllerConfig {
                        height: 120.0,
                        collider_count: 2,
                    },
                ];
                config.goal.height_ratio = 4.0;
                config.debug.goals = true;
            }
        }
        config
    }
}

/// Ball size mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BallSize {
    #[default]
    Normal,
    Tiny,
    Large,
    Comical,
}

impl BallSize {
    pub fn radius(&self) -> f32 {
        match self {
            BallSize::Normal => 6.0,
            BallSize::Tiny => 2.0,
            BallSize::Large => 10.0,
            BallSize::Comical => 20.0,
        }
    }
}

/// Paddle speed mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaddleSpeed {
    #[default]
    Normal,
    Fast,
    Cheat,
}

impl PaddleSpeed {
    pub fn value(&self) -> f32 {
        match self {
            PaddleSpeed::Normal => 0.25,
            PaddleSpeed::Fast => 0.4,
            PaddleSpeed::Cheat => 0.6,
        }
    }
}

/// Player-selected overrides layered on top of a mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Mutations {
    pub ball_size: BallSize,
    pub paddle_speed: PaddleSpeed,
}

impl Mutations {
    pub fn apply(&self, base: &GameConfig) -> GameConfig {
        let mut config = base.clone();
        config.ball.radius = self.ball_size.radius();
        config.paddles.speed = self.paddle_speed.value();
        config
    }
}
