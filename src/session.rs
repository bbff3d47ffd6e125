//! Multi-match session
//!
//! Hosts the current match plus every finished one, so metrics can be exported
//! for the whole sitting. Changing the mode or a mutation always starts a fresh
//! match; an old match is never reconfigured in place.

use crate::config::{BallSize, GameConfig, GameMode, Mutations, PaddleSpeed};
use crate::error::ConfigError;
use crate::input::KeyInput;
use crate::metrics::{self, MatchMetrics};
use crate::render::Canvas;
use crate::sim::Game;

pub struct Session {
    mode: GameMode,
    mutations: Mutations,
    /// Earlier matches, oldest first
    history: Vec<Game>,
    current: Game,
    next_seed: u64,
}

impl Session {
    /// Start a session with one match in `mode`; later matches use the following seeds
    pub fn new(mode: GameMode, seed: u64) -> Result<Self, ConfigError> {
        let mutations = Mutations::default();
        let current = Game::new(mutations.apply(&mode.config()), seed)?;
        Ok(Self {
            mode,
            mutations,
            history: Vec::new(),
            current,
            next_seed: seed.wrapping_add(1),
        })
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn mutations(&self) -> Mutations {
        self.mutations
    }

    pub fn game(&self) -> &Game {
        &self.current
    }

    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.current
    }

    /// Every match so far, oldest first, ending with the current one
    pub fn matches(&self) -> impl Iterator<Item = &Game> + '_ {
        self.history.iter().chain(std::iter::once(&self.current))
    }

    pub fn match_count(&self) -> usize {
        self.history.len() + 1
    }

    /// Config the next match will be built from
    pub fn next_config(&self) -> GameConfig {
        self.mutations.apply(&self.mode.config())
    }

    /// Retire the current match and start another with the same settings
    pub fn new_game(&mut self) -> Result<&mut Game, ConfigError> {
        self.start(self.mode, self.mutations)
    }

    pub fn change_mode(&mut self, mode: GameMode) -> Result<&mut Game, ConfigError> {
        log::info!("Mode changed to {}", mode.as_str());
        self.start(mode, self.mutations)
    }

    pub fn change_ball_size(&mut self, ball_size: BallSize) -> Result<&mut Game, ConfigError> {
        let mutations = Mutations {
            ball_size,
            ..self.mutations
        };
        self.start(self.mode, mutations)
    }

    pub fn change_paddle_speed(
        &mut self,
        paddle_speed: PaddleSpeed,
    ) -> Result<&mut Game, ConfigError> {
        let mutations = Mutations {
            paddle_speed,
            ..self.mutations
        };
        self.start(self.mode, mutations)
    }

    /// Settings are committed only once the new match has been built
    fn start(&mut self, mode: GameMode, mutations: Mutations) -> Result<&mut Game, ConfigError> {
        let game = Game::new(mutations.apply(&mode.config()), self.next_seed)?;
        self.next_seed = self.next_seed.wrapping_add(1);
        self.mode = mode;
        self.mutations = mutations;

        let finished = std::mem::replace(&mut self.current, game);
        self.history.push(finished);
        log::info!("Match {} started", self.match_count());
        Ok(&mut self.current)
    }

    /// Run one frame of the current match
    pub fn process(&mut self, delta: f32, keys: &dyn KeyInput, canvas: &mut dyn Canvas) {
        self.current.process(delta, keys, canvas);
    }

    pub fn export_metrics(&self) -> Vec<MatchMetrics> {
        self.matches()
            .enumerate()
            .map(|(index, game)| MatchMetrics::from_game(index + 1, game))
            .collect()
    }

    pub fn metrics_json(&self) -> serde_json::Result<String> {
        metrics::to_json(&self.export_metrics())
    }
}
