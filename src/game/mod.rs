//! This module contains the frame clock that drives the game state.

use tracing::debug;

use crate::constants::{MAX_FRAME_DELTA, RAW_BOARD};
use crate::events::{Events, GameEvent};
use crate::map::direction::Direction;
use crate::systems::{DecisionSource, RandomSource};

use self::state::GameState;

pub mod state;

/// The engine as the host sees it: the game state plus the animation clock feeding it.
///
/// The host calls [`Game::frame`] once per displayed frame with its animation timestamp.
pub struct Game<D = RandomSource> {
    state: GameState,
    source: D,
    last_timestamp: Option<f64>,
}

impl Game<RandomSource> {
    /// A game on the default board with OS-seeded ghosts.
    pub fn new() -> Self {
        Self::with_source(RAW_BOARD.as_slice(),RandomSource::from_os_rng())
    }
}

impl Default for Game<RandomSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: DecisionSource> Game<D> {
    pub fn with_source<S: AsRef<str>>(blueprint: &[S], source: D) -> Self {
        Self {
            state: GameState::new(blueprint),
            source,
            last_timestamp: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Starts (or restarts) a run from scratch.
    pub fn start(&mut self) -> GameEvent {
        self.last_timestamp = None;
        self.state.start()
    }

    /// Pauses or resumes. Returns whether the game is now paused.
    pub fn toggle_pause(&mut self) -> bool {
        self.state.toggle_pause()
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn set_pacman_direction(&mut self, direction: Direction) {
        self.state.set_pacman_direction(direction);
    }

    /// Seconds since the previous frame, clamped to `[0, MAX_FRAME_DELTA]`.
    ///
    /// The first frame after a start has no predecessor and yields zero.
    pub fn frame_delta(&mut self, timestamp_ms: f64) -> f32 {
        let delta = match self.last_timestamp {
            Some(last) => ((timestamp_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_timestamp = Some(timestamp_ms);

        if delta > MAX_FRAME_DELTA {
            debug!(delta, "Frame delta clamped");
        }
        delta.clamp(0.0, MAX_FRAME_DELTA)
    }

    /// Runs one animation frame of simulation.
    pub fn frame(&mut self, timestamp_ms: f64) -> Events {
        let delta = self.frame_delta(timestamp_ms);
        self.state.tick(delta, &mut self.source)
    }
}
