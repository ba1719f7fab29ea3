#![allow(dead_code)]

use pacman_engine::events::GameEvent;
use pacman_engine::game::state::GameState;
use pacman_engine::systems::DecisionSource;

/// Tick length used by the scenario tests: the largest step a frame may take.
pub const DELTA: f32 = 0.05;

/// A decision source with fixed answers.
pub struct Scripted {
    pub wander: bool,
    pub pick: usize,
}

impl Scripted {
    /// Never wanders, so every choice follows the distance heuristic.
    pub fn greedy() -> Self {
        Self { wander: false, pick: 0 }
    }
}

impl DecisionSource for Scripted {
    fn wander(&mut self) -> bool {
        self.wander
    }

    fn pick(&mut self, len: usize) -> usize {
        self.pick.min(len - 1)
    }
}

/// A started game on `blueprint` with the freeze window already over.
pub fn running_state(blueprint: &[&str]) -> GameState {
    let mut state = GameState::new(blueprint);
    state.start();
    state.freeze_timer = 0.0;
    state
}

/// Runs `ticks` ticks of [`DELTA`] and collects every event raised.
pub fn run_ticks(state: &mut GameState, ticks: usize, source: &mut impl DecisionSource) -> Vec<GameEvent> {
    let mut events = Vec::new();
    for _ in 0..ticks {
        events.extend(state.tick(DELTA, source));
    }
    events
}

/// Ticks until `done` holds, giving up after `limit` ticks. Returns the events raised.
pub fn run_until(
    state: &mut GameState,
    limit: usize,
    source: &mut impl DecisionSource,
    mut done: impl FnMut(&GameState) -> bool,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    for _ in 0..limit {
        if done(state) {
            break;
        }
        events.extend(state.tick(DELTA, source));
    }
    events
}
