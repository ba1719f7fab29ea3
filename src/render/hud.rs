//! Text shown around the canvas.

use thousands::Separable;

use crate::game::state::{GameState, Phase};

/// The score line, e.g. `Score: 1,230  Lives: 3  Level: 1`.
pub fn hud_text(state: &GameState) -> String {
    format!(
        "Score: {}  Lives: {}  Level: {}",
        state.score.separate_with_commas(),
        state.lives,
        state.level
    )
}

/// A short prompt for the current phase, if there is anything to say.
pub fn status_message(state: &GameState) -> Option<&'static str> {
    match state.phase {
        Phase::Idle => Some("Press start"),
        Phase::Running if state.freeze_timer > 0.0 => Some("Ready!"),
        Phase::Running => None,
        Phase::Paused => Some("Paused"),
        Phase::GameOver => Some("Game over"),
    }
}
