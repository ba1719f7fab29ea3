use smallvec::SmallVec;

use crate::map::direction::Direction;

/// Requests coming from the host's input devices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    MovePlayer(Direction),
    TogglePause,
    ToggleMute,
    Start,
}

/// Discrete things that happened during a tick. Observed by audio and the status line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    PelletEaten,
    PowerPelletEaten,
    GhostEaten,
    LifeLost,
    LevelUp,
    RunStarted,
    GameOver,
}

/// Events raised by a single tick; rarely more than a couple.
pub type Events = SmallVec<[GameEvent; 4]>;
