//! On-screen touch buttons.

use bitflags::bitflags;
use tracing::trace;

use crate::events::GameCommand;
use crate::map::direction::Direction;

bitflags! {
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct TouchButtons: u8 {
        const UP = 1 << 0;
        const DOWN = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        const PAUSE = 1 << 4;
        const START = 1 << 5;
    }
}

const BUTTON_COMMANDS: [(TouchButtons, GameCommand); 6] = [
    (TouchButtons::UP, GameCommand::MovePlayer(Direction::Up)),
    (TouchButtons::DOWN, GameCommand::MovePlayer(Direction::Down)),
    (TouchButtons::LEFT, GameCommand::MovePlayer(Direction::Left)),
    (TouchButtons::RIGHT, GameCommand::MovePlayer(Direction::Right)),
    (TouchButtons::PAUSE, GameCommand::TogglePause),
    (TouchButtons::START, GameCommand::Start),
];

impl TouchButtons {
    /// The command a single button issues. Combinations of buttons issue nothing.
    pub fn command(self) -> Option<GameCommand> {
        BUTTON_COMMANDS
            .iter()
            .find(|(button, _)| *button == self)
            .map(|&(_, command)| command)
    }
}

/// Tracks which buttons are held so that each touch issues its command exactly once.
///
/// Touch screens often report several starts for one press; only the first counts
/// until the matching release arrives.
#[derive(Debug, Default, Clone, Copy)]
pub struct TouchPad {
    held: TouchButtons,
}

impl TouchPad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a press. Returns the command only if the button was not already held.
    pub fn press(&mut self, button: TouchButtons) -> Option<GameCommand> {
        if self.held.intersects(button) {
            trace!(?button, "Repeated touch ignored");
            return None;
        }

        let command = button.command()?;
        self.held.insert(button);
        Some(command)
    }

    /// Registers a release. Returns whether the button had been held.
    pub fn release(&mut self, button: TouchButtons) -> bool {
        let was_held = !button.is_empty() && self.held.contains(button);
        self.held.remove(button);
        was_held
    }

    pub fn held(&self) -> TouchButtons {
        self.held
    }
}
