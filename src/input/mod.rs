//! Maps host input to game commands.

use std::collections::HashMap;

use tracing::trace;

use crate::events::GameCommand;
use crate::map::direction::Direction;

pub mod touch;

pub use self::touch::{TouchButtons, TouchPad};

/// Key bindings, keyed by lowercased DOM-style key names (`arrowup`, `w`, ` `, `enter`).
#[derive(Debug, Clone)]
pub struct Bindings {
    key_bindings: HashMap<String, GameCommand>,
}

impl Default for Bindings {
    fn default() -> Self {
        let mut bindings = Self {
            key_bindings: HashMap::new(),
        };

        // Player movement
        bindings.bind("ArrowUp", GameCommand::MovePlayer(Direction::Up));
        bindings.bind("w", GameCommand::MovePlayer(Direction::Up));
        bindings.bind("ArrowDown", GameCommand::MovePlayer(Direction::Down));
        bindings.bind("s", GameCommand::MovePlayer(Direction::Down));
        bindings.bind("ArrowLeft", GameCommand::MovePlayer(Direction::Left));
        bindings.bind("a", GameCommand::MovePlayer(Direction::Left));
        bindings.bind("ArrowRight", GameCommand::MovePlayer(Direction::Right));
        bindings.bind("d", GameCommand::MovePlayer(Direction::Right));

        // Game actions
        bindings.bind(" ", GameCommand::TogglePause);
        bindings.bind("Space", GameCommand::TogglePause);
        bindings.bind("Spacebar", GameCommand::TogglePause);
        bindings.bind("m", GameCommand::ToggleMute);
        bindings.bind("Enter", GameCommand::Start);
        bindings.bind("Return", GameCommand::Start);

        bindings
    }
}

impl Bindings {
    /// Binds `key` (case-insensitive) to `command`, replacing any previous binding.
    pub fn bind(&mut self, key: &str, command: GameCommand) {
        self.key_bindings.insert(key.to_lowercase(), command);
    }

    /// The command for a key name, ignoring case. Unbound keys map to nothing.
    pub fn command_for_key(&self, key: &str) -> Option<GameCommand> {
        let command = self.key_bindings.get(&key.to_lowercase()).copied();
        trace!(key, ?command, "Key mapped");
        command
    }
}
