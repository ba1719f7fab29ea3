//! Ghost actors.

use glam::IVec2;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter};

use crate::constants::GHOST_COLORS;
use crate::entity::actor::{Actor, Motion};
use crate::render::Color;

/// The four classic ghost types, assigned to spawn cells in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum GhostType {
    Blinky,
    Pinky,
    Inky,
    Clyde,
}

impl GhostType {
    /// The type for the `index`th ghost spawn, cycling through all four.
    pub fn for_index(index: usize) -> Self {
        let count = GhostType::iter().len();
        GhostType::iter().nth(index % count).unwrap_or(GhostType::Blinky)
    }

    pub fn color(self) -> Color {
        GHOST_COLORS[self as usize]
    }
}

/// A ghost roaming the maze.
#[derive(Debug, Clone, PartialEq)]
pub struct Ghost {
    pub motion: Motion,
    pub ghost_type: GhostType,
    pub frightened: bool,
    /// Where the ghost respawns after being eaten or after a life is lost.
    pub spawn: IVec2,
    /// Seconds left before the ghost may move.
    pub release_wait: f32,
}

impl Actor for Ghost {
    fn motion(&self) -> &Motion {
        &self.motion
    }

    fn motion_mut(&mut self) -> &mut Motion {
        &mut self.motion
    }
}

impl Ghost {
    pub fn new(ghost_type: GhostType, spawn: IVec2, speed: f32, release_wait: f32) -> Self {
        Self {
            motion: Motion::new(spawn, speed),
            ghost_type,
            frightened: false,
            spawn,
            release_wait,
        }
    }

    pub fn color(&self) -> Color {
        self.ghost_type.color()
    }

    /// Sends the ghost back to its spawn cell, calm, waiting `release_wait` seconds.
    pub fn respawn(&mut self, release_wait: f32) {
        self.motion.reset_to(self.spawn);
        self.frightened = false;
        self.release_wait = release_wait;
    }
}
