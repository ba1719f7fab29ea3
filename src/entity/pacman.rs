//! Pac-Man, the player-controlled actor.

use glam::IVec2;

use crate::constants::PACMAN_SPEED;
use crate::entity::actor::{Actor, Motion};
use crate::map::direction::Direction;

/// The player character.
#[derive(Debug, Clone, PartialEq)]
pub struct Pacman {
    pub motion: Motion,
    /// Direction requested by input, tried every time Pac-Man is idle.
    pub pending: Option<Direction>,
}

impl Actor for Pacman {
    fn motion(&self) -> &Motion {
        &self.motion
    }

    fn motion_mut(&mut self) -> &mut Motion {
        &mut self.motion
    }
}

impl Pacman {
    pub fn new(spawn: IVec2) -> Self {
        Self {
            motion: Motion::new(spawn, PACMAN_SPEED),
            pending: None,
        }
    }

    /// Queues a direction for the next time Pac-Man can turn.
    pub fn set_direction(&mut self, direction: Direction) {
        self.pending = Some(direction);
    }

    /// The direction the mouth faces: the last one travelled, else the requested one, else right.
    pub fn facing(&self) -> Direction {
        self.motion.direction.or(self.pending).unwrap_or(Direction::Right)
    }
}
