//! Grid-bound motion shared by Pac-Man and the ghosts.
//!
//! An actor is always either settled on a cell or part-way through a single step
//! towards an adjacent cell. The continuous position is interpolated from that step.

use glam::{IVec2, Vec2};

use crate::map::direction::Direction;

/// Position and motion state of anything that walks the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    /// The last cell the actor settled on.
    pub cell: IVec2,
    /// Start of the step in progress.
    pub from: IVec2,
    /// Target of the step in progress.
    pub to: IVec2,
    /// Direction of the current (or most recent) step. `None` until the first step.
    pub direction: Option<Direction>,
    /// Fraction of the step completed, in `[0, 1)`. Always 0 when not moving.
    pub progress: f32,
    /// Tiles per second.
    pub speed: f32,
    pub moving: bool,
}

impl Motion {
    pub fn new(cell: IVec2, speed: f32) -> Self {
        Self {
            cell,
            from: cell,
            to: cell,
            direction: None,
            progress: 0.0,
            speed,
            moving: false,
        }
    }

    /// Places the actor back on `cell`, idle and facing nowhere.
    pub fn reset_to(&mut self, cell: IVec2) {
        *self = Self::new(cell, self.speed);
    }

    /// The cell the actor is committed to: the step target while moving, otherwise the settled cell.
    pub fn effective_cell(&self) -> IVec2 {
        if self.moving {
            self.to
        } else {
            self.cell
        }
    }

    /// The continuous position in tile units.
    ///
    /// Interpolation follows the step direction rather than `to - from`, so a step through
    /// the tunnel slides off one edge instead of sweeping across the whole board.
    pub fn position(&self) -> Vec2 {
        match (self.moving, self.direction) {
            (true, Some(direction)) => self.from.as_vec2() + direction.as_ivec2().as_vec2() * self.progress,
            _ => self.cell.as_vec2(),
        }
    }
}

/// Common access to the motion of an actor.
pub trait Actor {
    fn motion(&self) -> &Motion;

    fn motion_mut(&mut self) -> &mut Motion;

    /// The continuous position in tile units.
    fn position(&self) -> Vec2 {
        self.motion().position()
    }
}
