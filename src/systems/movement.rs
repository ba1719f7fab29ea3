//! Tile-by-tile movement of Pac-Man and the ghosts.

use glam::IVec2;
use tracing::trace;

use crate::constants::FRIGHTENED_SPEED_FACTOR;
use crate::entity::actor::Motion;
use crate::game::state::GameState;
use crate::map::{direction::Direction, grid::Grid};
use crate::systems::ghost::{choose_direction, DecisionSource};

/// Starts a one-tile step from the actor's settled cell.
///
/// Horizontal steps wrap through the tunnel. Returns `false`, leaving the actor untouched,
/// if the step would leave the grid vertically or run into a wall.
pub fn begin_move(motion: &mut Motion, grid: &Grid, direction: Direction) -> bool {
    let Some(target) = grid.neighbor(motion.cell, direction) else {
        return false;
    };

    motion.from = motion.cell;
    motion.to = target;
    motion.direction = Some(direction);
    motion.moving = true;
    motion.progress = 0.0;
    true
}

/// Advances a step in progress by `speed * speed_factor * delta` tiles.
///
/// Returns `true` when the actor settles on its target this call. Progress beyond the
/// target is dropped rather than carried into the next step.
pub fn advance_actor(motion: &mut Motion, delta: f32, speed_factor: f32) -> bool {
    if !motion.moving {
        return false;
    }

    motion.progress += motion.speed * speed_factor * delta;
    if motion.progress < 1.0 {
        return false;
    }

    motion.cell = motion.to;
    motion.from = motion.to;
    motion.moving = false;
    motion.progress = 0.0;
    true
}

/// Moves Pac-Man, returning the cell he settled on this tick, if any.
///
/// When idle he first tries the queued direction, then keeps going straight.
pub fn pacman_movement_system(state: &mut GameState, delta: f32) -> Option<IVec2> {
    let GameState { grid, pacman, .. } = state;

    if !pacman.motion.moving {
        let turned = pacman.pending.is_some_and(|dir| begin_move(&mut pacman.motion, grid, dir));
        if !turned {
            if let Some(dir) = pacman.motion.direction {
                begin_move(&mut pacman.motion, grid, dir);
            }
        }
    }

    advance_actor(&mut pacman.motion, delta, 1.0).then_some(pacman.motion.cell)
}

/// Moves every ghost that has been released, choosing new directions at each cell.
pub fn ghost_movement_system<D: DecisionSource + ?Sized>(state: &mut GameState, delta: f32, source: &mut D) {
    let GameState { grid, pacman, ghosts, .. } = state;
    let target = pacman.motion.effective_cell();

    for ghost in ghosts.iter_mut() {
        if ghost.release_wait > 0.0 {
            ghost.release_wait = (ghost.release_wait - delta).max(0.0);
            continue;
        }

        if !ghost.motion.moving {
            if let Some(direction) = choose_direction(ghost, grid, target, &mut *source) {
                if !begin_move(&mut ghost.motion, grid, direction) {
                    trace!(ghost = ghost.ghost_type.as_ref(), ?direction, "Ghost move rejected");
                }
            }
        }

        let factor = if ghost.frightened { FRIGHTENED_SPEED_FACTOR } else { 1.0 };
        advance_actor(&mut ghost.motion, delta, factor);
    }
}
