//! A simple player for demos and headless runs: head for the nearest pellet, steer around
//! dangerous ghosts.

use glam::IVec2;
use pathfinding::prelude::bfs;
use smallvec::SmallVec;

use crate::game::state::GameState;
use crate::map::direction::Direction;

/// The first step of the shortest safe path from Pac-Man to a pellet.
///
/// Cells held by ghosts that are not frightened are treated as walls. Returns `None`
/// when no pellet can be reached.
pub fn autopilot_direction(state: &GameState) -> Option<Direction> {
    let grid = &state.grid;
    let start = state.pacman.motion.effective_cell();
    let threats: SmallVec<[IVec2; 4]> = state
        .ghosts
        .iter()
        .filter(|ghost| !ghost.frightened)
        .map(|ghost| ghost.motion.effective_cell())
        .collect();

    let path = bfs(
        &start,
        |&cell| {
            Direction::DIRECTIONS
                .iter()
                .filter_map(|&dir| grid.neighbor(cell, dir))
                .filter(|next| !threats.contains(next))
                .collect::<SmallVec<[IVec2; 4]>>()
        },
        |&cell| cell != start && grid.tile(cell).is_some_and(|tile| tile.is_consumable()),
    )?;

    let next = *path.get(1)?;
    Direction::DIRECTIONS.into_iter().find(|&dir| grid.neighbor(start, dir) == Some(next))
}
