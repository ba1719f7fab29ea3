use glam::IVec2;
use tracing::{debug, trace};

use crate::constants::FRIGHTENED_TIME;
use crate::events::{Events, GameEvent};
use crate::game::state::GameState;
use crate::map::grid::Tile;

/// Eats whatever Pac-Man settled on at `cell`.
///
/// Pellets and power pellets are scored and removed; a power pellet also frightens every
/// ghost. Clearing the last consumable advances the level.
pub fn item_system(state: &mut GameState, cell: IVec2, events: &mut Events) {
    let Some(tile) = state.grid.consume(cell) else {
        return;
    };
    let Some(score_value) = tile.score_value() else {
        return;
    };

    state.score += score_value;
    state.pellets_left = state.pellets_left.saturating_sub(1);
    trace!(?cell, ?tile, score = state.score, pellets_left = state.pellets_left, "Item eaten");

    if tile == Tile::PowerPellet {
        state.frightened_timer = FRIGHTENED_TIME;
        for ghost in state.ghosts.iter_mut() {
            ghost.frightened = true;
        }
        debug!(ghosts = state.ghosts.len(), duration = FRIGHTENED_TIME, "Power pellet eaten, ghosts frightened");
        events.push(GameEvent::PowerPelletEaten);
    } else {
        events.push(GameEvent::PelletEaten);
    }

    if state.pellets_left == 0 {
        state.next_level();
        events.push(GameEvent::LevelUp);
    }
}
