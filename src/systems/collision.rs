use glam::Vec2;
use smallvec::SmallVec;
use tracing::debug;

use crate::constants::{score, COLLISION_DISTANCE, GHOST_RESPAWN_WAIT};
use crate::entity::actor::Actor;
use crate::events::{Events, GameEvent};
use crate::game::state::GameState;

/// Distance between two tile-space positions, measuring horizontally around the tunnel.
pub fn wrapped_distance(a: Vec2, b: Vec2, width: f32) -> f32 {
    let mut dx = (a.x - b.x).abs();
    if width > 0.0 {
        dx %= width;
        dx = dx.min(width - dx);
    }
    let dy = (a.y - b.y).abs();
    (dx * dx + dy * dy).sqrt()
}

/// Whether two actors are close enough to touch.
pub fn check_collision(a: &impl Actor, b: &impl Actor, width: f32) -> bool {
    wrapped_distance(a.position(), b.position(), width) < COLLISION_DISTANCE
}

/// A ghost touching Pac-Man, by index into the ghost list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// The ghost was frightened and gets eaten.
    Eaten(usize),
    /// The ghost catches Pac-Man.
    Caught(usize),
}

/// Lists the contacts for this tick in ghost order.
///
/// Any number of frightened ghosts can be eaten at once, but scanning stops at the first
/// ghost that catches Pac-Man.
pub fn detect_contacts(state: &GameState) -> SmallVec<[Contact; 4]> {
    let width = state.grid.width() as f32;
    let mut contacts = SmallVec::new();

    for (index, ghost) in state.ghosts.iter().enumerate() {
        if !check_collision(&state.pacman, ghost, width) {
            continue;
        }
        if ghost.frightened {
            contacts.push(Contact::Eaten(index));
        } else {
            contacts.push(Contact::Caught(index));
            break;
        }
    }

    contacts
}

/// Resolves Pac-Man/ghost contacts: eats frightened ghosts and costs a life for the rest.
pub fn collision_system(state: &mut GameState, events: &mut Events) {
    for contact in detect_contacts(state) {
        match contact {
            Contact::Eaten(index) => {
                state.score += score::GHOST;
                let ghost = &mut state.ghosts[index];
                debug!(ghost = ghost.ghost_type.as_ref(), score = state.score, "Ghost eaten");
                ghost.respawn(GHOST_RESPAWN_WAIT);
                events.push(GameEvent::GhostEaten);
            }
            Contact::Caught(index) => {
                debug!(ghost = state.ghosts[index].ghost_type.as_ref(), lives = state.lives, "Pac-Man caught");
                events.push(state.lose_life());
            }
        }
    }
}
