//! The per-tick systems that mutate the game state.

pub mod collision;
pub mod ghost;
pub mod item;
pub mod movement;

pub use collision::{check_collision, collision_system, detect_contacts, wrapped_distance, Contact};
pub use ghost::{choose_direction, legal_directions, DecisionSource, RandomSource};
pub use item::item_system;
pub use movement::{advance_actor, begin_move, ghost_movement_system, pacman_movement_system};
