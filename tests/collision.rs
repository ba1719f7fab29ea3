use glam::{IVec2, Vec2};
use pacman_engine::entity::ghost::{Ghost, GhostType};
use pacman_engine::constants::{score, GHOST_RESPAWN_WAIT};
use pacman_engine::entity::pacman::Pacman;
use pacman_engine::events::{Events, GameEvent};
use pacman_engine::map::direction::Direction;
use pacman_engine::systems::{check_collision, collision_system, detect_contacts, wrapped_distance, Contact};
use speculoos::prelude::*;

mod common;

#[test]
fn test_wrapped_distance_crosses_tunnel() {
    let d = wrapped_distance(Vec2::new(0.0, 14.0), Vec2::new(27.8, 14.0), 28.0);
    assert_that(&d).is_close_to(0.2, 1e-4);

    let straight = wrapped_distance(Vec2::new(3.0, 1.0), Vec2::new(3.0, 4.0), 28.0);
    assert_that(&straight).is_close_to(3.0, 1e-6);
}

#[test]
fn test_collision_is_symmetric() {
    let pacman = Pacman::new(IVec2::new(5, 5));
    let mut ghost = Ghost::new(GhostType::Pinky, IVec2::new(6, 5), 5.0, 0.0);

    for progress in [0.0, 0.3, 0.5, 0.61, 0.9] {
        ghost.motion.from = IVec2::new(6, 5);
        ghost.motion.to = IVec2::new(5, 5);
        ghost.motion.direction = Some(Direction::Left);
        ghost.motion.moving = true;
        ghost.motion.progress = progress;

        let forward = check_collision(&pacman, &ghost, 28.0);
        let backward = check_collision(&ghost, &pacman, 28.0);
        assert_that(&forward).is_equal_to(backward);
        assert_that(&forward).is_equal_to(progress > 0.6);
    }
}

#[test]
fn test_contact_outcome_follows_frightened_flag() {
    let mut state = common::running_state(&["#.PG#"]);
    state.ghosts[0].motion.cell = IVec2::new(2, 0);

    assert_that(&detect_contacts(&state).to_vec()).is_equal_to(vec![Contact::Caught(0)]);

    state.ghosts[0].frightened = true;
    assert_that(&detect_contacts(&state).to_vec()).is_equal_to(vec![Contact::Eaten(0)]);
}

#[test]
fn test_capture_stops_contact_scan() {
    let mut state = common::running_state(&["#G.PGG#"]);
    for ghost in state.ghosts.iter_mut() {
        ghost.motion.cell = IVec2::new(3, 0);
    }
    state.ghosts[0].frightened = true;

    let contacts = detect_contacts(&state).to_vec();
    assert_that(&contacts).is_equal_to(vec![Contact::Eaten(0), Contact::Caught(1)]);
}

#[test]
fn test_eaten_ghosts_score_and_respawn() {
    let mut state = common::running_state(&["#G.PG#"]);
    for ghost in state.ghosts.iter_mut() {
        ghost.motion.cell = IVec2::new(3, 0);
        ghost.frightened = true;
    }

    let mut events = Events::new();
    collision_system(&mut state, &mut events);

    assert_that(&events.to_vec()).is_equal_to(vec![GameEvent::GhostEaten, GameEvent::GhostEaten]);
    assert_that(&state.score).is_equal_to(2 * score::GHOST);
    for ghost in &state.ghosts {
        assert_that(&ghost.motion.cell).is_equal_to(ghost.spawn);
        assert_that(&ghost.frightened).is_false();
        assert_that(&ghost.release_wait).is_equal_to(GHOST_RESPAWN_WAIT);
    }
}
