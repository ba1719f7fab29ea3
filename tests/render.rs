use std::f32::consts::TAU;

use glam::{IVec2, UVec2, Vec2};
use pacman_engine::constants::{
    BACKGROUND_COLOR, FRIGHTENED_BLINK_COLOR, FRIGHTENED_COLOR, GHOST_COLORS, MOUTH_MAX_ANGLE, PACMAN_COLOR, TILE_SIZE,
    WALL_COLOR,
};
use pacman_engine::entity::ghost::{Ghost, GhostType};
use pacman_engine::game::state::GameState;
use pacman_engine::map::grid::Tile;
use pacman_engine::render::hud::{hud_text, status_message};
use pacman_engine::render::{ascii_frame, ghost_color, mouth_angle, render, DrawCommand};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;

const BOARD: [&str; 3] = ["#######", "#o.P.G#", "#######"];

#[test]
fn test_canvas_size_follows_grid() {
    let state = GameState::new(BOARD.as_slice());
    assert_eq!(state.canvas_size(), UVec2::new(7 * TILE_SIZE, 3 * TILE_SIZE));
}

#[test]
fn test_frame_starts_with_clear_and_draws_every_wall() {
    let state = GameState::new(BOARD.as_slice());
    let commands = render(&state);

    assert_that(&commands.first()).is_equal_to(Some(&DrawCommand::Clear { color: BACKGROUND_COLOR }));

    let walls = state.grid.iter().filter(|(_, tile)| *tile == Tile::Wall).count();
    let wall_rects = commands
        .iter()
        .filter(|command| matches!(command, DrawCommand::FillRect { color, .. } if *color == WALL_COLOR))
        .count();
    assert_that(&wall_rects).is_equal_to(walls);
}

#[test]
fn test_power_pellets_are_larger() {
    let state = GameState::new(BOARD.as_slice());
    let commands = render(&state);
    let tile = TILE_SIZE as f32;

    let radius_at = |cell: IVec2| {
        let center = (cell.as_vec2() + Vec2::splat(0.5)) * tile;
        commands.iter().find_map(|command| match command {
            DrawCommand::FillCircle { center: c, radius, .. } if *c == center => Some(*radius),
            _ => None,
        })
    };

    let power = radius_at(IVec2::new(1, 1)).unwrap();
    let pellet = radius_at(IVec2::new(2, 1)).unwrap();
    assert_that(&power).is_greater_than(pellet);
}

#[test]
fn test_pacman_is_drawn_last_facing_right() {
    let state = GameState::new(BOARD.as_slice());
    let commands = render(&state);

    match commands.last() {
        Some(DrawCommand::FillPie {
            center,
            start,
            end,
            color,
            ..
        }) => {
            assert_eq!(*color, PACMAN_COLOR);
            assert_eq!(*center, Vec2::new(3.5, 1.5) * TILE_SIZE as f32);
            // The mouth is closed at clock zero, so the wedge is a full circle
            assert_that(start).is_close_to(0.0, 1e-6);
            assert_that(end).is_close_to(TAU, 1e-6);
        }
        other => panic!("expected Pac-Man last, got {other:?}"),
    }
}

#[test]
fn test_mouth_angle_oscillates_within_bounds() {
    assert_that(&mouth_angle(0.0)).is_equal_to(0.0);
    for step in 0..100 {
        let angle = mouth_angle(step as f32 * 0.013);
        assert_that(&angle).is_greater_than_or_equal_to(0.0);
        assert_that(&angle).is_less_than_or_equal_to(MOUTH_MAX_ANGLE);
    }
    assert_that(&mouth_angle(0.125)).is_close_to(MOUTH_MAX_ANGLE, 1e-5);
}

#[test]
fn test_ghost_colors() {
    let mut ghost = Ghost::new(GhostType::Inky, IVec2::ZERO, 5.0, 0.0);
    assert_that(&ghost_color(&ghost, 0.0)).is_equal_to(GHOST_COLORS[2]);

    ghost.frightened = true;
    assert_that(&ghost_color(&ghost, 5.0)).is_equal_to(FRIGHTENED_COLOR);
    // Blinking phase comes from the timer: 1.9 s is an odd quarter second, 1.7 s an even one
    assert_that(&ghost_color(&ghost, 1.9)).is_equal_to(FRIGHTENED_BLINK_COLOR);
    assert_that(&ghost_color(&ghost, 1.7)).is_equal_to(FRIGHTENED_COLOR);
}

#[test]
fn test_render_is_pure() {
    let state = common::running_state(&BOARD);
    let before = state.clone();

    assert_eq!(render(&state), render(&state));
    assert_that(&state.pacman).is_equal_to(before.pacman);
    assert_that(&state.score).is_equal_to(before.score);
}

#[test]
fn test_ascii_frame() {
    let state = GameState::new(BOARD.as_slice());
    assert_eq!(ascii_frame(&state), "#######\n#o.C.b#\n#######");
}

#[test]
fn test_hud_text_separates_thousands() {
    let mut state = GameState::new(BOARD.as_slice());
    state.score = 1230;
    assert_eq!(hud_text(&state), "Score: 1,230  Lives: 3  Level: 1");

    state.score = 40;
    state.lives = 1;
    state.level = 12;
    assert_eq!(hud_text(&state), "Score: 40  Lives: 1  Level: 12");
}

#[test]
fn test_status_message_per_phase() {
    let mut state = GameState::new(BOARD.as_slice());
    assert_that(&status_message(&state)).is_equal_to(Some("Press start"));

    state.start();
    assert_that(&status_message(&state)).is_equal_to(Some("Ready!"));

    state.freeze_timer = 0.0;
    assert_that(&status_message(&state)).is_none();

    state.toggle_pause();
    assert_that(&status_message(&state)).is_equal_to(Some("Paused"));

    state.toggle_pause();
    state.lives = 1;
    state.lose_life();
    assert_that(&status_message(&state)).is_equal_to(Some("Game over"));
}
