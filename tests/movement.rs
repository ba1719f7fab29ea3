use glam::{IVec2, Vec2};
use pacman_engine::entity::actor::Motion;
use pacman_engine::map::direction::Direction;
use pacman_engine::map::parser::BlueprintParser;
use pacman_engine::systems::{advance_actor, begin_move};
use speculoos::prelude::*;

fn corridor() -> pacman_engine::map::grid::Grid {
    BlueprintParser::parse(&["#####", "#...#", "#####"][..]).grid
}

#[test]
fn test_begin_move_into_wall_is_rejected() {
    let grid = corridor();
    let mut motion = Motion::new(IVec2::new(1, 1), 6.0);

    assert_that(&begin_move(&mut motion, &grid, Direction::Up)).is_false();
    assert_that(&begin_move(&mut motion, &grid, Direction::Left)).is_false();
    assert_that(&motion).is_equal_to(Motion::new(IVec2::new(1, 1), 6.0));
}

#[test]
fn test_begin_move_targets_adjacent_cell() {
    let grid = corridor();
    let mut motion = Motion::new(IVec2::new(1, 1), 6.0);

    assert_that(&begin_move(&mut motion, &grid, Direction::Right)).is_true();
    assert_that(&motion.moving).is_true();
    assert_that(&motion.from).is_equal_to(IVec2::new(1, 1));
    assert_that(&motion.to).is_equal_to(IVec2::new(2, 1));
    assert_that(&motion.progress).is_equal_to(0.0);
    assert_that(&motion.direction).is_equal_to(Some(Direction::Right));
}

#[test]
fn test_advance_settles_exactly_on_target() {
    let grid = corridor();
    let mut motion = Motion::new(IVec2::new(1, 1), 6.0);
    begin_move(&mut motion, &grid, Direction::Right);

    // 6 tiles/s at 0.05 s per tick: 0.3, 0.6, 0.9, then settle
    for _ in 0..3 {
        assert_that(&advance_actor(&mut motion, 0.05, 1.0)).is_false();
        assert_that(&motion.progress).is_greater_than(0.0);
        assert_that(&motion.progress).is_less_than(1.0);
    }
    assert_that(&advance_actor(&mut motion, 0.05, 1.0)).is_true();

    assert_that(&motion.cell).is_equal_to(IVec2::new(2, 1));
    assert_that(&motion.moving).is_false();
    assert_that(&motion.progress).is_equal_to(0.0);
    assert_that(&motion.position()).is_equal_to(Vec2::new(2.0, 1.0));
}

#[test]
fn test_advance_discards_overflow() {
    let grid = corridor();
    let mut motion = Motion::new(IVec2::new(1, 1), 6.0);
    begin_move(&mut motion, &grid, Direction::Right);

    // Enough for several tiles, but an actor only ever moves one
    assert_that(&advance_actor(&mut motion, 1.0, 1.0)).is_true();
    assert_that(&motion.cell).is_equal_to(IVec2::new(2, 1));
    assert_that(&motion.progress).is_equal_to(0.0);
}

#[test]
fn test_advance_idle_actor_does_nothing() {
    let mut motion = Motion::new(IVec2::new(1, 1), 6.0);
    assert_that(&advance_actor(&mut motion, 0.05, 1.0)).is_false();
    assert_that(&motion.progress).is_equal_to(0.0);
}

#[test]
fn test_speed_factor_slows_progress() {
    let grid = corridor();
    let mut motion = Motion::new(IVec2::new(1, 1), 4.0);
    begin_move(&mut motion, &grid, Direction::Right);

    advance_actor(&mut motion, 0.1, 0.5);
    assert_that(&motion.progress).is_close_to(0.2, 1e-6);
}

#[test]
fn test_horizontal_wrap_through_tunnel() {
    let grid = BlueprintParser::parse(&["#####", " ... ", "#####"][..]).grid;
    let mut motion = Motion::new(IVec2::new(0, 1), 6.0);

    assert_that(&begin_move(&mut motion, &grid, Direction::Left)).is_true();
    assert_that(&motion.to).is_equal_to(IVec2::new(4, 1));

    // Interpolation slides off the left edge instead of sweeping across the board
    motion.progress = 0.5;
    assert_that(&motion.position()).is_equal_to(Vec2::new(-0.5, 1.0));

    motion.progress = 0.0;
    advance_actor(&mut motion, 1.0, 1.0);
    assert_that(&motion.cell).is_equal_to(IVec2::new(4, 1));
}

#[test]
fn test_no_vertical_wrap() {
    let grid = BlueprintParser::parse(&[" ", " "][..]).grid;
    let mut motion = Motion::new(IVec2::new(0, 0), 6.0);

    assert_that(&begin_move(&mut motion, &grid, Direction::Up)).is_false();
    assert_that(&begin_move(&mut motion, &grid, Direction::Down)).is_true();
    assert_that(&motion.to).is_equal_to(IVec2::new(0, 1));
}
