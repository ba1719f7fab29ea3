//! This module contains all the constants used in the game.

use glam::IVec2;

use crate::render::Color;

/// The size of each tile on the canvas, in pixels.
pub const TILE_SIZE: u32 = 16;

/// The largest simulation step a single frame may take, in seconds.
pub const MAX_FRAME_DELTA: f32 = 0.05;

/// Player speed, in tiles per second.
pub const PACMAN_SPEED: f32 = 6.0;
/// Ghost speed on the first level, in tiles per second.
pub const GHOST_BASE_SPEED: f32 = 5.0;
/// Added to the ghost base speed on every level-up.
pub const GHOST_SPEED_PER_LEVEL: f32 = 0.5;
/// Speed multiplier applied to frightened ghosts.
pub const FRIGHTENED_SPEED_FACTOR: f32 = 0.65;

pub const STARTING_LIVES: u32 = 3;

/// Seconds the simulation holds still after a spawn, death or level-up.
pub const FREEZE_TIME: f32 = 1.5;
/// Seconds a power pellet keeps the ghosts frightened.
pub const FRIGHTENED_TIME: f32 = 8.0;
/// Frightened ghosts start blinking once less than this many seconds remain.
pub const FRIGHTENED_BLINK_TIME: f32 = 2.0;
/// Blue/pink alternations per second of the blink.
pub const FRIGHTENED_BLINK_RATE: f32 = 4.0;
/// Release wait given to a ghost after it has been eaten.
pub const GHOST_RESPAWN_WAIT: f32 = 2.0;
/// Release wait between consecutive ghosts after a spawn.
pub const GHOST_RELEASE_INTERVAL: f32 = 1.0;

/// Widest opening of Pac-Man's mouth, in radians.
pub const MOUTH_MAX_ANGLE: f32 = 0.8;
/// Mouth open/close cycles per second.
pub const MOUTH_RATE: f32 = 4.0;

/// Player/ghost contact distance, in tiles.
pub const COLLISION_DISTANCE: f32 = 0.4;

/// Chance that a ghost ignores its heuristic and wanders.
pub const GHOST_WANDER_CHANCE: f64 = 0.2;

/// Scoring values.
pub mod score {
    pub const PELLET: u32 = 10;
    pub const POWER_PELLET: u32 = 50;
    pub const GHOST: u32 = 200;
}

/// Player spawn used when a blueprint contains no `P`, as (col, row).
pub const FALLBACK_PLAYER_SPAWN: IVec2 = IVec2::new(1, 1);

/// Ghost palette, assigned to ghosts in spawn order and repeated as needed.
pub const GHOST_COLORS: [Color; 4] = [
    Color::rgb(255, 0, 0),
    Color::rgb(255, 184, 255),
    Color::rgb(0, 255, 255),
    Color::rgb(255, 184, 82),
];

pub const WALL_COLOR: Color = Color::rgb(33, 33, 222);
pub const PELLET_COLOR: Color = Color::rgb(255, 184, 151);
pub const PACMAN_COLOR: Color = Color::rgb(255, 255, 0);
pub const FRIGHTENED_COLOR: Color = Color::rgb(33, 33, 255);
pub const FRIGHTENED_BLINK_COLOR: Color = Color::rgb(255, 184, 255);
pub const BACKGROUND_COLOR: Color = Color::BLACK;

/// The default level, one string per row.
///
/// `#` wall, `.` pellet, `o` power pellet, `-`/space empty, `P` player spawn, `G` ghost spawn.
pub const RAW_BOARD: [&str; 31] = [
    "############################",
    "#............##............#",
    "#.####.#####.##.#####.####.#",
    "#o####.#####.##.#####.####o#",
    "#.####.#####.##.#####.####.#",
    "#..........................#",
    "#.####.##.########.##.####.#",
    "#.####.##.########.##.####.#",
    "#......##....##....##......#",
    "######.##### ## #####.######",
    "     #.##### ## #####.#     ",
    "     #.##          ##.#     ",
    "     #.## ###--### ##.#     ",
    "######.## #G GG G# ##.######",
    "      .   #      #   .      ",
    "######.## ######## ##.######",
    "     #.## ######## ##.#     ",
    "     #.##          ##.#     ",
    "     #.## ######## ##.#     ",
    "######.## ######## ##.######",
    "#............##............#",
    "#.####.#####.##.#####.####.#",
    "#.####.#####.##.#####.####.#",
    "#o..##.......P .......##..o#",
    "###.##.##.########.##.##.###",
    "###.##.##.########.##.##.###",
    "#......##....##....##......#",
    "#.##########.##.##########.#",
    "#.##########.##.##########.#",
    "#..........................#",
    "############################",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_board_dimensions() {
        assert_eq!(RAW_BOARD.len(), 31);
        for row in RAW_BOARD.iter() {
            assert_eq!(row.len(), 28);
        }
    }

    #[test]
    fn test_raw_board_boundaries() {
        assert!(RAW_BOARD[0].chars().all(|c| c == '#'));
        assert!(RAW_BOARD[RAW_BOARD.len() - 1].chars().all(|c| c == '#'));
    }

    #[test]
    fn test_raw_board_tunnel_row() {
        // Both ends of the tunnel row must be open for the wrap to work
        let tunnel_row = RAW_BOARD[14];
        assert_eq!(tunnel_row.chars().next(), Some(' '));
        assert_eq!(tunnel_row.chars().last(), Some(' '));
    }

    #[test]
    fn test_raw_board_power_pellets() {
        let count: usize = RAW_BOARD.iter().map(|row| row.matches('o').count()).sum();
        assert_eq!(count, 4);
    }

    #[test]
    fn test_raw_board_spawns() {
        let players: usize = RAW_BOARD.iter().map(|row| row.matches('P').count()).sum();
        let ghosts: usize = RAW_BOARD.iter().map(|row| row.matches('G').count()).sum();
        assert_eq!(players, 1);
        assert_eq!(ghosts, 4);
    }

    #[test]
    fn test_timers_are_consistent() {
        assert!(FRIGHTENED_BLINK_TIME < FRIGHTENED_TIME);
        assert!(FRIGHTENED_SPEED_FACTOR < 1.0);
        assert!(MAX_FRAME_DELTA * PACMAN_SPEED <= 1.0);
    }
}
