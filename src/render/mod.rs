//! Turns a game state into a list of canvas draw commands.
//!
//! Rendering is pure: it reads the state and never changes it, so the same state always
//! produces the same frame. Hosts replay the commands on whatever surface they own.

use std::f32::consts::TAU;

use glam::Vec2;

use crate::constants::{
    BACKGROUND_COLOR, FRIGHTENED_BLINK_COLOR, FRIGHTENED_BLINK_RATE, FRIGHTENED_BLINK_TIME, FRIGHTENED_COLOR,
    MOUTH_MAX_ANGLE, MOUTH_RATE, PACMAN_COLOR, PELLET_COLOR, TILE_SIZE, WALL_COLOR,
};
use crate::entity::actor::Actor;
use crate::entity::ghost::Ghost;
use crate::game::state::GameState;
use crate::map::grid::Tile;

pub mod hud;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A single canvas primitive, in pixels.
///
/// Angles are in radians, clockwise from the positive x axis (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Clear { color: Color },
    FillRect { origin: Vec2, size: Vec2, color: Color },
    FillCircle { center: Vec2, radius: f32, color: Color },
    /// A filled circular sector swept clockwise from `start` to `end`.
    FillPie { center: Vec2, radius: f32, start: f32, end: f32, color: Color },
}

const PELLET_RADIUS: f32 = 0.12;
const POWER_PELLET_RADIUS: f32 = 0.3;
const ACTOR_RADIUS: f32 = 0.45;
const EYE_RADIUS: f32 = 0.12;
const PUPIL_RADIUS: f32 = 0.06;

fn tile_px() -> f32 {
    TILE_SIZE as f32
}

/// Pixel center of a position given in tile units.
fn to_canvas(position: Vec2) -> Vec2 {
    (position + Vec2::splat(0.5)) * tile_px()
}

/// Builds the full frame for `state`: background, maze, ghosts, then Pac-Man on top.
pub fn render(state: &GameState) -> Vec<DrawCommand> {
    let mut commands = vec![DrawCommand::Clear { color: BACKGROUND_COLOR }];

    render_grid(state, &mut commands);
    for ghost in state.ghosts.iter() {
        render_ghost(ghost, state.frightened_timer, &mut commands);
    }
    render_pacman(state, &mut commands);

    commands
}

fn render_grid(state: &GameState, commands: &mut Vec<DrawCommand>) {
    for (cell, tile) in state.grid.iter() {
        let center = to_canvas(cell.as_vec2());
        match tile {
            Tile::Wall => commands.push(DrawCommand::FillRect {
                origin: cell.as_vec2() * tile_px(),
                size: Vec2::splat(tile_px()),
                color: WALL_COLOR,
            }),
            Tile::Pellet => commands.push(DrawCommand::FillCircle {
                center,
                radius: PELLET_RADIUS * tile_px(),
                color: PELLET_COLOR,
            }),
            Tile::PowerPellet => commands.push(DrawCommand::FillCircle {
                center,
                radius: POWER_PELLET_RADIUS * tile_px(),
                color: PELLET_COLOR,
            }),
            Tile::Empty => {}
        }
    }
}

/// The body color of a ghost.
///
/// Frightened ghosts are blue, alternating with pink during the last seconds of the
/// frightened window. The alternation phase comes from the timer alone.
pub fn ghost_color(ghost: &Ghost, frightened_timer: f32) -> Color {
    if !ghost.frightened {
        return ghost.color();
    }

    let blink_on = (frightened_timer * FRIGHTENED_BLINK_RATE) as u32 % 2 == 1;
    if frightened_timer < FRIGHTENED_BLINK_TIME && blink_on {
        FRIGHTENED_BLINK_COLOR
    } else {
        FRIGHTENED_COLOR
    }
}

fn render_ghost(ghost: &Ghost, frightened_timer: f32, commands: &mut Vec<DrawCommand>) {
    let tile = tile_px();
    let center = to_canvas(ghost.position());
    let radius = ACTOR_RADIUS * tile;
    let color = ghost_color(ghost, frightened_timer);

    // Rounded head over a square skirt
    commands.push(DrawCommand::FillCircle { center, radius, color });
    commands.push(DrawCommand::FillRect {
        origin: Vec2::new(center.x - radius, center.y),
        size: Vec2::new(radius * 2.0, radius),
        color,
    });

    let look = ghost
        .motion
        .direction
        .map(|direction| direction.as_ivec2().as_vec2())
        .unwrap_or(Vec2::ZERO);

    for side in [-1.0, 1.0] {
        let eye = center + Vec2::new(side * 0.2 * tile, -0.1 * tile);
        commands.push(DrawCommand::FillCircle {
            center: eye,
            radius: EYE_RADIUS * tile,
            color: Color::WHITE,
        });
        commands.push(DrawCommand::FillCircle {
            center: eye + look * 0.05 * tile,
            radius: PUPIL_RADIUS * tile,
            color: Color::BLACK,
        });
    }
}

/// Opening of Pac-Man's mouth for a given mouth clock, in `[0, MOUTH_MAX_ANGLE]`.
pub fn mouth_angle(clock: f32) -> f32 {
    MOUTH_MAX_ANGLE * (clock * MOUTH_RATE * TAU / 2.0).sin().abs()
}

fn render_pacman(state: &GameState, commands: &mut Vec<DrawCommand>) {
    let facing = state.pacman.facing().angle();
    let half_mouth = mouth_angle(state.mouth_clock) / 2.0;

    commands.push(DrawCommand::FillPie {
        center: to_canvas(state.pacman.position()),
        radius: ACTOR_RADIUS * tile_px(),
        start: facing + half_mouth,
        end: facing + TAU - half_mouth,
        color: PACMAN_COLOR,
    });
}

/// A text snapshot of the board, one line per row, for terminals and logs.
///
/// `C` is Pac-Man, ghosts are their initial (`b`/`p`/`i`/`c`, or `f` while frightened).
pub fn ascii_frame(state: &GameState) -> String {
    let width = state.grid.width();
    let mut rows: Vec<Vec<char>> = (0..state.grid.height())
        .map(|_| Vec::with_capacity(width))
        .collect();

    for (cell, tile) in state.grid.iter() {
        let symbol = match tile {
            Tile::Wall => '#',
            Tile::Pellet => '.',
            Tile::PowerPellet => 'o',
            Tile::Empty => ' ',
        };
        rows[cell.y as usize].push(symbol);
    }

    let mut place = |cell: glam::IVec2, symbol: char| {
        if let Some(slot) = rows.get_mut(cell.y as usize).and_then(|row| row.get_mut(cell.x as usize)) {
            *slot = symbol;
        }
    };

    for ghost in state.ghosts.iter() {
        let symbol = if ghost.frightened {
            'f'
        } else {
            ghost.ghost_type.as_ref().chars().next().unwrap_or('g')
        };
        place(ghost.motion.cell, symbol);
    }
    place(state.pacman.motion.cell, 'C');

    rows.into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
