//! Map parsing functionality for converting raw blueprints into structured level data.

use glam::IVec2;
use tracing::debug;

use crate::constants::FALLBACK_PLAYER_SPAWN;
use crate::map::grid::{Grid, Tile};

/// What a single blueprint character stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Tile(Tile),
    PlayerSpawn,
    GhostSpawn,
    /// Not a blueprint symbol; loaded as a pellet.
    Unknown(char),
}

impl Symbol {
    /// The tile this symbol leaves on the grid.
    pub fn tile(self) -> Tile {
        match self {
            Symbol::Tile(tile) => tile,
            Symbol::PlayerSpawn | Symbol::GhostSpawn => Tile::Empty,
            Symbol::Unknown(_) => Tile::Pellet,
        }
    }
}

/// Represents the parsed data from a raw blueprint.
#[derive(Debug, Clone)]
pub struct ParsedLevel {
    pub grid: Grid,
    /// Ghost spawn cells, in scan order.
    pub ghost_spawns: Vec<IVec2>,
    pub player_spawn: IVec2,
    /// Pellets plus power pellets.
    pub consumables: u32,
}

/// Parser for converting raw blueprints into level data.
pub struct BlueprintParser;

impl BlueprintParser {
    /// Parses a single character into a blueprint symbol.
    pub fn parse_character(c: char) -> Symbol {
        match c {
            '#' => Symbol::Tile(Tile::Wall),
            '.' => Symbol::Tile(Tile::Pellet),
            'o' => Symbol::Tile(Tile::PowerPellet),
            '-' | ' ' => Symbol::Tile(Tile::Empty),
            'P' => Symbol::PlayerSpawn,
            'G' => Symbol::GhostSpawn,
            other => Symbol::Unknown(other),
        }
    }

    /// Parses a blueprint, one string per row.
    ///
    /// Parsing never fails. Unknown symbols become pellets, a missing `P` falls back to
    /// [`FALLBACK_PLAYER_SPAWN`] and short rows are padded with walls to the widest row.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> ParsedLevel {
        let height = rows.len();
        let width = rows.iter().map(|row| row.as_ref().chars().count()).max().unwrap_or(0);

        let mut tiles = vec![Tile::Wall; width * height];
        let mut ghost_spawns = Vec::new();
        let mut player_spawn = None;
        let mut consumables = 0;

        for (y, row) in rows.iter().enumerate() {
            for (x, character) in row.as_ref().chars().enumerate() {
                let cell = IVec2::new(x as i32, y as i32);
                let symbol = Self::parse_character(character);

                match symbol {
                    Symbol::PlayerSpawn => player_spawn = Some(cell),
                    Symbol::GhostSpawn => ghost_spawns.push(cell),
                    Symbol::Unknown(c) => debug!(?cell, symbol = %c, "Unrecognized blueprint symbol, loading as pellet"),
                    Symbol::Tile(_) => {}
                }

                let tile = symbol.tile();
                if tile.is_consumable() {
                    consumables += 1;
                }
                tiles[y * width + x] = tile;
            }
        }

        let player_spawn = player_spawn.unwrap_or_else(|| {
            debug!(fallback = ?FALLBACK_PLAYER_SPAWN, "Blueprint has no player spawn");
            FALLBACK_PLAYER_SPAWN
        });

        ParsedLevel {
            grid: Grid::new(width, height, tiles),
            ghost_spawns,
            player_spawn,
            consumables,
        }
    }
}
