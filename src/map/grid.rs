//! The tile grid a level is played on.

use glam::IVec2;

use crate::constants::score;
use crate::map::direction::Direction;

/// An enum representing the different types of tiles on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Pellet,
    PowerPellet,
    Empty,
}

impl Tile {
    pub fn is_walkable(self) -> bool {
        !matches!(self, Tile::Wall)
    }

    pub fn is_consumable(self) -> bool {
        matches!(self, Tile::Pellet | Tile::PowerPellet)
    }

    /// Points awarded for eating this tile, if it can be eaten.
    pub fn score_value(self) -> Option<u32> {
        match self {
            Tile::Pellet => Some(score::PELLET),
            Tile::PowerPellet => Some(score::POWER_PELLET),
            _ => None,
        }
    }
}

/// A rectangular, row-major grid of tiles. Cells are addressed as `IVec2 { x: col, y: row }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Builds a grid from row-major tiles.
    ///
    /// # Panics
    ///
    /// Panics if `tiles.len() != width * height`.
    pub fn new(width: usize, height: usize, tiles: Vec<Tile>) -> Self {
        assert_eq!(tiles.len(), width * height, "grid dimensions do not match tile count");
        Self { width, height, tiles }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, cell: IVec2) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as usize) < self.width && (cell.y as usize) < self.height
    }

    fn index(&self, cell: IVec2) -> Option<usize> {
        self.contains(cell)
            .then(|| cell.y as usize * self.width + cell.x as usize)
    }

    /// The tile at `cell`, or `None` outside the grid.
    pub fn tile(&self, cell: IVec2) -> Option<Tile> {
        self.index(cell).map(|i| self.tiles[i])
    }

    pub fn is_walkable(&self, cell: IVec2) -> bool {
        self.tile(cell).is_some_and(Tile::is_walkable)
    }

    /// The cell reached by stepping once from `cell` in `direction`.
    ///
    /// Horizontal steps wrap around the grid edges (the tunnel); vertical steps never do.
    /// Returns `None` when the step leaves the grid or lands on a wall.
    pub fn neighbor(&self, cell: IVec2, direction: Direction) -> Option<IVec2> {
        let mut next = cell + direction.as_ivec2();
        if direction.is_horizontal() && self.width > 0 {
            next.x = next.x.rem_euclid(self.width as i32);
        }
        self.is_walkable(next).then_some(next)
    }

    /// Clears a consumable tile, returning what was there.
    ///
    /// Returns `None` and leaves the grid untouched if the tile held nothing to eat.
    pub fn consume(&mut self, cell: IVec2) -> Option<Tile> {
        let index = self.index(cell)?;
        let tile = self.tiles[index];
        if tile.is_consumable() {
            self.tiles[index] = Tile::Empty;
            Some(tile)
        } else {
            None
        }
    }

    /// Iterates every cell with its tile, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (IVec2, Tile)> + '_ {
        self.tiles.iter().enumerate().map(move |(i, tile)| {
            let cell = IVec2::new((i % self.width) as i32, (i / self.width) as i32);
            (cell, *tile)
        })
    }

    /// Number of tiles still holding a pellet or power pellet.
    pub fn consumables(&self) -> u32 {
        self.tiles.iter().filter(|t| t.is_consumable()).count() as u32
    }
}
