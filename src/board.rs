use std::fmt;
use std::hash::{Hash, Hasher};

use crate::position::Position;
use crate::tile::Tile;

pub const GRID_SIZE: u8 = 4;
pub const CELL_COUNT: usize = 16;

/// The full 4x4 grid of tiles, stored in row-major order (index = y*4 + x).
///
/// Invariant: every tile's `(x, y)` equals its row-major slot. The move
/// engine breaks this mid-computation and restamps positions before a board
/// escapes it.
#[derive(Clone, Copy, Debug)]
pub struct Board {
    tiles: [Tile; CELL_COUNT],
}

impl Board {
    pub fn empty() -> Self {
        let mut tiles = [Tile::default(); CELL_COUNT];
        for (index, tile) in tiles.iter_mut().enumerate() {
            *tile = Tile::empty_at(index);
        }
        Board { tiles }
    }

    pub fn from_values(values: [u32; CELL_COUNT]) -> Self {
        let mut board = Board::empty();
        for (index, &value) in values.iter().enumerate() {
            board.tiles[index].value = value;
        }
        board
    }

    /// Tile values in row-major order.
    pub fn values(&self) -> [u32; CELL_COUNT] {
        let mut values = [0; CELL_COUNT];
        for (slot, tile) in values.iter_mut().zip(self.tiles.iter()) {
            *slot = tile.value;
        }
        values
    }

    pub fn tiles(&self) -> &[Tile; CELL_COUNT] {
        &self.tiles
    }

    pub fn tile_at(&self, pos: &Position) -> Option<&Tile> {
        if pos.is_valid() {
            Some(&self.tiles[pos.to_index()])
        } else {
            None
        }
    }

    pub fn value_at(&self, x: u8, y: u8) -> u32 {
        self.tiles[Position::new(x, y).to_index()].value
    }

    pub fn set_value(&mut self, index: usize, value: u32) {
        self.tiles[index].value = value;
    }

    pub fn empty_indices(&self) -> Vec<usize> {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| tile.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn count_empty(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.tiles.iter().all(|tile| !tile.is_empty())
    }

    /// Highest tile value on the board (0 for an empty board).
    pub fn highest_tile(&self) -> u32 {
        self.tiles.iter().map(|tile| tile.value).max().unwrap_or(0)
    }

    pub(crate) fn tile(&self, index: usize) -> Tile {
        self.tiles[index]
    }

    pub(crate) fn put_tile(&mut self, index: usize, tile: Tile) {
        self.tiles[index] = tile;
    }

    /// Restore the position invariant: stamp every tile's `(x, y)` to match
    /// its row-major slot.
    pub(crate) fn stamp_positions(&mut self) {
        for (index, tile) in self.tiles.iter_mut().enumerate() {
            let pos = Position::from_index(index);
            tile.x = pos.x;
            tile.y = pos.y;
        }
    }

    pub(crate) fn clear_merged(&mut self) {
        for tile in self.tiles.iter_mut() {
            tile.merged = false;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

/// Boards compare by their 16 row-major values; positions are derived and
/// the `merged` flag is transient, so neither participates.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.tiles
            .iter()
            .zip(other.tiles.iter())
            .all(|(a, b)| a.value == b.value)
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for tile in &self.tiles {
            tile.value.hash(state);
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..GRID_SIZE {
            write!(f, "|")?;
            for x in 0..GRID_SIZE {
                let value = self.value_at(x, y);
                if value == 0 {
                    write!(f, "{:>4}|", ".")?;
                } else {
                    write!(f, "{:>4}|", value)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
