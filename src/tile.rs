use crate::position::Position;

/// One grid cell: a value (0 = empty) plus its grid position.
///
/// The `merged` flag is bookkeeping for a single move: it marks a tile
/// produced by a merge so it cannot merge again within the same sweep.
/// It is cleared at the start of every move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tile {
    pub value: u32,
    pub x: u8,
    pub y: u8,
    pub merged: bool,
}

impl Tile {
    pub fn new(value: u32, x: u8, y: u8) -> Self {
        Tile {
            value,
            x,
            y,
            merged: false,
        }
    }

    pub fn empty_at(index: usize) -> Self {
        let pos = Position::from_index(index);
        Tile::new(0, pos.x, pos.y)
    }

    pub fn is_empty(&self) -> bool {
        self.value == 0
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            write!(f, ".")
        } else {
            write!(f, "{}", self.value)
        }
    }
}
