use crate::board::GRID_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    pub fn new(x: u8, y: u8) -> Self {
        Position { x, y }
    }

    pub fn from_index(index: usize) -> Self {
        let size = GRID_SIZE as usize;
        Position {
            x: (index % size) as u8,
            y: (index / size) as u8,
        }
    }

    pub fn to_index(&self) -> usize {
        self.y as usize * GRID_SIZE as usize + self.x as usize
    }

    pub fn is_valid(&self) -> bool {
        self.x < GRID_SIZE && self.y < GRID_SIZE
    }
}
