use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};

use crate::board::{Board, GRID_SIZE};
use crate::direction::Direction;
use crate::tile::Tile;

/// The board produced by one move and the score gained by its merges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveResult {
    pub board: Board,
    pub score: u32,
}

/// Fresh board with exactly two random tiles spawned.
pub fn init_board<R: Rng + ?Sized>(rng: &mut R) -> Board {
    let mut board = Board::empty();
    spawn_random_tile(&mut board, rng);
    spawn_random_tile(&mut board, rng);
    board
}

/// Place a 2 (90%) or 4 (10%) into a uniformly random empty cell.
///
/// No-op when the board is full.
pub fn spawn_random_tile<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) {
    let empty = board.empty_indices();
    if let Some(&index) = empty.choose(rng) {
        let value = if rng.random_bool(0.9) { 2 } else { 4 };
        board.set_value(index, value);
    }
}

/// Cell indices of one row/column, ordered from the edge tiles travel toward.
///
/// The merge sweep always proceeds toward slot 0 of this ordering, so Right
/// and Down list their line in reverse.
fn line_indices(line: usize, direction: Direction) -> [usize; 4] {
    let size = GRID_SIZE as usize;
    match direction {
        Direction::Left => [line * size, line * size + 1, line * size + 2, line * size + 3],
        Direction::Right => [line * size + 3, line * size + 2, line * size + 1, line * size],
        Direction::Up => [line, line + size, line + 2 * size, line + 3 * size],
        Direction::Down => [line + 3 * size, line + 2 * size, line + size, line],
    }
}

/// Slide one line toward slot 0 and merge adjacent equal pairs.
///
/// A single sweep: each pair merges at most once, and a tile produced by a
/// merge is flagged so it cannot be consumed again within the same move.
/// Returns the compacted line and the score gained.
fn merge_line(line: [Tile; 4]) -> ([Tile; 4], u32) {
    let filtered: Vec<Tile> = line.iter().copied().filter(|tile| !tile.is_empty()).collect();

    let mut out = [Tile::default(); 4];
    let mut score = 0;
    let mut write = 0;
    let mut read = 0;

    while read < filtered.len() {
        if read + 1 < filtered.len() && filtered[read].value == filtered[read + 1].value {
            let merged_value = filtered[read].value * 2;
            score += merged_value;
            out[write] = Tile {
                value: merged_value,
                merged: true,
                ..filtered[read]
            };
            read += 2;
        } else {
            out[write] = filtered[read];
            read += 1;
        }
        write += 1;
    }

    (out, score)
}

/// Slide and merge every line in `direction`. Pure: no tile is spawned.
pub fn shift(board: &Board, direction: Direction) -> (Board, u32) {
    let mut next = *board;
    next.clear_merged();
    next.stamp_positions();

    let mut score = 0;
    for line in 0..GRID_SIZE as usize {
        let indices = line_indices(line, direction);
        let tiles = indices.map(|index| next.tile(index));
        let (merged, gained) = merge_line(tiles);
        score += gained;
        for (&index, tile) in indices.iter().zip(merged) {
            next.put_tile(index, tile);
        }
    }

    next.stamp_positions();
    (next, score)
}

/// Apply one move: slide/merge, then spawn a tile iff the board changed.
///
/// Spawning is strictly gated on structural change so a no-op move (e.g.
/// Left on an already left-compacted board) leaves the board untouched.
pub fn move_tiles<R: Rng + ?Sized>(
    board: &Board,
    direction: Direction,
    rng: &mut R,
) -> MoveResult {
    let (mut next, score) = shift(board, direction);
    if next != *board {
        spawn_random_tile(&mut next, rng);
    }
    MoveResult { board: next, score }
}

/// True iff some orthogonally adjacent pair of equal non-empty tiles exists.
///
/// Neighbor lookups are bounds-checked: the last cell of a row is never
/// compared against the first cell of the next row.
pub fn has_merge_available(board: &Board) -> bool {
    for y in 0..GRID_SIZE {
        for x in 0..GRID_SIZE {
            let value = board.value_at(x, y);
            if value == 0 {
                continue;
            }
            if x + 1 < GRID_SIZE && board.value_at(x + 1, y) == value {
                return true;
            }
            if y + 1 < GRID_SIZE && board.value_at(x, y + 1) == value {
                return true;
            }
        }
    }
    false
}

/// Terminal state: no empty cell and no merge left in any direction.
pub fn is_game_over(board: &Board) -> bool {
    board.is_full() && !has_merge_available(board)
}

/// A running game: the current board, the accumulated score, and whether the
/// terminal state has been reached.
///
/// `is_over` latches after the move that exhausts the board; surfacing that
/// to the player (dialog, banner, ...) is the caller's concern.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    score: u32,
    is_over: bool,
}

impl Game {
    /// Fresh board with exactly two spawned tiles.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Game {
            board: init_board(rng),
            score: 0,
            is_over: false,
        }
    }

    /// Deterministic game setup for reproducible play.
    pub fn with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new(&mut rng)
    }

    /// Rebuild a game from a saved board and score; the over flag is
    /// recomputed from the board.
    pub fn restore(board: Board, score: u32) -> Self {
        let is_over = is_game_over(&board);
        Game {
            board,
            score,
            is_over,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_over(&self) -> bool {
        self.is_over
    }

    /// Apply one move to the game, spawning via `rng` when the board changed.
    ///
    /// Returns the move's result; its score is also added to the running
    /// total. Once the game is over further moves are rejected as no-ops.
    pub fn make_move<R: Rng + ?Sized>(&mut self, direction: Direction, rng: &mut R) -> MoveResult {
        if self.is_over {
            return MoveResult {
                board: self.board,
                score: 0,
            };
        }

        let result = move_tiles(&self.board, direction, rng);
        self.board = result.board;
        self.score += result.score;

        if is_game_over(&self.board) {
            self.is_over = true;
        }

        result
    }

    /// Convenience: like `make_move` but uses the thread-local RNG.
    pub fn make_move_thread(&mut self, direction: Direction) -> MoveResult {
        let mut rng = rand::rng();
        self.make_move(direction, &mut rng)
    }
}

impl Default for Game {
    fn default() -> Self {
        let mut rng = rand::rng();
        Self::new(&mut rng)
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Game(score: {}, is_over: {})\n{}",
            self.score, self.is_over, self.board
        )
    }
}
