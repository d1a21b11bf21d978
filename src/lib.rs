pub mod board;
pub mod direction;
pub mod game;
pub mod gesture;
pub mod position;
pub mod tile;

#[cfg(feature = "serde")]
pub mod serde_support;

#[cfg(feature = "python")]
extern crate pyo3;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule(gil_used = false)]
fn twenty48(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use direction::Direction;
    use python_bindings::*;
    m.add_class::<PyBoard>()?;
    m.add_class::<PyGame>()?;
    m.add_class::<PySwipeTracker>()?;
    m.add("LEFT", Direction::Left as u8)?;
    m.add("RIGHT", Direction::Right as u8)?;
    m.add("UP", Direction::Up as u8)?;
    m.add("DOWN", Direction::Down as u8)?;
    Ok(())
}

#[cfg(feature = "python")]
mod python_bindings {
    use super::*;
    use crate::board::{Board, CELL_COUNT};
    use crate::direction::Direction;
    use crate::game::{self, Game};
    use crate::gesture::{Point, SwipeTracker};

    fn parse_direction(direction: u8) -> PyResult<Direction> {
        Direction::from_int(direction).ok_or_else(|| {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(
                "Direction must be 0 (left), 1 (right), 2 (up) or 3 (down)",
            )
        })
    }

    #[pyclass(name = "Board")]
    #[derive(Clone)]
    pub struct PyBoard {
        board: Board,
    }

    #[pymethods]
    impl PyBoard {
        #[new]
        pub fn new() -> Self {
            PyBoard {
                board: Board::empty(),
            }
        }

        #[staticmethod]
        pub fn from_values(values: Vec<u32>) -> PyResult<Self> {
            if values.len() != CELL_COUNT {
                return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(
                    "Board requires exactly 16 cell values",
                ));
            }
            for &value in &values {
                if value != 0 && (value < 2 || !value.is_power_of_two()) {
                    return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(
                        "Cell values must be 0 or a power of two >= 2",
                    ));
                }
            }
            let mut cells = [0u32; CELL_COUNT];
            cells.copy_from_slice(&values);
            Ok(PyBoard {
                board: Board::from_values(cells),
            })
        }

        pub fn values(&self) -> Vec<u32> {
            self.board.values().to_vec()
        }

        pub fn count_empty(&self) -> usize {
            self.board.count_empty()
        }

        pub fn is_full(&self) -> bool {
            self.board.is_full()
        }

        pub fn highest_tile(&self) -> u32 {
            self.board.highest_tile()
        }

        /// Slide/merge without spawning; returns (board, score).
        pub fn shift(&self, direction: u8) -> PyResult<(PyBoard, u32)> {
            let direction = parse_direction(direction)?;
            let (board, score) = game::shift(&self.board, direction);
            Ok((PyBoard { board }, score))
        }

        pub fn is_game_over(&self) -> bool {
            game::is_game_over(&self.board)
        }

        pub fn __str__(&self) -> String {
            self.board.to_string()
        }

        pub fn __repr__(&self) -> String {
            format!("Board({:?})", self.board.values())
        }

        pub fn __eq__(&self, other: &PyBoard) -> bool {
            self.board == other.board
        }
    }

    #[pyclass(name = "Game")]
    pub struct PyGame {
        game: Game,
    }

    #[pymethods]
    impl PyGame {
        #[new]
        pub fn new() -> Self {
            PyGame {
                game: Game::default(),
            }
        }

        #[staticmethod]
        pub fn with_seed(seed: u64) -> Self {
            PyGame {
                game: Game::with_seed(seed),
            }
        }

        /// Apply a move; returns the score gained by that move.
        pub fn make_move(&mut self, direction: u8) -> PyResult<u32> {
            let direction = parse_direction(direction)?;
            Ok(self.game.make_move_thread(direction).score)
        }

        pub fn board(&self) -> PyBoard {
            PyBoard {
                board: *self.game.board(),
            }
        }

        pub fn values(&self) -> Vec<u32> {
            self.game.board().values().to_vec()
        }

        pub fn score(&self) -> u32 {
            self.game.score()
        }

        pub fn is_over(&self) -> bool {
            self.game.is_over()
        }

        pub fn __str__(&self) -> String {
            self.game.to_string()
        }

        pub fn __repr__(&self) -> String {
            format!(
                "Game(score={}, is_over={})",
                self.game.score(),
                self.game.is_over()
            )
        }
    }

    #[pyclass(name = "SwipeTracker")]
    #[derive(Clone)]
    pub struct PySwipeTracker {
        tracker: SwipeTracker,
    }

    #[pymethods]
    impl PySwipeTracker {
        #[new]
        pub fn new() -> Self {
            PySwipeTracker {
                tracker: SwipeTracker::new(),
            }
        }

        pub fn touch_start(&mut self, x: f32, y: f32) {
            self.tracker.touch_start(Point::new(x, y));
        }

        /// Complete the gesture; returns the direction int or None.
        pub fn touch_move(&mut self, x: f32, y: f32) -> Option<u8> {
            self.tracker
                .touch_move(Point::new(x, y))
                .map(|direction| direction as u8)
        }

        pub fn is_tracking(&self) -> bool {
            self.tracker.is_tracking()
        }

        pub fn reset(&mut self) {
            self.tracker.reset();
        }

        pub fn __repr__(&self) -> String {
            format!("SwipeTracker(tracking={})", self.tracker.is_tracking())
        }
    }
}
