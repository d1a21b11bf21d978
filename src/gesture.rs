use crate::direction::Direction;

/// A touch point in screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }
}

/// Translates a swipe gesture into a board direction.
///
/// Owned by the caller (typically the UI layer) rather than living as
/// process-wide state. One gesture at a time: a new `touch_start` overwrites
/// any origin still being tracked, and a completed gesture clears it.
#[derive(Clone, Copy, Debug, Default)]
pub struct SwipeTracker {
    origin: Option<Point>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        SwipeTracker { origin: None }
    }

    pub fn is_tracking(&self) -> bool {
        self.origin.is_some()
    }

    /// Record the gesture origin.
    pub fn touch_start(&mut self, point: Point) {
        self.origin = Some(point);
    }

    /// Complete the gesture and resolve it to a direction.
    ///
    /// The axis with the larger-magnitude delta wins; on that axis a positive
    /// `origin - end` delta maps to Left/Up and a negative one to Right/Down.
    /// Returns `None` (and stays idle) when no origin was recorded. The
    /// origin is cleared either way the gesture completes.
    pub fn touch_move(&mut self, point: Point) -> Option<Direction> {
        let origin = self.origin.take()?;

        let x_diff = origin.x - point.x;
        let y_diff = origin.y - point.y;

        let direction = if x_diff.abs() > y_diff.abs() {
            if x_diff > 0.0 {
                Direction::Left
            } else {
                Direction::Right
            }
        } else if y_diff > 0.0 {
            Direction::Up
        } else {
            Direction::Down
        };

        Some(direction)
    }

    pub fn reset(&mut self) {
        self.origin = None;
    }
}
