//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, input mapping, UI rendering).
//!
//! # Grid
//!
//! The playfield is an N×N toroidal grid: each axis wraps modulo N, so a
//! snake leaving one edge re-enters from the opposite edge. N is fixed for a
//! game's lifetime and must be greater than 5.
//!
//! # Timing and scoring constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 150 | Fixed interval between game ticks |
//! | `FOOD_SCORE` | 10 | Points awarded per food eaten |
//! | `MIN_GRID_SIZE` | 6 | Smallest valid grid edge length |
//! | `DEFAULT_GRID_SIZE` | 20 | Grid edge length when none is given |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, Point};
//!
//! let head = Point::new(5, 5);
//! let (dx, dy) = Direction::Up.delta();
//! assert_eq!(Point::new(head.x + dx, head.y + dy), Point::new(5, 4));
//!
//! // Reversal detection, used by the input layer's turn guard.
//! assert_eq!(Direction::Up.opposite(), Direction::Down);
//! ```

use std::fmt;

/// Fixed game tick interval in milliseconds.
pub const TICK_MS: u32 = 150;

/// Points awarded for each food eaten.
pub const FOOD_SCORE: u32 = 10;

/// Smallest valid grid edge length (grids must be larger than 5).
pub const MIN_GRID_SIZE: i32 = 6;

/// Grid edge length used when the player does not pick one.
pub const DEFAULT_GRID_SIZE: i32 = 20;

/// A cell on the game grid.
///
/// Plain integer coordinates with structural equality. `(0, 0)` is the
/// top-left corner; `x` grows rightward and `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Snake heading. There is no ordering between directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The exact reverse of this direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// assert_eq!(Direction::Down.opposite(), Direction::Up);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit step `(dx, dy)` for one move in this direction, before wrapping.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Requests the input layer can produce for the driver.
///
/// The driver translates each action into a snapshot replacement: a direction
/// edit (subject to the reversal guard), a pause toggle, or a fresh game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Request a new heading. The driver must suppress the request when it is
    /// the exact opposite of the current heading.
    Turn(Direction),
    /// Toggle the paused flag without resetting anything.
    TogglePause,
    /// Start a fresh game on the same grid.
    Restart,
}
