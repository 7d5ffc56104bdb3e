//! Game state module - the validated, immutable snapshot
//!
//! A [`GameState`] describes one instant of the game: snake body, food cell,
//! heading, grid size, score, and the paused/game-over flags. Snapshots are
//! never mutated in place; the driver replaces its held snapshot wholesale on
//! every tick or input edit, which keeps render diffing and testing trivial.

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use tui_snake_types::{Direction, Point, MIN_GRID_SIZE};

/// Constructing a snapshot that violates a state invariant.
///
/// Always fatal to the construction call; values are never silently clamped
/// into range. Callers decide whether to abort startup or reject a malformed
/// restart request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidState {
    #[error("grid size must be greater than 5, got {0}")]
    GridTooSmall(i32),
    #[error("snake must have at least one segment")]
    EmptySnake,
    #[error("point {0} lies outside the {1}x{1} grid")]
    OutOfBounds(Point, i32),
}

/// One immutable snapshot of the game.
///
/// Invariants, checked by [`GameState::new`] and upheld by every value the
/// transition engine produces:
///
/// - `grid_size > 5`
/// - the snake has at least one segment
/// - every snake segment and the food cell lie in `[0, grid_size)` on both axes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Body cells, head first.
    pub(crate) snake: Vec<Point>,
    pub(crate) food: Point,
    /// Heading applied on the next transition.
    pub(crate) direction: Direction,
    pub(crate) grid_size: i32,
    pub(crate) game_over: bool,
    pub(crate) score: u32,
    pub(crate) paused: bool,
}

impl GameState {
    /// Build a snapshot from parts, validating every invariant.
    ///
    /// Score starts at zero and both flags start cleared; a collision state
    /// is only reachable through [`crate::step`].
    pub fn new(
        snake: Vec<Point>,
        food: Point,
        direction: Direction,
        grid_size: i32,
    ) -> Result<Self, InvalidState> {
        let state = Self {
            snake,
            food,
            direction,
            grid_size,
            game_over: false,
            score: 0,
            paused: false,
        };
        state.validate()?;
        Ok(state)
    }

    /// The canonical starting position: a 3-segment snake centered on the
    /// grid and extending one column below center, heading up, with food
    /// placed on a free cell.
    ///
    /// Food placement draws from the thread RNG; use
    /// [`GameState::initial_with_rng`] when determinism matters.
    pub fn initial(grid_size: i32) -> Result<Self, InvalidState> {
        Self::initial_with_rng(grid_size, &mut rand::thread_rng())
    }

    /// [`GameState::initial`] with an explicit randomness source.
    pub fn initial_with_rng<R: Rng>(grid_size: i32, rng: &mut R) -> Result<Self, InvalidState> {
        if grid_size < MIN_GRID_SIZE {
            return Err(InvalidState::GridTooSmall(grid_size));
        }

        let center = grid_size / 2;
        let snake = vec![
            Point::new(center, center),
            Point::new(center, center + 1),
            Point::new(center, center + 2),
        ];
        let food = place_food(&snake, grid_size, rng);
        Self::new(snake, food, Direction::Up, grid_size)
    }

    /// Head cell (first body segment).
    pub fn head(&self) -> Point {
        // The non-empty invariant makes indexing safe.
        self.snake[0]
    }

    pub fn snake(&self) -> &[Point] {
        &self.snake
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn grid_size(&self) -> i32 {
        self.grid_size
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// A new snapshot with the heading replaced.
    ///
    /// The state model accepts any heading, including a reversal; suppressing
    /// reversals into the snake's neck is the input collaborator's contract
    /// (`tui_snake_input::resolve_turn`).
    pub fn with_direction(&self, direction: Direction) -> Self {
        Self {
            direction,
            ..self.clone()
        }
    }

    /// A new snapshot with the paused flag replaced. Nothing else changes,
    /// so unpausing resumes exactly where the game left off.
    pub fn with_paused(&self, paused: bool) -> Self {
        Self {
            paused,
            ..self.clone()
        }
    }

    /// Pick a food cell uniformly among cells not occupied by the snake.
    ///
    /// When the snake covers the entire grid there is no free cell; the
    /// placement falls back to `(0, 0)` and logs a warning instead of
    /// failing. That can only happen once `snake.len() == grid_size²`.
    pub fn generate_food<R: Rng>(&self, rng: &mut R) -> Point {
        place_food(&self.snake, self.grid_size, rng)
    }

    pub(crate) fn validate(&self) -> Result<(), InvalidState> {
        if self.grid_size < MIN_GRID_SIZE {
            return Err(InvalidState::GridTooSmall(self.grid_size));
        }
        if self.snake.is_empty() {
            return Err(InvalidState::EmptySnake);
        }
        for &segment in &self.snake {
            if !self.contains(segment) {
                return Err(InvalidState::OutOfBounds(segment, self.grid_size));
            }
        }
        if !self.contains(self.food) {
            return Err(InvalidState::OutOfBounds(self.food, self.grid_size));
        }
        Ok(())
    }

    fn contains(&self, point: Point) -> bool {
        (0..self.grid_size).contains(&point.x) && (0..self.grid_size).contains(&point.y)
    }
}

/// Uniform choice among the grid cells not occupied by `snake`.
///
/// Shared by [`GameState::generate_food`] and the transition engine, which
/// must place food against the post-move body.
pub(crate) fn place_food<R: Rng>(snake: &[Point], grid_size: i32, rng: &mut R) -> Point {
    let mut free = Vec::with_capacity((grid_size * grid_size) as usize);
    for x in 0..grid_size {
        for y in 0..grid_size {
            let cell = Point::new(x, y);
            if !snake.contains(&cell) {
                free.push(cell);
            }
        }
    }

    match free.choose(rng) {
        Some(&cell) => cell,
        None => {
            // Snake occupies every cell. Documented fallback policy: take
            // (0,0) and surface the event as a warning rather than failing.
            log::warn!("no free cell left for food; falling back to (0,0)");
            Point::new(0, 0)
        }
    }
}
