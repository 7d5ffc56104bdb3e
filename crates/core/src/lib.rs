//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the snake game's state machine and nothing else. It
//! has no dependency on UI, terminal I/O, or timers, making it:
//!
//! - **Deterministic**: pass a seeded RNG and the whole game replays exactly
//! - **Testable**: every rule is a pure value-to-value assertion
//! - **Portable**: runs in any environment (terminal, GUI, headless)
//!
//! # Module structure
//!
//! - [`state`]: the validated [`GameState`] snapshot and food placement
//! - [`logic`]: the per-tick [`step`] transition function
//!
//! # Game rules
//!
//! - The grid is toroidal: the snake wraps around every edge.
//! - Moving onto any body cell other than the vacating tail ends the game.
//! - Eating food grows the snake by one segment and scores 10 points.
//! - Pause and game-over make [`step`] an exact no-op.
//!
//! # Example
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use tui_snake_core::{step, GameState};
//! use tui_snake_types::{Direction, Point};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let state = GameState::initial_with_rng(10, &mut rng).unwrap();
//! assert_eq!(state.head(), Point::new(5, 5));
//!
//! let next = step(&state, &mut rng);
//! assert_eq!(next.head(), Point::new(5, 4)); // moved one cell up
//! assert_eq!(state.head(), Point::new(5, 5)); // old snapshot untouched
//! ```

pub mod logic;
pub mod state;

pub use logic::step;
pub use state::{GameState, InvalidState};
