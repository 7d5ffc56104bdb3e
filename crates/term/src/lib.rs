//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. Rendering
//! goes through a plain framebuffer of styled character cells that is flushed
//! to the terminal with diffed updates.
//!
//! Goals:
//! - Keep `core` deterministic and testable (the view reads snapshots only)
//! - Render each grid cell as a 2x1 block to compensate for glyph aspect ratio
//! - Redraw only the cells that changed between frames

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
