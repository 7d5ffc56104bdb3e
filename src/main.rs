//! Terminal snake runner (default binary).
//!
//! The driver owns the current snapshot and does three things: it renders the
//! snapshot every frame, translates key presses into snapshot replacements
//! between ticks, and invokes the transition engine at a fixed interval.
//! Ticks are suppressed (never queued) while the game is paused or over.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_snake::core::{step, GameState};
use tui_snake::input::{handle_key_event, resolve_turn, should_quit};
use tui_snake::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_snake::types::{GameAction, DEFAULT_GRID_SIZE, MIN_GRID_SIZE, TICK_MS};

/// Largest grid the driver accepts. Terminals cap out far below this, and
/// the bound keeps board geometry well inside `u16` cell coordinates.
const MAX_GRID_SIZE: i32 = 256;

fn main() -> Result<()> {
    let grid_size = parse_grid_size(std::env::args().nth(1))?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, grid_size);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, grid_size: i32) -> Result<()> {
    let mut rng = rand::thread_rng();
    // A bad grid size aborts startup here, before the first frame.
    let mut state = GameState::initial(grid_size).context("cannot start game")?;

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&state, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        // Immediate cancellation: no further step runs.
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        state = apply_action(&state, action, grid_size)?;
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick. Skipped intervals are dropped, not replayed, so unpausing
        // resumes at the normal pace.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            if !state.paused() && !state.game_over() {
                state = step(&state, &mut rng);
            }
        }
    }
}

fn parse_grid_size(arg: Option<String>) -> Result<i32> {
    let Some(arg) = arg else {
        return Ok(DEFAULT_GRID_SIZE);
    };
    let grid_size = arg
        .parse::<i32>()
        .with_context(|| format!("grid size must be an integer, got {arg:?}"))?;
    anyhow::ensure!(
        (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&grid_size),
        "grid size must be between {MIN_GRID_SIZE} and {MAX_GRID_SIZE}, got {grid_size}"
    );
    Ok(grid_size)
}

/// Translate one input action into a replacement snapshot.
fn apply_action(state: &GameState, action: GameAction, grid_size: i32) -> Result<GameState> {
    let next = match action {
        GameAction::Turn(requested) => {
            // Reversal guard: a turn straight into the neck is suppressed
            // here and never reaches the state.
            match resolve_turn(state.direction(), requested) {
                Some(direction) => state.with_direction(direction),
                None => state.clone(),
            }
        }
        GameAction::TogglePause => state.with_paused(!state.paused()),
        GameAction::Restart => GameState::initial(grid_size).context("cannot restart game")?,
    };
    Ok(next)
}
