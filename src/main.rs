//! Terminal charades runner (default binary).
//!
//! It uses crossterm for input and a custom framebuffer-based renderer
//! (no ratatui widgets/layout). The loop polls for key events with a
//! timeout so the game timers keep advancing even when the keyboard is
//! idle.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use charades_tui::core::{GameSession, SessionSnapshot};
use charades_tui::input::{handle_key_event, should_quit};
use charades_tui::term::{ScreenView, TerminalRenderer, Viewport};
use charades_tui::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut session = GameSession::new(entropy_seed());
    let view = ScreenView::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let snap = SessionSnapshot::of(&session);
        let fb = view.render(&snap, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(session.screen(), key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(session.screen(), key) {
                        session.apply(action);
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            session.tick(elapsed.as_millis() as u32);
        }
    }
}

/// Seed the word shuffle from the wall clock; falls back to a fixed
/// seed if the clock reads before the epoch.
fn entropy_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(0x5eed_cafe)
}
