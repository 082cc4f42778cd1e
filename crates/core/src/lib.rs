//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the charades rules and state management. It has
//! **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: a fixed seed produces identical word sequences
//! - **Testable**: time is fake, driven entirely through [`GameSession::tick`]
//! - **Portable**: runs in any environment (terminal, headless tests)
//!
//! # Module structure
//!
//! - [`bank`]: compiled-in word tables (English and German)
//! - [`words`]: shuffled word bag with the no-immediate-repeat rule
//! - [`clock`]: handle-based interval/timeout scheduler over fake time
//! - [`scoreboard`]: per-team scores with clamped penalties and tie-aware winners
//! - [`session`]: screen and phase state machines, turn progression
//! - [`snapshot`]: read-only per-frame view consumed by the renderer
//!
//! # Example
//!
//! ```
//! use charades_core::GameSession;
//! use charades_types::UiAction;
//!
//! let mut session = GameSession::new(12345);
//! session.apply(UiAction::Play);
//! session.apply(UiAction::StartGame);
//! session.apply(UiAction::WordAction); // reveal the first word
//! session.tick(3000);                  // countdown 3...2...1
//! session.apply(UiAction::Correct);
//! assert_eq!(session.scores().score(0), 1);
//! ```

pub mod bank;
pub mod clock;
pub mod scoreboard;
pub mod session;
pub mod snapshot;
pub mod words;

pub use charades_types as types;

// Re-export commonly used types for convenience
pub use clock::{Scheduler, TimerHandle, MAX_TIMERS};
pub use scoreboard::ScoreBoard;
pub use session::{GameSession, RoundState, TimerEvent};
pub use snapshot::{RoundSnapshot, SessionSnapshot};
pub use words::{SimpleRng, WordSelector, NO_WORDS};
