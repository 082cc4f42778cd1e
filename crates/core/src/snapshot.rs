//! Read-only view of the session for rendering.
//!
//! The renderer never reaches into [`crate::session::GameSession`] directly;
//! it consumes a snapshot built once per frame. This keeps the term crate
//! pure and unit-testable.

use charades_types::{GameConfig, Phase, Screen, StatusMessage, Tone, WordDisplay};

use crate::session::GameSession;

/// Per-turn view, present only while on the Gameplay screen.
#[derive(Debug, Clone)]
pub struct RoundSnapshot {
    pub phase: Phase,
    pub countdown_value: u8,
    pub time_left: u32,
    pub round_points: i32,
    pub word: WordDisplay,
    pub waiting_for_next: bool,
    pub paused: bool,
    pub timer_warning: bool,
}

/// Everything a screen view needs for one frame.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub screen: Screen,
    pub config: GameConfig,
    pub scores: Vec<i32>,
    pub turn_index: u32,
    pub current_team: usize,
    pub round_number: u32,
    pub status: StatusMessage,
    pub tone: Tone,
    pub round: Option<RoundSnapshot>,
    /// Round points of the turn shown on Summary.
    pub last_round_points: i32,
    /// Best score and the team(s) holding it (meaningful on Final).
    pub best_score: i32,
    pub winners: Vec<usize>,
}

impl SessionSnapshot {
    pub fn of(session: &GameSession) -> Self {
        let round = session.round().map(|r| RoundSnapshot {
            phase: r.phase,
            countdown_value: r.countdown_value,
            time_left: r.time_left,
            round_points: r.round_points,
            word: word_display(r.phase, r.current_word, r.waiting_for_next),
            waiting_for_next: r.waiting_for_next,
            paused: r.paused,
            timer_warning: r.timer_warning,
        });

        let (best_score, winners) = session.scores().winners();

        Self {
            screen: session.screen(),
            config: session.config().clone(),
            scores: session.scores().scores().to_vec(),
            turn_index: session.turn_index(),
            current_team: session.current_team(),
            round_number: session.round_number(),
            status: session.status(),
            tone: session.tone(),
            round,
            last_round_points: session.last_round_points(),
            best_score,
            winners,
        }
    }
}

fn word_display(phase: Phase, word: &'static str, waiting_for_next: bool) -> WordDisplay {
    if phase == Phase::Reveal || word.is_empty() {
        WordDisplay::Hidden
    } else if waiting_for_next {
        WordDisplay::AwaitNext
    } else {
        WordDisplay::Shown(word)
    }
}
