//! Key mapping from terminal events to UI actions.
//!
//! The mapping is screen-aware: the same key can mean different things on
//! different screens (Enter starts the game on Setup but advances the turn
//! on Summary). Keys with no meaning on the current screen map to `None`.

use charades_types::{Category, Screen, UiAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a UI action for the given screen.
pub fn handle_key_event(screen: Screen, key: KeyEvent) -> Option<UiAction> {
    // Esc backs out to the menu from everywhere but the menu itself.
    if key.code == KeyCode::Esc && screen != Screen::Menu {
        return Some(UiAction::BackToMenu);
    }
    if matches!(key.code, KeyCode::Char('m') | KeyCode::Char('M')) && screen != Screen::Menu {
        return Some(UiAction::BackToMenu);
    }

    match screen {
        Screen::Menu => match key.code {
            KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Enter => Some(UiAction::Play),
            KeyCode::Char('s') | KeyCode::Char('S') => Some(UiAction::OpenSettings),
            KeyCode::Char('h') | KeyCode::Char('H') => Some(UiAction::OpenHowTo),
            _ => None,
        },

        Screen::Setup => match key.code {
            // Lowercase steps up, uppercase steps down.
            KeyCode::Char('t') => Some(UiAction::AdjustTeams(1)),
            KeyCode::Char('T') => Some(UiAction::AdjustTeams(-1)),
            KeyCode::Char('d') => Some(UiAction::StepDuration(1)),
            KeyCode::Char('D') => Some(UiAction::StepDuration(-1)),
            KeyCode::Char('r') => Some(UiAction::AdjustRounds(1)),
            KeyCode::Char('R') => Some(UiAction::AdjustRounds(-1)),
            KeyCode::Char(c @ '1'..='7') => {
                let index = c as usize - '1' as usize;
                Category::ALL.get(index).copied().map(UiAction::ToggleCategory)
            }
            KeyCode::Enter => Some(UiAction::StartGame),
            _ => None,
        },

        Screen::Settings => match key.code {
            KeyCode::Char('l') | KeyCode::Char('L') => Some(UiAction::ToggleLanguage),
            KeyCode::Char('p') | KeyCode::Char('P') => Some(UiAction::TogglePassPenalty),
            KeyCode::Char('a') | KeyCode::Char('A') => Some(UiAction::ToggleAutoNext),
            _ => None,
        },

        Screen::HowTo => None,

        Screen::Gameplay => match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => Some(UiAction::WordAction),
            KeyCode::Char('c') | KeyCode::Char('C') => Some(UiAction::Correct),
            KeyCode::Char('x') | KeyCode::Char('X') => Some(UiAction::Pass),
            KeyCode::Char('e') | KeyCode::Char('E') => Some(UiAction::EndRound),
            KeyCode::Char('p') | KeyCode::Char('P') => Some(UiAction::TogglePause),
            _ => None,
        },

        Screen::Summary => match key.code {
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Enter => Some(UiAction::NextTurn),
            _ => None,
        },

        Screen::Final => match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => Some(UiAction::Restart),
            _ => None,
        },
    }
}

/// Whether the key should quit the process.
///
/// `q` quits outside Gameplay; mid-round it would be too easy to hit by
/// accident, so only Ctrl+C quits there.
pub fn should_quit(screen: Screen, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }
    screen != Screen::Gameplay && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
}
