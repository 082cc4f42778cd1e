//! Screen rendering tests: drive a session, render into a framebuffer, and
//! assert on the visible text.

use charades_tui::core::{GameSession, SessionSnapshot};
use charades_tui::term::{ScreenView, Viewport};
use charades_tui::types::{
    Phase, Screen, UiAction, COUNTDOWN_START, COUNTDOWN_TICK_MS, ROUND_TICK_MS,
};

fn render(session: &GameSession) -> String {
    let snap = SessionSnapshot::of(session);
    ScreenView::default()
        .render(&snap, Viewport::new(80, 24))
        .text()
}

fn into_playing(session: &mut GameSession) {
    session.apply(UiAction::Play);
    session.apply(UiAction::StartGame);
    session.apply(UiAction::WordAction);
    session.tick(COUNTDOWN_TICK_MS * COUNTDOWN_START as u32);
    assert_eq!(session.round().unwrap().phase, Phase::Playing);
}

#[test]
fn menu_lists_the_entries() {
    let session = GameSession::new(1);
    let text = render(&session);

    assert!(text.contains("CHARADES"));
    assert!(text.contains("Play"));
    assert!(text.contains("Settings"));
    assert!(text.contains("How To Play"));
}

#[test]
fn setup_shows_config_values() {
    let mut session = GameSession::new(1);
    session.apply(UiAction::Play);
    let text = render(&session);

    assert!(text.contains("Teams (1-4)"));
    assert!(text.contains("2")); // default team count
    assert!(text.contains("60s"));
    assert!(text.contains("Animals"));
    assert!(text.contains("Start Game"));
}

#[test]
fn reveal_hides_the_word() {
    let mut session = GameSession::new(1);
    session.apply(UiAction::Play);
    session.apply(UiAction::StartGame);
    let text = render(&session);

    assert!(text.contains("(Word hidden)"));
    assert!(text.contains("Only the actor should see"));
    assert!(text.contains("Reveal Word"));
}

#[test]
fn playing_shows_word_timer_and_scores() {
    let mut session = GameSession::new(1);
    into_playing(&mut session);
    session.tick(ROUND_TICK_MS * 5);

    let word = session.round().unwrap().current_word;
    let text = render(&session);

    assert!(text.contains(word));
    assert!(text.contains("55s"));
    assert!(text.contains("Team 1"));
    assert!(text.contains("T2:0"));
    assert!(text.contains("End Round"));
}

#[test]
fn paused_round_shows_the_overlay() {
    let mut session = GameSession::new(1);
    into_playing(&mut session);
    session.apply(UiAction::TogglePause);

    let text = render(&session);
    assert!(text.contains("Paused"));
}

#[test]
fn waiting_for_next_masks_the_upcoming_word() {
    let mut session = GameSession::new(1);
    session.apply(UiAction::OpenSettings);
    session.apply(UiAction::ToggleAutoNext);
    session.apply(UiAction::BackToMenu);
    into_playing(&mut session);

    session.apply(UiAction::Correct);
    let upcoming = session.round().unwrap().current_word;

    let text = render(&session);
    assert!(!text.contains(upcoming));
    assert!(text.contains("Next Word"));
}

#[test]
fn summary_reports_round_points() {
    let mut session = GameSession::new(1);
    into_playing(&mut session);
    session.apply(UiAction::Correct);
    session.apply(UiAction::Correct);
    session.apply(UiAction::EndRound);
    assert_eq!(session.screen(), Screen::Summary);

    let text = render(&session);
    assert!(text.contains("Round Summary"));
    assert!(text.contains("Team 1 gained: 2"));
    assert!(text.contains("Next Turn"));
}

#[test]
fn final_screen_names_the_winner() {
    let mut session = GameSession::new(1);
    session.apply(UiAction::Play);
    session.apply(UiAction::AdjustRounds(-2)); // one round per team
    session.apply(UiAction::StartGame);

    // Team 1 scores, team 2 does not.
    session.apply(UiAction::WordAction);
    session.tick(COUNTDOWN_TICK_MS * COUNTDOWN_START as u32);
    session.apply(UiAction::Correct);
    session.apply(UiAction::EndRound);
    session.apply(UiAction::NextTurn);

    session.apply(UiAction::WordAction);
    session.tick(COUNTDOWN_TICK_MS * COUNTDOWN_START as u32);
    session.apply(UiAction::EndRound);
    session.apply(UiAction::NextTurn);
    assert_eq!(session.screen(), Screen::Final);

    let text = render(&session);
    assert!(text.contains("Final Results"));
    assert!(text.contains("Winner: Team 1 (1)"));
    assert!(text.contains("Restart"));
}

#[test]
fn german_menu_is_localized() {
    let mut session = GameSession::new(1);
    session.apply(UiAction::OpenSettings);
    session.apply(UiAction::ToggleLanguage);
    session.apply(UiAction::BackToMenu);

    let text = render(&session);
    assert!(text.contains("SCHARADEN"));
    assert!(text.contains("Spielen"));
}

#[test]
fn tiny_viewport_does_not_panic() {
    let mut session = GameSession::new(1);
    into_playing(&mut session);

    let snap = SessionSnapshot::of(&session);
    let view = ScreenView::default();
    for (w, h) in [(0, 0), (1, 1), (10, 3), (20, 5)] {
        let _ = view.render(&snap, Viewport::new(w, h));
    }
}
