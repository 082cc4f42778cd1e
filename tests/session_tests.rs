//! End-to-end match flows through the public session API.

use charades_tui::core::{bank, GameSession, SessionSnapshot};
use charades_tui::types::{
    Category, Phase, Screen, StatusMessage, UiAction, COUNTDOWN_START, COUNTDOWN_TICK_MS,
    ROUND_TICK_MS,
};

/// Drive a session from Menu into the Playing phase.
fn into_playing(session: &mut GameSession) {
    session.apply(UiAction::Play);
    session.apply(UiAction::StartGame);
    start_round(session);
}

/// From the Reveal phase, draw a word and run out the countdown.
fn start_round(session: &mut GameSession) {
    session.apply(UiAction::WordAction);
    session.tick(COUNTDOWN_TICK_MS * COUNTDOWN_START as u32);
    assert_eq!(session.round().unwrap().phase, Phase::Playing);
}

#[test]
fn full_round_with_pass_penalty() {
    let mut session = GameSession::new(42);

    // Enable the -1 pass penalty, then set up a 2-team 30s match.
    session.apply(UiAction::OpenSettings);
    session.apply(UiAction::TogglePassPenalty);
    session.apply(UiAction::BackToMenu);

    session.apply(UiAction::Play);
    session.apply(UiAction::StepDuration(-1));
    assert_eq!(session.config().round_duration_secs, 30);
    session.apply(UiAction::StartGame);
    start_round(&mut session);

    for _ in 0..3 {
        session.apply(UiAction::Correct);
    }
    session.apply(UiAction::Pass);

    assert_eq!(session.scores().score(0), 2);
    assert_eq!(session.round().unwrap().round_points, 2);
    assert_eq!(session.status(), StatusMessage::PassPenalty);

    // Run the clock out; the round ends on its own.
    session.tick(ROUND_TICK_MS * 30);
    assert_eq!(session.screen(), Screen::Summary);
    assert_eq!(session.last_round_points(), 2);
}

#[test]
fn pass_without_penalty_keeps_score() {
    let mut session = GameSession::new(42);
    into_playing(&mut session);

    session.apply(UiAction::Pass);
    assert_eq!(session.scores().score(0), 0);
    assert_eq!(session.round().unwrap().round_points, 0);
    assert_eq!(session.status(), StatusMessage::Pass);
}

#[test]
fn score_clamps_at_zero_round_points_do_not() {
    let mut session = GameSession::new(42);
    session.apply(UiAction::OpenSettings);
    session.apply(UiAction::TogglePassPenalty);
    session.apply(UiAction::BackToMenu);
    into_playing(&mut session);

    session.apply(UiAction::Pass);
    session.apply(UiAction::Pass);

    assert_eq!(session.scores().score(0), 0);
    assert_eq!(session.round().unwrap().round_points, -2);
}

#[test]
fn turns_rotate_round_robin_until_final() {
    let mut session = GameSession::new(42);
    session.apply(UiAction::Play);
    session.apply(UiAction::AdjustTeams(1)); // 3 teams
    session.apply(UiAction::AdjustRounds(-1)); // 2 rounds each
    session.apply(UiAction::StartGame);

    let mut acting_teams = Vec::new();
    for turn in 0..6 {
        assert_eq!(session.screen(), Screen::Gameplay);
        acting_teams.push(session.current_team());
        assert_eq!(session.round_number(), turn / 3 + 1);

        start_round(&mut session);
        session.apply(UiAction::Correct);
        session.apply(UiAction::EndRound);
        assert_eq!(session.screen(), Screen::Summary);
        session.apply(UiAction::NextTurn);
    }

    assert_eq!(acting_teams, vec![0, 1, 2, 0, 1, 2]);
    assert_eq!(session.screen(), Screen::Final);
    assert_eq!(session.scores().scores(), &[2, 2, 2]);
}

#[test]
fn final_screen_reports_tied_winners() {
    let mut session = GameSession::new(42);
    session.apply(UiAction::Play);
    session.apply(UiAction::AdjustTeams(1)); // 3 teams
    session.apply(UiAction::AdjustRounds(-2)); // 1 round each
    session.apply(UiAction::StartGame);

    // Teams 0 and 1 score once, team 2 scores nothing.
    for team in 0..3 {
        start_round(&mut session);
        if team < 2 {
            session.apply(UiAction::Correct);
        }
        session.apply(UiAction::EndRound);
        session.apply(UiAction::NextTurn);
    }

    assert_eq!(session.screen(), Screen::Final);
    let snap = SessionSnapshot::of(&session);
    assert_eq!(snap.best_score, 1);
    assert_eq!(snap.winners, vec![0, 1]);
}

#[test]
fn restart_resets_scores_and_turns() {
    let mut session = GameSession::new(42);
    session.apply(UiAction::Play);
    session.apply(UiAction::AdjustRounds(-2)); // 1 round each, 2 teams
    session.apply(UiAction::StartGame);

    for _ in 0..2 {
        start_round(&mut session);
        session.apply(UiAction::Correct);
        session.apply(UiAction::EndRound);
        session.apply(UiAction::NextTurn);
    }
    assert_eq!(session.screen(), Screen::Final);

    session.apply(UiAction::Restart);
    assert_eq!(session.screen(), Screen::Gameplay);
    assert_eq!(session.turn_index(), 0);
    assert_eq!(session.scores().scores(), &[0, 0]);
    assert_eq!(session.round().unwrap().phase, Phase::Reveal);
}

#[test]
fn single_category_match_draws_only_from_it() {
    let mut session = GameSession::new(42);
    session.apply(UiAction::Play);
    session.apply(UiAction::ToggleCategory(Category::Animals));
    assert_eq!(session.config().categories.len(), 1);
    session.apply(UiAction::StartGame);
    start_round(&mut session);

    let pool = bank::words(session.config().language, Category::Animals);
    for _ in 0..10 {
        let word = session.round().unwrap().current_word;
        assert!(pool.contains(&word), "{word:?} not in the animals bank");
        session.apply(UiAction::Correct);
    }
}

#[test]
fn setup_changes_are_ignored_outside_setup() {
    let mut session = GameSession::new(42);
    session.apply(UiAction::AdjustTeams(1));
    session.apply(UiAction::StepDuration(1));
    assert_eq!(session.config().num_teams, 2);
    assert_eq!(session.config().round_duration_secs, 60);
}

#[test]
fn back_to_menu_abandons_the_match() {
    let mut session = GameSession::new(42);
    into_playing(&mut session);
    session.apply(UiAction::Correct);

    session.apply(UiAction::BackToMenu);
    assert_eq!(session.screen(), Screen::Menu);
    assert!(session.round().is_none());

    // The abandoned round's timer never fires into the menu.
    session.tick(ROUND_TICK_MS * 120);
    assert_eq!(session.screen(), Screen::Menu);
}
