//! Game session - screen and phase state machines, turn progression, scoring
//!
//! [`GameSession`] owns everything mutable: config, word selector, scores,
//! turn counter, scheduler, and the per-turn round state. All mutation goes
//! through [`GameSession::apply`] (player actions) or [`GameSession::tick`]
//! (elapsed time), so the session is single-threaded and deterministic under
//! fake time.
//!
//! Timer events can be stale: a tick may sit in the fired batch after an
//! earlier event in the same batch changed the state it was scheduled for.
//! Every event handler therefore re-validates screen, phase, and the paused
//! flag before acting.

use charades_types::{
    GameConfig, Phase, Screen, StatusMessage, Tone, UiAction, COUNTDOWN_START,
    COUNTDOWN_TICK_MS, FLASH_REVERT_MS, ROUND_TICK_MS,
};

use crate::clock::{Scheduler, TimerHandle};
use crate::scoreboard::ScoreBoard;
use crate::words::WordSelector;

/// Events produced by the session's timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    CountdownTick,
    RoundTick,
    FlashRevert,
}

/// Per-turn state. Created fresh on entering Gameplay, dropped on leaving.
#[derive(Debug, Clone)]
pub struct RoundState {
    pub phase: Phase,
    /// Phase interrupted by the pause toggle, restored on resume.
    phase_before_pause: Option<Phase>,
    pub countdown_value: u8,
    /// Seconds remaining. Non-increasing while Playing, floor 0.
    pub time_left: u32,
    /// Points gained this turn. May go negative under the pass penalty.
    pub round_points: i32,
    pub current_word: &'static str,
    /// True when auto-next is off and a drawn word awaits a "Next Word" tap.
    pub waiting_for_next: bool,
    pub paused: bool,
    /// Round timer could not be armed; round never auto-expires.
    pub timer_warning: bool,
}

impl RoundState {
    fn new(duration_secs: u32) -> Self {
        Self {
            phase: Phase::Reveal,
            phase_before_pause: None,
            countdown_value: COUNTDOWN_START,
            time_left: duration_secs,
            round_points: 0,
            current_word: "",
            waiting_for_next: false,
            paused: false,
            timer_warning: false,
        }
    }
}

/// The running game. One per process, constructed at startup.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    screen: Screen,
    selector: WordSelector,
    scores: ScoreBoard,
    /// Monotonic turn counter across the whole match.
    turn_index: u32,
    round: Option<RoundState>,
    /// Round points of the turn that just ended, shown on Summary.
    last_round_points: i32,
    status: StatusMessage,
    tone: Tone,

    scheduler: Scheduler<TimerEvent>,
    round_interval: Option<TimerHandle>,
    countdown_interval: Option<TimerHandle>,
    flash_timeout: Option<TimerHandle>,
}

impl GameSession {
    /// Create a session on the Menu screen with default config.
    pub fn new(seed: u32) -> Self {
        Self::with_scheduler(seed, Scheduler::new())
    }

    /// Create a session over a specific scheduler.
    ///
    /// Tests use this with a zero-limit scheduler to exercise the
    /// timer-unavailable fallbacks.
    pub fn with_scheduler(seed: u32, scheduler: Scheduler<TimerEvent>) -> Self {
        let config = GameConfig::default();
        let selector = WordSelector::new(seed, config.language);
        let scores = ScoreBoard::new(config.num_teams as usize);
        Self {
            config,
            screen: Screen::Menu,
            selector,
            scores,
            turn_index: 0,
            round: None,
            last_round_points: 0,
            status: StatusMessage::ActorHint,
            tone: Tone::Neutral,
            scheduler,
            round_interval: None,
            countdown_interval: None,
            flash_timeout: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    pub fn turn_index(&self) -> u32 {
        self.turn_index
    }

    /// Team acting this turn.
    pub fn current_team(&self) -> usize {
        (self.turn_index % self.config.num_teams as u32) as usize
    }

    /// 1-based round number of the current turn.
    pub fn round_number(&self) -> u32 {
        self.turn_index / self.config.num_teams as u32 + 1
    }

    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    pub fn last_round_points(&self) -> i32 {
        self.last_round_points
    }

    pub fn status(&self) -> StatusMessage {
        self.status
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    // ---------- Time ----------

    /// Advance fake time. The main loop calls this every frame with elapsed
    /// wall milliseconds; tests call it with whatever they need.
    pub fn tick(&mut self, elapsed_ms: u32) {
        for event in self.scheduler.advance(elapsed_ms) {
            match event {
                TimerEvent::CountdownTick => self.on_countdown_tick(),
                TimerEvent::RoundTick => self.on_round_tick(),
                TimerEvent::FlashRevert => self.on_flash_revert(),
            }
        }
    }

    // ---------- Actions ----------

    /// Apply a player action. Actions that do not belong to the current
    /// screen are ignored.
    pub fn apply(&mut self, action: UiAction) {
        match action {
            // Back navigation works from every screen.
            UiAction::BackToMenu => self.go(Screen::Menu),

            UiAction::Play if self.screen == Screen::Menu => self.go(Screen::Setup),
            UiAction::OpenSettings if self.screen == Screen::Menu => self.go(Screen::Settings),
            UiAction::OpenHowTo if self.screen == Screen::Menu => self.go(Screen::HowTo),

            UiAction::AdjustTeams(d) if self.screen == Screen::Setup => {
                self.config.adjust_teams(d)
            }
            UiAction::StepDuration(d) if self.screen == Screen::Setup => {
                self.config.step_duration(d)
            }
            UiAction::AdjustRounds(d) if self.screen == Screen::Setup => {
                self.config.adjust_rounds(d)
            }
            UiAction::ToggleCategory(cat) if self.screen == Screen::Setup => {
                self.config.toggle_category(cat)
            }
            UiAction::StartGame if self.screen == Screen::Setup => self.start_match(),

            UiAction::ToggleLanguage if self.screen == Screen::Settings => {
                self.config.toggle_language();
                self.selector
                    .rebuild(self.config.language, self.config.categories);
            }
            UiAction::TogglePassPenalty if self.screen == Screen::Settings => {
                self.config.toggle_pass_penalty()
            }
            UiAction::ToggleAutoNext if self.screen == Screen::Settings => {
                self.config.toggle_auto_next()
            }

            UiAction::WordAction if self.screen == Screen::Gameplay => self.on_word_action(),
            UiAction::Correct if self.screen == Screen::Gameplay => self.on_correct(),
            UiAction::Pass if self.screen == Screen::Gameplay => self.on_pass(),
            UiAction::EndRound if self.screen == Screen::Gameplay => self.on_end_round(),
            UiAction::TogglePause if self.screen == Screen::Gameplay => self.toggle_pause(),

            UiAction::NextTurn if self.screen == Screen::Summary => self.next_turn(),
            UiAction::Restart if self.screen == Screen::Final => self.restart(),

            _ => {}
        }
    }

    // ---------- Screen transitions ----------

    /// Transition to a screen.
    ///
    /// Leaving Gameplay for any other screen unconditionally cancels all
    /// timers and drops the round state; no timer event may act once the
    /// session has left Gameplay.
    fn go(&mut self, screen: Screen) {
        if self.screen == Screen::Gameplay && screen != Screen::Gameplay {
            self.stop_all_timers();
            self.round = None;
        }
        self.screen = screen;
        if screen == Screen::Gameplay {
            self.enter_gameplay();
        }
    }

    fn enter_gameplay(&mut self) {
        self.stop_all_timers();
        self.round = Some(RoundState::new(self.config.round_duration_secs));
        self.status = StatusMessage::ActorHint;
        self.tone = Tone::Neutral;
    }

    fn start_match(&mut self) {
        self.selector
            .rebuild(self.config.language, self.config.categories);
        self.scores = ScoreBoard::new(self.config.num_teams as usize);
        self.turn_index = 0;
        self.go(Screen::Gameplay);
    }

    fn next_turn(&mut self) {
        self.turn_index += 1;
        if self.turn_index >= self.config.total_turns() {
            self.go(Screen::Final);
        } else {
            self.go(Screen::Gameplay);
        }
    }

    fn restart(&mut self) {
        self.scores.reset();
        self.turn_index = 0;
        self.go(Screen::Gameplay);
    }

    // ---------- Timers ----------

    fn stop_all_timers(&mut self) {
        self.scheduler.clear(self.round_interval.take());
        self.scheduler.clear(self.countdown_interval.take());
        self.scheduler.clear(self.flash_timeout.take());
    }

    fn start_countdown(&mut self) {
        self.scheduler.clear(self.countdown_interval.take());

        if let Some(round) = self.round.as_mut() {
            round.phase = Phase::Countdown;
            round.countdown_value = COUNTDOWN_START;
        }

        self.countdown_interval = self
            .scheduler
            .set_interval(TimerEvent::CountdownTick, COUNTDOWN_TICK_MS);
        if self.countdown_interval.is_none() {
            // No countdown timer available: skip straight into the round.
            self.begin_playing();
        }
    }

    fn begin_playing(&mut self) {
        if let Some(round) = self.round.as_mut() {
            round.phase = Phase::Playing;
            round.round_points = 0;
            round.time_left = self.config.round_duration_secs;
        }
        self.start_round_timer();
    }

    fn start_round_timer(&mut self) {
        self.scheduler.clear(self.round_interval.take());

        self.round_interval = self
            .scheduler
            .set_interval(TimerEvent::RoundTick, ROUND_TICK_MS);
        if self.round_interval.is_none() {
            // Degraded mode: End Round remains the manual way out.
            self.status = StatusMessage::TimerUnavailable;
            self.tone = Tone::Warn;
            if let Some(round) = self.round.as_mut() {
                round.timer_warning = true;
            }
        }
    }

    fn flash(&mut self, message: StatusMessage, tone: Tone) {
        self.status = message;
        self.tone = tone;

        // A new flash replaces any pending revert.
        self.scheduler.clear(self.flash_timeout.take());
        self.flash_timeout = self
            .scheduler
            .set_timeout(TimerEvent::FlashRevert, FLASH_REVERT_MS);
    }

    // ---------- Tick handlers (stale-tick guarded) ----------

    fn on_countdown_tick(&mut self) {
        let Some(round) = self.round.as_mut() else {
            return;
        };
        if self.screen != Screen::Gameplay || round.phase != Phase::Countdown || round.paused {
            return;
        }

        round.countdown_value = round.countdown_value.saturating_sub(1);
        if round.countdown_value == 0 {
            self.scheduler.clear(self.countdown_interval.take());
            self.begin_playing();
        }
    }

    fn on_round_tick(&mut self) {
        let Some(round) = self.round.as_mut() else {
            return;
        };
        if self.screen != Screen::Gameplay || round.phase != Phase::Playing || round.paused {
            return;
        }

        round.time_left = round.time_left.saturating_sub(1);
        if round.time_left == 0 {
            self.scheduler.clear(self.round_interval.take());
            self.finish_round();
        }
    }

    fn on_flash_revert(&mut self) {
        if self.screen != Screen::Gameplay {
            return;
        }
        // Tone reverts; the message text stays.
        self.tone = Tone::Neutral;
    }

    // ---------- Gameplay actions ----------

    fn on_word_action(&mut self) {
        let Some(round) = self.round.as_mut() else {
            return;
        };
        if round.paused {
            return;
        }

        match round.phase {
            Phase::Reveal => {
                round.current_word = self.selector.next_word();
                self.status = StatusMessage::Blank;
                self.tone = Tone::Neutral;
                self.start_countdown();
            }
            Phase::Playing if round.waiting_for_next => {
                round.waiting_for_next = false;
            }
            _ => {}
        }
    }

    fn on_correct(&mut self) {
        let team = self.current_team();
        let auto_next = self.config.auto_next_word;

        let Some(round) = self.round.as_mut() else {
            return;
        };
        if round.phase != Phase::Playing || round.paused {
            return;
        }

        self.scores.award(team);
        round.round_points += 1;

        // The next word is drawn eagerly either way; with auto-next off only
        // its display is gated behind the "Next Word" tap.
        round.current_word = self.selector.next_word();
        round.waiting_for_next = !auto_next;

        self.flash(StatusMessage::Correct, Tone::Good);
    }

    fn on_pass(&mut self) {
        let team = self.current_team();
        let penalty = self.config.pass_penalty;

        let Some(round) = self.round.as_mut() else {
            return;
        };
        if round.phase != Phase::Playing || round.paused {
            return;
        }

        // Score clamps at zero; round_points does not.
        self.scores.apply_penalty(team, penalty);
        round.round_points += penalty;

        // Pass always advances the shown word, regardless of auto-next.
        round.current_word = self.selector.next_word();
        round.waiting_for_next = false;

        if penalty == 0 {
            self.flash(StatusMessage::Pass, Tone::Warn);
        } else {
            self.flash(StatusMessage::PassPenalty, Tone::Bad);
        }
    }

    fn on_end_round(&mut self) {
        let Some(round) = self.round.as_ref() else {
            return;
        };
        if !matches!(round.phase, Phase::Playing | Phase::Paused) {
            return;
        }
        self.finish_round();
    }

    fn finish_round(&mut self) {
        self.last_round_points = self.round.as_ref().map_or(0, |r| r.round_points);
        self.go(Screen::Summary);
    }

    fn toggle_pause(&mut self) {
        let Some(round) = self.round.as_mut() else {
            return;
        };

        if !round.paused {
            round.paused = true;
            round.phase_before_pause = Some(round.phase);
            round.phase = Phase::Paused;

            self.scheduler.clear(self.round_interval.take());
            self.scheduler.clear(self.countdown_interval.take());
            return;
        }

        round.paused = false;
        let prev = round.phase_before_pause.take().unwrap_or(Phase::Reveal);
        round.phase = prev;

        // Restart the interrupted interval; time_left and countdown_value
        // resume where they left off.
        match prev {
            Phase::Countdown => {
                self.countdown_interval = self
                    .scheduler
                    .set_interval(TimerEvent::CountdownTick, COUNTDOWN_TICK_MS);
                if self.countdown_interval.is_none() {
                    self.begin_playing();
                }
            }
            Phase::Playing => self.start_round_timer(),
            _ => {}
        }
    }

    #[cfg(test)]
    pub(crate) fn armed_timers(&self) -> usize {
        self.scheduler.armed()
    }
}
