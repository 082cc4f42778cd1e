//! Shared types module - data structures and constants used across the app
//!
//! All types here are pure data with no external dependencies, so they can be
//! used from any context (core logic, terminal rendering, input mapping).
//!
//! # Timing constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 50 | Main loop timestep |
//! | `ROUND_TICK_MS` | 1000 | Round timer decrement interval |
//! | `COUNTDOWN_TICK_MS` | 1000 | Pre-round countdown interval |
//! | `FLASH_REVERT_MS` | 1000 | Transient status message revert delay |

/// Main loop timestep (milliseconds).
pub const TICK_MS: u32 = 50;

/// Round timer interval: `time_left` drops by one second per tick.
pub const ROUND_TICK_MS: u32 = 1000;

/// Pre-round countdown interval.
pub const COUNTDOWN_TICK_MS: u32 = 1000;

/// Delay before a flashed status message reverts to the neutral tone.
pub const FLASH_REVERT_MS: u32 = 1000;

/// Countdown starts at 3...2...1.
pub const COUNTDOWN_START: u8 = 3;

/// Team count bounds.
pub const MIN_TEAMS: u8 = 1;
pub const MAX_TEAMS: u8 = 4;

/// Rounds-per-team bounds.
pub const MIN_ROUNDS_PER_TEAM: u8 = 1;
pub const MAX_ROUNDS_PER_TEAM: u8 = 10;

/// Selectable round durations (seconds).
pub const DURATION_OPTIONS: [u32; 3] = [30, 60, 90];

/// Score applied on a pass when the penalty toggle is on.
pub const PASS_PENALTY: i32 = -1;

/// Top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Menu,
    Setup,
    Settings,
    HowTo,
    Gameplay,
    Summary,
    Final,
}

/// Sub-state of an active gameplay turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Reveal,
    Countdown,
    Playing,
    Paused,
}

/// UI language. Word banks and display strings exist for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    En,
    De,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::De,
            Language::De => Language::En,
        }
    }
}

/// Word categories. A fixed enumeration instead of string keys so category
/// handling is exhaustive at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Classic,
    Cringe,
    Animals,
    MoviesTv,
    Professions,
    EverydayObjects,
    Actions,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Classic,
        Category::Cringe,
        Category::Animals,
        Category::MoviesTv,
        Category::Professions,
        Category::EverydayObjects,
        Category::Actions,
    ];

    /// Display name. Category names are not localized.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Classic => "Classic",
            Category::Cringe => "Cringe",
            Category::Animals => "Animals",
            Category::MoviesTv => "Movies/TV",
            Category::Professions => "Professions",
            Category::EverydayObjects => "Everyday Objects",
            Category::Actions => "Actions",
        }
    }

    fn bit(self) -> u8 {
        match self {
            Category::Classic => 1 << 0,
            Category::Cringe => 1 << 1,
            Category::Animals => 1 << 2,
            Category::MoviesTv => 1 << 3,
            Category::Professions => 1 << 4,
            Category::EverydayObjects => 1 << 5,
            Category::Actions => 1 << 6,
        }
    }
}

/// Set of selected categories, stored as a bitmask.
///
/// The empty set means "all categories active" - this is a filter that has
/// not been narrowed yet, not an empty selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategorySet(u8);

impl CategorySet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn contains(&self, cat: Category) -> bool {
        self.0 & cat.bit() != 0
    }

    pub fn insert(&mut self, cat: Category) {
        self.0 |= cat.bit();
    }

    pub fn remove(&mut self, cat: Category) {
        self.0 &= !cat.bit();
    }

    /// Whether a category counts as active under this filter: every category
    /// is active while the set is empty.
    pub fn is_active(&self, cat: Category) -> bool {
        self.is_empty() || self.contains(cat)
    }

    /// Iterate the categories the filter resolves to: the selected ones, or
    /// all of them while the set is empty.
    pub fn active(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL.into_iter().filter(move |c| self.is_active(*c))
    }
}

/// Game configuration, adjusted live from the Setup and Settings screens.
///
/// All mutators clamp at the point of mutation; a config value can never be
/// observed out of range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub num_teams: u8,
    pub round_duration_secs: u32,
    pub rounds_per_team: u8,
    pub pass_penalty: i32,
    pub auto_next_word: bool,
    pub categories: CategorySet,
    pub language: Language,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            num_teams: 2,
            round_duration_secs: 60,
            rounds_per_team: 3,
            pass_penalty: 0,
            auto_next_word: true,
            categories: CategorySet::empty(),
            language: Language::En,
        }
    }
}

impl GameConfig {
    /// Step the team count, clamped to `MIN_TEAMS..=MAX_TEAMS`.
    pub fn adjust_teams(&mut self, delta: i8) {
        let next = (self.num_teams as i16 + delta as i16)
            .clamp(MIN_TEAMS as i16, MAX_TEAMS as i16);
        self.num_teams = next as u8;
    }

    /// Step through the fixed duration options, clamped at the ends.
    pub fn step_duration(&mut self, delta: i8) {
        let i = DURATION_OPTIONS
            .iter()
            .position(|&d| d == self.round_duration_secs)
            .unwrap_or(1);
        let next = (i as i16 + delta as i16).clamp(0, DURATION_OPTIONS.len() as i16 - 1);
        self.round_duration_secs = DURATION_OPTIONS[next as usize];
    }

    /// Step the rounds-per-team count, clamped.
    pub fn adjust_rounds(&mut self, delta: i8) {
        let next = (self.rounds_per_team as i16 + delta as i16)
            .clamp(MIN_ROUNDS_PER_TEAM as i16, MAX_ROUNDS_PER_TEAM as i16);
        self.rounds_per_team = next as u8;
    }

    pub fn toggle_pass_penalty(&mut self) {
        self.pass_penalty = if self.pass_penalty == 0 { PASS_PENALTY } else { 0 };
    }

    pub fn toggle_auto_next(&mut self) {
        self.auto_next_word = !self.auto_next_word;
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
    }

    /// Toggle a category in the filter.
    ///
    /// The first toggle from the implicit all-active state narrows the filter
    /// to just that category. Removing the last selected category returns the
    /// filter to all-active.
    pub fn toggle_category(&mut self, cat: Category) {
        if self.categories.is_empty() {
            self.categories.insert(cat);
        } else if self.categories.contains(cat) {
            self.categories.remove(cat);
        } else {
            self.categories.insert(cat);
        }
    }

    /// Total number of turns in a match.
    pub fn total_turns(&self) -> u32 {
        self.num_teams as u32 * self.rounds_per_team as u32
    }
}

/// Player-facing actions, produced by the input layer and consumed by the
/// session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    // Navigation
    Play,
    OpenSettings,
    OpenHowTo,
    BackToMenu,

    // Setup
    AdjustTeams(i8),
    StepDuration(i8),
    AdjustRounds(i8),
    ToggleCategory(Category),
    StartGame,

    // Settings
    ToggleLanguage,
    TogglePassPenalty,
    ToggleAutoNext,

    // Gameplay
    WordAction,
    Correct,
    Pass,
    EndRound,
    TogglePause,

    // Summary / Final
    NextTurn,
    Restart,
}

/// Identifier for the gameplay status line. The core never handles display
/// strings; the renderer resolves these per language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMessage {
    /// "Only the actor should see - press Reveal".
    ActorHint,
    Blank,
    Correct,
    Pass,
    PassPenalty,
    /// Round timer could not be created; End Round still works.
    TimerUnavailable,
}

/// Display tone for the status line. Flashes set a tone; the revert timeout
/// drops it back to neutral without changing the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Neutral,
    Good,
    Warn,
    Bad,
}

/// What the word panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordDisplay {
    /// Word not revealed yet.
    Hidden,
    /// Word visible to the actor.
    Shown(&'static str),
    /// A word has been drawn but its display is gated behind "Next Word".
    AwaitNext,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_clamps_on_write() {
        let mut cfg = GameConfig::default();
        for _ in 0..10 {
            cfg.adjust_teams(1);
        }
        assert_eq!(cfg.num_teams, MAX_TEAMS);
        for _ in 0..10 {
            cfg.adjust_teams(-1);
        }
        assert_eq!(cfg.num_teams, MIN_TEAMS);

        for _ in 0..5 {
            cfg.step_duration(1);
        }
        assert_eq!(cfg.round_duration_secs, 90);
        for _ in 0..5 {
            cfg.step_duration(-1);
        }
        assert_eq!(cfg.round_duration_secs, 30);

        for _ in 0..20 {
            cfg.adjust_rounds(1);
        }
        assert_eq!(cfg.rounds_per_team, MAX_ROUNDS_PER_TEAM);
    }

    #[test]
    fn empty_category_set_means_all_active() {
        let set = CategorySet::empty();
        assert!(set.is_empty());
        for cat in Category::ALL {
            assert!(set.is_active(cat));
        }
        assert_eq!(set.active().count(), Category::ALL.len());
    }

    #[test]
    fn first_category_toggle_narrows_to_one() {
        let mut cfg = GameConfig::default();
        cfg.toggle_category(Category::Animals);
        assert_eq!(cfg.categories.len(), 1);
        assert!(cfg.categories.is_active(Category::Animals));
        assert!(!cfg.categories.is_active(Category::Classic));

        // Removing the last selection returns to all-active.
        cfg.toggle_category(Category::Animals);
        assert!(cfg.categories.is_empty());
        assert!(cfg.categories.is_active(Category::Classic));
    }

    #[test]
    fn toggle_mode_adds_and_removes() {
        let mut cfg = GameConfig::default();
        cfg.toggle_category(Category::Animals);
        cfg.toggle_category(Category::Cringe);
        assert_eq!(cfg.categories.len(), 2);
        cfg.toggle_category(Category::Animals);
        assert_eq!(cfg.categories.len(), 1);
        assert!(cfg.categories.contains(Category::Cringe));
    }

    #[test]
    fn total_turns() {
        let mut cfg = GameConfig::default();
        cfg.num_teams = 3;
        cfg.rounds_per_team = 2;
        assert_eq!(cfg.total_turns(), 6);
    }
}
