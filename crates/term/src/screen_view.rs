//! ScreenView: maps a `SessionSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested by rendering into a
//! framebuffer and asserting on the text content.

use charades_core::SessionSnapshot;
use charades_types::{Category, Phase, Screen, StatusMessage, Tone, WordDisplay};

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::lang::{self, Label};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

// UI palette.
const PRIMARY: Rgb = Rgb::new(0, 115, 230);
const GOOD: Rgb = Rgb::new(0, 229, 0);
const WARN: Rgb = Rgb::new(242, 181, 0);
const BAD: Rgb = Rgb::new(242, 0, 81);
const SMOKE: Rgb = Rgb::new(200, 200, 200);
const PANEL: Rgb = Rgb::new(33, 36, 59);

const TEAM_COLORS: [Rgb; 4] = [
    Rgb::new(242, 61, 61),
    Rgb::new(0, 121, 242),
    Rgb::new(0, 229, 92),
    Rgb::new(151, 61, 242),
];

/// Lightweight full-screen renderer for the charades screens.
#[derive(Debug, Default)]
pub struct ScreenView;

impl ScreenView {
    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized and
    /// cleared here.
    pub fn render_into(&self, snap: &SessionSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Default::default());

        match snap.screen {
            Screen::Menu => self.draw_menu(snap, fb),
            Screen::Setup => self.draw_setup(snap, fb),
            Screen::Settings => self.draw_settings(snap, fb),
            Screen::HowTo => self.draw_howto(snap, fb),
            Screen::Gameplay => self.draw_gameplay(snap, fb),
            Screen::Summary => self.draw_summary(snap, fb),
            Screen::Final => self.draw_final(snap, fb),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_menu(&self, snap: &SessionSnapshot, fb: &mut FrameBuffer) {
        let lang = snap.config.language;
        let title = CellStyle::fg(PRIMARY).bold();
        let hint = CellStyle::fg(SMOKE).dimmed();

        fb.put_centered(2, lang::label(lang, Label::Title), title);
        fb.put_centered(3, lang::label(lang, Label::Tagline), CellStyle::fg(SMOKE));

        fb.put_centered(6, &key_line("P", lang::label(lang, Label::Play)), CellStyle::fg(PRIMARY));
        fb.put_centered(
            7,
            &key_line("S", lang::label(lang, Label::Settings)),
            CellStyle::default(),
        );
        fb.put_centered(
            8,
            &key_line("H", lang::label(lang, Label::HowToPlay)),
            CellStyle::default(),
        );

        fb.put_centered(10, lang::label(lang, Label::QuitHint), hint);
    }

    fn draw_setup(&self, snap: &SessionSnapshot, fb: &mut FrameBuffer) {
        let lang = snap.config.language;
        let cfg = &snap.config;
        let label_style = CellStyle::fg(SMOKE);
        let value_style = CellStyle::default().bold();

        fb.put_centered(1, lang::label(lang, Label::Setup), CellStyle::fg(PRIMARY).bold());

        let x = 4;
        fb.put_str(x, 3, &format!("[t/T] {}:", lang::label(lang, Label::Teams)), label_style);
        fb.put_str(x + 26, 3, &cfg.num_teams.to_string(), value_style);

        fb.put_str(x, 4, &format!("[d/D] {}:", lang::label(lang, Label::RoundTime)), label_style);
        fb.put_str(x + 26, 4, &format!("{}s", cfg.round_duration_secs), value_style);

        fb.put_str(
            x,
            5,
            &format!("[r/R] {}:", lang::label(lang, Label::RoundsPerTeam)),
            label_style,
        );
        fb.put_str(x + 26, 5, &cfg.rounds_per_team.to_string(), value_style);

        fb.put_str(x, 7, lang::label(lang, Label::Categories), label_style);
        for (i, cat) in Category::ALL.into_iter().enumerate() {
            let y = 8 + i as u16;
            let on = cfg.categories.is_active(cat);
            let marker = if on { "[x]" } else { "[ ]" };
            let style = if on { CellStyle::fg(GOOD) } else { CellStyle::fg(SMOKE).dimmed() };
            fb.put_str(x, y, &format!("[{}] {} {}", i + 1, marker, cat.name()), style);
        }

        let y = 8 + Category::ALL.len() as u16 + 1;
        fb.put_str(
            x,
            y,
            &format!(
                "[Enter] {}   [Esc] {}",
                lang::label(lang, Label::StartGame),
                lang::label(lang, Label::Back)
            ),
            CellStyle::fg(PRIMARY),
        );
    }

    fn draw_settings(&self, snap: &SessionSnapshot, fb: &mut FrameBuffer) {
        let lang = snap.config.language;
        let cfg = &snap.config;

        fb.put_centered(1, lang::label(lang, Label::Settings), CellStyle::fg(PRIMARY).bold());

        let pass = if cfg.pass_penalty == 0 {
            Label::PassPenaltyOff
        } else {
            Label::PassPenaltyOn
        };
        let auto = if cfg.auto_next_word {
            Label::AutoNextOn
        } else {
            Label::AutoNextOff
        };

        let x = 4;
        fb.put_str(
            x,
            3,
            &key_line("L", lang::label(lang, Label::LanguageToggle)),
            CellStyle::default(),
        );
        fb.put_str(
            x,
            4,
            &key_line("P", lang::label(lang, pass)),
            if cfg.pass_penalty != 0 { CellStyle::fg(WARN) } else { CellStyle::default() },
        );
        fb.put_str(
            x,
            5,
            &key_line("A", lang::label(lang, auto)),
            if cfg.auto_next_word { CellStyle::fg(PRIMARY) } else { CellStyle::default() },
        );

        fb.put_str(
            x,
            7,
            &format!("[Esc] {}", lang::label(lang, Label::Back)),
            CellStyle::fg(SMOKE),
        );
    }

    fn draw_howto(&self, snap: &SessionSnapshot, fb: &mut FrameBuffer) {
        let lang = snap.config.language;

        fb.put_centered(1, lang::label(lang, Label::HowToPlay), CellStyle::fg(PRIMARY).bold());

        for (i, line) in lang::label(lang, Label::HowToBody).lines().enumerate() {
            fb.put_str(4, 3 + i as u16, line, CellStyle::fg(SMOKE));
        }

        let y = 3 + lang::label(lang, Label::HowToBody).lines().count() as u16 + 1;
        fb.put_str(
            4,
            y,
            &format!("[Esc] {}", lang::label(lang, Label::Back)),
            CellStyle::fg(PRIMARY),
        );
    }

    fn draw_gameplay(&self, snap: &SessionSnapshot, fb: &mut FrameBuffer) {
        let lang = snap.config.language;
        let Some(round) = snap.round.as_ref() else {
            return;
        };

        let team_color = TEAM_COLORS[snap.current_team % TEAM_COLORS.len()];
        let header = lang::turn_header(
            lang,
            snap.current_team,
            snap.round_number,
            snap.config.rounds_per_team,
        );
        fb.fill_rect(0, 0, fb.width(), 1, ' ', CellStyle::fg(Rgb::new(0, 0, 0)).on(team_color));
        fb.put_centered(0, &header, CellStyle::fg(Rgb::new(0, 0, 0)).on(team_color).bold());

        self.draw_score_row(snap, fb, 1);

        // Timer and proportional bar.
        fb.put_centered(3, &format!("{}s", round.time_left), CellStyle::default().bold());
        self.draw_timer_bar(snap, round.time_left, team_color, fb, 4);

        // Word panel.
        let word_style = CellStyle::default().bold().on(PANEL);
        let word_line = match round.word {
            WordDisplay::Hidden => lang::label(lang, Label::WordHidden).to_string(),
            WordDisplay::AwaitNext => lang::label(lang, Label::TapNextWord).to_string(),
            WordDisplay::Shown(word) => word.to_string(),
        };
        fb.fill_rect(0, 6, fb.width(), 3, ' ', CellStyle::default().on(PANEL));
        fb.put_centered(7, &word_line, word_style);

        // Countdown overlays the word panel.
        if round.phase == Phase::Countdown {
            fb.put_centered(
                7,
                &round.countdown_value.to_string(),
                CellStyle::fg(WARN).bold().on(PANEL),
            );
        }

        // Status line with flash tone.
        let tone_style = match snap.tone {
            Tone::Neutral => CellStyle::fg(SMOKE),
            Tone::Good => CellStyle::fg(GOOD).bold(),
            Tone::Warn => CellStyle::fg(WARN).bold(),
            Tone::Bad => CellStyle::fg(BAD).bold(),
        };
        fb.put_centered(10, lang::status(lang, snap.status), tone_style);

        if round.timer_warning && snap.status != StatusMessage::TimerUnavailable {
            fb.put_centered(
                11,
                lang::status(lang, StatusMessage::TimerUnavailable),
                CellStyle::fg(WARN),
            );
        }

        // Action hints per phase.
        let hints_y = fb.height().saturating_sub(2);
        let hints = match round.phase {
            Phase::Paused => {
                fb.put_centered(
                    hints_y.saturating_sub(2),
                    lang::label(lang, Label::Paused),
                    CellStyle::fg(PRIMARY).bold(),
                );
                format!(
                    "[P] {}   [M] {}",
                    lang::label(lang, Label::Resume),
                    lang::label(lang, Label::BackToMenu)
                )
            }
            Phase::Reveal => format!(
                "[Space] {}   [P] {}   [M] {}",
                lang::label(lang, Label::RevealWord),
                lang::label(lang, Label::Pause),
                lang::label(lang, Label::Menu)
            ),
            Phase::Countdown => format!("[P] {}", lang::label(lang, Label::Pause)),
            Phase::Playing => {
                let mut line = format!(
                    "[C] {}   [X] {}   [E] {}   [P] {}",
                    lang::label(lang, Label::Correct),
                    pass_label(snap, lang),
                    lang::label(lang, Label::EndRound),
                    lang::label(lang, Label::Pause)
                );
                if round.waiting_for_next {
                    line = format!("[Space] {}   {}", lang::label(lang, Label::NextWord), line);
                }
                line
            }
        };
        fb.put_centered(hints_y, &hints, CellStyle::fg(SMOKE));
    }

    fn draw_score_row(&self, snap: &SessionSnapshot, fb: &mut FrameBuffer, y: u16) {
        let lang = snap.config.language;
        let mut x = 2;
        fb.put_str(x, y, lang::label(lang, Label::Scores), CellStyle::fg(SMOKE).dimmed());
        x += lang::label(lang, Label::Scores).chars().count() as u16 + 2;

        for (i, score) in snap.scores.iter().enumerate() {
            let marker = if i == snap.current_team { "▶" } else { " " };
            let entry = format!("{}T{}:{}", marker, i + 1, score);
            let style = CellStyle::fg(TEAM_COLORS[i % TEAM_COLORS.len()]);
            fb.put_str(x, y, &entry, style);
            x += entry.chars().count() as u16 + 2;
        }
    }

    fn draw_timer_bar(
        &self,
        snap: &SessionSnapshot,
        time_left: u32,
        color: Rgb,
        fb: &mut FrameBuffer,
        y: u16,
    ) {
        let total = snap.config.round_duration_secs.max(1);
        let full_width = fb.width().saturating_sub(8).max(4);
        let ratio = (time_left as f32 / total as f32).clamp(0.0, 1.0);
        let filled = (full_width as f32 * ratio).round() as u16;

        let x0 = fb.width().saturating_sub(full_width) / 2;
        fb.fill_rect(x0, y, full_width, 1, '░', CellStyle::fg(Rgb::new(64, 64, 64)));
        fb.fill_rect(x0, y, filled, 1, '█', CellStyle::fg(color));
    }

    fn draw_summary(&self, snap: &SessionSnapshot, fb: &mut FrameBuffer) {
        let lang = snap.config.language;
        let team_color = TEAM_COLORS[snap.current_team % TEAM_COLORS.len()];

        fb.put_centered(
            1,
            lang::label(lang, Label::RoundSummary),
            CellStyle::fg(team_color).bold(),
        );
        fb.put_centered(
            3,
            &lang::team_gained(lang, snap.current_team, snap.last_round_points),
            CellStyle::fg(SMOKE),
        );

        self.draw_totals(snap, fb, 5);

        let y = 5 + snap.scores.len() as u16 + 1;
        fb.put_centered(
            y,
            &format!(
                "[N] {}   [M] {}",
                lang::label(lang, Label::NextTurn),
                lang::label(lang, Label::Menu)
            ),
            CellStyle::fg(PRIMARY),
        );
    }

    fn draw_final(&self, snap: &SessionSnapshot, fb: &mut FrameBuffer) {
        let lang = snap.config.language;

        fb.put_centered(1, lang::label(lang, Label::FinalResults), CellStyle::fg(PRIMARY).bold());

        // Ties are reported as a set of winners, never broken arbitrarily.
        let line = if snap.winners.len() == 1 {
            lang::winner(lang, snap.winners[0], snap.best_score)
        } else {
            lang::tie(lang, &snap.winners, snap.best_score)
        };
        let color = if snap.winners.len() == 1 {
            TEAM_COLORS[snap.winners[0] % TEAM_COLORS.len()]
        } else {
            WARN
        };
        fb.put_centered(3, &line, CellStyle::fg(color).bold());

        self.draw_totals(snap, fb, 5);

        let y = 5 + snap.scores.len() as u16 + 1;
        fb.put_centered(
            y,
            &format!(
                "[R] {}   [M] {}",
                lang::label(lang, Label::Restart),
                lang::label(lang, Label::BackToMenu)
            ),
            CellStyle::fg(PRIMARY),
        );
    }

    fn draw_totals(&self, snap: &SessionSnapshot, fb: &mut FrameBuffer, y0: u16) {
        let lang = snap.config.language;
        for (i, score) in snap.scores.iter().enumerate() {
            let line = format!("{}: {}", lang::team(lang, i), score);
            fb.put_centered(
                y0 + i as u16,
                &line,
                CellStyle::fg(TEAM_COLORS[i % TEAM_COLORS.len()]),
            );
        }
    }
}

fn key_line(key: &str, text: &str) -> String {
    format!("[{}] {}", key, text)
}

fn pass_label(snap: &SessionSnapshot, lang: charades_types::Language) -> &'static str {
    if snap.config.pass_penalty == 0 {
        lang::label(lang, Label::PassFree)
    } else {
        lang::label(lang, Label::PassPenalized)
    }
}
