//! Landing page TUI application
//!
//! Navbar, hero section with the animated editor, the selected page
//! section and a footer. The view owns one `SequencePlayer` and drives it
//! from its event loop; leaving the loop stops the player.

use std::time::Duration;

use anyhow::Result;
use chrono::Datelike;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::app::status_footer::{render_footer, render_status_line};
use super::app::App;
use super::sections::{footer_line, Section};
use super::theme::Theme;
use super::ui::{centered_box, centered_column};
use crate::player::playback::{collect_markers, StepMarker};
use crate::player::render::{
    cycle_label, progress_cells, render_editor, wrapped_height, BarCell, EditorView, SegmentKind,
};
use crate::player::{Clock, MonotonicClock, SequencePlayer};
use crate::sequence::{Sequence, Step};

/// Caret blink half-period.
pub const CARET_BLINK: Duration = Duration::from_millis(500);

/// Longest the loop waits for input when no tick or blink is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Widest the hero column gets.
const HERO_MAX_WIDTH: u16 = 100;

/// Result of handling a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    Continue,
    Quit,
}

/// Whether the caret is visible at `now`.
pub fn caret_visible(now: Duration) -> bool {
    (now.as_millis() / CARET_BLINK.as_millis()) % 2 == 0
}

/// Landing page state.
pub struct LandingApp {
    player: SequencePlayer,
    sequence: Sequence,
    markers: Vec<StepMarker>,
    theme: Theme,
    section: Section,
    show_help: bool,
    needs_render: bool,
    year: i32,
}

impl LandingApp {
    pub fn new(sequence: Sequence, theme: Theme) -> Self {
        let markers = collect_markers(&sequence);
        Self {
            player: SequencePlayer::new(),
            sequence,
            markers,
            theme,
            section: Section::default(),
            show_help: false,
            needs_render: true,
            year: chrono::Local::now().year(),
        }
    }

    /// Override the copyright year (snapshot tests).
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn player(&self) -> &SequencePlayer {
        &self.player
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Begin the hero animation.
    pub fn start(&mut self, now: Duration) {
        if !self.player.restart(now) {
            self.player.start(self.sequence.clone(), now);
        }
        self.needs_render = true;
    }

    /// Stop the hero animation. Safe to call repeatedly.
    pub fn stop(&mut self) {
        self.player.stop();
        self.needs_render = true;
    }

    /// Fire due ticks. Returns true when a redraw is needed.
    pub fn tick(&mut self, now: Duration) -> bool {
        if self.player.poll(now) > 0 {
            self.needs_render = true;
        }
        std::mem::take(&mut self.needs_render)
    }

    /// How long the loop may wait for input before something changes.
    pub fn poll_timeout(&self, now: Duration) -> Duration {
        let mut timeout = self.player.time_until_next(now).unwrap_or(IDLE_POLL);
        if self.player.is_running() && self.player.state().phase.shows_caret() {
            let blink = CARET_BLINK.as_millis() as u64;
            let into = (now.as_millis() as u64) % blink;
            timeout = timeout.min(Duration::from_millis(blink - into));
        }
        timeout.min(IDLE_POLL)
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent, now: Duration) -> KeyResult {
        if key.kind != KeyEventKind::Press {
            return KeyResult::Continue;
        }
        self.needs_render = true;

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyResult::Quit;
        }

        if self.show_help {
            self.show_help = false;
            return KeyResult::Continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return KeyResult::Quit,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char(' ') => {
                if self.player.is_running() {
                    self.stop();
                } else {
                    self.start(now);
                }
            }
            KeyCode::Tab | KeyCode::Down => self.section = self.section.next(),
            KeyCode::BackTab | KeyCode::Up => self.section = self.section.prev(),
            KeyCode::Char(c) => {
                if let Some(section) = Section::from_key(c) {
                    self.section = section;
                }
            }
            _ => {}
        }
        KeyResult::Continue
    }

    /// Run the event loop until the user quits.
    #[cfg(not(tarpaulin_include))]
    pub fn run(mut self, app: &mut App) -> Result<()> {
        let clock = MonotonicClock::new();
        self.start(clock.now());

        let result = self.event_loop(app, &clock);
        self.stop();
        result
    }

    #[cfg(not(tarpaulin_include))]
    fn event_loop(&mut self, app: &mut App, clock: &MonotonicClock) -> Result<()> {
        loop {
            let now = clock.now();
            if self.tick(now) {
                app.draw(|frame| self.draw(frame, now))?;
            }

            if event::poll(self.poll_timeout(clock.now()))? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key, clock.now()) == KeyResult::Quit {
                            return Ok(());
                        }
                    }
                    Event::Resize(_, _) => self.needs_render = true,
                    _ => {}
                }
            } else if self.player.state().phase.shows_caret() {
                // Blink boundary reached
                self.needs_render = true;
            }
        }
    }

    /// Draw the whole page.
    pub fn draw(&self, frame: &mut Frame, now: Duration) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Navbar
                Constraint::Min(8),    // Hero
                Constraint::Length(self.section_height()),
                Constraint::Length(1), // Footer
                Constraint::Length(1), // Status
                Constraint::Length(1), // Keys
            ])
            .split(area);

        self.render_navbar(frame, chunks[0]);
        self.render_hero(frame, chunks[1], now);
        self.render_section(frame, chunks[2]);

        let footer =
            Paragraph::new(footer_line(&self.theme, self.year)).alignment(Alignment::Center);
        frame.render_widget(footer, chunks[3]);

        render_status_line(frame, chunks[4], &self.theme, &self.status_text(now));
        render_footer(
            frame,
            chunks[5],
            &self.theme,
            &[
                ("space", if self.player.is_running() { "stop" } else { "play" }),
                ("a/t/c", "section"),
                ("?", "help"),
                ("q", "quit"),
            ],
        );

        if self.show_help {
            self.render_help_modal(frame, area);
        }
    }

    fn section_height(&self) -> u16 {
        self.section.lines(&self.theme).len() as u16 + 2
    }

    fn status_text(&self, now: Duration) -> String {
        let state = self.player.state();
        let icon = if self.player.is_running() { "▶" } else { "■" };
        let step = state
            .current_step(self.sequence.len())
            .map_or(0, |index| index + 1);
        let mut text = format!(
            " {} {}  step {}/{}  spd:{:.1}x",
            icon,
            state.phase,
            step,
            self.sequence.len(),
            self.sequence.speed(),
        );
        if let Some((elapsed, total)) = self.player.cycle_position(now) {
            text.push_str(&cycle_label(elapsed, total));
        }
        text
    }

    fn render_navbar(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(" Synapsis", self.theme.accent_bold_style())];
        let nav: Vec<Span<'static>> = Section::ALL
            .iter()
            .flat_map(|section| {
                let style = if *section == self.section {
                    self.theme.accent_bold_style()
                } else {
                    self.theme.text_style()
                };
                [
                    Span::raw("   "),
                    Span::styled(format!("[{}] {}", section.key(), section.title()), style),
                ]
            })
            .collect();
        let brand_width: usize = 9;
        let nav_width: usize = nav.iter().map(|s| s.width()).sum();
        let gap = (area.width as usize).saturating_sub(brand_width + nav_width + 1);
        spans.push(Span::raw(" ".repeat(gap)));
        spans.extend(nav);

        let navbar = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(self.theme.text_secondary_style()),
        );
        frame.render_widget(navbar, area);
    }

    /// Rows the editor text needs at `width`, over every text the sequence shows.
    fn editor_rows(&self, width: u16) -> u16 {
        self.sequence
            .steps()
            .iter()
            .filter_map(|step| match step {
                Step::Type { text, .. } => Some(text.as_str()),
                Step::Delete {
                    replacement_text, ..
                } => Some(replacement_text.as_str()),
                _ => None,
            })
            .map(|text| wrapped_height(text, width.saturating_sub(1)))
            .max()
            .unwrap_or(1)
            .max(3)
    }

    fn render_hero(&self, frame: &mut Frame, area: Rect, now: Duration) {
        let column = centered_column(HERO_MAX_WIDTH, area);
        let editor_inner_width = column.width.saturating_sub(4);
        let editor_rows = self.editor_rows(editor_inner_width);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Headline
                Constraint::Length(1), // Subtitle
                Constraint::Length(1),
                Constraint::Length(editor_rows + 2), // Editor
                Constraint::Length(1),               // Progress
                Constraint::Length(1),               // Stats
                Constraint::Length(1),
                Constraint::Length(1), // Call to action
                Constraint::Min(0),
            ])
            .split(column);

        frame.render_widget(
            Paragraph::new(Span::styled(
                "Information Overload?",
                self.theme.accent_bold_style(),
            ))
            .alignment(Alignment::Center),
            chunks[0],
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Let Synapsis distill the essence of any text into a fun & engaging video!",
                self.theme.text_secondary_style(),
            ))
            .alignment(Alignment::Center),
            chunks[1],
        );

        let view = render_editor(self.player.state());
        self.render_editor_panel(frame, chunks[3], &view, now);
        self.render_progress(frame, chunks[4], now);

        let stats = Line::from(vec![
            Span::styled(
                format!(" Lines: {}", view.stats.lines),
                self.theme.text_secondary_style(),
            ),
            Span::styled(
                format!(
                    "   Words: {}   Characters: {}",
                    view.stats.words, view.stats.characters
                ),
                self.theme.text_secondary_style(),
            ),
        ]);
        frame.render_widget(Paragraph::new(stats), chunks[5]);

        frame.render_widget(
            Paragraph::new(Span::styled(
                "[ Generate Video Now → ]",
                self.theme.accent_bold_style(),
            ))
            .alignment(Alignment::Center),
            chunks[7],
        );
    }

    fn render_editor_panel(&self, frame: &mut Frame, area: Rect, view: &EditorView, now: Duration) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.text_secondary_style())
            .title(Span::styled(" Editing text... ", self.theme.text_secondary_style()))
            .title_top(
                Line::from(Span::styled(
                    " Synapsis AI Editor ",
                    self.theme.text_secondary_style(),
                ))
                .right_aligned(),
            );

        let caret = self.player.is_running() && caret_visible(now);
        let paragraph = Paragraph::new(editor_line(view, &self.theme, caret))
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }

    fn render_progress(&self, frame: &mut Frame, area: Rect, now: Duration) {
        let Some((elapsed, total)) = self.player.cycle_position(now) else {
            return;
        };
        let label = cycle_label(elapsed, total);
        let width = (area.width as usize).saturating_sub(label.len() + 1);

        let mut spans = vec![Span::raw(" ")];
        for cell in progress_cells(width, elapsed, total, &self.markers) {
            let style = match cell {
                BarCell::Played => self.theme.accent_style(),
                BarCell::Playhead => self.theme.text_style(),
                BarCell::Marker => Style::default().fg(self.theme.highlight_bg),
                BarCell::Ahead => self.theme.text_secondary_style(),
            };
            spans.push(Span::styled(cell.glyph().to_string(), style));
        }
        spans.push(Span::styled(label, self.theme.text_secondary_style()));
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_section(&self, frame: &mut Frame, area: Rect) {
        let column = centered_column(HERO_MAX_WIDTH, area);
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(self.theme.text_secondary_style())
            .title(Span::styled(
                format!(" {} ", self.section.title()),
                self.theme.accent_style(),
            ));
        let paragraph = Paragraph::new(self.section.lines(&self.theme))
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, column);
    }

    /// Render the help modal overlay.
    fn render_help_modal(&self, frame: &mut Frame, area: Rect) {
        let modal_area = centered_box(48, 15, area);
        frame.render_widget(Clear, modal_area);

        let theme = &self.theme;
        let entry = |key: &'static str, desc: &'static str| {
            Line::from(vec![
                Span::styled(format!("  {:<8}", key), theme.accent_style()),
                Span::raw(desc),
            ])
        };
        let lines = vec![
            Line::from(Span::styled("Keyboard Shortcuts", theme.accent_bold_style())),
            Line::from(""),
            entry("space", "Stop / restart the animation"),
            entry("a", "About section"),
            entry("t", "Tool section"),
            entry("c", "Contact section"),
            entry("↑ / ↓", "Previous / next section"),
            entry("?", "This help"),
            entry("q", "Quit"),
            Line::from(""),
            Line::from(Span::styled(
                "Press any key to close",
                theme.text_secondary_style(),
            )),
        ];
        let help = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.accent_style())
                    .title(" Help "),
            )
            .wrap(Wrap { trim: false });
        frame.render_widget(help, modal_area);
    }
}

/// Style the editor view as one line of spans, caret appended when shown.
pub fn editor_line(view: &EditorView, theme: &Theme, caret_on: bool) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = view
        .segments
        .iter()
        .filter(|segment| !segment.text.is_empty())
        .map(|segment| match segment.kind {
            SegmentKind::Plain => Span::styled(segment.text.clone(), theme.text_style()),
            SegmentKind::Highlighted => {
                Span::styled(segment.text.clone(), theme.highlight_style())
            }
        })
        .collect();
    if view.caret && caret_on {
        spans.push(Span::styled("|", theme.caret_style()));
    }
    Line::from(spans)
}
