//! Player state management
//!
//! Contains the observable `PlaybackState` the player mutates and the
//! renderer reads, plus the shared `Phase` and `HighlightSpan` types.

use std::fmt;

use crate::sequence::Step;

/// Current animation mode, used to choose visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Text was just typed (caret blinks)
    #[default]
    Typing,
    /// Part of the text is highlighted
    Highlighting,
    /// Text was just cut down (caret blinks)
    Deleting,
    /// Editor was cleared
    Reset,
}

impl Phase {
    /// Whether the blinking caret is shown in this phase.
    pub fn shows_caret(self) -> bool {
        matches!(self, Phase::Typing | Phase::Deleting)
    }

    pub fn label(self) -> &'static str {
        match self {
            Phase::Typing => "typing",
            Phase::Highlighting => "highlighting",
            Phase::Deleting => "deleting",
            Phase::Reset => "reset",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Highlighted character range `[start, end)` of the current text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HighlightSpan {
    pub start: usize,
    pub end: usize,
}

impl HighlightSpan {
    pub const CLEARED: HighlightSpan = HighlightSpan { start: 0, end: 0 };

    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Whether the span satisfies `start <= end <= text_len`.
    pub fn fits(&self, text_len: usize) -> bool {
        self.start <= self.end && self.end <= text_len
    }
}

/// Observable playback state.
///
/// Only the player mutates this; everything else gets a shared reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackState {
    /// Currently displayed text
    pub text: String,
    /// Current animation phase
    pub phase: Phase,
    /// Highlight span (meaningful while `phase` is `Highlighting`)
    pub highlight: HighlightSpan,
    /// Index of the step the next tick will apply
    pub step_index: usize,
    /// Number of ticks fired since playback started
    pub ticks: u64,
}

impl PlaybackState {
    /// Fresh state: empty text, step index 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Character length of the displayed text.
    pub fn text_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Index of the most recently applied step in a sequence of `len` steps.
    ///
    /// `None` before the first tick.
    pub fn current_step(&self, len: usize) -> Option<usize> {
        if self.ticks == 0 || len == 0 {
            return None;
        }
        Some((self.step_index + len - 1) % len)
    }

    /// Apply a step's effect. Highlight bounds are taken as given.
    pub(crate) fn apply(&mut self, step: &Step) {
        self.phase = step.phase();
        match step {
            Step::Type { text, .. } => {
                self.text.clone_from(text);
                self.highlight = HighlightSpan::CLEARED;
            }
            Step::Highlight {
                start_offset,
                end_offset,
                ..
            } => {
                self.highlight = HighlightSpan::new(*start_offset, *end_offset);
            }
            Step::Delete {
                replacement_text, ..
            } => {
                self.text.clone_from(replacement_text);
                self.highlight = HighlightSpan::CLEARED;
            }
            Step::Reset { .. } => {
                self.text.clear();
                self.highlight = HighlightSpan::CLEARED;
            }
        }
    }
}
