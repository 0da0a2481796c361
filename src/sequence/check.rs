//! Static highlight-bounds checking.
//!
//! The player never validates highlight offsets; a sequence author runs this
//! check instead. It replays the text effects of the sequence and verifies
//! `0 <= start <= end <= len(text)` for every highlight step.

use std::fmt;

use super::{Sequence, Step};

/// A highlight step whose bounds fall outside the text it is applied to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightViolation {
    /// Index of the offending step in the sequence
    pub step_index: usize,
    pub start: usize,
    pub end: usize,
    /// Character length of the text displayed when the step applies
    pub text_len: usize,
}

impl fmt::Display for HighlightViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "step {}: highlight {}..{} does not fit text of length {}",
            self.step_index, self.start, self.end, self.text_len
        )
    }
}

/// Collect every highlight step that violates the bounds invariant.
///
/// Two cycles are simulated: the first starts from the empty text the player
/// starts with, the second from whatever the first cycle left behind, which is
/// the text every later cycle starts from. Each step is reported at most once.
pub fn check_highlights(sequence: &Sequence) -> Vec<HighlightViolation> {
    let mut violations: Vec<HighlightViolation> = Vec::new();
    let mut text_len = 0usize;

    for _cycle in 0..2 {
        for (step_index, step) in sequence.steps().iter().enumerate() {
            match step {
                Step::Type { text, .. } => text_len = text.chars().count(),
                Step::Delete {
                    replacement_text, ..
                } => text_len = replacement_text.chars().count(),
                Step::Reset { .. } => text_len = 0,
                Step::Highlight {
                    start_offset,
                    end_offset,
                    ..
                } => {
                    let fits = start_offset <= end_offset && *end_offset <= text_len;
                    if !fits && !violations.iter().any(|v| v.step_index == step_index) {
                        violations.push(HighlightViolation {
                            step_index,
                            start: *start_offset,
                            end: *end_offset,
                            text_len,
                        });
                    }
                }
            }
        }
    }

    violations
}
