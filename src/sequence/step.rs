//! A single timed instruction of the editing animation.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::player::Phase;

/// One timed step of an editing sequence.
///
/// Serialized with an `action` tag so sequence files read naturally:
///
/// ```toml
/// [[steps]]
/// action = "type"
/// text = "Four score and seven years ago"
/// duration_ms = 2000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    /// Replace the displayed text with `text`
    Type { text: String, duration_ms: u64 },
    /// Highlight the character range `[start_offset, end_offset)` of the displayed text
    Highlight {
        start_offset: usize,
        end_offset: usize,
        duration_ms: u64,
    },
    /// Replace the displayed text with `replacement_text`
    Delete {
        replacement_text: String,
        duration_ms: u64,
    },
    /// Clear the displayed text
    Reset { duration_ms: u64 },
}

impl Step {
    pub fn type_text(text: impl Into<String>, duration_ms: u64) -> Self {
        Step::Type {
            text: text.into(),
            duration_ms,
        }
    }

    pub fn highlight(start_offset: usize, end_offset: usize, duration_ms: u64) -> Self {
        Step::Highlight {
            start_offset,
            end_offset,
            duration_ms,
        }
    }

    pub fn delete(replacement_text: impl Into<String>, duration_ms: u64) -> Self {
        Step::Delete {
            replacement_text: replacement_text.into(),
            duration_ms,
        }
    }

    pub fn reset(duration_ms: u64) -> Self {
        Step::Reset { duration_ms }
    }

    /// Display duration in milliseconds, before any speed scaling.
    pub fn duration_ms(&self) -> u64 {
        match self {
            Step::Type { duration_ms, .. }
            | Step::Highlight { duration_ms, .. }
            | Step::Delete { duration_ms, .. }
            | Step::Reset { duration_ms } => *duration_ms,
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms())
    }

    /// Phase the player enters when this step is applied.
    pub fn phase(&self) -> Phase {
        match self {
            Step::Type { .. } => Phase::Typing,
            Step::Highlight { .. } => Phase::Highlighting,
            Step::Delete { .. } => Phase::Deleting,
            Step::Reset { .. } => Phase::Reset,
        }
    }

    /// Short lowercase name matching the serialized `action` tag.
    pub fn action(&self) -> &'static str {
        match self {
            Step::Type { .. } => "type",
            Step::Highlight { .. } => "highlight",
            Step::Delete { .. } => "delete",
            Step::Reset { .. } => "reset",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_reads_every_variant() {
        assert_eq!(Step::type_text("a", 10).duration_ms(), 10);
        assert_eq!(Step::highlight(0, 1, 20).duration_ms(), 20);
        assert_eq!(Step::delete("b", 30).duration_ms(), 30);
        assert_eq!(Step::reset(40).duration(), Duration::from_millis(40));
    }

    #[test]
    fn phase_matches_step_kind() {
        assert_eq!(Step::type_text("a", 1).phase(), Phase::Typing);
        assert_eq!(Step::highlight(0, 0, 1).phase(), Phase::Highlighting);
        assert_eq!(Step::delete("", 1).phase(), Phase::Deleting);
        assert_eq!(Step::reset(1).phase(), Phase::Reset);
    }

    #[test]
    fn deserializes_tagged_json() {
        let json = r#"{"action":"highlight","start_offset":2,"end_offset":5,"duration_ms":800}"#;
        let step: Step = serde_json::from_str(json).unwrap();
        assert_eq!(step, Step::highlight(2, 5, 800));
    }

    #[test]
    fn unknown_action_is_rejected() {
        let result: Result<Step, _> =
            serde_json::from_str(r#"{"action":"bounce","duration_ms":800}"#);
        assert!(result.is_err());
    }
}
