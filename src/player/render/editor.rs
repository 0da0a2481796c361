//! Editor panel rendering.
//!
//! Turns `PlaybackState` into display segments. While highlighting, the text
//! is split into before / highlighted / after; otherwise it is one plain
//! segment. Out-of-range offsets are clamped to the text so rendering never
//! panics on a badly authored sequence.

use crate::player::render::stats::{editor_stats, EditorStats};
use crate::player::state::{Phase, PlaybackState};

/// How a segment is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Plain,
    Highlighted,
}

/// A run of text with a single style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub kind: SegmentKind,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            kind: SegmentKind::Plain,
        }
    }

    fn highlighted(text: &str) -> Self {
        Self {
            text: text.to_string(),
            kind: SegmentKind::Highlighted,
        }
    }
}

/// Everything needed to draw the editor panel for one state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorView {
    pub segments: Vec<Segment>,
    /// Whether the blinking caret follows the text
    pub caret: bool,
    pub phase: Phase,
    pub stats: EditorStats,
}

impl EditorView {
    /// The highlighted segment's text, if any.
    pub fn highlighted_text(&self) -> Option<&str> {
        self.segments
            .iter()
            .find(|segment| segment.kind == SegmentKind::Highlighted)
            .map(|segment| segment.text.as_str())
    }
}

/// Byte offset of the `char_index`-th character, clamped to the text end.
fn byte_offset(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}

/// Build the editor view for `state`.
pub fn render_editor(state: &PlaybackState) -> EditorView {
    let text = state.text.as_str();

    let segments = if state.phase == Phase::Highlighting {
        let end = byte_offset(text, state.highlight.end);
        // Reversed spans collapse to an empty highlight at `end`
        let start = byte_offset(text, state.highlight.start).min(end);
        vec![
            Segment::plain(&text[..start]),
            Segment::highlighted(&text[start..end]),
            Segment::plain(&text[end..]),
        ]
    } else {
        vec![Segment::plain(text)]
    };

    EditorView {
        segments,
        caret: state.phase.shows_caret(),
        phase: state.phase,
        stats: editor_stats(text),
    }
}
