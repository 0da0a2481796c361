//! Plain-text rendering of the editor view.
//!
//! Used where no terminal styling is available (headless playback, logs):
//! the highlighted segment is wrapped in brackets and the caret is a bar.

use crate::player::render::editor::{EditorView, SegmentKind};

pub const HIGHLIGHT_OPEN: char = '[';
pub const HIGHLIGHT_CLOSE: char = ']';
pub const CARET: char = '|';

/// Render the view as a single marked-up string.
pub fn render_markup(view: &EditorView) -> String {
    let capacity = view.segments.iter().map(|s| s.text.len()).sum::<usize>() + 3;
    let mut output = String::with_capacity(capacity);
    for segment in &view.segments {
        match segment.kind {
            SegmentKind::Plain => output.push_str(&segment.text),
            SegmentKind::Highlighted => {
                output.push(HIGHLIGHT_OPEN);
                output.push_str(&segment.text);
                output.push(HIGHLIGHT_CLOSE);
            }
        }
    }
    if view.caret {
        output.push(CARET);
    }
    output
}
