//! Rendering for the editor panel.
//!
//! Everything here is a pure function of player state: the TUI and the
//! headless printer both build their output from these values.

mod editor;
mod markup;
mod progress;
mod stats;

pub use editor::{render_editor, EditorView, Segment, SegmentKind};
pub use markup::{render_markup, CARET, HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN};
pub use progress::{cycle_label, format_clock, progress_cells, BarCell};
pub use stats::{editor_stats, wrapped_height, EditorStats};
