//! Editor statistics shown under the editor panel.

use unicode_width::UnicodeWidthStr;

/// Line, word and character counts of the displayed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditorStats {
    pub lines: usize,
    pub words: usize,
    pub characters: usize,
}

/// Count lines, whitespace-separated words and characters.
///
/// An empty editor still reports one line.
pub fn editor_stats(text: &str) -> EditorStats {
    EditorStats {
        lines: text.lines().count().max(1),
        words: text.split_whitespace().count(),
        characters: text.chars().count(),
    }
}

/// Number of rows `text` occupies when wrapped at `width` columns.
///
/// Uses display width, so wide characters take two columns. Wrapping is by
/// column only; word boundaries are ignored, which over-estimates at most by
/// the rows a word-wrapping renderer would save.
pub fn wrapped_height(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let width = width as usize;
    let rows: usize = text
        .lines()
        .map(|line| UnicodeWidthStr::width(line).div_ceil(width).max(1))
        .sum();
    rows.max(1).min(u16::MAX as usize) as u16
}
