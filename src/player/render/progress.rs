//! Cycle progress bar.
//!
//! Shows how far playback is through the current cycle, with a marker at
//! the start of every step.

use std::time::Duration;

use crate::player::playback::StepMarker;

/// One column of the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarCell {
    /// Already played
    Played,
    Playhead,
    /// Start of a step still ahead in the cycle
    Marker,
    Ahead,
}

impl BarCell {
    pub fn glyph(self) -> char {
        match self {
            BarCell::Played => '━',
            BarCell::Playhead => '⏺',
            BarCell::Marker => '◆',
            BarCell::Ahead => '─',
        }
    }
}

/// Lay out `width` cells for `elapsed` out of `cycle`.
///
/// Markers behind the playhead are drawn as played track.
pub fn progress_cells(
    width: usize,
    elapsed: Duration,
    cycle: Duration,
    markers: &[StepMarker],
) -> Vec<BarCell> {
    let column = |at: Duration| -> usize {
        if cycle.is_zero() {
            return width;
        }
        let fraction = (at.as_secs_f64() / cycle.as_secs_f64()).min(1.0);
        (fraction * width as f64) as usize
    };

    let playhead = column(elapsed);
    let mut cells: Vec<BarCell> = (0..width)
        .map(|i| match i.cmp(&playhead) {
            std::cmp::Ordering::Less => BarCell::Played,
            std::cmp::Ordering::Equal => BarCell::Playhead,
            std::cmp::Ordering::Greater => BarCell::Ahead,
        })
        .collect();

    for marker in markers {
        let at = column(marker.offset);
        if at > playhead && at < width {
            cells[at] = BarCell::Marker;
        }
    }
    cells
}

/// `MM:SS`, truncating fractional seconds.
pub fn format_clock(time: Duration) -> String {
    let secs = time.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// ` elapsed/cycle` label drawn after the bar.
pub fn cycle_label(elapsed: Duration, cycle: Duration) -> String {
    format!(" {}/{}", format_clock(elapsed), format_clock(cycle))
}
