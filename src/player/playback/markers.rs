//! Step markers for the cycle progress bar.

use std::time::Duration;

use crate::sequence::Sequence;

/// Where a step begins within the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepMarker {
    pub offset: Duration,
    /// Step action ("type", "highlight", ...)
    pub action: &'static str,
}

/// Start offset of every step after the first, at the sequence's speed.
///
/// The first step starts at zero under the playhead and gets no marker.
pub fn collect_markers(sequence: &Sequence) -> Vec<StepMarker> {
    let mut offset = Duration::ZERO;
    sequence
        .steps()
        .iter()
        .enumerate()
        .filter_map(|(index, step)| {
            let marker = (index > 0).then_some(StepMarker {
                offset,
                action: step.action(),
            });
            offset += sequence.step_duration(index);
            marker
        })
        .collect()
}
