//! Playback timeline helpers.
//!
//! Step markers place each step's start on the cycle timeline so the
//! progress bar can show where the next edit happens. Frames capture a
//! headless run on a manual clock.

mod frames;
mod markers;

pub use frames::{playback_frames, PlaybackFrame};
pub use markers::{collect_markers, StepMarker};
