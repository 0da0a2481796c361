//! Editing sequences for the hero animation
//!
//! A [`Sequence`] is an ordered, cyclic list of [`Step`]s. After the last step
//! playback wraps to the first one and keeps going until the player is stopped.
//!
//! - `step`: the tagged step variants
//! - `hero`: the built-in landing page sequence
//! - `check`: static highlight-bounds checking
//! - `load`: TOML sequence files

mod check;
mod error;
mod hero;
mod load;
mod step;

use std::time::Duration;

pub use check::{check_highlights, HighlightViolation};
pub use error::SequenceError;
pub use hero::{hero_sequence, HERO_ORIGINAL_TEXT};
pub use load::{load_sequence, parse_sequence, to_toml};
pub use step::Step;

/// An ordered, non-empty, cyclic list of steps with a playback speed.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    steps: Vec<Step>,
    speed: f64,
}

impl Sequence {
    /// Slowest allowed playback speed.
    pub const MIN_SPEED: f64 = 0.1;
    /// Fastest allowed playback speed.
    pub const MAX_SPEED: f64 = 16.0;
    /// Longest allowed cycle at normal speed (one day).
    pub const MAX_CYCLE_MS: u64 = 24 * 60 * 60 * 1000;

    /// Build a sequence from its steps.
    ///
    /// Rejects an empty list and a list whose steps all last 0ms, since
    /// either would leave the cyclic timer with nothing to wait on. A cycle
    /// longer than [`Sequence::MAX_CYCLE_MS`] is rejected too, which keeps
    /// every scaled duration representable even at `MIN_SPEED`.
    pub fn new(steps: Vec<Step>) -> Result<Self, SequenceError> {
        if steps.is_empty() {
            return Err(SequenceError::Empty);
        }
        let total_ms = steps
            .iter()
            .try_fold(0u64, |total, step| total.checked_add(step.duration_ms()))
            .filter(|total| *total <= Self::MAX_CYCLE_MS)
            .ok_or(SequenceError::CycleTooLong {
                limit_ms: Self::MAX_CYCLE_MS,
            })?;
        if total_ms == 0 {
            return Err(SequenceError::ZeroCycle);
        }
        Ok(Self { steps, speed: 1.0 })
    }

    /// Return a copy that plays at `speed` times normal speed.
    ///
    /// The speed is clamped to `[MIN_SPEED, MAX_SPEED]`; non-finite values
    /// fall back to normal speed.
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = if speed.is_finite() {
            speed.clamp(Self::MIN_SPEED, Self::MAX_SPEED)
        } else {
            1.0
        };
        self
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false: construction rejects empty step lists.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Index of the step following `index`, wrapping past the last one.
    pub fn next_index(&self, index: usize) -> usize {
        if index + 1 >= self.steps.len() {
            0
        } else {
            index + 1
        }
    }

    /// Display duration of the step at `index`, scaled by the playback speed.
    pub fn step_duration(&self, index: usize) -> Duration {
        self.steps
            .get(index)
            .map(|step| step.duration().div_f64(self.speed))
            .unwrap_or_default()
    }

    /// Length of one full cycle at the current speed.
    pub fn cycle_duration(&self) -> Duration {
        (0..self.steps.len())
            .map(|i| self.step_duration(i))
            .fold(Duration::ZERO, Duration::saturating_add)
    }
}
