//! The sequence player.
//!
//! Replays a [`Sequence`] step by step on a single pending timer. The owner
//! drives it cooperatively: ask [`SequencePlayer::next_deadline`] how long to
//! wait, then call [`SequencePlayer::poll`] with the current time.

use std::time::Duration;

use crate::player::state::PlaybackState;
use crate::sequence::Sequence;

/// The one timer a running player holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingTick {
    /// Time at which the tick fires
    due: Duration,
}

/// Deterministic, looping player for an editing sequence.
///
/// Owns its playback state and at most one pending tick. Stopping (or
/// dropping) the player cancels the tick, so nothing fires against a view
/// that is gone.
#[derive(Debug, Default)]
pub struct SequencePlayer {
    sequence: Option<Sequence>,
    state: PlaybackState,
    pending: Option<PendingTick>,
    cycle_started: Option<Duration>,
}

impl SequencePlayer {
    /// Create an idle player with empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start playing `sequence` from its first step.
    ///
    /// State is reset to empty text and step 0, and a tick is scheduled at
    /// `now` so the first step applies on the next poll. Any previously
    /// pending tick is replaced.
    pub fn start(&mut self, sequence: Sequence, now: Duration) {
        tracing::info!(
            steps = sequence.len(),
            speed = sequence.speed(),
            "Starting sequence playback"
        );
        self.sequence = Some(sequence);
        self.state = PlaybackState::new();
        self.pending = Some(PendingTick { due: now });
        self.cycle_started = Some(now);
    }

    /// Start the current sequence over. Returns false if nothing was ever started.
    pub fn restart(&mut self, now: Duration) -> bool {
        match self.sequence.take() {
            Some(sequence) => {
                self.start(sequence, now);
                true
            }
            None => false,
        }
    }

    /// Cancel the pending tick. Calling this more than once is harmless.
    pub fn stop(&mut self) {
        if self.pending.take().is_some() {
            tracing::info!(ticks = self.state.ticks, "Stopped sequence playback");
        }
    }

    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// When the pending tick fires, if one is scheduled.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.map(|tick| tick.due)
    }

    /// Time until the pending tick fires, zero if it is already due.
    pub fn time_until_next(&self, now: Duration) -> Option<Duration> {
        self.next_deadline().map(|due| due.saturating_sub(now))
    }

    /// Position within the current cycle as `(elapsed, cycle_length)`.
    pub fn cycle_position(&self, now: Duration) -> Option<(Duration, Duration)> {
        let sequence = self.sequence.as_ref()?;
        let started = self.cycle_started?;
        let length = sequence.cycle_duration();
        Some((now.saturating_sub(started).min(length), length))
    }

    /// Fire every tick that is due at `now`, in order.
    ///
    /// Each following tick is scheduled from the previous deadline rather
    /// than from `now`, so late polls catch up without drifting. Returns the
    /// number of ticks fired; zero means the state did not change.
    pub fn poll(&mut self, now: Duration) -> usize {
        let mut fired = 0;
        while let Some(tick) = self.pending {
            if tick.due > now {
                break;
            }
            self.fire(tick.due);
            fired += 1;
        }
        fired
    }

    fn fire(&mut self, due: Duration) {
        let Some(sequence) = &self.sequence else {
            self.pending = None;
            return;
        };
        let index = self.state.step_index;
        let Some(step) = sequence.get(index) else {
            self.pending = None;
            return;
        };

        if index == 0 {
            self.cycle_started = Some(due);
        }

        self.state.apply(step);
        self.state.ticks += 1;
        self.state.step_index = sequence.next_index(index);

        let wait = sequence.step_duration(index);
        tracing::debug!(
            index,
            action = step.action(),
            wait_ms = wait.as_millis() as u64,
            "Applied step"
        );
        self.pending = Some(PendingTick {
            due: due.saturating_add(wait),
        });
    }
}

impl Drop for SequencePlayer {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::state::{HighlightSpan, Phase};
    use crate::sequence::{hero_sequence, Step};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn hi_reset() -> Sequence {
        Sequence::new(vec![Step::type_text("hi", 100), Step::reset(50)]).unwrap()
    }

    #[test]
    fn new_player_is_idle() {
        let player = SequencePlayer::new();
        assert!(!player.is_running());
        assert_eq!(player.next_deadline(), None);
        assert_eq!(player.state(), &PlaybackState::new());
    }

    #[test]
    fn start_schedules_immediate_tick() {
        let mut player = SequencePlayer::new();
        player.start(hi_reset(), ms(0));

        assert!(player.is_running());
        assert_eq!(player.next_deadline(), Some(ms(0)));
        assert_eq!(player.state().text, "");
        assert_eq!(player.state().step_index, 0);
    }

    #[test]
    fn scenario_type_reset_wraps() {
        let mut player = SequencePlayer::new();
        player.start(hi_reset(), ms(0));

        assert_eq!(player.poll(ms(0)), 1);
        assert_eq!(player.state().text, "hi");
        assert_eq!(player.state().phase, Phase::Typing);
        assert_eq!(player.next_deadline(), Some(ms(100)));

        assert_eq!(player.poll(ms(99)), 0);
        assert_eq!(player.state().text, "hi");

        assert_eq!(player.poll(ms(100)), 1);
        assert_eq!(player.state().text, "");
        assert_eq!(player.state().phase, Phase::Reset);

        assert_eq!(player.poll(ms(150)), 1);
        assert_eq!(player.state().text, "hi");
        assert_eq!(player.state().phase, Phase::Typing);
        assert_eq!(player.state().step_index, 1);
    }

    #[test]
    fn late_poll_catches_up_without_drift() {
        let mut player = SequencePlayer::new();
        player.start(hi_reset(), ms(0));

        // 0 -> type, 100 -> reset, 150 -> type, 250 -> reset
        assert_eq!(player.poll(ms(260)), 4);
        assert_eq!(player.state().phase, Phase::Reset);
        assert_eq!(player.next_deadline(), Some(ms(300)));
    }

    #[test]
    fn start_mid_clock_offsets_deadlines() {
        let mut player = SequencePlayer::new();
        player.start(hi_reset(), ms(1_000));

        assert_eq!(player.poll(ms(999)), 0);
        assert_eq!(player.poll(ms(1_000)), 1);
        assert_eq!(player.next_deadline(), Some(ms(1_100)));
    }

    #[test]
    fn stop_cancels_pending_tick() {
        let mut player = SequencePlayer::new();
        player.start(hi_reset(), ms(0));
        player.poll(ms(0));

        player.stop();
        let frozen = player.state().clone();

        assert_eq!(player.poll(ms(10_000)), 0);
        assert_eq!(player.state(), &frozen);
        assert!(!player.is_running());
    }

    #[test]
    fn stop_is_idempotent() {
        let mut player = SequencePlayer::new();
        player.stop();
        player.start(hi_reset(), ms(0));
        player.stop();
        player.stop();
        assert!(!player.is_running());
    }

    #[test]
    fn restart_resets_state() {
        let mut player = SequencePlayer::new();
        assert!(!player.restart(ms(0)));

        player.start(hi_reset(), ms(0));
        player.poll(ms(0));
        player.stop();

        assert!(player.restart(ms(500)));
        assert_eq!(player.state().text, "");
        assert_eq!(player.next_deadline(), Some(ms(500)));
    }

    #[test]
    fn highlight_applies_literal_bounds() {
        let seq = Sequence::new(vec![
            Step::type_text("hello world", 10),
            Step::highlight(6, 11, 10),
        ])
        .unwrap();
        let mut player = SequencePlayer::new();
        player.start(seq, ms(0));
        player.poll(ms(10));

        assert_eq!(player.state().phase, Phase::Highlighting);
        assert_eq!(player.state().highlight, HighlightSpan::new(6, 11));
    }

    #[test]
    fn zero_duration_steps_fire_together() {
        let seq = Sequence::new(vec![
            Step::type_text("a", 0),
            Step::type_text("b", 0),
            Step::reset(100),
        ])
        .unwrap();
        let mut player = SequencePlayer::new();
        player.start(seq, ms(0));

        assert_eq!(player.poll(ms(0)), 3);
        assert_eq!(player.state().phase, Phase::Reset);
        assert_eq!(player.next_deadline(), Some(ms(100)));
    }

    #[test]
    fn speed_shortens_waits() {
        let mut player = SequencePlayer::new();
        player.start(hi_reset().with_speed(2.0), ms(0));
        player.poll(ms(0));
        assert_eq!(player.next_deadline(), Some(ms(50)));
    }

    #[test]
    fn hero_text_is_periodic() {
        let seq = hero_sequence();
        let len = seq.len();

        let mut reference = SequencePlayer::new();
        reference.start(seq.clone(), Duration::ZERO);
        let mut after_k = Vec::new();
        for _ in 0..len {
            let due = reference.next_deadline().unwrap();
            reference.poll(due);
            after_k.push(reference.state().clone());
        }

        let mut player = SequencePlayer::new();
        player.start(seq, Duration::ZERO);
        for tick in 0..(3 * len) {
            let due = player.next_deadline().unwrap();
            player.poll(due);
            let expected = &after_k[tick % len];
            assert_eq!(player.state().text, expected.text, "tick {}", tick + 1);
            assert_eq!(player.state().phase, expected.phase);
            assert_eq!(player.state().highlight, expected.highlight);
        }
    }

    #[test]
    fn highlight_invariant_holds_during_hero_playback() {
        let mut player = SequencePlayer::new();
        player.start(hero_sequence(), Duration::ZERO);
        for _ in 0..26 {
            let due = player.next_deadline().unwrap();
            player.poll(due);
            let state = player.state();
            if state.phase == Phase::Highlighting {
                assert!(state.highlight.fits(state.text_len()));
            }
        }
    }

    #[test]
    fn cycle_position_tracks_wrap() {
        let mut player = SequencePlayer::new();
        assert_eq!(player.cycle_position(ms(0)), None);

        player.start(hi_reset(), ms(0));
        player.poll(ms(0));
        assert_eq!(player.cycle_position(ms(120)), Some((ms(120), ms(150))));

        player.poll(ms(150));
        assert_eq!(player.cycle_position(ms(160)), Some((ms(10), ms(150))));
    }

    #[test]
    fn time_until_next_saturates() {
        let mut player = SequencePlayer::new();
        player.start(hi_reset(), ms(100));
        assert_eq!(player.time_until_next(ms(40)), Some(ms(60)));
        assert_eq!(player.time_until_next(ms(400)), Some(ms(0)));
    }
}
