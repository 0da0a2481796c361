//! Headless playback: step through a sequence on a manual clock and
//! capture one text frame per tick.

use std::fmt;
use std::time::Duration;

use crate::player::clock::{Clock, ManualClock};
use crate::player::render::{render_editor, render_markup};
use crate::player::state::Phase;
use crate::player::SequencePlayer;
use crate::sequence::Sequence;

/// The editor as it looked right after one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackFrame {
    /// Time since playback started
    pub at: Duration,
    pub phase: Phase,
    /// Text with the highlight bracketed and the caret drawn as `|`
    pub markup: String,
}

impl fmt::Display for PlaybackFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let millis = self.at.as_millis();
        let line = format!(
            "[{:02}:{:02}.{:03}] {:<12} {}",
            millis / 60_000,
            (millis / 1000) % 60,
            millis % 1000,
            self.phase.label(),
            self.markup
        );
        f.write_str(line.trim_end())
    }
}

/// Play `cycles` full cycles of `sequence` and collect a frame per tick.
///
/// Zero-duration steps fire together with the following step and share
/// its frame.
pub fn playback_frames(sequence: &Sequence, cycles: u32) -> Vec<PlaybackFrame> {
    let total = sequence.len() * cycles as usize;
    let clock = ManualClock::new();
    let mut player = SequencePlayer::new();
    let mut frames = Vec::new();

    player.start(sequence.clone(), clock.now());
    while (player.state().ticks as usize) < total {
        if player.poll(clock.now()) > 0 {
            let view = render_editor(player.state());
            frames.push(PlaybackFrame {
                at: clock.now(),
                phase: player.state().phase,
                markup: render_markup(&view),
            });
        }
        match player.next_deadline() {
            Some(deadline) => clock.set(deadline),
            None => break,
        }
    }
    player.stop();
    frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{hero_sequence, Step};

    #[test]
    fn one_frame_per_step() {
        let frames = playback_frames(&hero_sequence(), 1);
        assert_eq!(frames.len(), hero_sequence().len());
        assert_eq!(frames[0].at, Duration::ZERO);
        assert_eq!(frames.last().map(|f| f.phase), Some(Phase::Reset));
    }

    #[test]
    fn zero_cycles_yields_nothing() {
        assert!(playback_frames(&hero_sequence(), 0).is_empty());
    }

    #[test]
    fn frames_follow_step_durations() {
        let seq = Sequence::new(vec![Step::type_text("hi", 100), Step::reset(50)]).unwrap();
        let frames = playback_frames(&seq, 2);

        let times: Vec<u128> = frames.iter().map(|f| f.at.as_millis()).collect();
        assert_eq!(times, vec![0, 100, 150, 250]);
        assert_eq!(frames[0].markup, "hi|");
        assert_eq!(frames[1].markup, "");
        assert_eq!(
            frames[2],
            PlaybackFrame {
                at: Duration::from_millis(150),
                ..frames[0].clone()
            }
        );
    }

    #[test]
    fn display_drops_padding_for_empty_text() {
        let frame = PlaybackFrame {
            at: Duration::from_millis(300),
            phase: Phase::Reset,
            markup: String::new(),
        };
        assert_eq!(frame.to_string(), "[00:00.300] reset");
    }

    #[test]
    fn display_formats_timestamp_and_phase() {
        let frame = PlaybackFrame {
            at: Duration::from_millis(62_345),
            phase: Phase::Highlighting,
            markup: "[Four] score".to_string(),
        };
        insta::assert_snapshot!(frame.to_string(), @"[01:02.345] highlighting [Four] score");
    }
}
