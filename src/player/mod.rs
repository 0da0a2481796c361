//! Sequence player module
//!
//! Plays an editing sequence on a single cooperative timer and renders the
//! resulting state.
//!
//! # Architecture
//!
//! - `state`: `PlaybackState` and the `Phase` / `HighlightSpan` types
//! - `clock`: time sources (`MonotonicClock`, `ManualClock`)
//! - `sequencer`: the `SequencePlayer` itself
//! - `playback/`: step markers on the cycle timeline
//! - `render/`: pure editor rendering (segments, stats, markup, progress bar)
//!
//! # Usage
//!
//! ```
//! use std::time::Duration;
//! use synapsis::player::SequencePlayer;
//! use synapsis::sequence::{Sequence, Step};
//!
//! let sequence = Sequence::new(vec![Step::type_text("hi", 100), Step::reset(50)]).unwrap();
//! let mut player = SequencePlayer::new();
//! player.start(sequence, Duration::ZERO);
//! assert_eq!(player.state().text, "");
//!
//! player.poll(Duration::ZERO);
//! assert_eq!(player.state().text, "hi");
//! ```

pub mod clock;
pub mod playback;
pub mod render;
mod sequencer;
pub mod state;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use sequencer::SequencePlayer;
pub use state::{HighlightSpan, Phase, PlaybackState};
