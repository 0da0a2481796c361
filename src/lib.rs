//! Synapsis - terminal landing experience for the Synapsis summariser
//!
//! The interesting part of this crate is the [`player::SequencePlayer`], a
//! small deterministic timed-sequence player that drives the hero section's
//! text-editing animation (type, highlight, delete, reset). Around it sit the
//! sequence library, a pure editor renderer, the ratatui landing view, and the
//! stub summarise backend.
//!
//! # Module Structure
//!
//! - [`sequence`] - Steps, sequences, the built-in hero sequence, TOML loading
//! - [`player`] - Playback state, clocks, the player and the editor renderer
//! - [`tui`] - Landing page view (ratatui/crossterm)
//! - [`backend`] - Summarise request stub
//! - [`config`] - TOML configuration
//! - [`logging`] - tracing subscriber setup
//! - [`cli`] - Command line definitions

pub mod backend;
pub mod cli;
pub mod config;
pub mod logging;
pub mod player;
pub mod sequence;
pub mod tui;

pub use config::Config;
pub use player::{Phase, PlaybackState, SequencePlayer};
pub use sequence::{Sequence, Step};
