//! Play subcommand handler

use anyhow::{bail, Result};

use synapsis::cli::PlayArgs;
use synapsis::player::playback::playback_frames;
use synapsis::sequence::Sequence;
use synapsis::tui::{App, LandingApp};
use synapsis::Config;

use super::{resolve_sequence, resolve_theme};

#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config, args: PlayArgs) -> Result<()> {
    let speed = args.speed.unwrap_or(config.animation.speed);
    if !speed.is_finite() || speed <= 0.0 {
        bail!("Speed must be a positive number, got {}", speed);
    }
    let sequence = resolve_sequence(config, args.sequence.as_deref())?.with_speed(speed);

    if args.headless {
        print_frames(&sequence, args.cycles);
        return Ok(());
    }

    let theme = resolve_theme(config, args.theme.as_deref())?;
    tracing::info!(steps = sequence.len(), speed = sequence.speed(), "Opening landing view");

    let mut app = App::new()?;
    LandingApp::new(sequence, theme).run(&mut app)
}

fn print_frames(sequence: &Sequence, cycles: u32) {
    for frame in playback_frames(sequence, cycles) {
        println!("{}", frame);
    }
}
