//! Check subcommand handler

use std::path::PathBuf;

use anyhow::{bail, Result};

use synapsis::sequence::check_highlights;
use synapsis::Config;

use super::{resolve_sequence, resolve_theme};

pub fn handle(config: &Config, sequence: Option<PathBuf>) -> Result<()> {
    let theme = resolve_theme(config, None)?;
    let sequence = resolve_sequence(config, sequence.as_deref())?;
    let violations = check_highlights(&sequence);

    if violations.is_empty() {
        println!(
            "{}",
            theme.success_text(&format!(
                "OK: {} steps, cycle {:.1}s, all highlights fit",
                sequence.len(),
                sequence.cycle_duration().as_secs_f64()
            ))
        );
        return Ok(());
    }

    for violation in &violations {
        eprintln!("{}", theme.error_text(&violation.to_string()));
    }
    bail!("{} highlight violation(s) found", violations.len())
}
