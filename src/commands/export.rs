//! Export subcommand handler

use anyhow::Result;

use synapsis::sequence::{hero_sequence, to_toml};

/// Print the built-in hero sequence as an editable sequence file.
pub fn handle() -> Result<()> {
    print!("{}", to_toml(&hero_sequence())?);
    Ok(())
}
