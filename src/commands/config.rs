//! Config subcommands handler

use anyhow::{bail, Result};

use synapsis::Config;

use super::resolve_theme;

/// Show the effective configuration as TOML.
pub fn handle_show(config: &Config) -> Result<()> {
    let theme = resolve_theme(config, None)?;
    println!("{}", theme.primary_text(&config.to_toml()?));
    Ok(())
}

/// Print where the config file lives.
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Write a default config file.
pub fn handle_init(force: bool) -> Result<()> {
    let path = Config::config_path()?;
    if path.exists() && !force {
        bail!(
            "Config file already exists at {} (use --force to overwrite)",
            path.display()
        );
    }
    let path = Config::default().save()?;
    tracing::info!(path = %path.display(), "Wrote default config");

    let theme = resolve_theme(&Config::default(), None)?;
    println!(
        "{}",
        theme.success_text(&format!("Wrote default config to {}", path.display()))
    );
    Ok(())
}
