//! Subcommand handlers

pub mod check;
pub mod completions;
pub mod config;
pub mod export;
pub mod play;
pub mod summarise;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use synapsis::sequence::{hero_sequence, load_sequence, Sequence};
use synapsis::tui::Theme;
use synapsis::Config;

/// The sequence to use: the CLI path, else the configured path, else the hero.
pub fn resolve_sequence(config: &Config, cli_path: Option<&Path>) -> Result<Sequence> {
    let path: Option<PathBuf> = cli_path
        .map(Path::to_path_buf)
        .or_else(|| config.animation.sequence.clone());
    match path {
        Some(path) => load_sequence(&path)
            .with_context(|| format!("Failed to load sequence {}", path.display())),
        None => Ok(hero_sequence()),
    }
}

/// Theme from config, unknown names fall back to the default theme.
pub fn resolve_theme(config: &Config, cli_name: Option<&str>) -> Result<Theme> {
    match cli_name {
        Some(name) => Theme::from_name(name).with_context(|| {
            format!(
                "Unknown theme '{}' (available: {})",
                name,
                Theme::NAMES.join(", ")
            )
        }),
        None => Ok(Theme::from_name(&config.theme.name).unwrap_or_else(|| {
            tracing::warn!(theme = %config.theme.name, "Unknown theme in config, using default");
            Theme::default()
        })),
    }
}
