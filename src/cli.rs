//! Command line definitions.
//!
//! Lives in the library so documentation tooling can reuse the clap model.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Synapsis - distill any text into a fun & engaging video
#[derive(Debug, Parser)]
#[command(name = "synapsis", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the landing page with the animated hero editor
    Play(PlayArgs),

    /// Check a sequence's highlight offsets against the text they apply to
    Check {
        /// Sequence file (defaults to the configured or built-in sequence)
        #[arg(long, value_name = "FILE")]
        sequence: Option<PathBuf>,
    },

    /// Print the built-in hero sequence as a TOML sequence file
    Export,

    /// Submit text to the summarise endpoint
    Summarise {
        /// Text to summarise (read from stdin when omitted)
        text: Option<String>,

        /// Raw JSON request body, e.g. '{"text": "..."}'
        #[arg(long, value_name = "BODY", conflicts_with = "text")]
        json: Option<String>,
    },

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, clap::Args)]
pub struct PlayArgs {
    /// Sequence file to play instead of the built-in hero sequence
    #[arg(long, value_name = "FILE")]
    pub sequence: Option<PathBuf>,

    /// Playback speed multiplier (0.1 - 16)
    #[arg(long)]
    pub speed: Option<f64>,

    /// Color theme (synapsis, classic, ocean)
    #[arg(long)]
    pub theme: Option<String>,

    /// Print each step as a text frame instead of opening the TUI
    #[arg(long)]
    pub headless: bool,

    /// Number of cycles to print in headless mode
    #[arg(long, default_value_t = 1, requires = "headless")]
    pub cycles: u32,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Write a config file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
