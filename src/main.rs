use anyhow::{Context, Result};
use clap::Parser;

use synapsis::cli::{Cli, Commands, ConfigCommands};
use synapsis::logging::init_logging;
use synapsis::Config;

mod commands;

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Completions and config paths must work even with a broken config file.
    match &cli.command {
        Commands::Completions { shell } => return commands::completions::handle(*shell),
        Commands::Config(ConfigCommands::Path) => return commands::config::handle_path(),
        _ => {}
    }

    let config = Config::load().context("Failed to load config")?;
    let log_file = init_logging(&config.logging);
    tracing::debug!(command = ?cli.command, log_file = ?log_file, "Starting synapsis");

    match cli.command {
        Commands::Play(args) => commands::play::handle(&config, args),
        Commands::Check { sequence } => commands::check::handle(&config, sequence),
        Commands::Export => commands::export::handle(),
        Commands::Summarise { text, json } => commands::summarise::handle(&config, text, json),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(&config),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Init { force } => commands::config::handle_init(force),
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
