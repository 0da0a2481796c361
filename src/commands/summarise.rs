//! Summarise subcommand handler

use std::io::{self, Read};

use anyhow::{Context, Result};

use synapsis::backend::{handle_summarise, SummariseRequest};
use synapsis::Config;

use super::resolve_theme;

pub fn handle(config: &Config, text: Option<String>, json: Option<String>) -> Result<()> {
    let request = match (text, json) {
        (_, Some(body)) => {
            SummariseRequest::from_json(&body).context("Invalid summarise request body")?
        }
        (Some(text), None) => SummariseRequest::new(text),
        (None, None) => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read text from stdin")?;
            SummariseRequest::new(buffer.trim_end())
        }
    };

    let ack = handle_summarise(&request);
    let theme = resolve_theme(config, None)?;
    println!("{}", theme.success_text(&ack.message));
    Ok(())
}
