//! CLI for favgrab.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use favgrab_core::config;
use std::path::PathBuf;

use commands::{run_check, run_interactive, run_lookup, run_previews, LookupOptions};

/// Top-level CLI for favgrab.
#[derive(Debug, Parser)]
#[command(name = "favgrab")]
#[command(about = "favgrab: look up and download the favicons of any domain", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Look up the favicons of a domain (defaults to the configured example domain).
    Lookup {
        /// Domain name, e.g. openai.com.
        domain: Option<String>,

        /// Print the raw JSON payload instead of the rendered page.
        #[arg(long)]
        json: bool,

        /// Also download both preview images into DIR.
        #[arg(long, value_name = "DIR")]
        save: Option<PathBuf>,

        /// Render the whole page (heading, input row, FAQ), not just the results.
        #[arg(long)]
        page: bool,
    },

    /// Show preview URLs and embed snippets for a domain.
    Previews {
        /// Domain name, e.g. openai.com.
        domain: Option<String>,
    },

    /// Check whether a domain name is accepted.
    Check {
        /// Candidate domain name.
        domain: String,
    },

    /// Read domains from stdin, one per line, and look each up as it arrives.
    /// An empty line submits the current field value.
    Interactive,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Lookup {
                domain,
                json,
                save,
                page,
            } => {
                let opts = LookupOptions { json, save, page };
                run_lookup(&cfg, domain.as_deref(), &opts).await?;
            }
            CliCommand::Previews { domain } => run_previews(&cfg, domain.as_deref())?,
            CliCommand::Check { domain } => run_check(&domain)?,
            CliCommand::Interactive => run_interactive(&cfg).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
