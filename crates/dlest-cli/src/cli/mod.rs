//! CLI for dlest.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dlest_core::config;
use dlest_core::measure::Mode;
use std::path::Path;

use commands::{run_completions, run_estimate, run_extract, run_probe, EstimateArgs};

/// Top-level CLI for dlest.
#[derive(Debug, Parser)]
#[command(name = "dlest")]
#[command(about = "dlest: estimate how long downloading every URL in a JSON file would take", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Extract the URLs from a JSON file, measure them all and print totals.
    Estimate {
        /// Path to the JSON document.
        path: String,
        /// 1/fast (HEAD, declared size) or 2/accurate (full GET, counted bytes). Defaults to config.
        #[arg(long, short, value_name = "MODE")]
        mode: Option<Mode>,
        /// Maximum number of URLs measured at once (config default: 10).
        #[arg(long, short = 'j', value_name = "N")]
        max_threads: Option<usize>,
        /// Bandwidth in bytes per second used for the projected download time.
        #[arg(long, value_name = "BYTES_PER_SEC")]
        bandwidth: Option<u64>,
        /// Print the summary as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// List the URLs found in a JSON file without measuring them.
    Extract {
        /// Path to the JSON document.
        path: String,
    },

    /// Measure a single URL.
    Probe {
        /// Direct HTTP/HTTPS URL.
        url: String,
        /// 1/fast or 2/accurate. Defaults to config.
        #[arg(long, short, value_name = "MODE")]
        mode: Option<Mode>,
    },

    /// Print a shell completion script.
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Estimate {
                path,
                mode,
                max_threads,
                bandwidth,
                json,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                let args = EstimateArgs {
                    mode,
                    max_threads,
                    bandwidth,
                    json,
                };
                run_estimate(&cfg, Path::new(&path), &args)?;
            }
            CliCommand::Extract { path } => run_extract(Path::new(&path))?,
            CliCommand::Probe { url, mode } => {
                let cfg = config::load_or_init()?;
                run_probe(&cfg, &url, mode)?;
            }
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
