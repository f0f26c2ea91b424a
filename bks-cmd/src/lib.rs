//! Command implementations for the bike sharing CLI.
//!
//! Provides subcommands for downloading the daily dataset and printing the
//! dashboard summaries for a date range.

use bks_core::source::DATASET_URL_ENV;
use clap::{Subcommand, ValueEnum};
use std::path::PathBuf;

pub mod fetch;
pub mod summary;

/// Output format for `summary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Download the daily dataset, check that it loads, and save it
    Fetch {
        /// Dataset URL (defaults to the published Capital Bikeshare CSV)
        #[arg(long, env = DATASET_URL_ENV)]
        url: Option<String>,

        /// Where to write the CSV
        #[arg(short = 'o', long)]
        output: PathBuf,
    },

    /// Print headline metrics, monthly and seasonal summaries for a date range
    Summary {
        /// Dataset URL (defaults to the published Capital Bikeshare CSV)
        #[arg(long, env = DATASET_URL_ENV)]
        url: Option<String>,

        /// Read a local CSV instead of downloading; wins over --url
        #[arg(short = 'i', long)]
        input: Option<PathBuf>,

        /// First day, YYYY-MM-DD (defaults to the first day in the data)
        #[arg(short = 's', long)]
        start: Option<String>,

        /// Last day, YYYY-MM-DD (defaults to the last day in the data)
        #[arg(short = 'e', long)]
        end: Option<String>,

        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Fetch { url, output } => fetch::run_fetch(url, &output).await,
        Command::Summary {
            url,
            input,
            start,
            end,
            format,
        } => {
            summary::run_summary(
                url,
                input,
                start.as_deref(),
                end.as_deref(),
                format,
            )
            .await
        }
    }
}
