use crate::app::commands::DownloadRequest;
use crate::app::datasets::Dataset;
use crate::core::YearRange;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "tennis-etl")]
#[command(about = "Download ATP match data and tennis betting odds into CSV")]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Download ATP match data
    DownloadAtpMatchData(DownloadArgs),
    /// Download betting odds
    DownloadBettingOddsData(DownloadArgs),
}

#[derive(Debug, Clone, Args)]
pub struct DownloadArgs {
    #[arg(long, default_value_t = 2014, help = "Starting year for download")]
    pub start_year: u32,

    #[arg(long, default_value_t = 2024, help = "Ending year for download")]
    pub end_year: u32,

    /// Output CSV path (defaults to the raw data directory)
    #[arg(long)]
    pub output_path: Option<PathBuf>,
}

impl Command {
    pub fn dataset(&self) -> Dataset {
        match self {
            Command::DownloadAtpMatchData(_) => Dataset::AtpMatches,
            Command::DownloadBettingOddsData(_) => Dataset::BettingOdds,
        }
    }

    pub fn args(&self) -> &DownloadArgs {
        match self {
            Command::DownloadAtpMatchData(args) | Command::DownloadBettingOddsData(args) => args,
        }
    }

    pub fn to_request(&self) -> DownloadRequest {
        let args = self.args();
        DownloadRequest {
            dataset: self.dataset(),
            years: YearRange::new(args.start_year, args.end_year),
            output_path: args.output_path.clone(),
        }
    }
}
