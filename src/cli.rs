use crate::error::{Result, SongrateError};
use crate::render::OutputFormat;
use crate::types::rating::parse_requested;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "songrate",
    version,
    about = "Rate a song across six dimensions and project a radar chart"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Config file to use instead of ./songrate.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply ratings once and render the result
    Rate(RateCommand),
    /// Read `name`/`set`/`show`/`quit` lines from stdin, redrawing after each
    Session(SessionCommand),
    /// List dimension ids and labels in chart order
    Dimensions,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Md,
    Json,
    Chart,
}

impl From<ReportFormat> for OutputFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Md => OutputFormat::Md,
            ReportFormat::Json => OutputFormat::Json,
            ReportFormat::Chart => OutputFormat::Chart,
        }
    }
}

#[derive(Args)]
pub struct RateCommand {
    #[arg(long)]
    pub song: Option<String>,

    /// Rating assignment, applied in order (repeatable)
    #[arg(long = "set", value_name = "ID=VALUE")]
    pub assignments: Vec<String>,

    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Single-line JSON output
    #[arg(long)]
    pub compact: bool,

    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct SessionCommand {
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    #[arg(long)]
    pub compact: bool,
}

/// Splits `lyrics=80` into its id and value. The id is not checked here;
/// unknown ids are left to the store.
pub fn parse_assignment(raw: &str) -> Result<(String, i64)> {
    let (id, value) = raw
        .split_once('=')
        .ok_or_else(|| SongrateError::InvalidAssignment(raw.to_string()))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(SongrateError::InvalidAssignment(raw.to_string()));
    }
    let value = parse_requested(value.trim())
        .map_err(|_| SongrateError::InvalidAssignment(raw.to_string()))?;
    Ok((id.to_string(), value))
}
