mod chart;
mod cli;
mod config;
mod error;
mod render;
mod session;
mod store;
mod types;

use crate::error::SongrateError;
use crate::render::{RenderSettings, StreamRenderer};
use crate::session::{Session, SessionEvent};
use crate::types::config::SongrateConfig;
use crate::types::Dimension;
use clap::Parser;
use std::fs::File;
use std::io::{BufWriter, IsTerminal, Write};
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn render_settings(
    cfg: &SongrateConfig,
    format: Option<cli::ReportFormat>,
    compact: bool,
) -> RenderSettings {
    RenderSettings {
        format: format.map(Into::into).unwrap_or_else(|| cfg.format()),
        pretty: cfg.pretty() && !compact,
        untitled: cfg.untitled().to_string(),
    }
}

fn warnings_exit_code(warnings: usize) -> i32 {
    if warnings > 0 {
        eprintln!("warning: {warnings} input(s) were ignored or clamped");
        exit_code::WARNINGS
    } else {
        exit_code::SUCCESS
    }
}

fn run() -> Result<i32, SongrateError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Rate(cmd) => {
            let cwd = std::env::current_dir()?;
            let cfg = config::load_config(&cwd, cli.config.as_deref())?;
            let settings = render_settings(&cfg, cmd.format, cmd.compact);
            let assignments = cmd
                .assignments
                .iter()
                .map(|raw| cli::parse_assignment(raw))
                .collect::<Result<Vec<_>, _>>()?;

            let out: Box<dyn Write> = match &cmd.output {
                Some(path) => Box::new(BufWriter::new(File::create(path)?)),
                None => Box::new(std::io::stdout().lock()),
            };
            let mut session = Session::new(StreamRenderer::new(settings, out));
            if let Some(song) = cmd.song {
                session.update(SessionEvent::SetSongName(song));
            }
            for (id, value) in assignments {
                session.update(SessionEvent::SetRating { id, value });
            }
            session.redraw()?;

            if let Some(path) = &cmd.output {
                tracing::info!(path = %path.display(), "rating written");
            }
            Ok(warnings_exit_code(session.warnings()))
        }
        cli::Commands::Session(cmd) => {
            let cwd = std::env::current_dir()?;
            let cfg = config::load_config(&cwd, cli.config.as_deref())?;
            let settings = render_settings(&cfg, cmd.format, cmd.compact);

            let stdout = std::io::stdout().lock();
            let mut session = Session::new(StreamRenderer::new(settings, stdout));
            session.run(std::io::stdin().lock())?;
            tracing::info!(frames = session.renderer().frames(), "session ended");
            Ok(warnings_exit_code(session.warnings()))
        }
        cli::Commands::Dimensions => {
            for dimension in Dimension::ALL {
                println!("{}\t{}", dimension.id(), dimension.label());
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
