//! boxoffice - statistics and charts for the most profitable hollywood movies
//!
//! Loads the dataset, then runs the text menu on stdin/stdout. Charts are
//! drawn full-screen in the terminal until dismissed.

mod keybindings;
mod presenter;
mod views;
mod widgets;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use boxoffice_core::{BoxofficeConfig, BoxofficeResult, DatasetSummary, Session};
use boxoffice_io::{DatasetLoader, IoError};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use presenter::TerminalPresenter;

/// Statistical and visual analysis of the most profitable hollywood movies
#[derive(Debug, Parser)]
#[command(name = "boxoffice", version, about)]
struct Cli {
    /// Dataset file (overrides the configured path)
    #[arg(short, long)]
    dataset: Option<PathBuf>,

    /// Config file (defaults to the per-user config, if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print every statistic as JSON and exit
    #[arg(long)]
    summary: bool,
}

fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("{}", err);
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr so log lines never interleave with the menu
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> BoxofficeResult<ExitCode> {
    let mut config = BoxofficeConfig::resolve(cli.config.as_deref())?;
    if let Some(path) = cli.dataset {
        config.dataset.path = path;
    }

    let loader = DatasetLoader::new(config.load_options());
    let report = match loader.load_path(&config.dataset.path) {
        Ok(report) => report,
        Err(IoError::FileNotFound(path)) => {
            println!(
                "\n\nDataset file '{path}' not found in project location.\n\nPlease check if the file is present in the project folder or it hasn't been renamed.\n\nProgram is exiting..."
            );
            return Ok(ExitCode::FAILURE);
        }
        Err(err) => return Err(err.into()),
    };

    for row in &report.skipped {
        println!("\n\nUnable to convert value to float at line: {}", row.raw);
    }

    if cli.summary {
        let summary = DatasetSummary::from_dataset(&report.dataset);
        println!("{}", summary.to_json()?);
        return Ok(ExitCode::SUCCESS);
    }

    let mut session = Session::new(
        &report.dataset,
        &config,
        io::stdin().lock(),
        io::stdout(),
        TerminalPresenter,
    );
    session.run()?;

    Ok(ExitCode::SUCCESS)
}
