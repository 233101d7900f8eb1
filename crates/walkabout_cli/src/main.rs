//! Walkabout CLI
//!
//! Prints every string found in JSON documents.

use std::io::{self, Write};
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result, WrapErr, miette};
use rayon::prelude::*;
use tracing::{debug, error, warn};
use tracing_subscriber::EnvFilter;

use walkabout_core::{WalkConfig, Walker};

/// Walkabout - print every string found in JSON documents
#[derive(Parser)]
#[command(name = "walkabout")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON files to walk
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print only the number of strings found in each file
    #[arg(long)]
    count: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Strings discovered in one file.
struct FileReport {
    path: PathBuf,
    strings: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => WalkConfig::from_file(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to load config {}", path.display()))?,
        None => WalkConfig::default(),
    };
    debug!("Walk config: {:?}", config);

    let walker = Walker::new(config);

    // Files are walked in parallel; `collect` keeps argument order.
    let results: Vec<Result<FileReport>> = cli
        .files
        .par_iter()
        .map(|path| walk_file(&walker, path))
        .collect();

    let mut reports = Vec::with_capacity(results.len());
    let mut failures = 0usize;
    for result in results {
        match result {
            Ok(report) => reports.push(report),
            Err(e) => {
                error!("{:?}", e);
                failures += 1;
            }
        }
    }

    print_reports(&reports, cli.format, cli.count)?;

    if failures > 0 {
        return Err(miette!("{} of {} files could not be walked", failures, cli.files.len()));
    }
    Ok(())
}

fn walk_file(walker: &Walker, path: &Path) -> Result<FileReport> {
    let content = std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
    let document: serde_json::Value = serde_json::from_str(&content)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to parse {}", path.display()))?;

    let mut strings = Vec::new();
    let outcome = walker.walk(&document, &mut |s: &str| strings.push(s.to_string()));
    if let ControlFlow::Break(reason) = outcome {
        warn!("{}: walk interrupted ({})", path.display(), reason);
    }
    debug!("{}: {} strings", path.display(), strings.len());

    Ok(FileReport {
        path: path.to_path_buf(),
        strings,
    })
}

fn print_reports(reports: &[FileReport], format: OutputFormat, count_only: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Text => {
            for report in reports {
                if count_only {
                    writeln!(
                        out,
                        "{}: {} strings",
                        report.path.display(),
                        report.strings.len()
                    )
                    .into_diagnostic()?;
                } else {
                    for s in &report.strings {
                        writeln!(out, "{}", s).into_diagnostic()?;
                    }
                }
            }
        }
        OutputFormat::Json => {
            let files: Vec<serde_json::Value> = reports
                .iter()
                .map(|report| {
                    if count_only {
                        serde_json::json!({
                            "file": report.path.display().to_string(),
                            "count": report.strings.len(),
                        })
                    } else {
                        serde_json::json!({
                            "file": report.path.display().to_string(),
                            "strings": report.strings,
                        })
                    }
                })
                .collect();
            let json = serde_json::to_string_pretty(&files).into_diagnostic()?;
            writeln!(out, "{}", json).into_diagnostic()?;
        }
    }
    Ok(())
}
