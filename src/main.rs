//! dllsift - suspicious DLL name scanner for Windows executables
//!
//! Extracts readable strings from each file and flags DLL names that match
//! known-suspicious patterns or look machine-generated.

use anyhow::{Context, Result};
use clap::Parser;
use dllsift::io::has_supported_extension;
use dllsift::logging::{init_tracing, init_tracing_json};
use dllsift::{log_error, AnalysisError, Analyzer, AnalyzerConfig, FileReport};
use rayon::prelude::*;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "dllsift")]
#[command(
    author,
    version,
    about = "Flag suspicious DLL names in Windows executables"
)]
#[command(long_about = "
dllsift scans .exe and .dll files as raw bytes, keeps readable strings,
and reports DLL names that suggest compression, cryptography, injection,
hooking, keylogging, screen capture, networking or anonymization
capabilities, plus names that look randomized.

EXAMPLES:
    dllsift sample.exe                  # Human-readable report
    dllsift --json a.exe b.dll          # One JSON report per line
    dllsift -m 6 --config rules.json x.exe
")]
struct Cli {
    /// Files to analyze
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Minimum printable run length to extract
    #[arg(short = 'm', long)]
    min_length: Option<usize>,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output reports as JSON lines
    #[arg(long)]
    json: bool,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Analyze files regardless of extension
    #[arg(long)]
    any_extension: bool,
}

fn print_text(report: &FileReport) {
    print!("== {}", report.path.display());
    if let (Some(size), Some(sha)) = (report.size_bytes, &report.sha256) {
        print!(" ({} bytes, sha256 {})", size, sha);
    }
    println!();
    match (&report.result, &report.error) {
        (Some(result), _) => {
            println!("{}", result.analysis_summary);
            for dll in &result.potentially_suspicious_dlls {
                println!("  - {}", dll);
            }
        }
        (None, Some(err)) => println!("Error: {}", err),
        (None, None) => {}
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.json_logs {
        init_tracing_json();
    } else {
        init_tracing();
    }

    let mut config = match &cli.config {
        Some(path) => AnalyzerConfig::from_path(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => AnalyzerConfig::default(),
    };
    if let Some(min_length) = cli.min_length {
        config.strings.min_length = min_length;
    }
    let analyzer = Analyzer::new(config).context("invalid analyzer configuration")?;

    // Files are independent; reports keep command-line order.
    let reports: Vec<FileReport> = cli
        .files
        .par_iter()
        .map(|p| {
            if cli.any_extension || has_supported_extension(p) {
                analyzer.analyze_file(p)
            } else {
                let err = log_error!(AnalysisError::UnsupportedExtension(p.display().to_string()));
                FileReport::failed(p.clone(), err)
            }
        })
        .collect();

    let mut all_ok = true;
    for report in &reports {
        all_ok &= report.is_ok();
        if cli.json {
            println!(
                "{}",
                serde_json::to_string(report).context("failed to serialize report")?
            );
        } else {
            print_text(report);
        }
    }

    Ok(if all_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
