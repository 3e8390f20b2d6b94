// src/bin/vibelint.rs
use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use vibelint_core::analysis;
use vibelint_core::report;

/// Structural quality analysis for a single Python source file.
#[derive(Parser)]
#[command(name = "vibelint", version, about)]
struct Cli {
    /// Python source file to analyze
    file: PathBuf,

    /// Emit the raw analysis as JSON instead of the Markdown report
    #[arg(long)]
    json: bool,

    /// Write the output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e:#}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let rendered = if cli.json {
        let bundle = analysis::analyze_path(&cli.file)?;
        serde_json::to_string_pretty(&bundle)?
    } else {
        let source = fs::read_to_string(&cli.file)
            .with_context(|| format!("failed to read {}", cli.file.display()))?;
        let display = cli
            .file
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("<input>");
        report::generate_report(&source, display)
    };

    match cli.output {
        Some(path) => fs::write(&path, rendered)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{rendered}"),
    }
    Ok(())
}
