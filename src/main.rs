/*!
 * Command-line interface for codelist
 */

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use codelist::config::{Args, Config};
use codelist::error::Result;
use codelist::report::{ReportFormat, Reporter, ScanReport};
use codelist::utils::count_files;
use codelist::write_report;

const PROMPT: &str = "Enter the folder path to search: ";
const INVALID_PATH_MESSAGE: &str = "Invalid folder path. Please try again.";

fn main() -> ExitCode {
    // Parse command line arguments
    let args = Args::parse();

    // Logs go to stderr, stdout carries the prompt and notices
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("codelist=warn")),
        )
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let directory = match &args.directory_path {
        Some(path) => path.trim().to_string(),
        None => prompt_for_directory()?,
    };

    // Create configuration
    let config = Config::from_args(args, &directory);

    // An invalid folder is reported, not treated as a failure
    if !config.has_valid_target() {
        tracing::debug!("Rejected folder path {:?}", directory);
        println!("{}", INVALID_PATH_MESSAGE);
        return Ok(());
    }

    // Validate configuration
    config.validate()?;

    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ({percent}%) ⏱️  Elapsed: {elapsed_precise}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    progress.enable_steady_tick(std::time::Duration::from_millis(100));
    progress.set_prefix("📊 Setup");
    progress.set_message(format!(
        "📂 Scanning directory: {}",
        config.target_dir.display()
    ));

    // Count files for progress tracking
    let total_files = count_files(&config.target_dir, &config);

    progress.set_length(total_files);
    progress.set_prefix("📊 Processing");
    progress.set_message("Starting scan...");

    let start_time = Instant::now();
    let result = write_report(&config, Arc::new(progress.clone()));
    let duration = start_time.elapsed();

    // Clear the progress bar before anything reaches the terminal
    progress.finish_and_clear();
    let statistics = result?;

    println!("{}", Reporter::completion_notice(&config.output_file));

    if config.show_stats {
        let scan_report = ScanReport::new(&config.output_file, duration, statistics);
        Reporter::new(ReportFormat::ConsoleTable).print_report(&scan_report);
    }

    Ok(())
}

/// Ask for the folder on stdin and return the trimmed answer
fn prompt_for_directory() -> io::Result<String> {
    print!("{}", PROMPT);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    Ok(line.trim().to_string())
}
