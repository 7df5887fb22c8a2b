/*!
 * codelist - Write a plain-text report of a directory tree
 *
 * Every folder under the root gets a record listing its recognized source
 * files with their full content, followed by its immediate subfolders.
 */

pub mod config;
pub mod error;
pub mod extensions;
pub mod report;
pub mod scanner;
pub mod types;
pub mod utils;
pub mod writer;


use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::sync::Arc;

use indicatif::ProgressBar;

// Re-export main components for easier access
pub use config::Config;
pub use error::{CodeListError, ReadError, Result};
pub use extensions::ExtensionSet;
pub use report::{FileReportInfo, ReportFormat, Reporter, ScanReport};
pub use scanner::{Scanner, ScannerStatistics};
pub use types::{FileContent, FolderRecord};
pub use utils::{count_files, format_file_size};
pub use writer::ReportWriter;

use error::ResultExt;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Write the report for `root_path` into `output_path` and print the
/// completion notice.
///
/// `root_path` is expected to be an existing directory; checking that is up
/// to the caller.
pub fn generate_report(
    root_path: &Path,
    output_path: &Path,
    recognized_extensions: &ExtensionSet,
) -> Result<ScannerStatistics> {
    let config =
        Config::new(root_path, output_path).with_extensions(recognized_extensions.clone());
    let statistics = write_report(&config, Arc::new(ProgressBar::hidden()))?;

    println!("{}", Reporter::completion_notice(output_path));

    Ok(statistics)
}

/// Walk `config.target_dir` and write the report to `config.output_file`
///
/// The output file is truncated, held open for the whole walk and closed
/// before returning.
pub fn write_report(config: &Config, progress: Arc<ProgressBar>) -> Result<ScannerStatistics> {
    let file = File::create(&config.output_file).with_context(|| {
        format!(
            "Failed to create output file {}",
            config.output_file.display()
        )
    })?;
    let mut writer = ReportWriter::new(BufWriter::new(file));

    let mut scanner = Scanner::new(config.clone(), progress);
    scanner.scan(&mut writer)?;

    // Dropping the flushed writer closes the file
    writer.finish()?;

    let statistics = scanner.get_statistics();
    tracing::info!(
        "Wrote {} folders and {} files to {} ({} read errors)",
        statistics.folders_visited,
        statistics.files_processed,
        config.output_file.display(),
        statistics.read_errors
    );

    Ok(statistics)
}
