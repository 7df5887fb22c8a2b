/*!
 * Utility functions for codelist
 */

use std::path::Path;
use std::sync::Arc;

use indicatif::ProgressBar;
use once_cell::sync::Lazy;
use walkdir::WalkDir;

use crate::config::Config;
use crate::scanner::Scanner;

/// Width of the separator lines
pub const SEPARATOR_WIDTH: usize = 80;

/// Line closing each file block
pub static FILE_SEPARATOR: Lazy<String> = Lazy::new(|| "-".repeat(SEPARATOR_WIDTH));

/// Line closing each subfolder list
pub static FOLDER_SEPARATOR: Lazy<String> = Lazy::new(|| "=".repeat(SEPARATOR_WIDTH));

/// Count recognized files for progress tracking
///
/// Best effort: entries that cannot be listed are skipped here and only
/// fail the real walk.
pub fn count_files(dir: &Path, config: &Config) -> u64 {
    let scanner = Scanner::new(config.clone(), Arc::new(ProgressBar::hidden()));
    let mut count = 0;

    let walker = WalkDir::new(dir)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !scanner.should_ignore(e.path()));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!("Not counting unreadable entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_dir()
            && !entry.path().is_dir()
            && config.extensions.matches_path(entry.path())
        {
            count += 1;
        }
    }

    count
}

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}
