/*!
 * Directory walking and file reading
 */

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use glob_match::glob_match;
use indicatif::ProgressBar;
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::error::{ReadError, Result};
use crate::report::FileReportInfo;
use crate::types::{FileContent, FolderRecord};
use crate::writer::ReportWriter;

/// Scanner statistics
#[derive(Debug, Clone, Default)]
pub struct ScannerStatistics {
    /// Number of directories that received a record
    pub folders_visited: usize,
    /// Number of recognized files written
    pub files_processed: usize,
    /// Files whose content could not be read
    pub read_errors: usize,
    /// Total number of lines
    pub total_lines: usize,
    /// Total number of characters
    pub total_chars: usize,
    /// Total bytes of inlined content
    pub total_bytes: u64,
    /// Details for each file, only collected when statistics are shown
    pub file_details: HashMap<String, FileReportInfo>,
}

/// Pre-order walker that streams folder records into a [`ReportWriter`]
pub struct Scanner {
    /// Scanner configuration
    config: Config,
    /// Progress bar
    pub progress: Arc<ProgressBar>,
    /// Scanner statistics
    statistics: ScannerStatistics,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        Self {
            config,
            progress,
            statistics: ScannerStatistics::default(),
        }
    }

    /// Get scanner statistics
    pub fn get_statistics(&self) -> ScannerStatistics {
        self.statistics.clone()
    }

    /// Walk the target directory and write one record per directory
    pub fn scan<W: Write>(&mut self, writer: &mut ReportWriter<W>) -> Result<()> {
        let root = self.config.target_dir.clone();
        self.scan_directory(&root, writer)
    }

    /// Write the record for `path`, then descend into its subdirectories
    fn scan_directory<W: Write>(
        &mut self,
        path: &Path,
        writer: &mut ReportWriter<W>,
    ) -> Result<()> {
        let record = self.list_directory(path)?;
        tracing::debug!(
            "Folder {}: {} files, {} subfolders",
            record.path.display(),
            record.files.len(),
            record.subfolders.len()
        );

        writer.write_record(&record, |file| self.read_file_content(file))?;
        self.statistics.folders_visited += 1;

        for subfolder in &record.descend {
            self.scan_directory(subfolder, writer)?;
        }

        Ok(())
    }

    /// List the immediate children of a directory
    ///
    /// Listing errors are fatal. Symlinks are never descended into but a
    /// symlink to a directory is still reported as a subfolder.
    pub fn list_directory(&self, path: &Path) -> Result<FolderRecord> {
        let mut walker = WalkDir::new(path).min_depth(1).max_depth(1);
        if self.config.sorted {
            walker = walker.sort_by_file_name();
        }

        let entries: Vec<DirEntry> = walker
            .into_iter()
            .collect::<std::result::Result<Vec<_>, _>>()?
            .into_iter()
            .filter(|e| !self.should_ignore(e.path()))
            .collect();

        let mut record = FolderRecord::new(path);
        for entry in entries {
            let file_type = entry.file_type();
            let entry_path = path.join(entry.file_name());

            if file_type.is_dir() {
                record.descend.push(entry_path.clone());
                record.subfolders.push(entry_path);
            } else if file_type.is_symlink() && entry.path().is_dir() {
                record.subfolders.push(entry_path);
            } else if self.config.extensions.matches_path(&entry_path) {
                record.files.push(entry_path);
            }
        }

        Ok(record)
    }

    /// Read one recognized file and update statistics
    ///
    /// Never fails the walk: the error is handed back for inline rendering.
    pub fn read_file_content(&mut self, path: &Path) -> FileContent {
        self.progress.inc(1);

        // Truncate long names to avoid display issues
        let file_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let display_name = match file_name.char_indices().rev().nth(36) {
            Some((idx, _)) if file_name.chars().count() > 40 => {
                format!("...{}", &file_name[idx..])
            }
            _ => file_name,
        };
        self.progress
            .set_message(format!("Current file: {}", display_name));

        let file_path = path.to_string_lossy().to_string();
        self.statistics.files_processed += 1;

        let content: FileContent = fs::read(path)
            .map_err(|source| ReadError::Io {
                path: path.to_path_buf(),
                source,
            })
            .and_then(|bytes| String::from_utf8(bytes).map_err(ReadError::from));

        match &content {
            Ok(text) => {
                let info = FileReportInfo {
                    lines: text.lines().count(),
                    chars: text.chars().count(),
                };
                tracing::debug!("Included {} ({} lines)", file_path, info.lines);

                self.statistics.total_lines += info.lines;
                self.statistics.total_chars += info.chars;
                self.statistics.total_bytes += text.len() as u64;
                if self.config.show_stats {
                    self.statistics.file_details.insert(file_path, info);
                }
            }
            Err(e) => {
                tracing::warn!("Error reading file {}: {}", file_path, e);
                self.statistics.read_errors += 1;
                if self.config.show_stats {
                    self.statistics
                        .file_details
                        .insert(file_path, FileReportInfo::default());
                }
            }
        }

        content
    }

    /// Check if an entry should be skipped based on ignore patterns
    pub fn should_ignore(&self, path: &Path) -> bool {
        if self.config.ignore_patterns.is_empty() {
            return false;
        }

        let file_name = path.file_name().unwrap_or_default().to_string_lossy();
        self.config
            .ignore_patterns
            .iter()
            .any(|pattern| glob_match(pattern, &file_name))
    }
}
