/*!
 * Core types for the directory walk
 */

use std::path::{Path, PathBuf};

use crate::error::ReadError;

/// Immediate children of one visited directory.
///
/// Built fresh for every directory and dropped once its record is written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderRecord {
    /// Directory path, as joined from the root the walk started at
    pub path: PathBuf,
    /// Files whose name matches a recognized extension, in listing order
    pub files: Vec<PathBuf>,
    /// Immediate subdirectories, in listing order
    pub subfolders: Vec<PathBuf>,
    /// Subdirectories the walk descends into (symlinked ones are listed only)
    pub descend: Vec<PathBuf>,
}

impl FolderRecord {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            ..Default::default()
        }
    }
}

/// Outcome of reading one recognized file
pub type FileContent = Result<String, ReadError>;
