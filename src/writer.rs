/*!
 * Plain-text report writer for codelist
 */

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::types::{FileContent, FolderRecord};
use crate::utils::{FILE_SEPARATOR, FOLDER_SEPARATOR};

/// Writes folder records in the report layout
pub struct ReportWriter<W: Write> {
    inner: W,
}

impl<W: Write> ReportWriter<W> {
    /// Create a new report writer over any byte sink
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Write a complete record, taking each file's content from `read`
    ///
    /// Files are read one at a time, in record order, right before their
    /// block is written.
    pub fn write_record<F>(&mut self, record: &FolderRecord, mut read: F) -> io::Result<()>
    where
        F: FnMut(&Path) -> FileContent,
    {
        self.write_folder_header(&record.path)?;

        for file in &record.files {
            let content = read(file);
            self.write_file(file, &content)?;
        }

        self.write_subfolders(&record.subfolders)
    }

    /// Write the `Folder:` line and the blank line after it
    pub fn write_folder_header(&mut self, path: &Path) -> io::Result<()> {
        writeln!(self.inner, "Folder: {}", path.display())?;
        writeln!(self.inner)
    }

    /// Write one file block: header, content or inline error, separator
    pub fn write_file(&mut self, path: &Path, content: &FileContent) -> io::Result<()> {
        writeln!(self.inner, "File: {}", path.display())?;
        writeln!(self.inner, "Content:")?;

        match content {
            Ok(text) => {
                self.inner.write_all(text.as_bytes())?;
                writeln!(self.inner)?;
            }
            Err(e) => writeln!(self.inner, "Error reading file: {}", e)?,
        }

        write!(self.inner, "\n{}\n", FILE_SEPARATOR.as_str())
    }

    /// Write the subfolder list; nothing at all when there are none
    pub fn write_subfolders(&mut self, subfolders: &[PathBuf]) -> io::Result<()> {
        if subfolders.is_empty() {
            return Ok(());
        }

        writeln!(self.inner, "Subfolders:")?;
        for subfolder in subfolders {
            writeln!(self.inner, "- {}", subfolder.display())?;
        }

        write!(self.inner, "\n{}\n", FOLDER_SEPARATOR.as_str())
    }

    /// Flush and hand back the underlying sink
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}
