/*!
 * Configuration handling for codelist
 */

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::ensure;
use crate::error::Result;
use crate::extensions::ExtensionSet;

/// Output file used when none is given
pub const DEFAULT_OUTPUT_FILE: &str = "code_files.txt";

/// Command-line arguments for codelist
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "codelist",
    version = env!("CARGO_PKG_VERSION"),
    about = "Write a plain-text report of a directory tree with the contents of its source files",
    long_about = "Walks a directory tree and writes every folder, its recognized source files with their full content, and its subfolders to a single text report. Prompts for the folder when none is given."
)]
pub struct Args {
    /// Directory to report on (prompted for on stdin when omitted)
    pub directory_path: Option<String>,

    /// Output report file name
    #[clap(default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: String,

    /// Comma-separated list of glob patterns for entry names to skip
    #[clap(long, value_delimiter = ',')]
    pub ignore_patterns: Vec<String>,

    /// Sort each directory listing by name instead of filesystem order
    #[clap(long)]
    pub sorted: bool,

    /// Print a statistics table after the report is written
    #[clap(long)]
    pub stats: bool,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Root directory of the walk
    pub target_dir: PathBuf,

    /// Report file path
    pub output_file: PathBuf,

    /// Suffixes of files whose content is inlined
    pub extensions: ExtensionSet,

    /// Patterns to ignore
    pub ignore_patterns: Vec<String>,

    /// Sort directory listings by file name
    pub sorted: bool,

    /// Print statistics after the run
    pub show_stats: bool,
}

impl Config {
    /// Configuration with the default extension set and no filtering
    pub fn new(target_dir: impl AsRef<Path>, output_file: impl AsRef<Path>) -> Self {
        Self {
            target_dir: target_dir.as_ref().to_path_buf(),
            output_file: output_file.as_ref().to_path_buf(),
            extensions: ExtensionSet::default(),
            ignore_patterns: Vec::new(),
            sorted: false,
            show_stats: false,
        }
    }

    pub fn with_extensions(mut self, extensions: ExtensionSet) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn with_ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns;
        self
    }

    pub fn with_sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    pub fn with_stats(mut self, show_stats: bool) -> Self {
        self.show_stats = show_stats;
        self
    }

    /// Create configuration from command-line arguments and the resolved
    /// target directory
    ///
    /// The directory is passed separately because it may come from the
    /// interactive prompt rather than `args`.
    pub fn from_args(args: Args, target_dir: impl AsRef<Path>) -> Self {
        Self::new(target_dir, args.output_file)
            .with_ignore_patterns(args.ignore_patterns)
            .with_sorted(args.sorted)
            .with_stats(args.stats)
    }

    /// Whether the target is an existing directory
    pub fn has_valid_target(&self) -> bool {
        self.target_dir.is_dir()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.has_valid_target(),
            InvalidPath,
            "Target directory not found: {}",
            self.target_dir.display()
        );

        // Check if output file directory exists
        if let Some(parent) = self.output_file.parent() {
            ensure!(
                parent.as_os_str().is_empty() || parent.is_dir(),
                Config,
                "Output directory not found: {}",
                parent.display()
            );
        }

        Ok(())
    }
}
