//! Global error handling for codelist
//!
//! Fatal errors abort the run through [`CodeListError`]. Per-file read
//! failures are [`ReadError`]s and are rendered inline in the report instead.

use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Global error type for codelist operations
#[derive(Error, Debug)]
pub enum CodeListError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Directory listing errors during the walk
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Target path is missing or not a directory
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Unexpected error
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Specialized Result type for codelist operations
pub type Result<T> = std::result::Result<T, CodeListError>;

/// Failure to read a single source file
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("{source}: '{}'", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("stream did not contain valid UTF-8: {0}")]
    Decode(#[from] FromUtf8Error),
}

/// Creates a CodeListError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::CodeListError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

/// Extension trait for adding context to errors
pub trait ResultExt<T, E> {
    /// Add additional context to an error
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display;
}

impl<T, E: std::error::Error + 'static> ResultExt<T, E> for std::result::Result<T, E> {
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display,
    {
        self.map_err(|e| {
            let context = f();
            CodeListError::Unexpected(format!("{}: {}", context, e))
        })
    }
}
