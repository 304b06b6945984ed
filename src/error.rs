//! # Error Types
//!
//! All fatal conditions of a conversion run. Malformed chord or directive syntax is
//! never an error; it degrades to dropped or unchanged content instead.
//!
//! ## Error Types
//! - `InvalidTranspose` - `{transpose}` content that is not an integer
//! - `MissingTitle` - song content appearing before the first `{title}`
//! - `Read` / `Write` - file system failures, with the offending path
//! - `Config` - a YAML config file that does not deserialize
//! - `InFile` - wraps a source error with the input file it came from

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChoproError {
    /// Non-integer transpose offset.
    ///
    /// # Example
    /// ```
    /// # use chopro::ChoproError;
    /// let err = ChoproError::InvalidTranspose {
    ///     line: 4,
    ///     value: "up".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "Invalid transpose value at line 4: 'up' is not an integer");
    /// ```
    #[error("Invalid transpose value at line {line}: '{value}' is not an integer")]
    InvalidTranspose { line: usize, value: String },

    /// Lyrics, comments or chorus markers with no song open to receive them.
    #[error("Line {line} appears before any title directive")]
    MissingTitle { line: usize },

    #[error("Error reading '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Error writing '{}': {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Invalid config '{}': {message}", .path.display())]
    Config { path: PathBuf, message: String },

    /// A source error located in a specific input file.
    #[error("{}: {source}", .path.display())]
    InFile {
        path: PathBuf,
        source: Box<ChoproError>,
    },
}
