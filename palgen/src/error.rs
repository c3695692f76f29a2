//! Error types for `palgen`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `palgen` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An input palette file could not be opened.
    #[error("cannot open palette file {}: {source}", .path.display())]
    OpenPalette {
        /// Path of the palette file.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// A palette line did not have the expected number of fields.
    #[error("{}:{line}: expected {expected} fields, found {found}", .path.display())]
    FieldCount {
        /// Path of the palette file.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// Minimum number of fields the format requires.
        expected: usize,
        /// Number of fields actually present.
        found: usize,
    },

    /// An RGB field failed to parse as a byte value.
    #[error("{}:{line}: invalid {channel} channel value '{value}'", .path.display())]
    InvalidChannel {
        /// Path of the palette file.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// Which channel was malformed (red, green, or blue).
        channel: &'static str,
        /// The offending token.
        value: String,
    },

    /// The generated source file could not be written.
    #[error("cannot write generated file {}: {source}", .path.display())]
    WriteOutput {
        /// Destination path.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },
}

/// A specialized Result type for `palgen` operations.
pub type Result<T> = std::result::Result<T, Error>;
