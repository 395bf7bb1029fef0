//! Typed errors for the conversion core.
//!
//! The core returns these instead of printing, so front ends can decide how to
//! present each failure. Application-level code (config loading, CLI commands)
//! wraps them in `anyhow` with extra context.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Failure to load an input file as a line sequence.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The input path does not exist.
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The input exists but could not be read.
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input is not valid UTF-8.
    #[error("{} is not valid UTF-8 (invalid byte at offset {offset})", path.display())]
    Decode { path: PathBuf, offset: usize },
}

impl ReadError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ReadError::NotFound { path }
            | ReadError::Io { path, .. }
            | ReadError::Decode { path, .. } => path,
        }
    }
}

/// Source and target line counts differ.
///
/// The field names avoid `source`, which thiserror reserves for the error cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error(
    "the source and target files do not have the same number of lines ({source_lines} vs {target_lines})"
)]
pub struct LengthMismatch {
    pub source_lines: usize,
    pub target_lines: usize,
}

/// The TMX output could not be written.
#[derive(Debug, Error)]
#[error("failed to write {}", path.display())]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// A language tag that is not shaped `xx` or `xx-XX`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid language code '{0}' (expected e.g. 'en' or 'en-US')")]
pub struct InvalidLanguageTag(pub String);

/// Any failure of the read, build, write pipeline.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error(transparent)]
    LengthMismatch(#[from] LengthMismatch),
    #[error(transparent)]
    Write(#[from] WriteError),
}
