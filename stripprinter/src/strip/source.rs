//! Printer-side payload resolution.
//!
//! The printing tool accepts a strip three ways: a UTF-8 file written by the
//! dispatcher, literal text on the command line, or the built-in test strip.

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use super::test_strip;

/// Where a printer invocation gets its payload from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadSource {
    /// `--file <path>`
    File(PathBuf),
    /// `--text <payload>`
    Text(String),
    /// `--test`
    Test,
}

/// Payload resolution errors.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// No source given, or the payload is blank.
    #[error("No payload provided. Use --test, --file <path>, or --text \"...\"")]
    Empty,

    /// The payload file could not be read.
    #[error("Failed to read payload file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PayloadError {
    /// Process exit code used by the printing tool.
    pub fn exit_code(&self) -> i32 {
        match self {
            PayloadError::Empty => 2,
            PayloadError::Read { .. } => 1,
        }
    }
}

impl PayloadSource {
    /// Pick the source named last on the command line.
    ///
    /// `flags` pairs each given flag with its argument position. Later flags
    /// override earlier ones, so `--test --file x` prints the file.
    pub fn last_given<I>(flags: I) -> Option<Self>
    where
        I: IntoIterator<Item = (usize, PayloadSource)>,
    {
        flags
            .into_iter()
            .max_by_key(|(position, _)| *position)
            .map(|(_, source)| source)
    }

    /// Load the payload, rejecting blank results.
    pub fn resolve(&self) -> Result<String, PayloadError> {
        let payload = match self {
            PayloadSource::File(path) => {
                fs::read_to_string(path).map_err(|source| PayloadError::Read {
                    path: path.clone(),
                    source,
                })?
            }
            PayloadSource::Text(text) => text.clone(),
            PayloadSource::Test => test_strip(),
        };

        if payload.trim().is_empty() {
            return Err(PayloadError::Empty);
        }
        Ok(payload)
    }

    /// Resolve an optional source, treating `None` as an empty payload.
    pub fn resolve_optional(source: Option<&Self>) -> Result<String, PayloadError> {
        source.ok_or(PayloadError::Empty)?.resolve()
    }
}
