//! Dispatch error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a strip did not reach the printing tool.
///
/// Only [`TempFileDispatcher::try_dispatch`](super::TempFileDispatcher::try_dispatch)
/// returns these; [`PrintDispatcher::dispatch`](super::PrintDispatcher::dispatch)
/// absorbs them.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The temp directory could not be resolved to an absolute path.
    #[error("Failed to resolve temp directory {path}: {source}")]
    TempDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The payload file could not be created.
    #[error("Failed to create payload file in {dir}: {source}")]
    CreateTempFile {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The payload could not be written.
    #[error("Failed to write payload file: {0}")]
    Write(#[source] io::Error),

    /// The payload file could not be detached from automatic cleanup.
    #[error("Failed to keep payload file: {0}")]
    Persist(#[source] io::Error),

    /// The printing tool could not be started.
    #[error("Failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}
