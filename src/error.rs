//! Error taxonomy for the install pipeline.
//!
//! Each variant carries enough context (file name, stage) to log a
//! per-source failure meaningfully. Acquisition and container errors
//! are fatal for one source; font errors are per-entry skips; install
//! errors are fatal for one font.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong between a source reference and an
/// installed font file.
#[derive(Error, Debug)]
pub enum InstallError {
    // Acquisition errors
    #[error("unsupported scheme \"{scheme}\" in source {reference}")]
    UnsupportedScheme { scheme: String, reference: String },

    #[error("failed to read {path}: {source}")]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("download of {url} failed: {message}")]
    Download { url: String, message: String },

    // Container errors
    #[error("cannot open {kind} archive {file_name}: {message}")]
    Archive {
        kind: &'static str,
        file_name: String,
        message: String,
    },

    // Per-entry font errors
    #[error("{file_name} is not a font: {reason}")]
    NotAFont { file_name: String, reason: String },

    // Installation errors
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to register font \"{name}\": {message}")]
    Registry { name: String, message: String },

    #[error("rollback of {path} failed after a registry error: {source}")]
    Rollback {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
