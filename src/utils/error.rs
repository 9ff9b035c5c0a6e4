//! Custom error types for cert-deploy
//!
//! Only fatal conditions are modeled as errors: a bad manifest, a bad lookup,
//! or a missing source directory. Per-file copy failures are not errors at
//! all — they are recorded as outcome values (see [`crate::models`]) and the
//! run continues.

use thiserror::Error;

/// Top-level error type for the cert-deploy application
#[derive(Error, Debug)]
pub enum DeployError {
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    #[error("Source certificate directory not found: {path}")]
    SourceMissing { path: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while loading or querying the archive INFO manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read manifest {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse manifest {path}: {message}")]
    Parse { path: String, message: String },

    #[error("No archive entry named '{name}' in manifest")]
    UnknownSource { name: String },

    #[error("Malformed archive entry '{name}': {message}")]
    MalformedEntry { name: String, message: String },
}

pub type Result<T> = std::result::Result<T, DeployError>;
