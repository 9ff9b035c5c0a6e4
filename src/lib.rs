//! cert-deploy library
//!
//! Certificate distribution after a renewal event:
//! - Loads the archive INFO manifest and resolves one source directory name
//! - Copies the fixed certificate file set into each service's directory
//! - Records every directory-creation and copy attempt as an outcome value
//!
//! The binary in `main.rs` is a thin wrapper over [`commands::run_distribute`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod distributor;
pub mod manifest;
pub mod models;
pub mod output;
pub mod utils;

// Re-export commonly used types
pub use cli::Cli;
pub use config::{Settings, CERT_FILES};
pub use manifest::{ArchiveEntry, Manifest, ServiceDescriptor};
pub use models::{CopyStatus, DistributionSummary, FileCopy, ServiceOutcome};
pub use utils::{DeployError, ManifestError, Result};
