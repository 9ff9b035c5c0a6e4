//! Utility modules for cert-deploy
//!
//! This module contains the error types shared across the application.

pub mod error;

pub use error::{DeployError, ManifestError, Result};
