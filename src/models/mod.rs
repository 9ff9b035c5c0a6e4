//! Data models for cert-deploy

pub mod outcome;

pub use outcome::{CopyStatus, DistributionSummary, FileCopy, ServiceOutcome};
