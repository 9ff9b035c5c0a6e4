//! Copy outcome types
//!
//! Best-effort failures are data, not errors: every directory creation and
//! file copy attempt is recorded here, and the summary is what makes
//! "succeeded with warnings" observable to callers and tests.

use serde::Serialize;
use std::path::PathBuf;

/// Status of a single copy attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CopyStatus {
    Copied,
    Failed,
}

impl CopyStatus {
    /// Get the icon for this status
    pub fn icon(&self) -> &'static str {
        match self {
            CopyStatus::Copied => "✓",
            CopyStatus::Failed => "⚠",
        }
    }
}

/// Result of copying one certificate file to one destination
#[derive(Debug, Clone, Serialize)]
pub struct FileCopy {
    /// Certificate filename (e.g. `cert.pem`)
    pub file_name: String,
    /// Full destination path of the attempted copy
    pub dest: PathBuf,
    /// Failure message, if the copy did not succeed
    pub error: Option<String>,
}

impl FileCopy {
    pub fn status(&self) -> CopyStatus {
        if self.error.is_none() {
            CopyStatus::Copied
        } else {
            CopyStatus::Failed
        }
    }
}

/// Everything that happened while provisioning one service
#[derive(Debug, Clone, Serialize)]
pub struct ServiceOutcome {
    /// Label from the manifest, possibly empty
    pub display_name: String,
    /// Resolved destination directory
    pub dest_dir: PathBuf,
    /// Failure message from directory creation, if any
    pub dir_error: Option<String>,
    /// Per-file copy results, in the fixed file-set order
    pub files: Vec<FileCopy>,
}

/// Summary of a whole distribution run
#[derive(Debug, Clone, Serialize)]
pub struct DistributionSummary {
    /// The archive source directory name that was distributed
    pub src_dir_name: String,
    /// Per-service outcomes, in manifest list order
    pub services: Vec<ServiceOutcome>,
}

impl DistributionSummary {
    pub fn new(src_dir_name: impl Into<String>) -> Self {
        Self {
            src_dir_name: src_dir_name.into(),
            services: Vec::new(),
        }
    }

    /// Total number of file copies attempted
    pub fn attempted(&self) -> usize {
        self.services.iter().map(|s| s.files.len()).sum()
    }

    /// Number of file copies that succeeded
    pub fn copied(&self) -> usize {
        self.services
            .iter()
            .flat_map(|s| &s.files)
            .filter(|f| f.error.is_none())
            .count()
    }

    /// Number of file copies that failed
    pub fn failed(&self) -> usize {
        self.attempted() - self.copied()
    }

    /// True when any directory creation or file copy failed
    pub fn has_warnings(&self) -> bool {
        self.failed() > 0 || self.services.iter().any(|s| s.dir_error.is_some())
    }
}
