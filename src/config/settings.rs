//! Filesystem layout configuration
//!
//! The certificate roots are fixed, well-known paths on the appliance; the
//! CLI can override them, which is mainly useful for staging and tests.

use crate::manifest::ServiceDescriptor;
use std::path::{Path, PathBuf};

/// System certificate root, owned by the OS itself.
pub const CERT_BASE_PATH: &str = "/usr/syno/etc/certificate";

/// Certificate root for services installed as add-on packages.
pub const PKG_CERT_BASE_PATH: &str = "/usr/local/etc/certificate";

/// Archive subdirectory under the system certificate root.
pub const ARCHIVE_DIR_NAME: &str = "_archive";

/// Manifest filename inside the archive directory.
pub const INFO_FILE_NAME: &str = "INFO";

/// The fixed file set copied for every service, in copy order.
pub const CERT_FILES: [&str; 3] = ["cert.pem", "privkey.pem", "fullchain.pem"];

/// Resolved filesystem roots for a single run
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base path for system-managed service certificates
    pub cert_root: PathBuf,
    /// Base path for package-managed service certificates
    pub pkg_root: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cert_root: PathBuf::from(CERT_BASE_PATH),
            pkg_root: PathBuf::from(PKG_CERT_BASE_PATH),
        }
    }
}

impl Settings {
    /// Build settings from optional root overrides, falling back to the
    /// fixed appliance paths.
    pub fn with_overrides(cert_root: Option<PathBuf>, pkg_root: Option<PathBuf>) -> Self {
        let defaults = Self::default();
        Self {
            cert_root: cert_root.unwrap_or(defaults.cert_root),
            pkg_root: pkg_root.unwrap_or(defaults.pkg_root),
        }
    }

    /// The archive directory holding renewed certificate batches
    pub fn archive_dir(&self) -> PathBuf {
        self.cert_root.join(ARCHIVE_DIR_NAME)
    }

    /// Full path of the INFO manifest file
    pub fn info_path(&self) -> PathBuf {
        self.archive_dir().join(INFO_FILE_NAME)
    }

    /// Source directory for a named archive batch
    pub fn source_dir(&self, src_dir_name: &str) -> PathBuf {
        self.archive_dir().join(src_dir_name)
    }

    /// Destination directory for one service descriptor.
    ///
    /// Joining an empty `subscriber` or `service` segment collapses to the
    /// base path itself, matching the manifest's loose schema.
    pub fn dest_dir(&self, service: &ServiceDescriptor) -> PathBuf {
        let base: &Path = if service.is_pkg {
            &self.pkg_root
        } else {
            &self.cert_root
        };
        base.join(&service.subscriber).join(&service.service)
    }
}
