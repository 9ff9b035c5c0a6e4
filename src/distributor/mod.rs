//! The certificate copy engine
//!
//! One linear pass: load the manifest, resolve the requested archive entry,
//! check the source directory, then copy the fixed file set into each
//! service's destination directory in manifest list order.
//!
//! Only the three up-front preconditions are fatal. Everything past them is
//! best-effort: directory creation and per-file copies log a warning on
//! failure, record it in the summary, and the run carries on. Exit status
//! stays 0 even when some files were left uncopied — callers that care must
//! inspect the returned [`DistributionSummary`].

use std::fs;
use tracing::{info, warn};

use crate::config::{Settings, CERT_FILES};
use crate::manifest::{self, ServiceDescriptor};
use crate::models::{DistributionSummary, FileCopy, ServiceOutcome};
use crate::utils::{DeployError, Result};

/// Copy the certificate file set for every service registered under
/// `src_dir_name` in the archive manifest.
pub fn distribute(settings: &Settings, src_dir_name: &str) -> Result<DistributionSummary> {
    let info_path = settings.info_path();
    let manifest = manifest::load(&info_path)?;
    let entry = manifest.entry(src_dir_name)?;

    let src_dir = settings.source_dir(src_dir_name);
    if !src_dir.is_dir() {
        return Err(DeployError::SourceMissing {
            path: src_dir.display().to_string(),
        });
    }

    info!(
        "distributing {} to {} service(s)",
        src_dir_name,
        entry.services.len()
    );

    let mut summary = DistributionSummary::new(src_dir_name);
    for service in &entry.services {
        summary.services.push(provision_service(settings, &src_dir, service));
    }

    Ok(summary)
}

/// Copy the file set for one service descriptor, never failing the run.
fn provision_service(
    settings: &Settings,
    src_dir: &std::path::Path,
    service: &ServiceDescriptor,
) -> ServiceOutcome {
    info!("Copying certificate for {}", service.display_name);

    let dest_dir = settings.dest_dir(service);

    // create_dir_all is idempotent; an existing directory is success.
    let dir_error = match fs::create_dir_all(&dest_dir) {
        Ok(()) => None,
        Err(e) => {
            warn!("Cannot create directory {}: {}", dest_dir.display(), e);
            Some(e.to_string())
        }
    };

    // Copy attempts proceed even after a directory failure; each file
    // failure is recorded and skipped on its own.
    let mut files = Vec::with_capacity(CERT_FILES.len());
    for file_name in CERT_FILES {
        let src = src_dir.join(file_name);
        let dest = dest_dir.join(file_name);

        let error = match fs::copy(&src, &dest) {
            Ok(_) => None,
            Err(e) => {
                warn!("Failed to copy {} to {}: {}", file_name, dest_dir.display(), e);
                Some(e.to_string())
            }
        };

        files.push(FileCopy {
            file_name: file_name.to_string(),
            dest,
            error,
        });
    }

    ServiceOutcome {
        display_name: service.display_name.clone(),
        dest_dir,
        dir_error,
        files,
    }
}
