//! Configuration module for cert-deploy
//!
//! Fixed filesystem layout constants and the per-run [`Settings`].

pub mod settings;

pub use settings::{
    Settings, ARCHIVE_DIR_NAME, CERT_BASE_PATH, CERT_FILES, INFO_FILE_NAME, PKG_CERT_BASE_PATH,
};
