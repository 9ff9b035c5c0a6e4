//! Archive INFO manifest
//!
//! Types and loader for the JSON document that maps archive source
//! directory names to service descriptors.

pub mod loader;
pub mod types;

pub use loader::{load, Manifest};
pub use types::{ArchiveEntry, ServiceDescriptor};
