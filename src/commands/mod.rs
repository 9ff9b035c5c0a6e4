//! Command implementations for cert-deploy

pub mod distribute;

pub use distribute::run_distribute;
