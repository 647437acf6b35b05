//! Infrastructure layer for filesystem and environment interactions.
//!
//! Resolves where the crate keeps its state file and logs on the current
//! platform.

pub mod paths;

pub use paths::{default_data_dir, default_storage_path, log_path};
