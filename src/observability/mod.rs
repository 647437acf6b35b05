//! Structured logging to a rotating JSON log file.
//!
//! `tracing` spans and events from every layer are filtered through an
//! `EnvFilter` and written as JSON lines by a `tracing-subscriber` fmt layer.
//!
//! # Features
//!
//! - **File Output**: `multiverse-catalog.log` next to the state file
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//! - **JSON Lines**: One event per line, with the enclosing span fields
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::init_tracing;
