//! cfgaudit core library.
//!
//! This crate exposes programmatic APIs for scanning directory trees for
//! well-known server configuration files and flagging lines that contain
//! insecure settings.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Config file discovery and effective settings resolution.
//! - `error`: Non-fatal `ScanError` values returned next to partial results.
//! - `ignore`: Ignore list loading and line suppression.
//! - `models`: `Finding`, `Severity`, and the static rule catalog.
//! - `output`: Text/JSON printers for findings and diagnostics.
//! - `scan`: File scanner, directory walker, and the parallel orchestrator.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod error;
pub mod ignore;
pub mod models;
pub mod output;
pub mod scan;
pub mod utils;
