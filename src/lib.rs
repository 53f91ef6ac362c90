//! taskscribe - extract actionable tasks from meeting transcripts
//!
//! This library provides the transcript parser (sentence splitting,
//! assignment extraction, priority classification), the in-memory task
//! board, and the output and configuration layers used by the CLI.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod models;
pub mod output;
pub mod parser;
pub mod paths;
pub mod session;
pub mod storage;
