//! Data models for taskscribe
//!
//! Core abstractions:
//! - `ParsedTask`: "Name should do X by Y", as read from a transcript sentence
//! - `Task`: a parsed or manual task accepted onto the board
//! - `Priority`: P1 (high) to P3 (normal)

/// Task and priority types
pub mod task;

pub use task::{ParsedTask, Priority, Task};
