//! API Module
//!
//! Command layer used by the `student-insight` binary.
//!
//! - `commands.rs`: run / export / render commands

pub mod commands;

pub use commands::*;
