//! Command implementations for the vulnsweep CLI
//!
//! Each command is organized into its own module.

pub mod config;
pub mod scan;
pub mod tools;
pub mod version;
