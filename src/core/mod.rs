//! Core application functionality
//!
//! Command line parsing and the install pipeline orchestration.

pub mod app;
pub mod cli;

pub use cli::CliArgs;
