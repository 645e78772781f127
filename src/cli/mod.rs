//! Command-line interface for tabq
//!
//! Argument surface: one required `--file` plus the three optional
//! expression flags `--where`, `--order-by`, `--aggregate`, and output
//! switches. `run()` wires reader, pipeline, and renderer together.

mod args;
mod commands;
mod errors;

pub use args::Cli;
pub use commands::{execute, run};
pub use errors::{CliError, CliResult};
