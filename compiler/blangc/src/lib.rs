//! BLang compiler driver.
//!
//! The `blang` binary is a thin argument parser over [`commands`]; the
//! commands themselves write to caller-supplied sinks so they can be tested
//! without a terminal.

pub mod commands;
mod error;
mod tracing_setup;

pub use error::CliError;
pub use tracing_setup::init_tracing;
