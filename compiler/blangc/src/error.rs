use std::io;
use std::path::PathBuf;

use blang_diagnostic::UnknownErrorCode;
use thiserror::Error;

/// Failures in the command-line layer. Source diagnostics are reported
/// through the emitter instead.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),

    #[error(transparent)]
    UnknownCode(#[from] UnknownErrorCode),

    #[error("invalid buffer size `{0}` (expected a positive integer)")]
    InvalidBufferSize(String),

    #[error("{0}")]
    InvalidColor(String),

    #[error("unknown option `{0}`")]
    UnknownOption(String),

    #[error("missing {0}")]
    MissingArgument(&'static str),
}
