//! Command handlers for the `blang` CLI.
//!
//! Each submodule implements one command. Handlers return `Result` and
//! leave exit codes to `main`.

mod docs;
mod explain;
mod lex;

pub use docs::{render_documentation, write_documentation, DEFAULT_DOCS_PATH};
pub use explain::explain_error;
pub use lex::{lex_file, lex_source, LexOptions, LexReport};
