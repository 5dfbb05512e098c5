//! The `docs` command: write the error and escape-sequence reference.

use std::fs;
use std::path::{Path, PathBuf};

use blang_diagnostic::ErrorDocs;
use blang_lexer::escape;

use crate::CliError;

pub const DEFAULT_DOCS_PATH: &str = "documentation.txt";

/// The full reference text: every error code, then the escape table.
pub fn render_documentation() -> String {
    let mut text = String::new();
    // Writing into a String cannot fail.
    let _ = ErrorDocs::write_all(&mut text);
    text.push('\n');
    let _ = escape::write_documentation(&mut text);
    text
}

/// Write the reference to `path` (or [`DEFAULT_DOCS_PATH`]) and return
/// where it went.
pub fn write_documentation(path: Option<&Path>) -> Result<PathBuf, CliError> {
    let path = path.map_or_else(|| PathBuf::from(DEFAULT_DOCS_PATH), Path::to_path_buf);
    fs::write(&path, render_documentation()).map_err(|source| CliError::Write {
        path: path.clone(),
        source,
    })?;
    tracing::info!(path = %path.display(), "wrote documentation");
    Ok(path)
}
