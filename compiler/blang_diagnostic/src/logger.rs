//! Append-only collection of diagnostics for one compilation.

use crate::{Diagnostic, Severity};

/// Records diagnostics in the order they were reported.
///
/// Entries are never removed or reordered; the tokenizer and (later) the
/// parser share one logger through the parser context.
#[derive(Clone, Default, Debug)]
pub struct ErrorLogger {
    diagnostics: Vec<Diagnostic>,
}

impl ErrorLogger {
    pub fn new() -> Self {
        ErrorLogger::default()
    }

    /// Append a diagnostic.
    pub fn log(&mut self, diagnostic: Diagnostic) {
        tracing::debug!(
            code = diagnostic.code(),
            line = diagnostic.position.line,
            column = diagnostic.position.column,
            "{}",
            diagnostic.message
        );
        self.diagnostics.push(diagnostic);
    }

    /// Number of diagnostics logged so far.
    #[inline]
    pub fn count(&self) -> usize {
        self.diagnostics.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    /// Most recently logged diagnostic.
    pub fn last(&self) -> Option<&Diagnostic> {
        self.diagnostics.last()
    }

    /// Errors and critical errors.
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    pub fn has_critical(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_critical)
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl<'a> IntoIterator for &'a ErrorLogger {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
