use std::fmt;

use blang_ir::{Position, SyntaxToken, Token};

use crate::ParseErrorKind;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Severity {
    Warning,
    Error,
    /// Scanning cannot meaningfully continue.
    CriticalError,
}

impl Severity {
    /// Whether this severity counts as an error (including critical ones).
    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Severity::Error | Severity::CriticalError)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
            Severity::CriticalError => write!(f, "critical error"),
        }
    }
}

/// One reported problem, positioned at the start of the offending token.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be logged or returned, not silently dropped"]
pub struct Diagnostic {
    pub kind: ParseErrorKind,
    pub severity: Severity,
    pub message: String,
    pub position: Position,
    /// The syntax token that should have been present (`MissingSyntaxToken`).
    pub expected: Option<SyntaxToken>,
    /// Additional notes providing context.
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Build the diagnostic for `kind` at `token`'s start position.
    ///
    /// `expected` is only kept for [`ParseErrorKind::MissingSyntaxToken`].
    pub fn create(kind: ParseErrorKind, token: &Token, expected: Option<SyntaxToken>) -> Self {
        let lexeme = token.lexeme.as_str();
        let title = kind.title();
        let mut expected_hint = None;
        let message = match kind {
            ParseErrorKind::UnexpectedCharacter
            | ParseErrorKind::InvalidRealLiteral
            | ParseErrorKind::InvalidNumberLiteral
            | ParseErrorKind::UnexpectedToken
            | ParseErrorKind::UnexpectedTokenAtFileLevel => format!("{title} `{lexeme}`"),

            ParseErrorKind::MissingSyntaxToken => {
                expected_hint = expected;
                match expected {
                    Some(syntax) => format!("{title}: expected `{syntax}`"),
                    None => title.to_string(),
                }
            }

            ParseErrorKind::TooManyCharactersInCharLiteral
            | ParseErrorKind::EmptyCharLiteral
            | ParseErrorKind::UnrecognizedEscapeSequence
            | ParseErrorKind::NewLineInStringLiteral
            | ParseErrorKind::NewLineInCharLiteral
            | ParseErrorKind::InvalidCharLiteral
            | ParseErrorKind::SourceReadFailure
            | ParseErrorKind::MissingIdentifier
            | ParseErrorKind::MissingTypeSpecifier
            | ParseErrorKind::MissingInitializer
            | ParseErrorKind::MissingSemicolon
            | ParseErrorKind::MissingExpression
            | ParseErrorKind::ExpectedFunctionBody
            | ParseErrorKind::InvalidForLoopStatement
            | ParseErrorKind::NoElseOnIfExpression => title.to_string(),
        };

        Diagnostic {
            kind,
            severity: kind.default_severity(),
            message,
            position: token.position(),
            expected: expected_hint,
            notes: Vec::new(),
        }
    }

    /// Add a note providing additional context.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Override the kind's default severity.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    #[inline]
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.severity.is_error()
    }

    #[inline]
    pub fn is_critical(&self) -> bool {
        self.severity == Severity::CriticalError
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.kind.code(),
            self.position,
            self.severity,
            self.message
        )?;

        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }

        Ok(())
    }
}
