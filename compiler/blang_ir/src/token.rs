//! The token record shared between the tokenizer and its consumers.

use std::fmt;

/// Classification of a scanned lexeme.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum TokenKind {
    /// Malformed input. The lexeme holds whatever was consumed.
    #[default]
    Invalid,
    Identifier,
    ReserveWord,
    /// A primitive type name such as `i32` or `bool`.
    Type,
    Integer,
    FloatingPoint,
    /// String literal. The lexeme is the decoded text without quotes.
    String,
    /// Character literal. The lexeme is the single decoded character.
    Char,
    /// Operator or punctuation from the syntax tables.
    SyntaxToken,
}

impl TokenKind {
    /// Whether tokens of this kind carry a table code.
    pub fn has_code(self) -> bool {
        matches!(
            self,
            TokenKind::ReserveWord | TokenKind::Type | TokenKind::SyntaxToken
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Invalid => "Invalid",
            TokenKind::Identifier => "Identifier",
            TokenKind::ReserveWord => "ReserveWord",
            TokenKind::Type => "Type",
            TokenKind::Integer => "Integer",
            TokenKind::FloatingPoint => "FloatingPoint",
            TokenKind::String => "String",
            TokenKind::Char => "Char",
            TokenKind::SyntaxToken => "SyntaxToken",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Line/column location of a character in the source.
///
/// Lines start at 1. Columns count characters on the current line; the
/// first character of a line is column 1.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// Position before any character has been read.
    pub const START: Position = Position { line: 1, column: 0 };

    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The most recently scanned token.
///
/// A tokenizer owns exactly one `Token` and overwrites it in place on every
/// scan, so a reference obtained before a scan is stale after it. Clone the
/// token to keep a snapshot.
///
/// # Invariant
///
/// `line` and `column` mark the first character of the lexeme. They are set
/// by [`reset`](Self::reset) before scanning begins and are not touched by
/// the `set*` methods.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Token {
    pub lexeme: String,
    pub kind: TokenKind,
    /// Table code. `Some` only for reserve words, types and syntax tokens.
    pub code: Option<u32>,
    pub line: u32,
    pub column: u32,
}

impl Token {
    /// Clear the token and stamp its start position.
    ///
    /// Keeps the lexeme allocation for reuse.
    pub fn reset(&mut self, position: Position) {
        self.lexeme.clear();
        self.kind = TokenKind::Invalid;
        self.code = None;
        self.line = position.line;
        self.column = position.column;
    }

    /// Set an uncoded token (identifiers, literals, invalid input).
    pub fn set(&mut self, lexeme: &str, kind: TokenKind) {
        self.lexeme.clear();
        self.lexeme.push_str(lexeme);
        self.kind = kind;
        self.code = None;
    }

    /// Set a token that carries a table code.
    pub fn set_coded(&mut self, lexeme: &str, kind: TokenKind, code: u32) {
        self.set(lexeme, kind);
        self.code = Some(code);
    }

    /// Start position of the lexeme.
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    #[inline]
    pub fn is_invalid(&self) -> bool {
        self.kind == TokenKind::Invalid
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.position(), self.kind)?;
        if let Some(code) = self.code {
            write!(f, " {code}")?;
        }
        write!(f, " {:?}", self.lexeme)
    }
}
