//! Per-token scanning.
//!
//! A [`Scanner`] is assembled for one call from disjoint borrows of the
//! tokenizer's state, scans exactly one token (or finds end of input), and is
//! dropped. All resumption state lives in the [`CharSource`].
//!
//! Every malformed lexeme logs exactly one diagnostic and is emitted as an
//! [`TokenKind::Invalid`] token. The scan always consumes at least one
//! character before returning a token, so repeated calls make progress.

use std::io::Read;

use blang_diagnostic::{Diagnostic, ErrorLogger, ParseErrorKind};
use blang_ir::{OneCharSyntaxToken, ThreeCharSyntaxToken, Token, TokenKind, TwoCharSyntaxToken};
use blang_lexer_core::{CharSource, SourceError};

use crate::escape::resolve_escape;
use crate::lookup::LexemeLookup;
use crate::ScanOutcome;

type ScanResult = Result<ScanOutcome, SourceError>;

/// How a skipped literal ended.
enum LiteralEnd {
    /// Closing quote found and consumed.
    Closed,
    /// Line ended first; the newline is left in place.
    Newline,
    /// Input ended first.
    End,
}

pub(crate) struct Scanner<'a, R> {
    pub(crate) source: &'a mut CharSource<R>,
    pub(crate) token: &'a mut Token,
    pub(crate) reserve_words: &'a dyn LexemeLookup,
    pub(crate) primitive_types: &'a dyn LexemeLookup,
    pub(crate) logger: &'a mut ErrorLogger,
    /// Reused lexeme buffer.
    pub(crate) lexeme: &'a mut String,
}

impl<R: Read> Scanner<'_, R> {
    pub(crate) fn scan(&mut self) -> ScanResult {
        self.skip_trivia()?;
        if self.source.is_eof() {
            return Ok(ScanOutcome::Exhausted);
        }

        self.token.reset(self.source.position());
        self.lexeme.clear();

        let c = self.source.current();
        if c.is_alphabetic() || c == '_' {
            return self.identifier();
        }
        if c.is_ascii_digit() {
            return self.number();
        }
        match c {
            '-' if self.source.peek()?.is_ascii_digit() => self.number(),
            '.' if self.source.peek()?.is_ascii_digit() => self.leading_dot_real(),
            '"' => self.string(),
            '\'' => self.char_literal(),
            _ => self.operator(),
        }
    }

    /// Skip whitespace and `//` comments until something else (or the end)
    /// is current.
    fn skip_trivia(&mut self) -> Result<(), SourceError> {
        loop {
            while self.source.current().is_whitespace() {
                self.source.advance()?;
            }
            if self.source.current() != '/' || self.source.peek()? != '/' {
                return Ok(());
            }
            while !self.source.is_eof() && self.source.current() != '\n' {
                self.source.advance()?;
            }
        }
    }

    /// Append the current character to the lexeme and move past it.
    #[inline]
    fn bump(&mut self) -> Result<(), SourceError> {
        self.lexeme.push(self.source.current());
        self.source.advance()?;
        Ok(())
    }

    fn emit(&mut self, kind: TokenKind) -> ScanOutcome {
        self.token.set(self.lexeme.as_str(), kind);
        self.trace();
        ScanOutcome::Token
    }

    fn emit_coded(&mut self, kind: TokenKind, code: u32) -> ScanOutcome {
        self.token.set_coded(self.lexeme.as_str(), kind, code);
        self.trace();
        ScanOutcome::Token
    }

    fn trace(&self) {
        tracing::trace!(
            line = self.token.line,
            column = self.token.column,
            kind = %self.token.kind,
            lexeme = %self.token.lexeme,
            "token"
        );
    }

    /// Emit the consumed text as an invalid token and log `kind` against it.
    fn recover(&mut self, kind: ParseErrorKind) -> ScanOutcome {
        self.token.set(self.lexeme.as_str(), TokenKind::Invalid);
        let diagnostic = Diagnostic::create(kind, self.token, None);
        self.logger.log(diagnostic.clone());
        ScanOutcome::Recovered(diagnostic)
    }

    // === Words ===

    fn identifier(&mut self) -> ScanResult {
        while is_ident_continue(self.source.current()) {
            self.bump()?;
        }

        if let Some(code) = self.reserve_words.lookup(self.lexeme.as_str()) {
            return Ok(self.emit_coded(TokenKind::ReserveWord, code));
        }
        if let Some(code) = self.primitive_types.lookup(self.lexeme.as_str()) {
            return Ok(self.emit_coded(TokenKind::Type, code));
        }
        Ok(self.emit(TokenKind::Identifier))
    }

    // === Numbers ===

    /// Consume digits of `radix`, returning how many there were.
    fn digits(&mut self, radix: u32) -> Result<usize, SourceError> {
        let mut count = 0;
        while self.source.current().is_digit(radix) {
            self.bump()?;
            count += 1;
        }
        Ok(count)
    }

    fn number(&mut self) -> ScanResult {
        if self.source.current() == '-' {
            self.bump()?;
        }

        if self.source.current() == '0' {
            let radix = match self.source.peek()? {
                'b' => Some(2),
                'o' => Some(8),
                'x' => Some(16),
                _ => None,
            };
            if let Some(radix) = radix {
                self.bump()?;
                self.bump()?;
                if self.digits(radix)? == 0 {
                    return Ok(self.recover(ParseErrorKind::InvalidNumberLiteral));
                }
                return Ok(self.emit(TokenKind::Integer));
            }
        }

        if self.digits(10)? == 0 {
            return Ok(self.recover(ParseErrorKind::InvalidNumberLiteral));
        }

        let mut kind = TokenKind::Integer;
        if self.source.current() == '.' {
            self.bump()?;
            if self.digits(10)? == 0 {
                return Ok(self.recover(ParseErrorKind::InvalidRealLiteral));
            }
            kind = TokenKind::FloatingPoint;
        }
        if matches!(self.source.current(), 'e' | 'E') {
            if !self.exponent()? {
                return Ok(self.recover(ParseErrorKind::InvalidRealLiteral));
            }
            kind = TokenKind::FloatingPoint;
        }
        Ok(self.emit(kind))
    }

    /// Consume `e`/`E`, an optional `-` and the exponent digits. Returns
    /// whether any digits were present.
    fn exponent(&mut self) -> Result<bool, SourceError> {
        self.bump()?;
        if self.source.current() == '-' {
            self.bump()?;
        }
        Ok(self.digits(10)? > 0)
    }

    /// `.5`, `.01e3`: a real with no digit before the point.
    fn leading_dot_real(&mut self) -> ScanResult {
        self.bump()?;
        self.digits(10)?;
        if matches!(self.source.current(), 'e' | 'E') {
            self.exponent()?;
        }
        Ok(self.recover(ParseErrorKind::InvalidRealLiteral))
    }

    // === Text literals ===

    fn string(&mut self) -> ScanResult {
        // The lexeme keeps the opening quote so invalid strings read as
        // written; it is stripped on success.
        self.bump()?;
        loop {
            if self.source.is_eof() || self.source.current() == '\n' {
                return Ok(self.recover(ParseErrorKind::NewLineInStringLiteral));
            }
            match self.source.current() {
                '"' => {
                    self.source.advance()?;
                    break;
                }
                '\\' => {
                    self.source.advance()?;
                    if self.source.is_eof() {
                        self.lexeme.push('\\');
                        return Ok(self.recover(ParseErrorKind::NewLineInStringLiteral));
                    }
                    if let Some(decoded) = resolve_escape(self.source.current()) {
                        self.lexeme.push(decoded);
                        self.source.advance()?;
                    } else {
                        self.lexeme.push('\\');
                        self.skip_literal('"')?;
                        return Ok(self.recover(ParseErrorKind::UnrecognizedEscapeSequence));
                    }
                }
                c => {
                    self.lexeme.push(c);
                    self.source.advance()?;
                }
            }
        }

        self.token.set(&self.lexeme[1..], TokenKind::String);
        self.trace();
        Ok(ScanOutcome::Token)
    }

    fn char_literal(&mut self) -> ScanResult {
        self.bump()?;
        if self.source.is_eof() {
            return Ok(self.recover(ParseErrorKind::InvalidCharLiteral));
        }

        let value = match self.source.current() {
            '\n' => return Ok(self.recover(ParseErrorKind::NewLineInCharLiteral)),
            '\'' => {
                self.bump()?;
                return Ok(self.recover(ParseErrorKind::EmptyCharLiteral));
            }
            '\\' => {
                self.bump()?;
                if self.source.is_eof() {
                    return Ok(self.recover(ParseErrorKind::InvalidCharLiteral));
                }
                match resolve_escape(self.source.current()) {
                    Some(decoded) => {
                        self.bump()?;
                        decoded
                    }
                    None => {
                        self.skip_literal('\'')?;
                        return Ok(self.recover(ParseErrorKind::UnrecognizedEscapeSequence));
                    }
                }
            }
            c => {
                self.bump()?;
                c
            }
        };

        if self.source.current() == '\'' {
            self.source.advance()?;
            self.lexeme.clear();
            self.lexeme.push(value);
            return Ok(self.emit(TokenKind::Char));
        }

        let kind = match self.skip_literal('\'')? {
            LiteralEnd::Closed => ParseErrorKind::TooManyCharactersInCharLiteral,
            LiteralEnd::Newline => ParseErrorKind::NewLineInCharLiteral,
            LiteralEnd::End => ParseErrorKind::InvalidCharLiteral,
        };
        Ok(self.recover(kind))
    }

    /// Consume the rest of a malformed literal through its closing `quote`,
    /// stopping early at a newline or the end of input. A backslash always
    /// takes the following character with it, so `\'` does not close.
    fn skip_literal(&mut self, quote: char) -> Result<LiteralEnd, SourceError> {
        loop {
            if self.source.is_eof() {
                return Ok(LiteralEnd::End);
            }
            let c = self.source.current();
            if c == '\n' {
                return Ok(LiteralEnd::Newline);
            }
            self.bump()?;
            if c == quote {
                return Ok(LiteralEnd::Closed);
            }
            if c == '\\' && !self.source.is_eof() && self.source.current() != '\n' {
                self.bump()?;
            }
        }
    }

    // === Operators ===

    /// Longest-match operator scan, falling back to an unexpected character.
    ///
    /// Every three-character operator extends a two-character one, so the
    /// two-character match decides whether a third character is worth
    /// looking at.
    fn operator(&mut self) -> ScanResult {
        let first = self.source.current();
        let second = self.source.peek()?;

        if let Some(two) = TwoCharSyntaxToken::lookup(first, second) {
            self.bump()?;
            self.bump()?;
            if let Some(three) = ThreeCharSyntaxToken::lookup(two, self.source.current()) {
                self.bump()?;
                return Ok(self.emit_coded(TokenKind::SyntaxToken, three.code()));
            }
            return Ok(self.emit_coded(TokenKind::SyntaxToken, two.code()));
        }

        if let Some(one) = OneCharSyntaxToken::lookup(first) {
            self.bump()?;
            return Ok(self.emit_coded(TokenKind::SyntaxToken, one.code()));
        }

        self.bump()?;
        Ok(self.recover(ParseErrorKind::UnexpectedCharacter))
    }
}

#[inline]
fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
