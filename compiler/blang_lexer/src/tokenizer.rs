use std::io::Read;

use blang_diagnostic::{Diagnostic, ErrorLogger, ParseErrorKind};
use blang_ir::{Position, Token};
use blang_lexer_core::{CharSource, SourceError, DEFAULT_CAPACITY};

use crate::context::ParserContext;
use crate::scanner::Scanner;

/// Result of one [`Tokenizer::scan`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScanOutcome {
    /// A well-formed token is in the context.
    Token,
    /// Malformed input was logged; an invalid token is in the context.
    /// Scanning can continue.
    Recovered(Diagnostic),
    /// The source could not be read. The diagnostic has been logged and the
    /// tokenizer is finished.
    Fatal(Diagnostic),
    /// No more tokens. The context is left untouched.
    Exhausted,
}

impl ScanOutcome {
    /// Whether a token (valid or not) was produced.
    #[inline]
    pub fn has_token(&self) -> bool {
        matches!(self, ScanOutcome::Token | ScanOutcome::Recovered(_))
    }
}

/// Tokenizer settings.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TokenizerConfig {
    /// Byte capacity of the source read buffer. Affects I/O call frequency
    /// only, never the tokens produced.
    pub buffer_capacity: usize,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        TokenizerConfig {
            buffer_capacity: DEFAULT_CAPACITY,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    Unopened,
    Ready,
    Exhausted,
    Failed,
}

/// Pull-based tokenizer over a byte stream.
///
/// Each [`scan`](Self::scan) overwrites the single token held in the
/// [`ParserContext`]; clone it to keep a snapshot. Diagnostics accumulate in
/// the context's logger.
pub struct Tokenizer<R> {
    context: ParserContext,
    config: TokenizerConfig,
    source: Option<CharSource<R>>,
    state: State,
    lexeme: String,
}

impl<R: Read> Tokenizer<R> {
    pub fn new() -> Self {
        Self::with_context(ParserContext::new())
    }

    /// Tokenize into an existing context (custom tables, shared logger).
    pub fn with_context(context: ParserContext) -> Self {
        Tokenizer {
            context,
            config: TokenizerConfig::default(),
            source: None,
            state: State::Unopened,
            lexeme: String::new(),
        }
    }

    pub fn with_config(config: TokenizerConfig) -> Self {
        let mut tokenizer = Self::new();
        tokenizer.config = config;
        tokenizer
    }

    pub fn with_capacity(buffer_capacity: usize) -> Self {
        Self::with_config(TokenizerConfig { buffer_capacity })
    }

    /// Bind `reader` as the input, replacing any previous one.
    ///
    /// Reads the first character. If that fails, the failure is logged, the
    /// tokenizer is finished and the diagnostic is returned.
    pub fn open(&mut self, reader: R) -> Result<(), Diagnostic> {
        self.source = None;
        match CharSource::with_capacity(reader, self.config.buffer_capacity) {
            Ok(source) => {
                tracing::debug!(capacity = source.capacity(), "opened source");
                self.source = Some(source);
                self.state = State::Ready;
                Ok(())
            }
            Err(error) => Err(self.fail(&error, Position::START)),
        }
    }

    /// Scan the next token.
    ///
    /// After [`ScanOutcome::Exhausted`] or [`ScanOutcome::Fatal`], every
    /// further call returns `Exhausted` without side effects.
    pub fn scan(&mut self) -> ScanOutcome {
        match self.state {
            State::Ready => {}
            State::Exhausted | State::Failed => return ScanOutcome::Exhausted,
            State::Unopened => {
                tracing::warn!("scan called before a source was opened");
                return ScanOutcome::Exhausted;
            }
        }
        let Some(source) = self.source.as_mut() else {
            return ScanOutcome::Exhausted;
        };

        let context = &mut self.context;
        let mut scanner = Scanner {
            source,
            token: &mut context.token,
            reserve_words: &*context.reserve_words,
            primitive_types: &*context.primitive_types,
            logger: &mut context.logger,
            lexeme: &mut self.lexeme,
        };

        match scanner.scan() {
            Ok(ScanOutcome::Exhausted) => {
                tracing::debug!(diagnostics = self.context.logger.count(), "source exhausted");
                self.state = State::Exhausted;
                ScanOutcome::Exhausted
            }
            Ok(outcome) => outcome,
            Err(error) => {
                let position = source_position(self.source.as_ref());
                ScanOutcome::Fatal(self.fail(&error, position))
            }
        }
    }

    /// Advance to the next token. Returns `true` when one was produced, even
    /// if it is invalid, and `false` at the end of input or after a fatal
    /// read error.
    pub fn next_token(&mut self) -> bool {
        self.scan().has_token()
    }

    /// The most recently scanned token.
    #[inline]
    pub fn current_token(&self) -> &Token {
        &self.context.token
    }

    #[inline]
    pub fn error_count(&self) -> usize {
        self.context.logger.count()
    }

    pub fn errors(&self) -> &[Diagnostic] {
        self.context.logger.diagnostics()
    }

    pub fn context(&self) -> &ParserContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut ParserContext {
        &mut self.context
    }

    pub fn into_context(self) -> ParserContext {
        self.context
    }

    pub fn config(&self) -> TokenizerConfig {
        self.config
    }

    /// Log a read failure as a critical error and stop.
    fn fail(&mut self, error: &SourceError, position: Position) -> Diagnostic {
        tracing::error!(%error, "source read failed");
        self.state = State::Failed;
        self.source = None;

        // A detached token so the shared one keeps its last value.
        let mut at = Token::default();
        at.reset(position);
        let diagnostic = Diagnostic::create(ParseErrorKind::SourceReadFailure, &at, None)
            .with_note(error.to_string());
        self.context.logger.log(diagnostic.clone());
        diagnostic
    }
}

impl<R: Read> Default for Tokenizer<R> {
    fn default() -> Self {
        Tokenizer::new()
    }
}

fn source_position<R: Read>(source: Option<&CharSource<R>>) -> Position {
    source.map_or(Position::START, CharSource::position)
}

/// Tokenize a whole string, returning a snapshot of every token and the
/// diagnostics logged along the way.
pub fn tokenize(text: &str) -> (Vec<Token>, ErrorLogger) {
    tokenize_with(text, TokenizerConfig::default())
}

/// [`tokenize`] with explicit settings.
pub fn tokenize_with(text: &str, config: TokenizerConfig) -> (Vec<Token>, ErrorLogger) {
    let mut tokenizer = Tokenizer::with_config(config);
    let mut tokens = Vec::new();
    if tokenizer.open(text.as_bytes()).is_ok() {
        while tokenizer.next_token() {
            tokens.push(tokenizer.current_token().clone());
        }
    }
    (tokens, tokenizer.into_context().into_logger())
}

#[cfg(test)]
mod tests;
