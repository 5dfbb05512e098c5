use std::fmt;

use blang_diagnostic::ErrorLogger;
use blang_ir::Token;

use crate::lookup::{LexemeLookup, PrimitiveTypeTable, ReserveWordTable};

/// State shared by the tokenizer and the parser of one session.
///
/// Holds the single current [`Token`], the word tables used to classify
/// identifiers, and the [`ErrorLogger`] every stage reports into.
pub struct ParserContext {
    pub(crate) token: Token,
    pub(crate) reserve_words: Box<dyn LexemeLookup>,
    pub(crate) primitive_types: Box<dyn LexemeLookup>,
    pub(crate) logger: ErrorLogger,
}

impl ParserContext {
    /// Context with the built-in reserve-word and primitive-type tables.
    pub fn new() -> Self {
        Self::with_tables(ReserveWordTable, PrimitiveTypeTable)
    }

    pub fn with_tables(
        reserve_words: impl LexemeLookup + 'static,
        primitive_types: impl LexemeLookup + 'static,
    ) -> Self {
        ParserContext {
            token: Token::default(),
            reserve_words: Box::new(reserve_words),
            primitive_types: Box::new(primitive_types),
            logger: ErrorLogger::new(),
        }
    }

    /// The most recently scanned token.
    #[inline]
    pub fn token(&self) -> &Token {
        &self.token
    }

    #[inline]
    pub fn logger(&self) -> &ErrorLogger {
        &self.logger
    }

    /// For later stages that report into the same log.
    #[inline]
    pub fn logger_mut(&mut self) -> &mut ErrorLogger {
        &mut self.logger
    }

    pub fn reserve_words(&self) -> &dyn LexemeLookup {
        &*self.reserve_words
    }

    pub fn primitive_types(&self) -> &dyn LexemeLookup {
        &*self.primitive_types
    }

    pub fn into_logger(self) -> ErrorLogger {
        self.logger
    }
}

impl Default for ParserContext {
    fn default() -> Self {
        ParserContext::new()
    }
}

impl fmt::Debug for ParserContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserContext")
            .field("token", &self.token)
            .field("diagnostics", &self.logger.count())
            .finish_non_exhaustive()
    }
}
