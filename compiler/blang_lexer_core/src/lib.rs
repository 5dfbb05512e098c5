//! Character-level input for the BLang tokenizer.
//!
//! [`CharSource`] pulls bytes from any [`std::io::Read`] through a small
//! fixed-size buffer, decodes them as UTF-8 and tracks line/column. It knows
//! nothing about tokens; `blang_lexer` drives it.

mod char_source;

pub use char_source::{CharSource, SourceError, DEFAULT_CAPACITY, EOF, MIN_CAPACITY};
