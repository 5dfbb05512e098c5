//! Tokenizer for BLang.
//!
//! [`Tokenizer`] turns a byte stream into tokens on demand, one per call,
//! writing each into the [`ParserContext`] it shares with the parser.
//! Malformed input never stops the scan: the offending lexeme becomes an
//! invalid token, one diagnostic is logged, and the next call carries on.
//! Only a failing source ends the session early ([`ScanOutcome::Fatal`]).
//!
//! ```text
//! let mut tokenizer = Tokenizer::new();
//! tokenizer.open(file)?;
//! while tokenizer.next_token() {
//!     println!("{}", tokenizer.current_token());
//! }
//! ```

mod context;
pub mod escape;
mod lookup;
mod scanner;
mod tokenizer;

pub use context::ParserContext;
pub use lookup::{LexemeLookup, PrimitiveTypeTable, ReserveWordTable};
pub use tokenizer::{tokenize, tokenize_with, ScanOutcome, Tokenizer, TokenizerConfig};
