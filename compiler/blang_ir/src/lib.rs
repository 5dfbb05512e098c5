//! Shared vocabulary for the BLang front-end.
//!
//! - [`Token`]: the single mutable token record a tokenizer overwrites per scan
//! - [`syntax`]: one/two/three-character operator tables with disjoint codes
//! - [`keyword`]: reserve words and primitive type names
//!
//! Nothing here performs I/O; the lexer crates build on these types.

pub mod keyword;
pub mod syntax;
mod token;

pub use keyword::{PrimitiveType, ReserveWord};
pub use syntax::{OneCharSyntaxToken, SyntaxToken, ThreeCharSyntaxToken, TwoCharSyntaxToken};
pub use token::{Position, Token, TokenKind};
