//! Lexeme-to-code lookup services.
//!
//! The tokenizer classifies words through two [`LexemeLookup`]s, reserve
//! words first and primitive types second. The built-in vocabularies come
//! from `blang_ir`; callers can substitute their own tables.

use rustc_hash::FxHashMap;

use blang_ir::{PrimitiveType, ReserveWord};

/// Maps a lexeme to its table code.
pub trait LexemeLookup {
    fn lookup(&self, lexeme: &str) -> Option<u32>;
}

/// The language's reserve words.
#[derive(Copy, Clone, Debug, Default)]
pub struct ReserveWordTable;

impl LexemeLookup for ReserveWordTable {
    fn lookup(&self, lexeme: &str) -> Option<u32> {
        ReserveWord::from_lexeme(lexeme).map(ReserveWord::code)
    }
}

/// The language's primitive type names.
#[derive(Copy, Clone, Debug, Default)]
pub struct PrimitiveTypeTable;

impl LexemeLookup for PrimitiveTypeTable {
    fn lookup(&self, lexeme: &str) -> Option<u32> {
        PrimitiveType::from_lexeme(lexeme).map(PrimitiveType::code)
    }
}

impl LexemeLookup for FxHashMap<String, u32> {
    fn lookup(&self, lexeme: &str) -> Option<u32> {
        self.get(lexeme).copied()
    }
}
