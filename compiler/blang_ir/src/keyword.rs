//! Reserve words and primitive type names.
//!
//! The tokenizer consults these through lookup services, reserve words
//! first. The two vocabularies are disjoint, so a type name can never
//! shadow a reserve word.

const RESERVE_WORD_START: u32 = 1000;
const PRIMITIVE_TYPE_START: u32 = 1500;

/// Reserved words of the language.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum ReserveWord {
    Module,
    Import,
    EntryPoint,
    Function,
    Const,
    Let,
    Mut,
    Pub,
    If,
    Else,
    While,
    For,
    Return,
    Break,
    Continue,
    True,
    False,
}

impl ReserveWord {
    pub const ALL: &'static [ReserveWord] = &[
        ReserveWord::Module,
        ReserveWord::Import,
        ReserveWord::EntryPoint,
        ReserveWord::Function,
        ReserveWord::Const,
        ReserveWord::Let,
        ReserveWord::Mut,
        ReserveWord::Pub,
        ReserveWord::If,
        ReserveWord::Else,
        ReserveWord::While,
        ReserveWord::For,
        ReserveWord::Return,
        ReserveWord::Break,
        ReserveWord::Continue,
        ReserveWord::True,
        ReserveWord::False,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ReserveWord::Module => "mod",
            ReserveWord::Import => "import",
            ReserveWord::EntryPoint => "entrypt",
            ReserveWord::Function => "fn",
            ReserveWord::Const => "const",
            ReserveWord::Let => "let",
            ReserveWord::Mut => "mut",
            ReserveWord::Pub => "pub",
            ReserveWord::If => "if",
            ReserveWord::Else => "else",
            ReserveWord::While => "while",
            ReserveWord::For => "for",
            ReserveWord::Return => "return",
            ReserveWord::Break => "break",
            ReserveWord::Continue => "continue",
            ReserveWord::True => "true",
            ReserveWord::False => "false",
        }
    }

    #[inline]
    pub const fn code(self) -> u32 {
        self as u32 + RESERVE_WORD_START
    }

    pub fn from_lexeme(text: &str) -> Option<Self> {
        let word = match text {
            "mod" => ReserveWord::Module,
            "import" => ReserveWord::Import,
            "entrypt" => ReserveWord::EntryPoint,
            "fn" => ReserveWord::Function,
            "const" => ReserveWord::Const,
            "let" => ReserveWord::Let,
            "mut" => ReserveWord::Mut,
            "pub" => ReserveWord::Pub,
            "if" => ReserveWord::If,
            "else" => ReserveWord::Else,
            "while" => ReserveWord::While,
            "for" => ReserveWord::For,
            "return" => ReserveWord::Return,
            "break" => ReserveWord::Break,
            "continue" => ReserveWord::Continue,
            "true" => ReserveWord::True,
            "false" => ReserveWord::False,
            _ => return None,
        };
        Some(word)
    }
}

/// Built-in type names.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum PrimitiveType {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Bool,
    Char,
    String,
    Void,
}

impl PrimitiveType {
    pub const ALL: &'static [PrimitiveType] = &[
        PrimitiveType::I8,
        PrimitiveType::I16,
        PrimitiveType::I32,
        PrimitiveType::I64,
        PrimitiveType::U8,
        PrimitiveType::U16,
        PrimitiveType::U32,
        PrimitiveType::U64,
        PrimitiveType::F32,
        PrimitiveType::F64,
        PrimitiveType::Bool,
        PrimitiveType::Char,
        PrimitiveType::String,
        PrimitiveType::Void,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            PrimitiveType::I8 => "i8",
            PrimitiveType::I16 => "i16",
            PrimitiveType::I32 => "i32",
            PrimitiveType::I64 => "i64",
            PrimitiveType::U8 => "u8",
            PrimitiveType::U16 => "u16",
            PrimitiveType::U32 => "u32",
            PrimitiveType::U64 => "u64",
            PrimitiveType::F32 => "f32",
            PrimitiveType::F64 => "f64",
            PrimitiveType::Bool => "bool",
            PrimitiveType::Char => "char",
            PrimitiveType::String => "string",
            PrimitiveType::Void => "void",
        }
    }

    #[inline]
    pub const fn code(self) -> u32 {
        self as u32 + PRIMITIVE_TYPE_START
    }

    pub fn from_lexeme(text: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == text)
    }
}
