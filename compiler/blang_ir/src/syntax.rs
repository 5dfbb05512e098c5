//! Syntax-token (operator and punctuation) tables.
//!
//! Operators come in three widths. Each width is its own enum, and codes are
//! the variant ordinal plus a per-width offset so they never collide:
//!
//! | Width | Enum                     | Codes   |
//! |-------|--------------------------|---------|
//! | 1     | [`OneCharSyntaxToken`]   | 2000+   |
//! | 2     | [`TwoCharSyntaxToken`]   | 3000+   |
//! | 3     | [`ThreeCharSyntaxToken`] | 4000+   |
//!
//! A three-character operator is declared as a two-character prefix plus one
//! more character. Its first two characters are never stored separately, so
//! every three-character operator extends a valid two-character one. The
//! tokenizer relies on this to match all widths greedily with a single
//! character of lookahead.
//!
//! Reverse lookups (characters to variant) are built once on first use.

use std::fmt;
use std::sync::OnceLock;

use rustc_hash::FxHashMap;

const ONE_CHAR_TOKEN_START: u32 = 2000;
const TWO_CHAR_TOKEN_START: u32 = 3000;
const THREE_CHAR_TOKEN_START: u32 = 4000;

/// Declares a fieldless operator enum together with its character table.
macro_rules! syntax_table {
    (
        $(#[$meta:meta])*
        $name:ident: $chars:ty {
            $($variant:ident => $value:expr,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
        #[repr(u8)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            /// Every variant, in declaration (and code) order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// The literal characters of this operator.
            pub const fn chars(self) -> $chars {
                match self {
                    $($name::$variant => $value,)+
                }
            }
        }
    };
}

syntax_table! {
    /// Single-character operators and punctuation.
    OneCharSyntaxToken: char {
        Plus => '+',
        Minus => '-',
        Asterisk => '*',
        ForwardSlash => '/',
        Percent => '%',
        Equals => '=',
        OpenAngleBrace => '<',
        CloseAngleBrace => '>',
        Exclamation => '!',
        Ampersand => '&',
        Pipe => '|',
        Caret => '^',
        Tilde => '~',
        QuestionMark => '?',
        Colon => ':',
        Semicolon => ';',
        Comma => ',',
        Period => '.',
        OpenParen => '(',
        CloseParen => ')',
        OpenBracket => '[',
        CloseBracket => ']',
        OpenBrace => '{',
        CloseBrace => '}',
        At => '@',
    }
}

syntax_table! {
    /// Two-character operators.
    TwoCharSyntaxToken: [char; 2] {
        Equality => ['=', '='],
        NotEqual => ['!', '='],
        LessOrEqual => ['<', '='],
        GreaterOrEqual => ['>', '='],
        LogicalAnd => ['&', '&'],
        LogicalOr => ['|', '|'],
        LogicalShiftLeft => ['<', '<'],
        LogicalShiftRight => ['>', '>'],
        PlusAssign => ['+', '='],
        MinusAssign => ['-', '='],
        MultiplyAssign => ['*', '='],
        DivideAssign => ['/', '='],
        ModuloAssign => ['%', '='],
        AndAssign => ['&', '='],
        OrAssign => ['|', '='],
        XorAssign => ['^', '='],
        Arrow => ['-', '>'],
        ScopeResolution => [':', ':'],
        Increment => ['+', '+'],
        Decrement => ['-', '-'],
        Power => ['*', '*'],
    }
}

syntax_table! {
    /// Three-character operators, each an extension of a two-character prefix.
    ThreeCharSyntaxToken: (TwoCharSyntaxToken, char) {
        ShiftLeftAssign => (TwoCharSyntaxToken::LogicalShiftLeft, '='),
        ShiftRightAssign => (TwoCharSyntaxToken::LogicalShiftRight, '='),
        PowerAssign => (TwoCharSyntaxToken::Power, '='),
    }
}

impl OneCharSyntaxToken {
    #[inline]
    pub const fn code(self) -> u32 {
        self as u32 + ONE_CHAR_TOKEN_START
    }

    /// Find the operator spelled by `c`.
    pub fn lookup(c: char) -> Option<Self> {
        static TABLE: OnceLock<FxHashMap<char, OneCharSyntaxToken>> = OnceLock::new();
        TABLE
            .get_or_init(|| Self::ALL.iter().map(|&t| (t.chars(), t)).collect())
            .get(&c)
            .copied()
    }
}

impl TwoCharSyntaxToken {
    #[inline]
    pub const fn code(self) -> u32 {
        self as u32 + TWO_CHAR_TOKEN_START
    }

    #[inline]
    pub const fn char1(self) -> char {
        self.chars()[0]
    }

    #[inline]
    pub const fn char2(self) -> char {
        self.chars()[1]
    }

    /// Find the operator spelled by `c1 c2`.
    pub fn lookup(c1: char, c2: char) -> Option<Self> {
        static TABLE: OnceLock<FxHashMap<[char; 2], TwoCharSyntaxToken>> = OnceLock::new();
        TABLE
            .get_or_init(|| Self::ALL.iter().map(|&t| (t.chars(), t)).collect())
            .get(&[c1, c2])
            .copied()
    }
}

impl ThreeCharSyntaxToken {
    #[inline]
    pub const fn code(self) -> u32 {
        self as u32 + THREE_CHAR_TOKEN_START
    }

    /// The two-character operator this one extends.
    #[inline]
    pub const fn prefix(self) -> TwoCharSyntaxToken {
        self.chars().0
    }

    #[inline]
    pub const fn char1(self) -> char {
        self.prefix().char1()
    }

    #[inline]
    pub const fn char2(self) -> char {
        self.prefix().char2()
    }

    #[inline]
    pub const fn char3(self) -> char {
        self.chars().1
    }

    /// Find the operator that extends `prefix` with `c3`.
    pub fn lookup(prefix: TwoCharSyntaxToken, c3: char) -> Option<Self> {
        static TABLE: OnceLock<FxHashMap<(TwoCharSyntaxToken, char), ThreeCharSyntaxToken>> =
            OnceLock::new();
        TABLE
            .get_or_init(|| Self::ALL.iter().map(|&t| (t.chars(), t)).collect())
            .get(&(prefix, c3))
            .copied()
    }
}

/// An operator of any width.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SyntaxToken {
    One(OneCharSyntaxToken),
    Two(TwoCharSyntaxToken),
    Three(ThreeCharSyntaxToken),
}

impl SyntaxToken {
    pub const fn code(self) -> u32 {
        match self {
            SyntaxToken::One(t) => t.code(),
            SyntaxToken::Two(t) => t.code(),
            SyntaxToken::Three(t) => t.code(),
        }
    }

    /// Number of characters in the operator.
    pub const fn width(self) -> usize {
        match self {
            SyntaxToken::One(_) => 1,
            SyntaxToken::Two(_) => 2,
            SyntaxToken::Three(_) => 3,
        }
    }

    /// Reverse of [`code`](Self::code).
    pub fn from_code(code: u32) -> Option<Self> {
        let index = |start: u32| usize::try_from(code.checked_sub(start)?).ok();
        match code {
            THREE_CHAR_TOKEN_START.. => ThreeCharSyntaxToken::ALL
                .get(index(THREE_CHAR_TOKEN_START)?)
                .map(|&t| SyntaxToken::Three(t)),
            TWO_CHAR_TOKEN_START.. => TwoCharSyntaxToken::ALL
                .get(index(TWO_CHAR_TOKEN_START)?)
                .map(|&t| SyntaxToken::Two(t)),
            ONE_CHAR_TOKEN_START.. => OneCharSyntaxToken::ALL
                .get(index(ONE_CHAR_TOKEN_START)?)
                .map(|&t| SyntaxToken::One(t)),
            _ => None,
        }
    }
}

impl From<OneCharSyntaxToken> for SyntaxToken {
    fn from(token: OneCharSyntaxToken) -> Self {
        SyntaxToken::One(token)
    }
}

impl From<TwoCharSyntaxToken> for SyntaxToken {
    fn from(token: TwoCharSyntaxToken) -> Self {
        SyntaxToken::Two(token)
    }
}

impl From<ThreeCharSyntaxToken> for SyntaxToken {
    fn from(token: ThreeCharSyntaxToken) -> Self {
        SyntaxToken::Three(token)
    }
}

impl fmt::Display for SyntaxToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        match *self {
            SyntaxToken::One(t) => f.write_char(t.chars()),
            SyntaxToken::Two(t) => {
                f.write_char(t.char1())?;
                f.write_char(t.char2())
            }
            SyntaxToken::Three(t) => {
                f.write_char(t.char1())?;
                f.write_char(t.char2())?;
                f.write_char(t.char3())
            }
        }
    }
}

#[cfg(test)]
mod tests;
