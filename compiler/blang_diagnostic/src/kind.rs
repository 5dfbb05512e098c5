//! The closed catalogue of diagnostic kinds.
//!
//! Codes have the form `<series prefix><4 digits>`:
//! - `TK####`: tokenization errors
//! - `SN####`: syntax errors (reported by the parser, classified here so the
//!   whole front-end shares one taxonomy)

use std::fmt;
use std::str::FromStr;

use crate::Severity;

/// Broad category of a diagnostic.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ParseErrorSeries {
    Tokenization,
    Syntax,
}

impl ParseErrorSeries {
    pub const ALL: &'static [ParseErrorSeries] =
        &[ParseErrorSeries::Tokenization, ParseErrorSeries::Syntax];

    /// Prefix used in public error codes.
    pub const fn prefix(self) -> &'static str {
        match self {
            ParseErrorSeries::Tokenization => "TK",
            ParseErrorSeries::Syntax => "SN",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ParseErrorSeries::Tokenization => "Tokenization",
            ParseErrorSeries::Syntax => "Syntax",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            ParseErrorSeries::Tokenization => {
                "Errors that can occur when transforming the code to tokens. \
                 This includes errors caused by incorrectly formatted numbers or strings."
            }
            ParseErrorSeries::Syntax => {
                "Errors that can be found in the first pass of the parser. \
                 Includes things like missing tokens or syntax that does not make sense \
                 in the context it's given."
            }
        }
    }

    /// Kinds belonging to this series, in code order.
    pub fn kinds(self) -> impl Iterator<Item = ParseErrorKind> {
        ParseErrorKind::ALL
            .iter()
            .copied()
            .filter(move |kind| kind.series() == self)
    }
}

impl fmt::Display for ParseErrorSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every problem the front-end can report.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ParseErrorKind {
    // Tokenization (TK)
    /// A character that starts no valid token.
    UnexpectedCharacter,
    /// Malformed floating point literal (`.1`, `2.`, `1e`).
    InvalidRealLiteral,
    /// More than one character between single quotes.
    TooManyCharactersInCharLiteral,
    /// `''`.
    EmptyCharLiteral,
    /// Base prefix or sign with no digits (`0x`, `0b2`).
    InvalidNumberLiteral,
    /// `\` followed by a character outside the escape table.
    UnrecognizedEscapeSequence,
    /// A string reached the end of its line before the closing quote.
    NewLineInStringLiteral,
    /// A char literal reached the end of its line before the closing quote.
    NewLineInCharLiteral,
    /// A char literal reached the end of input before the closing quote.
    InvalidCharLiteral,
    /// The character stream failed (I/O error or malformed UTF-8).
    SourceReadFailure,

    // Syntax (SN)
    UnexpectedTokenAtFileLevel,
    UnexpectedToken,
    MissingIdentifier,
    MissingTypeSpecifier,
    MissingInitializer,
    MissingSemicolon,
    /// A required delimiter is absent. Diagnostics carry the expected token.
    MissingSyntaxToken,
    MissingExpression,
    ExpectedFunctionBody,
    InvalidForLoopStatement,
    NoElseOnIfExpression,
}

impl ParseErrorKind {
    pub const ALL: &'static [ParseErrorKind] = &[
        ParseErrorKind::UnexpectedCharacter,
        ParseErrorKind::InvalidRealLiteral,
        ParseErrorKind::TooManyCharactersInCharLiteral,
        ParseErrorKind::EmptyCharLiteral,
        ParseErrorKind::InvalidNumberLiteral,
        ParseErrorKind::UnrecognizedEscapeSequence,
        ParseErrorKind::NewLineInStringLiteral,
        ParseErrorKind::NewLineInCharLiteral,
        ParseErrorKind::InvalidCharLiteral,
        ParseErrorKind::SourceReadFailure,
        ParseErrorKind::UnexpectedTokenAtFileLevel,
        ParseErrorKind::UnexpectedToken,
        ParseErrorKind::MissingIdentifier,
        ParseErrorKind::MissingTypeSpecifier,
        ParseErrorKind::MissingInitializer,
        ParseErrorKind::MissingSemicolon,
        ParseErrorKind::MissingSyntaxToken,
        ParseErrorKind::MissingExpression,
        ParseErrorKind::ExpectedFunctionBody,
        ParseErrorKind::InvalidForLoopStatement,
        ParseErrorKind::NoElseOnIfExpression,
    ];

    pub const fn series(self) -> ParseErrorSeries {
        match self {
            ParseErrorKind::UnexpectedCharacter
            | ParseErrorKind::InvalidRealLiteral
            | ParseErrorKind::TooManyCharactersInCharLiteral
            | ParseErrorKind::EmptyCharLiteral
            | ParseErrorKind::InvalidNumberLiteral
            | ParseErrorKind::UnrecognizedEscapeSequence
            | ParseErrorKind::NewLineInStringLiteral
            | ParseErrorKind::NewLineInCharLiteral
            | ParseErrorKind::InvalidCharLiteral
            | ParseErrorKind::SourceReadFailure => ParseErrorSeries::Tokenization,

            ParseErrorKind::UnexpectedTokenAtFileLevel
            | ParseErrorKind::UnexpectedToken
            | ParseErrorKind::MissingIdentifier
            | ParseErrorKind::MissingTypeSpecifier
            | ParseErrorKind::MissingInitializer
            | ParseErrorKind::MissingSemicolon
            | ParseErrorKind::MissingSyntaxToken
            | ParseErrorKind::MissingExpression
            | ParseErrorKind::ExpectedFunctionBody
            | ParseErrorKind::InvalidForLoopStatement
            | ParseErrorKind::NoElseOnIfExpression => ParseErrorSeries::Syntax,
        }
    }

    /// Public error code, e.g. `TK0005`.
    pub const fn code(self) -> &'static str {
        match self {
            ParseErrorKind::UnexpectedCharacter => "TK0001",
            ParseErrorKind::InvalidRealLiteral => "TK0002",
            ParseErrorKind::TooManyCharactersInCharLiteral => "TK0003",
            ParseErrorKind::EmptyCharLiteral => "TK0004",
            ParseErrorKind::InvalidNumberLiteral => "TK0005",
            ParseErrorKind::UnrecognizedEscapeSequence => "TK0006",
            ParseErrorKind::NewLineInStringLiteral => "TK0007",
            ParseErrorKind::NewLineInCharLiteral => "TK0008",
            ParseErrorKind::InvalidCharLiteral => "TK0009",
            ParseErrorKind::SourceReadFailure => "TK0010",
            ParseErrorKind::UnexpectedTokenAtFileLevel => "SN0001",
            ParseErrorKind::UnexpectedToken => "SN0002",
            ParseErrorKind::MissingIdentifier => "SN0003",
            ParseErrorKind::MissingTypeSpecifier => "SN0004",
            ParseErrorKind::MissingInitializer => "SN0005",
            ParseErrorKind::MissingSemicolon => "SN0006",
            ParseErrorKind::MissingSyntaxToken => "SN0007",
            ParseErrorKind::MissingExpression => "SN0008",
            ParseErrorKind::ExpectedFunctionBody => "SN0009",
            ParseErrorKind::InvalidForLoopStatement => "SN0010",
            ParseErrorKind::NoElseOnIfExpression => "SN0011",
        }
    }

    /// Short human-readable title.
    pub const fn title(self) -> &'static str {
        match self {
            ParseErrorKind::UnexpectedCharacter => "Unexpected character",
            ParseErrorKind::InvalidRealLiteral => "Invalid real literal",
            ParseErrorKind::TooManyCharactersInCharLiteral => "Too many characters in char literal",
            ParseErrorKind::EmptyCharLiteral => "Empty character literal",
            ParseErrorKind::InvalidNumberLiteral => "Invalid number literal",
            ParseErrorKind::UnrecognizedEscapeSequence => "Unrecognized escape sequence",
            ParseErrorKind::NewLineInStringLiteral => "New line in string literal",
            ParseErrorKind::NewLineInCharLiteral => "New line in char literal",
            ParseErrorKind::InvalidCharLiteral => "Invalid character literal",
            ParseErrorKind::SourceReadFailure => "Could not read source",
            ParseErrorKind::UnexpectedTokenAtFileLevel => "Unexpected token in file",
            ParseErrorKind::UnexpectedToken => "Unexpected token",
            ParseErrorKind::MissingIdentifier => "Identifier expected",
            ParseErrorKind::MissingTypeSpecifier => "Type expected",
            ParseErrorKind::MissingInitializer => "Missing initializer",
            ParseErrorKind::MissingSemicolon => "Missing semicolon",
            ParseErrorKind::MissingSyntaxToken => "Missing syntax token",
            ParseErrorKind::MissingExpression => "Missing expression",
            ParseErrorKind::ExpectedFunctionBody => "Expected function body",
            ParseErrorKind::InvalidForLoopStatement => "Invalid for loop statement",
            ParseErrorKind::NoElseOnIfExpression => "No else on if expression",
        }
    }

    /// Long-form explanation used by `explain` and the generated docs.
    pub const fn description(self) -> &'static str {
        match self {
            ParseErrorKind::UnexpectedCharacter => {
                "A character found in the code could not be matched to a valid token."
            }
            ParseErrorKind::InvalidRealLiteral => {
                "Incorrectly formatted floating point number.\n\
                 A floating point number must include a digit before the decimal place,\n\
                 and at least one digit after the decimal place. If an exponent is used, it\n\
                 can be negative but the exponent must be an integer and cannot include a\n\
                 decimal point.\n\
                 \n\
                 Correct examples:\n\
                 10.0, 0.1, 10e2, 0.1e2\n\
                 \n\
                 Incorrect examples:\n\
                 .1, 2., 0.e1, 0.1e.12"
            }
            ParseErrorKind::TooManyCharactersInCharLiteral => {
                "A character literal is formatted incorrectly.\n\
                 A character literal must start with a single quote and include only one\n\
                 character. It must be terminated with a closing single quote."
            }
            ParseErrorKind::EmptyCharLiteral => {
                "A character literal is formatted incorrectly. It must have exactly one\n\
                 character within the single quotes."
            }
            ParseErrorKind::InvalidNumberLiteral => {
                "An integer number is not formatted correctly.\n\
                 As a raw number it should be written verbatim without commas or underscores.\n\
                 \n\
                 Numbers of different bases can be specified using the C format.\n\
                 Binary:      0b[0-1]+\n\
                 Octal:       0o[0-7]+\n\
                 Base 10:     [0-9]+\n\
                 Hexadecimal: 0x[0-9A-Fa-f]+"
            }
            ParseErrorKind::UnrecognizedEscapeSequence => {
                "An invalid escape sequence was found. See the escape sequence documentation."
            }
            ParseErrorKind::NewLineInStringLiteral => {
                "A string ended the line without closing the quote.\n\
                 Strings start with a double quote, include all the text along with escape\n\
                 sequences, and end with a closing quote. It should all be on one line."
            }
            ParseErrorKind::NewLineInCharLiteral => {
                "A char ended the line without closing the quote.\n\
                 Chars start with a single quote and include a single character followed by\n\
                 a closing quote before the line ends."
            }
            ParseErrorKind::InvalidCharLiteral => {
                "A character literal reached the end of the file without a closing single quote."
            }
            ParseErrorKind::SourceReadFailure => {
                "The source could not be read. Either the underlying stream reported an error\n\
                 or the text is not valid UTF-8. Tokenization cannot continue."
            }
            ParseErrorKind::UnexpectedTokenAtFileLevel => {
                "Invalid token found at file level. A file must include import statements at\n\
                 the top followed by a module block."
            }
            ParseErrorKind::UnexpectedToken => "An invalid token was found in the current context.",
            ParseErrorKind::MissingIdentifier => {
                "You did not give an identifier. An identifier is the name of a variable or\n\
                 function."
            }
            ParseErrorKind::MissingTypeSpecifier => {
                "You did not give a type for the variable definition. A colon was added\n\
                 indicating the variable has a type, but no valid type was specified."
            }
            ParseErrorKind::MissingInitializer => {
                "A variable was declared without an explicit type and must be initialized."
            }
            ParseErrorKind::MissingSemicolon => {
                "The compiler found a missing semicolon delimiting the end of a statement.\n\
                 A statement may consume more than one line but must end with a semicolon."
            }
            ParseErrorKind::MissingSyntaxToken => {
                "The compiler found a missing syntax token. Examples include closing array\n\
                 indices or missing commas in argument lists."
            }
            ParseErrorKind::MissingExpression => {
                "The compiler did not find an expression when it was required."
            }
            ParseErrorKind::ExpectedFunctionBody => {
                "A function was declared without specifying a body definition."
            }
            ParseErrorKind::InvalidForLoopStatement => {
                "An invalid statement was found. A for loop must start with a variable\n\
                 creation or a valid expression. A semicolon is also valid if nothing should\n\
                 happen at the start."
            }
            ParseErrorKind::NoElseOnIfExpression => {
                "An if expression must end with an else clause to ensure all possible cases\n\
                 are handled."
            }
        }
    }

    /// Severity a freshly created diagnostic of this kind gets.
    pub const fn default_severity(self) -> Severity {
        match self {
            ParseErrorKind::SourceReadFailure => Severity::CriticalError,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Returned when a string is not a known error code.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown error code `{0}`")]
pub struct UnknownErrorCode(pub String);

impl FromStr for ParseErrorKind {
    type Err = UnknownErrorCode;

    /// Parse a code such as `tk0005` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .iter()
            .find(|kind| kind.code() == upper)
            .copied()
            .ok_or_else(|| UnknownErrorCode(s.to_string()))
    }
}

#[cfg(test)]
mod tests;
