//! Escape Sequence Processing
//!
//! Shared by string and character literals. The character after `\` selects
//! the replacement; anything outside [`ESCAPES`] is an unrecognized escape.

use std::fmt::{self, Write};

/// `(escape character, decoded character, description)`.
pub const ESCAPES: &[(char, char, &str)] = &[
    ('\'', '\'', "Single quote"),
    ('"', '"', "Double quote"),
    ('\\', '\\', "Backslash"),
    ('n', '\n', "New line"),
    ('r', '\r', "Carriage return"),
    ('t', '\t', "Horizontal tab"),
    ('b', '\u{8}', "Backspace"),
    ('f', '\u{c}', "Form feed"),
    ('a', '\u{7}', "Alert (bell)"),
    ('v', '\u{b}', "Vertical tab"),
    ('0', '\0', "Null character"),
];

/// Resolve a single escape character to its replacement.
#[inline]
pub fn resolve_escape(c: char) -> Option<char> {
    match c {
        '\'' => Some('\''),
        '"' => Some('"'),
        '\\' => Some('\\'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        'b' => Some('\u{8}'),
        'f' => Some('\u{c}'),
        'a' => Some('\u{7}'),
        'v' => Some('\u{b}'),
        '0' => Some('\0'),
        _ => None,
    }
}

/// Write the escape-sequence reference.
pub fn write_documentation(out: &mut impl Write) -> fmt::Result {
    writeln!(out, "Escape Sequences")?;
    writeln!(out, "================")?;
    writeln!(
        out,
        "Strings and character literals accept the following escape sequences:"
    )?;
    writeln!(out)?;
    for &(escape, _, description) in ESCAPES {
        writeln!(out, "    \\{escape}    {description}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn table_and_resolver_agree() {
        for &(escape, decoded, _) in ESCAPES {
            assert_eq!(resolve_escape(escape), Some(decoded), "\\{escape}");
        }
    }

    #[test]
    fn unknown_escapes() {
        for c in ['6', '4', 'q', 'x', 'u', ' ', '\n'] {
            assert_eq!(resolve_escape(c), None, "{c:?}");
        }
    }

    #[test]
    fn documentation_lists_every_escape() {
        let mut out = String::new();
        assert!(write_documentation(&mut out).is_ok());
        assert!(out.starts_with("Escape Sequences\n"));
        assert!(out.contains("    \\n    New line\n"));
        assert!(out.contains("    \\0    Null character\n"));
        assert_eq!(out.matches("    \\").count(), ESCAPES.len());
    }
}
