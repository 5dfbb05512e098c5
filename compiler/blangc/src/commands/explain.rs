//! The `explain` command: documentation for one error code.

use std::io::Write;

use blang_diagnostic::{ErrorDocs, ParseErrorKind};

use crate::CliError;

/// Write the documentation for `code` (e.g. `TK0006`, case-insensitive).
pub fn explain_error(code: &str, out: &mut impl Write) -> Result<(), CliError> {
    let kind: ParseErrorKind = code.parse()?;
    write!(out, "{}", ErrorDocs::explain(kind))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn explains_known_code() {
        let mut out = Vec::new();
        assert!(explain_error("sn0006", &mut out).is_ok());
        let text = String::from_utf8_lossy(&out);
        assert!(text.starts_with("SN0006: Missing semicolon\n"), "{text}");
    }

    #[test]
    fn rejects_unknown_code() {
        let mut out = Vec::new();
        let result = explain_error("E0001", &mut out);
        assert!(matches!(result, Err(CliError::UnknownCode(_))));
        assert_eq!(out, Vec::<u8>::new());
    }
}
