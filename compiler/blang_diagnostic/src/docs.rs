//! Plain-text error documentation for `explain` and `docs`.
//!
//! The text comes from the titles and descriptions attached to each
//! [`ParseErrorKind`], so there is no separate registry to keep in sync.

use std::fmt::{self, Write};

use crate::{ParseErrorKind, ParseErrorSeries};

/// Renders the error catalogue.
pub struct ErrorDocs;

impl ErrorDocs {
    /// Documentation for a single kind.
    pub fn explain(kind: ParseErrorKind) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = Self::write_entry(&mut out, kind);
        out
    }

    /// Write every series and kind, in code order.
    pub fn write_all(out: &mut impl Write) -> fmt::Result {
        writeln!(out, "Error Codes")?;
        writeln!(out, "===========")?;
        for &series in ParseErrorSeries::ALL {
            writeln!(out)?;
            let heading = format!("{} Errors ({})", series.name(), series.prefix());
            writeln!(out, "{heading}")?;
            writeln!(out, "{}", "-".repeat(heading.len()))?;
            writeln!(out, "{}", series.description())?;
            for kind in series.kinds() {
                writeln!(out)?;
                Self::write_entry(out, kind)?;
            }
        }
        Ok(())
    }

    fn write_entry(out: &mut impl Write, kind: ParseErrorKind) -> fmt::Result {
        writeln!(out, "{}: {}", kind.code(), kind.title())?;
        for line in kind.description().lines() {
            if line.is_empty() {
                writeln!(out)?;
            } else {
                writeln!(out, "    {line}")?;
            }
        }
        Ok(())
    }
}
