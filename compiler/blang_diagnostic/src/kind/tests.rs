use super::*;
use pretty_assertions::assert_eq;
use std::collections::HashSet;

#[test]
fn codes_are_unique() {
    let codes: HashSet<&str> = ParseErrorKind::ALL.iter().map(|k| k.code()).collect();
    assert_eq!(codes.len(), ParseErrorKind::ALL.len());
}

#[test]
fn codes_carry_series_prefix() {
    for &kind in ParseErrorKind::ALL {
        let code = kind.code();
        assert!(
            code.starts_with(kind.series().prefix()),
            "{kind:?} has code {code}"
        );
        assert_eq!(code.len(), 6);
        assert!(code[2..].chars().all(|c| c.is_ascii_digit()));
    }
}

#[test]
fn series_partition_all_kinds() {
    let tokenization = ParseErrorSeries::Tokenization.kinds().count();
    let syntax = ParseErrorSeries::Syntax.kinds().count();
    assert_eq!(tokenization, 10);
    assert_eq!(syntax, 11);
    assert_eq!(tokenization + syntax, ParseErrorKind::ALL.len());
}

#[test]
fn from_str_round_trips() {
    for &kind in ParseErrorKind::ALL {
        assert_eq!(kind.code().parse::<ParseErrorKind>(), Ok(kind));
    }
}

#[test]
fn from_str_ignores_case_and_whitespace() {
    assert_eq!(
        " tk0006 ".parse::<ParseErrorKind>(),
        Ok(ParseErrorKind::UnrecognizedEscapeSequence)
    );
    assert_eq!(
        "sn0007".parse::<ParseErrorKind>(),
        Ok(ParseErrorKind::MissingSyntaxToken)
    );
}

#[test]
fn from_str_rejects_unknown() {
    let err = UnknownErrorCode("XX0001".to_string());
    assert_eq!("XX0001".parse::<ParseErrorKind>(), Err(err.clone()));
    assert_eq!(err.to_string(), "unknown error code `XX0001`");
    assert!("TK9999".parse::<ParseErrorKind>().is_err());
}

#[test]
fn every_kind_is_documented() {
    for &kind in ParseErrorKind::ALL {
        assert!(!kind.title().is_empty(), "{kind:?} has no title");
        assert!(!kind.description().is_empty(), "{kind:?} has no description");
    }
}

#[test]
fn only_read_failures_are_critical() {
    for &kind in ParseErrorKind::ALL {
        let expected = if kind == ParseErrorKind::SourceReadFailure {
            Severity::CriticalError
        } else {
            Severity::Error
        };
        assert_eq!(kind.default_severity(), expected, "{kind:?}");
    }
}

#[test]
fn display_is_code() {
    assert_eq!(ParseErrorKind::EmptyCharLiteral.to_string(), "TK0004");
    assert_eq!(ParseErrorSeries::Syntax.to_string(), "Syntax");
}
