use super::*;
use blang_diagnostic::Severity;
use blang_ir::{ReserveWord, TokenKind};
use pretty_assertions::assert_eq;
use rustc_hash::FxHashMap;

fn opened(text: &str) -> Tokenizer<&[u8]> {
    let mut tokenizer = Tokenizer::new();
    assert!(tokenizer.open(text.as_bytes()).is_ok());
    tokenizer
}

// === Lifecycle ===

#[test]
fn scan_before_open_is_exhausted() {
    let mut tokenizer: Tokenizer<&[u8]> = Tokenizer::new();
    assert_eq!(tokenizer.scan(), ScanOutcome::Exhausted);
    assert!(!tokenizer.next_token());
    assert_eq!(tokenizer.error_count(), 0);
}

#[test]
fn empty_input_produces_nothing() {
    let mut tokenizer = opened("");
    assert!(!tokenizer.next_token());
    assert!(!tokenizer.next_token());
    assert_eq!(tokenizer.error_count(), 0);
}

#[test]
fn exhaustion_is_idempotent() {
    let mut tokenizer = opened("let x = 'ab';");
    while tokenizer.next_token() {}

    let errors = tokenizer.error_count();
    let last = tokenizer.current_token().clone();
    for _ in 0..3 {
        assert_eq!(tokenizer.scan(), ScanOutcome::Exhausted);
        assert!(!tokenizer.next_token());
    }
    assert_eq!(tokenizer.error_count(), errors);
    assert_eq!(tokenizer.current_token(), &last);
}

#[test]
fn reopening_replaces_the_source() {
    let mut tokenizer = opened("first");
    assert!(tokenizer.next_token());
    assert!(!tokenizer.next_token());

    assert!(tokenizer.open("second third".as_bytes()).is_ok());
    assert!(tokenizer.next_token());
    assert_eq!(tokenizer.current_token().lexeme, "second");
    assert!(tokenizer.next_token());
    assert_eq!(tokenizer.current_token().lexeme, "third");
    assert!(!tokenizer.next_token());
}

#[test]
fn diagnostics_accumulate_across_reopen() {
    let mut tokenizer = opened("''");
    while tokenizer.next_token() {}
    assert!(tokenizer.open("#".as_bytes()).is_ok());
    while tokenizer.next_token() {}

    let kinds: Vec<_> = tokenizer.errors().iter().map(|d| d.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ParseErrorKind::EmptyCharLiteral,
            ParseErrorKind::UnexpectedCharacter
        ]
    );
}

// === Outcomes ===

#[test]
fn recovered_outcome_matches_logged_diagnostic() {
    let mut tokenizer = opened("  .5");
    let outcome = tokenizer.scan();

    let ScanOutcome::Recovered(diagnostic) = outcome else {
        panic!("expected a recovered scan, got {outcome:?}");
    };
    assert_eq!(diagnostic.kind, ParseErrorKind::InvalidRealLiteral);
    assert_eq!(diagnostic.position, Position::new(1, 3));
    assert_eq!(tokenizer.errors(), &[diagnostic]);
    assert!(tokenizer.current_token().is_invalid());
    assert_eq!(tokenizer.current_token().lexeme, ".5");
}

#[test]
fn invalid_utf8_mid_stream_is_fatal() {
    let bytes: &[u8] = b"abc \xFF def";
    let mut tokenizer = Tokenizer::new();
    assert!(tokenizer.open(bytes).is_ok());

    assert_eq!(tokenizer.scan(), ScanOutcome::Token);
    assert_eq!(tokenizer.current_token().lexeme, "abc");

    let outcome = tokenizer.scan();
    let ScanOutcome::Fatal(diagnostic) = outcome else {
        panic!("expected a fatal scan, got {outcome:?}");
    };
    assert_eq!(diagnostic.kind, ParseErrorKind::SourceReadFailure);
    assert_eq!(diagnostic.severity, Severity::CriticalError);
    assert_eq!(diagnostic.position, Position::new(1, 4));
    assert_eq!(
        diagnostic.notes,
        vec!["source is not valid UTF-8 (byte offset 4)".to_string()]
    );

    // The shared token still holds the last good token.
    assert_eq!(tokenizer.current_token().lexeme, "abc");
    assert_eq!(tokenizer.scan(), ScanOutcome::Exhausted);
    assert_eq!(tokenizer.error_count(), 1);
    assert!(tokenizer.context().logger().has_critical());
}

#[test]
fn unreadable_first_character_fails_open() {
    let bytes: &[u8] = &[0xFF];
    let mut tokenizer = Tokenizer::new();
    let Err(diagnostic) = tokenizer.open(bytes) else {
        panic!("open should fail on invalid UTF-8");
    };
    assert_eq!(diagnostic.kind, ParseErrorKind::SourceReadFailure);
    assert_eq!(diagnostic.position, Position::START);
    assert!(!tokenizer.next_token());
    assert_eq!(tokenizer.error_count(), 1);
}

#[test]
fn next_token_is_true_for_invalid_tokens() {
    let mut tokenizer = opened("# $");
    assert!(tokenizer.next_token());
    assert_eq!(tokenizer.current_token().kind, TokenKind::Invalid);
    assert!(tokenizer.next_token());
    assert_eq!(tokenizer.current_token().lexeme, "$");
    assert!(!tokenizer.next_token());
    assert_eq!(tokenizer.error_count(), 2);
}

// === Context ===

#[test]
fn custom_tables_drive_classification() {
    let mut words = FxHashMap::default();
    words.insert("yield".to_string(), 9000);
    let mut types = FxHashMap::default();
    types.insert("Vec".to_string(), 9500);

    let mut tokenizer = Tokenizer::with_context(ParserContext::with_tables(words, types));
    assert!(tokenizer.open("yield Vec mod".as_bytes()).is_ok());

    assert!(tokenizer.next_token());
    assert_eq!(tokenizer.current_token().kind, TokenKind::ReserveWord);
    assert_eq!(tokenizer.current_token().code, Some(9000));

    assert!(tokenizer.next_token());
    assert_eq!(tokenizer.current_token().kind, TokenKind::Type);
    assert_eq!(tokenizer.current_token().code, Some(9500));

    // Built-in words are not known to the custom tables.
    assert!(tokenizer.next_token());
    assert_eq!(tokenizer.current_token().kind, TokenKind::Identifier);
    assert_eq!(tokenizer.current_token().code, None);
}

#[test]
fn context_outlives_tokenizer() {
    let mut tokenizer = opened("mod ''");
    while tokenizer.next_token() {}

    let context = tokenizer.into_context();
    assert_eq!(context.token().lexeme, "''");
    assert_eq!(context.logger().count(), 1);
    assert_eq!(
        context.reserve_words().lookup("mod"),
        Some(ReserveWord::Module.code())
    );
}

#[test]
fn later_stages_log_into_the_same_logger() {
    let mut tokenizer = opened("let");
    assert!(tokenizer.next_token());
    let missing = Diagnostic::create(
        ParseErrorKind::MissingIdentifier,
        tokenizer.current_token(),
        None,
    );
    tokenizer.context_mut().logger_mut().log(missing);
    assert_eq!(tokenizer.error_count(), 1);
    assert_eq!(tokenizer.errors()[0].position, Position::new(1, 1));
}

// === Configuration ===

#[test]
fn config_is_kept() {
    let tokenizer: Tokenizer<&[u8]> = Tokenizer::with_capacity(7);
    assert_eq!(tokenizer.config().buffer_capacity, 7);
    assert_eq!(
        TokenizerConfig::default().buffer_capacity,
        blang_lexer_core::DEFAULT_CAPACITY
    );
}

#[test]
fn tiny_buffer_gives_identical_tokens() {
    let text = "fn main() -> i32 { let s = \"h\u{e9}llo\\n\"; s >>= 0x1F; }";
    let (small, small_log) = tokenize_with(text, TokenizerConfig { buffer_capacity: 1 });
    let (large, large_log) = tokenize(text);
    assert_eq!(small, large);
    assert_eq!(small_log.diagnostics(), large_log.diagnostics());
    assert!(large_log.is_empty());
}
