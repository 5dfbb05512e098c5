use super::*;
use blang_ir::{OneCharSyntaxToken, ReserveWord};
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

/// Run `lex_source` over `bytes`, returning (stdout, stderr, report).
fn run(bytes: &[u8], capacity: usize) -> (String, String, LexReport) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let report = {
        let mut emitter = TerminalEmitter::with_color_mode(&mut err, ColorMode::Never, false);
        let config = TokenizerConfig {
            buffer_capacity: capacity,
        };
        lex_source(bytes, config, &mut out, &mut emitter)
    };
    let Ok(report) = report else {
        panic!("writing to a Vec cannot fail");
    };
    (
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
        report,
    )
}

// === Option parsing ===

#[test]
fn parses_path_and_flags() {
    let Ok(options) = LexOptions::parse(&args(&["main.bl", "--buffer-size=16", "--color=never"]))
    else {
        panic!("valid arguments were rejected");
    };
    assert_eq!(options.path, PathBuf::from("main.bl"));
    assert_eq!(options.config.buffer_capacity, 16);
    assert_eq!(options.color, ColorMode::Never);
}

#[test]
fn defaults_without_flags() {
    let Ok(options) = LexOptions::parse(&args(&["main.bl"])) else {
        panic!("valid arguments were rejected");
    };
    assert_eq!(options.config, TokenizerConfig::default());
    assert_eq!(options.color, ColorMode::Auto);
}

#[test]
fn rejects_bad_arguments() {
    assert!(matches!(
        LexOptions::parse(&args(&[])),
        Err(CliError::MissingArgument(_))
    ));
    assert!(matches!(
        LexOptions::parse(&args(&["a.bl", "--buffer-size=0"])),
        Err(CliError::InvalidBufferSize(_))
    ));
    assert!(matches!(
        LexOptions::parse(&args(&["a.bl", "--buffer-size=lots"])),
        Err(CliError::InvalidBufferSize(_))
    ));
    assert!(matches!(
        LexOptions::parse(&args(&["a.bl", "--color=sometimes"])),
        Err(CliError::InvalidColor(_))
    ));
    assert!(matches!(
        LexOptions::parse(&args(&["a.bl", "--verbose"])),
        Err(CliError::UnknownOption(_))
    ));
    assert!(matches!(
        LexOptions::parse(&args(&["a.bl", "b.bl"])),
        Err(CliError::UnknownOption(_))
    ));
}

// === Running ===

#[test]
fn clean_source_prints_tokens_only() {
    let (out, err, report) = run(b"let x;", 1024);
    let expected = format!(
        "  1:1 ReserveWord {} \"let\"\n  1:5 Identifier \"x\"\n  1:6 SyntaxToken {} \";\"\n",
        ReserveWord::Let.code(),
        OneCharSyntaxToken::Semicolon.code()
    );
    assert_eq!(out, expected);
    assert_eq!(err, "");
    assert!(report.is_clean());
    assert_eq!(report.tokens, 3);
}

#[test]
fn diagnostics_go_to_the_emitter() {
    let (out, err, report) = run(b"x = 'ab';", 1024);
    assert!(out.contains("  1:5 Invalid \"'ab'\"\n"), "{out}");
    assert_eq!(
        err,
        "error[TK0003]: Too many characters in char literal\n  --> 1:5\n\n\
         error: aborting due to previous error\n"
    );
    assert_eq!(
        report,
        LexReport {
            tokens: 4,
            errors: 1,
            warnings: 0,
            aborted: false,
        }
    );
    assert!(!report.is_clean());
}

#[test]
fn unreadable_source_aborts() {
    let (out, err, report) = run(b"ok \xC3(", 4);
    assert_eq!(out, "  1:1 Identifier \"ok\"\n");
    assert!(err.starts_with("critical error[TK0010]: Could not read source\n"), "{err}");
    assert!(err.contains("source is not valid UTF-8 (byte offset 3)"), "{err}");
    assert!(report.aborted);
    assert_eq!(report.errors, 1);
}

#[test]
fn buffer_size_does_not_change_output() {
    let source = "fn main() { let s = \"tab\\t\"; 'c' }\n// done\n".as_bytes();
    let (small, _, _) = run(source, 1);
    let (large, _, _) = run(source, 1024);
    assert_eq!(small, large);
}
