//! The `lex` command: tokenize a file, print every token, report diagnostics.

use std::fs::File;
use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;

use blang_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use blang_ir::Token;
use blang_lexer::{ScanOutcome, Tokenizer, TokenizerConfig};

use crate::CliError;

/// Arguments to `blang lex`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexOptions {
    pub path: PathBuf,
    pub config: TokenizerConfig,
    pub color: ColorMode,
}

impl LexOptions {
    /// Parse everything after `lex`: one file path plus
    /// `--buffer-size=N` and `--color=auto|always|never`.
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        let mut path = None;
        let mut config = TokenizerConfig::default();
        let mut color = ColorMode::Auto;

        for arg in args {
            if let Some(value) = arg.strip_prefix("--buffer-size=") {
                config.buffer_capacity = match value.parse::<usize>() {
                    Ok(size) if size > 0 => size,
                    _ => return Err(CliError::InvalidBufferSize(value.to_string())),
                };
            } else if let Some(value) = arg.strip_prefix("--color=") {
                color = value.parse().map_err(CliError::InvalidColor)?;
            } else if arg.starts_with('-') || path.is_some() {
                return Err(CliError::UnknownOption(arg.clone()));
            } else {
                path = Some(PathBuf::from(arg));
            }
        }

        let path = path.ok_or(CliError::MissingArgument("file path"))?;
        Ok(LexOptions {
            path,
            config,
            color,
        })
    }
}

/// What a lex run produced.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LexReport {
    /// Tokens printed, invalid ones included.
    pub tokens: usize,
    pub errors: usize,
    pub warnings: usize,
    /// The source could not be read to the end.
    pub aborted: bool,
}

impl LexReport {
    /// No diagnostics of any severity.
    pub fn is_clean(&self) -> bool {
        self.errors == 0 && self.warnings == 0 && !self.aborted
    }
}

/// Tokenize `reader`, writing one line per token to `out` and every logged
/// diagnostic (plus a summary) to `emitter`.
pub fn lex_source<R: Read>(
    reader: R,
    config: TokenizerConfig,
    out: &mut impl Write,
    emitter: &mut impl DiagnosticEmitter,
) -> io::Result<LexReport> {
    let mut tokenizer = Tokenizer::with_config(config);
    let mut report = LexReport::default();

    if tokenizer.open(reader).is_err() {
        report.aborted = true;
    } else {
        loop {
            match tokenizer.scan() {
                ScanOutcome::Token | ScanOutcome::Recovered(_) => {
                    report.tokens += 1;
                    write_token(out, tokenizer.current_token())?;
                }
                ScanOutcome::Fatal(_) => {
                    report.aborted = true;
                    break;
                }
                ScanOutcome::Exhausted => break,
            }
        }
    }

    let logger = tokenizer.context().logger();
    report.errors = logger.error_count();
    report.warnings = logger.warning_count();
    emitter.emit_all(logger.diagnostics());
    emitter.emit_summary(report.errors, report.warnings);
    emitter.flush();
    Ok(report)
}

fn write_token(out: &mut impl Write, token: &Token) -> io::Result<()> {
    writeln!(out, "  {token}")
}

/// Run `blang lex` against a file, printing to stdout and stderr.
pub fn lex_file(options: &LexOptions) -> Result<LexReport, CliError> {
    let file = File::open(&options.path).map_err(|source| CliError::Read {
        path: options.path.clone(),
        source,
    })?;
    tracing::debug!(path = %options.path.display(), capacity = options.config.buffer_capacity, "lexing");

    let is_tty = io::stderr().is_terminal();
    let mut emitter = TerminalEmitter::stderr(options.color, is_tty);
    let mut out = io::stdout().lock();

    writeln!(out, "Tokens for '{}':", options.path.display())?;
    let report = lex_source(file, options.config, &mut out, &mut emitter)?;
    writeln!(out, "{} token{}", report.tokens, if report.tokens == 1 { "" } else { "s" })?;
    Ok(report)
}

#[cfg(test)]
mod tests;
