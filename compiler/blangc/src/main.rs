//! BLang compiler CLI.

use std::path::Path;
use std::process::ExitCode;

use blangc::commands::{explain_error, lex_file, write_documentation, LexOptions};
use blang_lexer_core::DEFAULT_CAPACITY;
use blangc::{init_tracing, CliError};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return ExitCode::FAILURE;
    }

    let command = args[1].as_str();
    let result = match command {
        "lex" => LexOptions::parse(&args[2..])
            .and_then(|options| lex_file(&options))
            .map(|report| report.is_clean()),
        "explain" | "--explain" => match args.get(2) {
            Some(code) => explain_error(code, &mut std::io::stdout().lock()).map(|()| true),
            None => Err(CliError::MissingArgument("error code")),
        },
        "docs" => write_documentation(args.get(2).map(Path::new)).map(|path| {
            println!("Wrote documentation to {}", path.display());
            true
        }),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(true)
        }
        "version" | "--version" | "-V" => {
            println!("blang {}", env!("CARGO_PKG_VERSION"));
            Ok(true)
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("error: {error}");
            if matches!(
                error,
                CliError::MissingArgument(_) | CliError::UnknownOption(_)
            ) {
                eprintln!();
                print_usage();
            }
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!("BLang compiler");
    println!();
    println!("Usage: blang <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>           Tokenize a file and display tokens");
    println!("  explain <code>       Explain an error code (e.g., TK0006)");
    println!("  docs [out-file]      Write the error and escape reference");
    println!("                       (default: documentation.txt)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!(
        "  --buffer-size=<n>    Source read buffer size in bytes (default: {DEFAULT_CAPACITY})"
    );
    println!("  --color=<mode>       Diagnostic colors: auto, always, never");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Enable logging, e.g. RUST_LOG=blang_lexer=trace");
    println!("  BLANG_LOG_TREE       Render log output as an indented tree");
}
