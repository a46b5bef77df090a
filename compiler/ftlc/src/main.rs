//! FreeMarker template tools CLI.

use ftl_highlight::DEMO_TEXT;
use ftlc::commands::{highlight_file, lex_file, render_highlights, run_check};
use ftlc::{init_tracing, CliError, CliOptions};
use std::path::{Path, PathBuf};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    init_tracing();

    if args.len() < 2 {
        print_usage();
        return;
    }

    if let Err(e) = run(&args[1], &args[2..]) {
        eprintln!("error: {e}");
        if e.is_usage_error() {
            eprintln!();
            print_usage();
        }
        std::process::exit(e.exit_code());
    }
}

fn run(command: &str, rest: &[String]) -> Result<(), CliError> {
    match command {
        "lex" => {
            let (options, positional) = CliOptions::parse(rest)?;
            let path = single_path(&positional)?;
            lex_file(path, &options)
        }
        "highlight" => {
            let (options, positional) = CliOptions::parse(rest)?;
            let path = single_path(&positional)?;
            highlight_file(path, &options)
        }
        "check" => {
            let (options, positional) = CliOptions::parse(rest)?;
            // Use provided paths or current directory
            let paths: Vec<PathBuf> = if positional.is_empty() {
                vec![PathBuf::from(".")]
            } else {
                positional.iter().map(PathBuf::from).collect()
            };
            run_check(&paths, &options)
        }
        "demo" => {
            print!("{}", render_highlights(DEMO_TEXT, 0));
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("ftl {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => Err(CliError::UnknownCommand(command.to_string())),
    }
}

fn single_path(positional: &[String]) -> Result<&Path, CliError> {
    positional
        .first()
        .map(Path::new)
        .ok_or(CliError::MissingArgument("template path"))
}

fn print_usage() {
    println!("FreeMarker template tools");
    println!();
    println!("Usage: ftl <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.ftl>        Tokenize and display tokens with lexer states");
    println!("  highlight <file.ftl>  Display highlight categories for a template");
    println!("  check [paths...]      Verify tokenization invariants (default: current directory)");
    println!("  demo                  Highlight the built-in sample template");
    println!("  help                  Show this help message");
    println!("  version               Show version information");
    println!();
    println!("Options:");
    println!("  --state=<n|NAME>      Initial lexer state for lex/highlight (e.g. IN_COMMENT)");
    println!("  --verbose, -v         Also list templates that pass check");
    println!("  --no-parallel         Check templates sequentially");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=ftl_lexer_core=trace) for diagnostic output.");
}
