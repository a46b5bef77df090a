//! `ftl lex`: print the token stream of a template.

use super::{escape, read_file};
use crate::{CliError, CliOptions};
use ftl_lexer_core::{Checkpoint, Lexer};
use std::fmt::Write;
use std::path::Path;

/// Lex a file and print its tokens with the state after each one.
pub fn lex_file(path: &Path, options: &CliOptions) -> Result<(), CliError> {
    let content = read_file(path)?;
    print!("{}", render_tokens(&content, options.initial_state));
    Ok(())
}

/// One line per token: kind, byte span, state after, escaped text.
///
/// The state column shows `+text` when the token was `TEXT`, which keeps
/// the next word from being read as a keyword.
pub fn render_tokens(source: &str, initial_state: u32) -> String {
    let mut out = String::new();
    let mut lexer = Lexer::start(source, 0, u32::MAX, initial_state);
    let mut count = 0usize;

    while let Some(token) = lexer.current_token() {
        let checkpoint = Checkpoint::decode(lexer.current_state());
        let state = if checkpoint.after_text {
            format!("{}+text", checkpoint.state)
        } else {
            checkpoint.state.to_string()
        };
        let span = format!("{}..{}", token.start, token.end);
        let _ = writeln!(
            out,
            "{:<20} {:<12} {:<24} \"{}\"",
            token.kind,
            span,
            state,
            escape(token.text(source)),
        );
        count += 1;
        lexer.advance();
    }

    let _ = writeln!(out, "{count} tokens");
    out
}

#[cfg(test)]
mod tests;
