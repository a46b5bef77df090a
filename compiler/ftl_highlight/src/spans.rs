//! Highlight spans for a whole template or one editor range.

use crate::category::{category, HighlightCategory};
use ftl_lexer_core::{Session, Token};

/// A styled half-open byte range `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HighlightSpan {
    pub category: HighlightCategory,
    pub start: u32,
    pub end: u32,
}

/// Highlight spans for the whole of `source`.
///
/// Unstyled tokens are skipped. Touching tokens of the same category merge
/// into one span, so a comment body becomes a single span rather than one
/// per character.
pub fn highlight(source: &str) -> Vec<HighlightSpan> {
    highlight_range(source, 0, u32::MAX, 0)
}

/// Highlight spans for `source[start..end]`, lexed from an encoded
/// checkpoint.
pub fn highlight_range(
    source: &str,
    start: u32,
    end: u32,
    initial_state: u32,
) -> Vec<HighlightSpan> {
    let spans = merge(Session::start(source, start, end, initial_state).tokens());
    tracing::trace!(start, end, spans = spans.len(), "highlighted range");
    spans
}

fn merge(tokens: impl Iterator<Item = Token>) -> Vec<HighlightSpan> {
    let mut spans: Vec<HighlightSpan> = Vec::new();
    for token in tokens {
        let Some(category) = category(token.kind) else {
            continue;
        };
        match spans.last_mut() {
            Some(last) if last.category == category && last.end == token.start => {
                last.end = token.end;
            }
            _ => spans.push(HighlightSpan {
                category,
                start: token.start,
                end: token.end,
            }),
        }
    }
    spans
}

#[cfg(test)]
mod tests;
