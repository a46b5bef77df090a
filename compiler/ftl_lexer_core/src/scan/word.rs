//! Keywords and identifiers.

use super::{ScanInput, ScanResult};
use crate::keywords::is_keyword;
use crate::state::LexState;
use crate::token::TokenKind;

pub(super) fn scan(input: ScanInput<'_>) -> Option<ScanResult> {
    let cursor = input.cursor;
    if !cursor.current_char().is_some_and(is_ident_start) {
        return None;
    }

    let mut word = cursor;
    word.eat_while_char(is_ident_continue);
    let kind = if !keywords_suppressed(input) && is_keyword(cursor.slice_to(word.pos())) {
        TokenKind::Keyword
    } else {
        TokenKind::Identifier
    };
    Some(ScanResult::new(word.pos(), kind, input.state))
}

/// Markup tags, comments, and words glued to preceding text never hold
/// keywords.
fn keywords_suppressed(input: ScanInput<'_>) -> bool {
    input.after_text || matches!(input.state, LexState::InHtmlTag | LexState::InComment)
}

#[inline]
pub(super) fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

#[inline]
pub(super) fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
