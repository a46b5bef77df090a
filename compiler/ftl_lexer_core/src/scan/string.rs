//! Quoted literals.
//!
//! A quote that borders an interpolation (`"${` ahead or `}"` behind) is a
//! one-character `STRING` and moves into the interpolation, so
//! `"Hello ${name}!"` lexes as quote, text, interpolation, text, quote.

use super::{ScanInput, ScanResult};
use crate::cursor::Cursor;
use crate::state::LexState;
use crate::token::TokenKind;

pub(super) fn scan(input: ScanInput<'_>) -> Option<ScanResult> {
    let cursor = input.cursor;
    let quote = cursor.current();
    if quote != b'"' && quote != b'\'' {
        return None;
    }

    if borders_interpolation(cursor) {
        return Some(ScanResult::new(
            cursor.pos() + 1,
            TokenKind::String,
            LexState::InInterpolation,
        ));
    }

    let mut body = cursor;
    body.advance();
    loop {
        match body.skip_to_either(quote, b'\\') {
            // Unterminated: the literal runs to the range end.
            0 => break,
            b'\\' => {
                body.advance();
                body.advance_char();
            }
            _ => {
                body.advance();
                break;
            }
        }
    }

    Some(ScanResult::new(
        body.pos(),
        TokenKind::String,
        state_after_literal(input.state),
    ))
}

/// `${` right after the quote (within the range), or `}` right before it
/// (anywhere in the buffer).
fn borders_interpolation(cursor: Cursor<'_>) -> bool {
    (cursor.peek() == b'$' && cursor.peek2() == b'{') || cursor.prev() == b'}'
}

/// Literals inside directives and markup tags stay there; anywhere else
/// the state returns to `Normal`.
fn state_after_literal(state: LexState) -> LexState {
    match state {
        LexState::InDirective | LexState::InHtmlTag => state,
        _ => LexState::Normal,
    }
}
