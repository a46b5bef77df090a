//! Interpolations: `${`, `}`, and `.member` access.

use super::word::{is_ident_continue, is_ident_start};
use super::{ScanInput, ScanResult};
use crate::cursor::Cursor;
use crate::state::LexState;
use crate::token::TokenKind;

pub(super) fn scan(input: ScanInput<'_>) -> Option<ScanResult> {
    let cursor = input.cursor;
    let pos = cursor.pos();

    if cursor.starts_with(b"${") {
        return Some(ScanResult::new(
            pos + 2,
            TokenKind::InterpolationStart,
            LexState::InInterpolation,
        ));
    }

    // Closes in every state, including markup text and directives.
    if cursor.current() == b'}' {
        return Some(ScanResult::new(
            pos + 1,
            TokenKind::InterpolationEnd,
            LexState::Normal,
        ));
    }

    member_access(cursor)
}

/// `.` followed by an identifier, in any state.
fn member_access(mut cursor: Cursor<'_>) -> Option<ScanResult> {
    if cursor.current() != b'.' {
        return None;
    }
    cursor.advance();
    if !cursor.current_char().is_some_and(is_ident_start) {
        return None;
    }
    cursor.eat_while_char(is_ident_continue);
    Some(ScanResult::new(
        cursor.pos(),
        TokenKind::Expression,
        LexState::InInterpolation,
    ))
}
