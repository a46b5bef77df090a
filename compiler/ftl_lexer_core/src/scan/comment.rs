//! Comments: `<#-- ... -->` and `<!-- ... -->`.
//!
//! The body is emitted one character per token so the `todo` probe runs
//! at every position. Once a `todo` marker is seen the rest of the comment
//! is `COMMENT_TODO`.

use super::{ScanInput, ScanResult};
use crate::cursor::Cursor;
use crate::state::LexState;
use crate::token::TokenKind;

const TODO_MARKER: &[u8] = b"todo";

pub(super) fn scan(input: ScanInput<'_>) -> Option<ScanResult> {
    let cursor = input.cursor;
    let pos = cursor.pos();

    if cursor.starts_with(b"<#--") || cursor.starts_with(b"<!--") {
        return Some(ScanResult::new(
            pos + 4,
            TokenKind::CommentStart,
            LexState::InComment,
        ));
    }

    // `-` is left for the `-->` check below.
    if input.state == LexState::InComment && cursor.current() != b'-' {
        let end = cursor.next_char_end();
        return Some(if todo_ahead(cursor) {
            ScanResult::new(end, TokenKind::CommentTodo, LexState::InTodo)
        } else {
            ScanResult::new(end, TokenKind::CommentStart, LexState::InComment)
        });
    }

    if cursor.starts_with(b"-->") {
        return Some(ScanResult::new(
            pos + 3,
            TokenKind::CommentEnd,
            LexState::Normal,
        ));
    }

    if input.state == LexState::InTodo {
        return Some(ScanResult::new(
            cursor.next_char_end(),
            TokenKind::CommentTodo,
            LexState::InTodo,
        ));
    }

    None
}

/// `todo` in any letter case, after optional whitespace.
fn todo_ahead(mut cursor: Cursor<'_>) -> bool {
    cursor.eat_while_char(char::is_whitespace);
    cursor
        .remaining()
        .get(..TODO_MARKER.len())
        .is_some_and(|word| word.eq_ignore_ascii_case(TODO_MARKER))
}
