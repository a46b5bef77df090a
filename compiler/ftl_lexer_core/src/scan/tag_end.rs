//! Closing brackets: `>` and `/>`.

use super::{ScanInput, ScanResult};
use crate::state::LexState;
use crate::token::TokenKind;

pub(super) fn scan(input: ScanInput<'_>) -> Option<ScanResult> {
    let cursor = input.cursor;
    let pos = cursor.pos();

    if cursor.current() == b'>' {
        let (kind, state) = match input.state {
            LexState::InDirective | LexState::InInterpolation => {
                (TokenKind::DirectiveEnd, LexState::Normal)
            }
            LexState::InHtmlTag => (TokenKind::HtmlTagEnd, LexState::Normal),
            other => (TokenKind::Text, other),
        };
        return Some(ScanResult::new(pos + 1, kind, state));
    }

    if matches!(
        input.state,
        LexState::InHtmlTag | LexState::InInterpolation
    ) && cursor.starts_with(b"/>")
    {
        return Some(ScanResult::new(
            pos + 2,
            TokenKind::HtmlTagEnd,
            LexState::Normal,
        ));
    }

    None
}
