//! Markup tags: `<` and the tag name after it.

use super::{ScanInput, ScanResult};
use crate::state::LexState;
use crate::token::TokenKind;

pub(super) fn scan(input: ScanInput<'_>) -> Option<ScanResult> {
    let cursor = input.cursor;

    match input.state {
        LexState::Normal if cursor.current() == b'<' => Some(ScanResult::new(
            cursor.pos() + 1,
            TokenKind::HtmlTagStart,
            LexState::StartingHtmlTag,
        )),
        // Tag name runs to `>` or a space. Tabs and newlines are part of it.
        LexState::StartingHtmlTag => {
            let mut name = cursor;
            name.skip_to_either(b'>', b' ');
            (name.pos() > cursor.pos()).then_some(ScanResult::new(
                name.pos(),
                TokenKind::HtmlTagContent,
                LexState::InHtmlTag,
            ))
        }
        _ => None,
    }
}
