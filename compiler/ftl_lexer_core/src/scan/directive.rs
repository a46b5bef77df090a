//! Directive delimiters: `<#`, `</#`, and `/>` inside a directive.

use super::{ScanInput, ScanResult};
use crate::state::LexState;
use crate::token::TokenKind;

pub(super) fn scan(input: ScanInput<'_>) -> Option<ScanResult> {
    let cursor = input.cursor;
    let pos = cursor.pos();

    if cursor.starts_with(b"<#") {
        return Some(ScanResult::new(
            pos + 2,
            TokenKind::DirectiveStart,
            LexState::InDirective,
        ));
    }

    // Self-closing `<#macro/>` reports DIRECTIVE_START for the `/>`.
    if input.state == LexState::InDirective && cursor.starts_with(b"/>") {
        return Some(ScanResult::new(
            pos + 2,
            TokenKind::DirectiveStart,
            LexState::Normal,
        ));
    }

    if cursor.starts_with(b"</#") {
        return Some(ScanResult::new(
            pos + 3,
            TokenKind::DirectiveClosing,
            LexState::InDirective,
        ));
    }

    None
}
