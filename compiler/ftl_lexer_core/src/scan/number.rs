//! Numbers and single-character operators.

use super::{ScanInput, ScanResult};
use crate::token::TokenKind;

const OPERATORS: &[u8] = b"+-*/=<>!&|^%";

pub(super) fn scan(input: ScanInput<'_>) -> Option<ScanResult> {
    let cursor = input.cursor;
    let first = cursor.current();

    // ASCII digits only; `1.2.3` is one token.
    if first.is_ascii_digit() {
        let mut number = cursor;
        number.eat_while(|b| b.is_ascii_digit() || b == b'.');
        return Some(ScanResult::new(number.pos(), TokenKind::Number, input.state));
    }

    OPERATORS
        .contains(&first)
        .then_some(ScanResult::new(
            cursor.pos() + 1,
            TokenKind::Operator,
            input.state,
        ))
}
