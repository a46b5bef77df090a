//! Scanning strategies and their fixed-priority dispatch.
//!
//! Each strategy is a pure function from the cursor, the current state and
//! the after-text flag to an optional match. Strategies are tried in
//! priority order; the first match wins. When none matches, exactly one
//! character is emitted as `TEXT` and the state is left alone, so every
//! step makes progress.
//!
//! | Priority | Strategy       | Recognizes                                   |
//! |----------|----------------|----------------------------------------------|
//! | 1        | comment        | `<#--` `<!--` body chars, `todo`, `-->`      |
//! | 2        | directive      | `<#`, `/>` in a directive, `</#`             |
//! | 3        | interpolation  | `${`, `}`, `.member`                         |
//! | 4        | string         | quoted literals                              |
//! | 5        | html           | `<` and the tag name                         |
//! | 6        | tag end        | `>` and `/>`                                 |
//! | 7        | word           | keywords and identifiers                     |
//! | 8        | number         | digit runs and single-character operators    |

mod comment;
mod directive;
mod html;
mod interpolation;
mod number;
mod string;
mod tag_end;
mod word;

use crate::cursor::Cursor;
use crate::state::LexState;
use crate::token::TokenKind;

/// What a strategy sees.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ScanInput<'a> {
    /// Positioned at the token start; lookahead bounded by the range end.
    pub cursor: Cursor<'a>,
    pub state: LexState,
    /// The previous token was `TEXT`.
    pub after_text: bool,
}

/// A successful match: where the token ends, what it is, and the state
/// after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ScanResult {
    pub end: u32,
    pub kind: TokenKind,
    pub state: LexState,
}

impl ScanResult {
    #[inline]
    pub(crate) const fn new(end: u32, kind: TokenKind, state: LexState) -> Self {
        Self { end, kind, state }
    }
}

type Strategy = fn(ScanInput<'_>) -> Option<ScanResult>;

/// Strategies in priority order.
const STRATEGIES: [(&str, Strategy); 8] = [
    ("comment", comment::scan),
    ("directive", directive::scan),
    ("interpolation", interpolation::scan),
    ("string", string::scan),
    ("html", html::scan),
    ("tag_end", tag_end::scan),
    ("word", word::scan),
    ("number", number::scan),
];

/// Scan one token at the cursor. The cursor must not be at the range end.
pub(crate) fn dispatch(input: ScanInput<'_>) -> ScanResult {
    debug_assert!(!input.cursor.is_eof(), "dispatch at range end");
    for (name, strategy) in STRATEGIES {
        if let Some(result) = strategy(input) {
            debug_assert!(
                result.end > input.cursor.pos() && result.end <= input.cursor.end(),
                "{name} strategy produced an empty or out-of-range token"
            );
            tracing::trace!(
                strategy = name,
                pos = input.cursor.pos(),
                end = result.end,
                kind = %result.kind,
                state = %result.state,
                "scanned"
            );
            return result;
        }
    }
    let end = input.cursor.next_char_end();
    tracing::trace!(pos = input.cursor.pos(), end, "no strategy matched, emitting TEXT");
    ScanResult::new(end, TokenKind::Text, input.state)
}
