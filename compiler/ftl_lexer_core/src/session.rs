//! Lexing sessions as plain values.
//!
//! A [`Session`] is the complete resumable state of a tokenizer run: the
//! view, the position, and the checkpoint. Advancing consumes the session
//! and returns the next one with the token, so a session saved at any
//! boundary can be resumed later with identical results.

use crate::buffer::BufferView;
use crate::scan::{self, ScanInput};
use crate::state::Checkpoint;
use crate::token::{Token, TokenKind};

/// Resumable tokenizer state at a token boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Session<'a> {
    view: BufferView<'a>,
    pos: u32,
    checkpoint: Checkpoint,
}

impl<'a> Session<'a> {
    /// Session at the start of `view`.
    pub fn new(view: BufferView<'a>, checkpoint: Checkpoint) -> Self {
        Self {
            view,
            pos: view.start(),
            checkpoint,
        }
    }

    /// Session over `source[start..end]` from an encoded checkpoint.
    ///
    /// The range is clamped into the source; unknown state codes start in
    /// `Normal`.
    pub fn start(source: &'a str, start: u32, end: u32, initial_state: u32) -> Self {
        Self::new(
            BufferView::new(source, start, end),
            Checkpoint::decode(initial_state),
        )
    }

    #[inline]
    pub fn view(&self) -> BufferView<'a> {
        self.view
    }

    /// Offset of the next token.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Checkpoint at the current boundary.
    #[inline]
    pub fn checkpoint(&self) -> Checkpoint {
        self.checkpoint
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.pos >= self.view.end()
    }

    /// Scan the next token. Returns `None` once the range is exhausted.
    pub fn advance(self) -> Option<(Self, Token)> {
        if self.is_finished() {
            return None;
        }
        let result = scan::dispatch(ScanInput {
            cursor: self.view.cursor_at(self.pos),
            state: self.checkpoint.state,
            after_text: self.checkpoint.after_text,
        });
        let token = Token::new(result.kind, self.pos, result.end);
        let next = Self {
            view: self.view,
            pos: result.end,
            checkpoint: Checkpoint::new(result.state, result.kind == TokenKind::Text),
        };
        Some((next, token))
    }

    /// Iterate over the remaining tokens.
    pub fn tokens(self) -> Tokens<'a> {
        Tokens { session: self }
    }
}

/// Iterator over the tokens of a session.
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    session: Session<'a>,
}

impl<'a> Tokens<'a> {
    /// The session at the next token boundary.
    pub fn session(&self) -> Session<'a> {
        self.session
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let (next, token) = self.session.advance()?;
        self.session = next;
        Some(token)
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}

/// Tokenize a whole document from the start state.
pub fn tokenize(source: &str) -> Vec<Token> {
    Session::new(BufferView::full(source), Checkpoint::START)
        .tokens()
        .collect()
}

/// Tokenize `source[start..end]` from an encoded checkpoint.
pub fn tokenize_range(source: &str, start: u32, end: u32, initial_state: u32) -> Vec<Token> {
    Session::start(source, start, end, initial_state)
        .tokens()
        .collect()
}
