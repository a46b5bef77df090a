//! Stateful facade in the shape editors drive: start, then advance and
//! query the current token until it runs out.

use crate::session::Session;
use crate::token::{Token, TokenKind};

/// Cursor-style tokenizer over one range of a buffer.
///
/// Each `Lexer` is single-use. After the last token, the current kind is
/// `None` and the start and end offsets both sit at the range end.
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    /// Session after the current token.
    session: Session<'a>,
    token: Option<Token>,
}

impl<'a> Lexer<'a> {
    /// Start lexing `buffer[start_offset..end_offset]` from an encoded
    /// checkpoint, and position on the first token.
    pub fn start(buffer: &'a str, start_offset: u32, end_offset: u32, initial_state: u32) -> Self {
        let session = Session::start(buffer, start_offset, end_offset, initial_state);
        tracing::debug!(
            start = session.view().start(),
            end = session.view().end(),
            state = %session.checkpoint().state,
            after_text = session.checkpoint().after_text,
            "lexer started"
        );
        let mut lexer = Self {
            session,
            token: None,
        };
        lexer.advance();
        lexer
    }

    /// Move to the next token. A no-op once the range is exhausted.
    pub fn advance(&mut self) {
        match self.session.advance() {
            Some((next, token)) => {
                self.session = next;
                self.token = Some(token);
            }
            None => {
                if self.token.take().is_some() {
                    tracing::debug!(end = self.session.pos(), "lexer reached range end");
                }
            }
        }
    }

    #[inline]
    pub fn current_token(&self) -> Option<Token> {
        self.token
    }

    /// Kind of the current token, `None` at the end.
    #[inline]
    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.token.map(|token| token.kind)
    }

    pub fn current_token_start(&self) -> u32 {
        self.token.map_or(self.session.pos(), |token| token.start)
    }

    pub fn current_token_end(&self) -> u32 {
        self.token.map_or(self.session.pos(), |token| token.end)
    }

    /// Encoded checkpoint after the current token. Feeding it back to
    /// [`Lexer::start`] at [`current_token_end`](Self::current_token_end)
    /// resumes exactly.
    #[inline]
    pub fn current_state(&self) -> u32 {
        self.session.checkpoint().encode()
    }

    #[inline]
    pub fn buffer(&self) -> &'a str {
        self.session.view().source()
    }

    /// Exclusive end of the lexed range.
    #[inline]
    pub fn buffer_end(&self) -> u32 {
        self.session.view().end()
    }
}
