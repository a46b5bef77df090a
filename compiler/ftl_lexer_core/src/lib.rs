//! Resumable tokenizer for FreeMarker templates.
//!
//! Classifies every byte of a template, well-formed or not, into exactly
//! one token, tracking which construct the cursor is inside: a directive
//! tag, a markup tag, an interpolation, or a comment.
//!
//! The tokenizer is built for editors. A run over `[start, end)` can begin
//! from any checkpoint saved during an earlier run and produces exactly the
//! tokens a run from the start of the document would have produced there.
//!
//! # Layers
//!
//! - [`Session`]: the resumable state as a value; `advance` returns the
//!   next session and the token.
//! - [`Lexer`]: the start / advance / query facade over a session.
//! - [`tokenize`], [`tokenize_range`]: collect a whole range.
//! - [`CheckpointTable`]: per-line checkpoints kept current across edits.
//!
//! # Example
//!
//! ```
//! use ftl_lexer_core::{tokenize, TokenKind};
//!
//! let source = "<#if user??>Hi ${user.name}</#if>";
//! let tokens = tokenize(source);
//! assert_eq!(tokens[0].kind, TokenKind::DirectiveStart);
//! assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::DirectiveEnd));
//!
//! let text: String = tokens.iter().map(|t| t.text(source)).collect();
//! assert_eq!(text, source);
//! ```

mod buffer;
mod cursor;
mod incremental;
mod keywords;
mod lexer;
mod scan;
mod session;
mod state;
mod token;

pub use buffer::BufferView;
pub use cursor::Cursor;
pub use incremental::{CheckpointTable, Relexed, ResumePoint, TextEdit};
pub use keywords::{is_keyword, KEYWORDS};
pub use lexer::Lexer;
pub use session::{tokenize, tokenize_range, Session, Tokens};
pub use state::{Checkpoint, LexState};
pub use token::{Token, TokenKind};
