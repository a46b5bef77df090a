//! Incremental re-lexing from saved checkpoints.
//!
//! A [`CheckpointTable`] keeps one [`ResumePoint`] per line: the first token
//! boundary at or after the line start, the checkpoint there, and how far
//! ahead the tokens up to the next point looked. After an edit, lexing
//! resumes from the last point whose earlier tokens never examined the
//! edited text, and stops at the first recorded boundary past the edit
//! whose checkpoint matches the old one. From there on the old tokens are
//! still valid, shifted by the edit.
//!
//! # Example
//!
//! ```
//! use ftl_lexer_core::{tokenize, CheckpointTable, TextEdit};
//!
//! let old = "<#if a>\nx\n</#if>\n";
//! let mut table = CheckpointTable::build(old);
//! let old_tokens = tokenize(old);
//!
//! // Replace `x` with `${y}`.
//! let new = "<#if a>\n${y}\n</#if>\n";
//! let edit = TextEdit::replace(8, 1, 4);
//! let relexed = table.relex(new, edit);
//!
//! assert_eq!(relexed.splice(&old_tokens, edit), tokenize(new));
//! assert_eq!(table, CheckpointTable::build(new));
//! ```

use crate::buffer::BufferView;
use crate::cursor::to_u32;
use crate::session::Session;
use crate::state::{Checkpoint, LexState};
use crate::token::Token;

/// Farthest any scanner looks past the end of the token it produces.
const LOOKAHEAD: u32 = 4;

/// A replacement of `old_len` bytes at `start` by `new_len` bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextEdit {
    pub start: u32,
    pub old_len: u32,
    pub new_len: u32,
}

impl TextEdit {
    pub const fn replace(start: u32, old_len: u32, new_len: u32) -> Self {
        Self {
            start,
            old_len,
            new_len,
        }
    }

    pub const fn insert(at: u32, len: u32) -> Self {
        Self::replace(at, 0, len)
    }

    pub const fn delete(start: u32, len: u32) -> Self {
        Self::replace(start, len, 0)
    }

    /// End of the replaced text in the old document.
    pub const fn old_end(&self) -> u32 {
        self.start.saturating_add(self.old_len)
    }

    /// End of the inserted text in the new document.
    pub const fn new_end(&self) -> u32 {
        self.start.saturating_add(self.new_len)
    }

    /// Positive = text grows, negative = text shrinks.
    pub fn length_delta(&self) -> i64 {
        i64::from(self.new_len) - i64::from(self.old_len)
    }

    /// Map an old offset at or after [`old_end`](Self::old_end) into the
    /// new document.
    fn shift(&self, offset: u32) -> u32 {
        offset
            .saturating_sub(self.old_end())
            .saturating_add(self.new_end())
    }

    /// Map a new offset at or after [`new_end`](Self::new_end) back into
    /// the old document.
    fn unshift(&self, offset: u32) -> u32 {
        offset
            .saturating_sub(self.new_end())
            .saturating_add(self.old_end())
    }
}

/// Saved lexer state at the first token boundary of a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ResumePoint {
    pub offset: u32,
    pub checkpoint: Checkpoint,
    /// Exclusive end of the text examined by the tokens from this point up
    /// to the next one. Past the document end when a scanner ran into it.
    pub reach: u32,
}

impl ResumePoint {
    pub const START: ResumePoint = ResumePoint {
        offset: 0,
        checkpoint: Checkpoint::START,
        reach: 0,
    };
}

/// Per-line resume points of a document, kept current across edits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckpointTable {
    points: Vec<ResumePoint>,
}

/// Outcome of [`CheckpointTable::relex`]: the tokens of `[start, end)` in
/// the edited document. Tokens outside the range are unchanged (shifted by
/// the edit past `end`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Relexed {
    pub start: u32,
    pub end: u32,
    /// `true` if lexing re-joined the old token stream before the end of
    /// the document.
    pub rejoined: bool,
    pub tokens: Vec<Token>,
}

impl Relexed {
    /// Build the new document's tokens from the tokens before the edit.
    pub fn splice(&self, old_tokens: &[Token], edit: TextEdit) -> Vec<Token> {
        let old_stop = edit.unshift(self.end);
        let prefix = old_tokens
            .iter()
            .take_while(|token| token.end <= self.start)
            .copied();
        let suffix = old_tokens
            .iter()
            .skip_while(|token| token.start < old_stop)
            .map(|token| Token::new(token.kind, edit.shift(token.start), edit.shift(token.end)));
        prefix
            .chain(self.tokens.iter().copied())
            .chain(suffix)
            .collect()
    }
}

impl CheckpointTable {
    /// Lex `source` from the start and record a point for every line.
    pub fn build(source: &str) -> Self {
        let mut table = Self::default();
        let session = Session::new(BufferView::full(source), Checkpoint::START);
        walk(source, session, &mut table.points, |_, _| false, |_| {});
        tracing::debug!(points = table.points.len(), "checkpoint table built");
        table
    }

    pub fn points(&self) -> &[ResumePoint] {
        &self.points
    }

    /// Point to resume from for an edit starting at `offset`: the last one
    /// at or before `offset` whose earlier tokens never examined text at or
    /// after `offset`.
    pub fn resume_point(&self, offset: u32) -> ResumePoint {
        self.resume_index(offset)
            .map_or(ResumePoint::START, |index| self.points[index])
    }

    fn resume_index(&self, offset: u32) -> Option<usize> {
        let mut reach = 0;
        let mut found = None;
        for (index, point) in self.points.iter().enumerate() {
            if point.offset > offset || reach > offset {
                break;
            }
            found = Some(index);
            reach = reach.max(point.reach);
        }
        found
    }

    /// Re-lex `source`, the document after `edit`, and bring the table up
    /// to date.
    pub fn relex(&mut self, source: &str, edit: TextEdit) -> Relexed {
        let index = self.resume_index(edit.start);
        let resume = index.map_or(ResumePoint::START, |index| self.points[index]);
        let keep = index.unwrap_or(0);

        // Points past the replaced text, in new-document offsets.
        let tail: Vec<ResumePoint> = self.points[keep..]
            .iter()
            .filter(|point| point.offset > edit.old_end())
            .map(|point| ResumePoint {
                offset: edit.shift(point.offset),
                checkpoint: point.checkpoint,
                reach: edit.shift(point.reach),
            })
            .collect();
        self.points.truncate(keep);

        let mut tail = tail.into_iter().peekable();
        let mut tokens = Vec::new();
        let new_end = edit.new_end();
        let session = Session::new(
            BufferView::new(source, resume.offset, u32::MAX),
            resume.checkpoint,
        );
        let (end, rejoined) = walk(
            source,
            session,
            &mut self.points,
            |pos, checkpoint| {
                // At `new_end` the byte behind the cursor is new text.
                if pos <= new_end {
                    return false;
                }
                while tail.next_if(|point| point.offset < pos).is_some() {}
                tail.peek()
                    .is_some_and(|point| point.offset == pos && point.checkpoint == checkpoint)
            },
            |token| tokens.push(token),
        );
        if rejoined {
            self.points.extend(tail);
        }

        tracing::debug!(
            start = resume.offset,
            end,
            rejoined,
            tokens = tokens.len(),
            "relexed edit"
        );
        Relexed {
            start: resume.offset,
            end,
            rejoined,
            tokens,
        }
    }
}

/// Lex from `session`, pushing a point at each line's first boundary.
///
/// Stops at the end of the source, or at a line boundary where `rejoins`
/// holds (that point is not pushed). Returns the stop offset and whether
/// `rejoins` stopped it.
fn walk(
    source: &str,
    mut session: Session<'_>,
    points: &mut Vec<ResumePoint>,
    mut rejoins: impl FnMut(u32, Checkpoint) -> bool,
    mut emit: impl FnMut(Token),
) -> (u32, bool) {
    let mut line_start = true;
    loop {
        let pos = session.pos();
        let checkpoint = session.checkpoint();
        if line_start {
            if rejoins(pos, checkpoint) {
                return (pos, true);
            }
            points.push(ResumePoint {
                offset: pos,
                checkpoint,
                reach: pos,
            });
        }
        let Some((next, token)) = session.advance() else {
            return (pos, false);
        };
        if let Some(point) = points.last_mut() {
            point.reach = point.reach.max(lookahead_end(source, token, checkpoint.state));
        }
        line_start = memchr::memchr(b'\n', token.text(source).as_bytes()).is_some();
        emit(token);
        session = next;
    }
}

/// Exclusive end of the text the scanners examined to produce `token`
/// from `state`.
fn lookahead_end(source: &str, token: Token, state: LexState) -> u32 {
    let reach = token.end.saturating_add(LOOKAHEAD);
    if state != LexState::InComment {
        return reach;
    }
    // The `todo` probe skips any whitespace run from the token start.
    let run: usize = source
        .get(token.start as usize..)
        .unwrap_or_default()
        .chars()
        .take_while(|c| c.is_whitespace())
        .map(char::len_utf8)
        .sum();
    reach.max(
        token
            .start
            .saturating_add(to_u32(run))
            .saturating_add(LOOKAHEAD),
    )
}

#[cfg(test)]
mod tests;
