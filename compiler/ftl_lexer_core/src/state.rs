//! Lexical states and the checkpoint an editor stores between sessions.
//!
//! The state codes are an external contract: editors persist them per line
//! and hand them back to [`Lexer::start`](crate::Lexer::start). Existing
//! codes never move; new states take fresh codes.
//!
//! # Checkpoint Encoding
//!
//! A [`Checkpoint`] packs into a `u32`:
//!
//! ```text
//! bits 0..8   LexState code
//! bit  8      previous token was TEXT (keyword suppression)
//! ```
//!
//! A bare state code (`0..=6`) decodes to that state with the flag clear,
//! so callers that only ever store state codes keep working.

/// Lexical context the tokenizer is in.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LexState {
    /// Plain markup and text.
    #[default]
    Normal = 0,
    /// Between `<#` or `</#` and the closing `>`.
    InDirective = 1,
    /// Inside a `<#-- -->` or `<!-- -->` comment.
    InComment = 2,
    /// Right after a markup `<`, before the tag name.
    StartingHtmlTag = 3,
    /// After a markup tag name, until `>` or `/>`.
    InHtmlTag = 4,
    /// Inside a comment, after a `todo` marker.
    InTodo = 5,
    /// Inside `${ ... }`.
    InInterpolation = 6,
}

impl LexState {
    /// All states, in code order.
    pub const ALL: [LexState; 7] = [
        LexState::Normal,
        LexState::InDirective,
        LexState::InComment,
        LexState::StartingHtmlTag,
        LexState::InHtmlTag,
        LexState::InTodo,
        LexState::InInterpolation,
    ];

    /// Stable integer code.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Decode a state code. Unknown codes decode to [`LexState::Normal`].
    pub const fn from_code(code: u8) -> Self {
        match code {
            1 => LexState::InDirective,
            2 => LexState::InComment,
            3 => LexState::StartingHtmlTag,
            4 => LexState::InHtmlTag,
            5 => LexState::InTodo,
            6 => LexState::InInterpolation,
            _ => LexState::Normal,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            LexState::Normal => "NORMAL",
            LexState::InDirective => "IN_DIRECTIVE",
            LexState::InComment => "IN_COMMENT",
            LexState::StartingHtmlTag => "STARTING_HTML_TAG",
            LexState::InHtmlTag => "IN_HTML_TAG",
            LexState::InTodo => "IN_TODO",
            LexState::InInterpolation => "IN_INTERPOLATION",
        }
    }

    /// Whether this state is inside a comment (plain or after `todo`).
    pub const fn is_comment(self) -> bool {
        matches!(self, LexState::InComment | LexState::InTodo)
    }
}

impl std::fmt::Display for LexState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

const STATE_MASK: u32 = 0xFF;
const AFTER_TEXT: u32 = 1 << 8;

/// Everything needed to resume lexing at a token boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Checkpoint {
    pub state: LexState,
    /// The token before the boundary was `TEXT`. Words right after text
    /// are never keywords.
    pub after_text: bool,
}

impl Checkpoint {
    /// Start of a document.
    pub const START: Checkpoint = Checkpoint::new(LexState::Normal, false);

    #[inline]
    pub const fn new(state: LexState, after_text: bool) -> Self {
        Self { state, after_text }
    }

    /// Pack into the integer form handed to editors.
    pub fn encode(self) -> u32 {
        let flag = if self.after_text { AFTER_TEXT } else { 0 };
        u32::from(self.state.code()) | flag
    }

    /// Unpack an integer checkpoint. Unknown state codes decode to `Normal`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "masked to the low byte before the cast"
    )]
    pub const fn decode(raw: u32) -> Self {
        Self {
            state: LexState::from_code((raw & STATE_MASK) as u8),
            after_text: raw & AFTER_TEXT != 0,
        }
    }
}

impl From<LexState> for Checkpoint {
    fn from(state: LexState) -> Self {
        Checkpoint::new(state, false)
    }
}
