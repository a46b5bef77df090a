//! Token kinds and the token record produced by the scanners.

/// Classification of a token.
///
/// Editors map these to highlight categories; the discriminants are not
/// part of the checkpoint contract and may be reordered.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// One character with no other classification.
    Text,
    /// `<#` opening a directive, or `/>` self-closing one.
    DirectiveStart,
    /// `</#`
    DirectiveClosing,
    /// `>` closing a directive or interpolation.
    DirectiveEnd,
    /// `${`
    InterpolationStart,
    /// `}`
    InterpolationEnd,
    /// `<#--`, `<!--`, or one character of comment body.
    CommentStart,
    /// `-->`
    CommentEnd,
    /// One character of a comment from the `todo` marker on.
    CommentTodo,
    Identifier,
    /// A quoted literal, or a lone quote adjacent to an interpolation.
    String,
    Number,
    Keyword,
    /// One of `+ - * / = < > ! & | ^ %`.
    Operator,
    /// `<` opening a markup tag.
    HtmlTagStart,
    /// `>` or `/>` closing a markup tag.
    HtmlTagEnd,
    /// Markup tag name.
    HtmlTagContent,
    /// `.name` member access.
    Expression,
}

impl TokenKind {
    pub const ALL: [TokenKind; 18] = [
        TokenKind::Text,
        TokenKind::DirectiveStart,
        TokenKind::DirectiveClosing,
        TokenKind::DirectiveEnd,
        TokenKind::InterpolationStart,
        TokenKind::InterpolationEnd,
        TokenKind::CommentStart,
        TokenKind::CommentEnd,
        TokenKind::CommentTodo,
        TokenKind::Identifier,
        TokenKind::String,
        TokenKind::Number,
        TokenKind::Keyword,
        TokenKind::Operator,
        TokenKind::HtmlTagStart,
        TokenKind::HtmlTagEnd,
        TokenKind::HtmlTagContent,
        TokenKind::Expression,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Text => "TEXT",
            TokenKind::DirectiveStart => "DIRECTIVE_START",
            TokenKind::DirectiveClosing => "DIRECTIVE_CLOSING",
            TokenKind::DirectiveEnd => "DIRECTIVE_END",
            TokenKind::InterpolationStart => "INTERPOLATION_START",
            TokenKind::InterpolationEnd => "INTERPOLATION_END",
            TokenKind::CommentStart => "COMMENT_START",
            TokenKind::CommentEnd => "COMMENT_END",
            TokenKind::CommentTodo => "COMMENT_TODO",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Operator => "OPERATOR",
            TokenKind::HtmlTagStart => "HTML_TAG_START",
            TokenKind::HtmlTagEnd => "HTML_TAG_END",
            TokenKind::HtmlTagContent => "HTML_TAG_CONTENT",
            TokenKind::Expression => "EXPRESSION",
        }
    }

    /// The exact text of kinds that only ever have one spelling.
    pub const fn fixed_lexeme(self) -> Option<&'static str> {
        match self {
            TokenKind::DirectiveClosing => Some("</#"),
            TokenKind::DirectiveEnd => Some(">"),
            TokenKind::InterpolationStart => Some("${"),
            TokenKind::InterpolationEnd => Some("}"),
            TokenKind::CommentEnd => Some("-->"),
            TokenKind::HtmlTagStart => Some("<"),
            _ => None,
        }
    }

    pub const fn is_comment(self) -> bool {
        matches!(
            self,
            TokenKind::CommentStart | TokenKind::CommentEnd | TokenKind::CommentTodo
        )
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

/// A classified half-open byte range `[start, end)` of the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub start: u32,
    pub end: u32,
}

const _: () = assert!(std::mem::size_of::<Token>() <= 12);

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, start: u32, end: u32) -> Self {
        Self { kind, start, end }
    }

    /// Length in bytes.
    #[inline]
    pub const fn len(self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// The token's text, or `""` if the range does not fit `source`.
    pub fn text(self, source: &str) -> &str {
        source
            .get(self.start as usize..self.end as usize)
            .unwrap_or_default()
    }
}
