//! Token kind to highlight category mapping.

use ftl_lexer_core::TokenKind;

/// Display category of a highlighted token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HighlightCategory {
    Directive,
    Interpolation,
    Comment,
    String,
    Number,
    Keyword,
    Identifier,
    MarkupTag,
}

impl HighlightCategory {
    /// All categories, in color settings order.
    pub const ALL: [HighlightCategory; 8] = [
        HighlightCategory::Directive,
        HighlightCategory::Interpolation,
        HighlightCategory::Comment,
        HighlightCategory::String,
        HighlightCategory::Number,
        HighlightCategory::Keyword,
        HighlightCategory::Identifier,
        HighlightCategory::MarkupTag,
    ];

    /// Stable key editors persist color choices under.
    pub const fn attribute_key(self) -> &'static str {
        match self {
            HighlightCategory::Directive => "FREEMARKER_DIRECTIVE",
            HighlightCategory::Interpolation => "FREEMARKER_INTERPOLATION",
            HighlightCategory::Comment => "FREEMARKER_COMMENT",
            HighlightCategory::String => "FREEMARKER_STRING",
            HighlightCategory::Number => "FREEMARKER_NUMBER",
            HighlightCategory::Keyword => "FREEMARKER_KEYWORD",
            HighlightCategory::Identifier => "FREEMARKER_IDENTIFIER",
            HighlightCategory::MarkupTag => "FREEMARKER_HTML_TAG",
        }
    }

    /// Generic editor color the category inherits until customized.
    pub const fn fallback_key(self) -> &'static str {
        match self {
            HighlightCategory::Directive | HighlightCategory::Keyword => "KEYWORD",
            HighlightCategory::Interpolation => "INSTANCE_FIELD",
            HighlightCategory::Comment => "LINE_COMMENT",
            HighlightCategory::String => "STRING",
            HighlightCategory::Number => "NUMBER",
            HighlightCategory::Identifier => "IDENTIFIER",
            HighlightCategory::MarkupTag => "MARKUP_TAG",
        }
    }

    /// Label in color settings.
    pub const fn display_name(self) -> &'static str {
        match self {
            HighlightCategory::Directive => "Directive",
            HighlightCategory::Interpolation => "Interpolation",
            HighlightCategory::Comment => "Comment",
            HighlightCategory::String => "String",
            HighlightCategory::Number => "Number",
            HighlightCategory::Keyword => "Keyword",
            HighlightCategory::Identifier => "Identifier",
            HighlightCategory::MarkupTag => "HTML Tag",
        }
    }
}

impl std::fmt::Display for HighlightCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.display_name())
    }
}

/// Category for `kind`, or `None` for tokens drawn in the default color.
///
/// `COMMENT_TODO` and `EXPRESSION` tokens are unstyled, like text and
/// operators.
pub const fn category(kind: TokenKind) -> Option<HighlightCategory> {
    match kind {
        TokenKind::DirectiveStart | TokenKind::DirectiveClosing | TokenKind::DirectiveEnd => {
            Some(HighlightCategory::Directive)
        }
        TokenKind::InterpolationStart | TokenKind::InterpolationEnd => {
            Some(HighlightCategory::Interpolation)
        }
        TokenKind::CommentStart | TokenKind::CommentEnd => Some(HighlightCategory::Comment),
        TokenKind::String => Some(HighlightCategory::String),
        TokenKind::Number => Some(HighlightCategory::Number),
        TokenKind::Keyword => Some(HighlightCategory::Keyword),
        TokenKind::Identifier => Some(HighlightCategory::Identifier),
        TokenKind::HtmlTagStart | TokenKind::HtmlTagEnd | TokenKind::HtmlTagContent => {
            Some(HighlightCategory::MarkupTag)
        }
        TokenKind::Text
        | TokenKind::Operator
        | TokenKind::CommentTodo
        | TokenKind::Expression => None,
    }
}
