use super::*;
use crate::DEMO_TEXT;
use ftl_lexer_core::LexState;
use pretty_assertions::assert_eq;

fn span(category: HighlightCategory, start: u32, end: u32) -> HighlightSpan {
    HighlightSpan {
        category,
        start,
        end,
    }
}

#[test]
fn directive_spans() {
    use HighlightCategory::{Directive, Identifier, Keyword};
    assert_eq!(
        highlight("<#if x>"),
        vec![
            span(Directive, 0, 2),
            span(Keyword, 2, 4),
            span(Identifier, 5, 6),
            span(Directive, 6, 7),
        ]
    );
}

#[test]
fn comment_body_merges_into_one_span() {
    assert_eq!(
        highlight("<#-- hi -->"),
        vec![span(HighlightCategory::Comment, 0, 11)]
    );
}

#[test]
fn todo_body_is_unstyled() {
    assert_eq!(
        highlight("<#-- todo -->"),
        vec![
            span(HighlightCategory::Comment, 0, 4),
            span(HighlightCategory::Comment, 10, 13),
        ]
    );
}

#[test]
fn markup_tag_merges() {
    assert_eq!(
        highlight("<p>"),
        vec![span(HighlightCategory::MarkupTag, 0, 3)]
    );
}

#[test]
fn separated_same_category_stays_split() {
    // The space between the identifiers is unstyled TEXT.
    let spans = highlight("a b");
    assert_eq!(
        spans,
        vec![
            span(HighlightCategory::Identifier, 0, 1),
            span(HighlightCategory::Identifier, 2, 3),
        ]
    );
}

#[test]
fn range_from_checkpoint() {
    let state = u32::from(LexState::InComment.code());
    assert_eq!(
        highlight_range("xx-->", 0, 5, state),
        vec![span(HighlightCategory::Comment, 0, 5)]
    );
}

#[test]
fn demo_text_uses_every_category_except_numbers_and_keywords() {
    let spans = highlight(DEMO_TEXT);
    for wanted in [
        HighlightCategory::Directive,
        HighlightCategory::Interpolation,
        HighlightCategory::Comment,
        HighlightCategory::String,
        HighlightCategory::Identifier,
        HighlightCategory::MarkupTag,
    ] {
        assert!(spans.iter().any(|s| s.category == wanted), "{wanted}");
    }
}

#[test]
fn spans_follow_token_order() {
    let spans = highlight(DEMO_TEXT);
    assert!(spans.windows(2).all(|w| w[0].end <= w[1].start));
    assert!(spans.iter().all(|s| s.start < s.end));
}
