use crate::BufferView;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let view = BufferView::full("abc");
    assert_eq!(view.cursor_at(0).current(), b'a');
}

#[test]
fn advance_moves_forward() {
    let view = BufferView::full("abc");
    let mut cursor = view.cursor_at(0);
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_stops_at_end() {
    let view = BufferView::full("a");
    let mut cursor = view.cursor_at(0);
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.pos(), 1);
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
}

// === Peek ===

#[test]
fn peek_and_peek2() {
    let view = BufferView::full("abc");
    let cursor = view.cursor_at(0);
    assert_eq!(cursor.peek(), b'b');
    assert_eq!(cursor.peek2(), b'c');
}

#[test]
fn peek_near_end_returns_zero() {
    let view = BufferView::full("ab");
    let cursor = view.cursor_at(1);
    assert_eq!(cursor.peek(), 0);
    assert_eq!(cursor.peek2(), 0);
}

#[test]
fn prev_at_start_is_zero() {
    let view = BufferView::full("ab");
    assert_eq!(view.cursor_at(0).prev(), 0);
    assert_eq!(view.cursor_at(1).prev(), b'a');
}

// === Characters ===

#[test]
fn advance_char_moves_whole_scalar() {
    let view = BufferView::full("日本");
    let mut cursor = view.cursor_at(0);
    assert_eq!(cursor.current_char(), Some('日'));
    cursor.advance_char();
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.current_char(), Some('本'));
}

#[test]
fn next_char_end_at_eof_is_pos() {
    let view = BufferView::full("x");
    let cursor = view.cursor_at(1);
    assert_eq!(cursor.next_char_end(), 1);
    assert_eq!(cursor.current_char(), None);
}

#[test]
fn eat_while_char_handles_unicode() {
    let view = BufferView::full("größe=1");
    let mut cursor = view.cursor_at(0);
    cursor.eat_while_char(char::is_alphabetic);
    assert_eq!(cursor.pos(), 7);
    assert_eq!(cursor.current(), b'=');
}

#[test]
fn eat_while_bytes() {
    let view = BufferView::full("12.5x");
    let mut cursor = view.cursor_at(0);
    cursor.eat_while(|b| b.is_ascii_digit() || b == b'.');
    assert_eq!(cursor.pos(), 4);
}

#[test]
fn eat_while_respects_window() {
    let view = BufferView::new("123456", 0, 3);
    let mut cursor = view.cursor_at(0);
    cursor.eat_while(|b| b.is_ascii_digit());
    assert_eq!(cursor.pos(), 3);
}

// === Pattern Matching ===

#[test]
fn starts_with_within_window() {
    let view = BufferView::new("<#--x", 0, 3);
    let cursor = view.cursor_at(0);
    assert!(cursor.starts_with(b"<#-"));
    assert!(!cursor.starts_with(b"<#--"));
}

#[test]
fn slice_to_returns_text() {
    let view = BufferView::full("list x");
    let cursor = view.cursor_at(0);
    assert_eq!(cursor.slice_to(4), "list");
}

// === memchr Scanning ===

#[test]
fn skip_to_either_finds_first() {
    let view = BufferView::full("abc\\d\"e");
    let mut cursor = view.cursor_at(0);
    assert_eq!(cursor.skip_to_either(b'"', b'\\'), b'\\');
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn skip_to_either_missing_goes_to_end() {
    let view = BufferView::new("abc>def", 0, 3);
    let mut cursor = view.cursor_at(0);
    assert_eq!(cursor.skip_to_either(b'>', b' '), 0);
    assert_eq!(cursor.pos(), 3);
}
