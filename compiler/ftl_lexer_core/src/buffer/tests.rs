use super::*;

// === Clamping ===

#[test]
fn full_view_covers_source() {
    let view = BufferView::full("<#if x>");
    assert_eq!((view.start(), view.end()), (0, 7));
    assert_eq!(view.text(), "<#if x>");
}

#[test]
fn end_clamped_to_length() {
    let view = BufferView::new("abc", 1, 100);
    assert_eq!((view.start(), view.end()), (1, 3));
    assert_eq!(view.len(), 2);
}

#[test]
fn start_clamped_to_end() {
    let view = BufferView::new("abc", 5, 2);
    assert_eq!((view.start(), view.end()), (2, 2));
    assert!(view.is_empty());
}

#[test]
fn empty_source() {
    let view = BufferView::full("");
    assert!(view.is_empty());
    assert_eq!(view.text(), "");
}

#[test]
fn offsets_snap_to_char_boundaries() {
    // "é" is two bytes at 1..3
    let view = BufferView::new("aé b", 2, 2);
    assert_eq!((view.start(), view.end()), (1, 1));

    let view = BufferView::new("aé b", 0, 2);
    assert_eq!(view.end(), 1);
    assert_eq!(view.text(), "a");
}

// === Cursors ===

#[test]
fn cursor_lookahead_stops_at_view_end() {
    let view = BufferView::new("${x}", 0, 1);
    let cursor = view.cursor_at(0);
    assert_eq!(cursor.current(), b'$');
    assert_eq!(cursor.peek(), 0);
    assert!(!cursor.starts_with(b"${"));
}

#[test]
fn cursor_sees_before_view_start() {
    let view = BufferView::new("}\"", 1, 2);
    let cursor = view.cursor_at(1);
    assert_eq!(cursor.prev(), b'}');
}

#[test]
fn cursor_position_clamped_into_view() {
    let view = BufferView::new("abcdef", 2, 4);
    assert_eq!(view.cursor_at(0).pos(), 2);
    assert_eq!(view.cursor_at(9).pos(), 4);
    assert!(view.cursor_at(9).is_eof());
}
