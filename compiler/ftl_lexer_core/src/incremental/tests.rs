use super::*;
use crate::session::tokenize;
use pretty_assertions::assert_eq;

fn offsets(table: &CheckpointTable) -> Vec<u32> {
    table.points().iter().map(|p| p.offset).collect()
}

/// Apply `edit` to `old` with `text` as the inserted bytes.
fn apply(old: &str, edit: TextEdit, text: &str) -> String {
    assert_eq!(text.len(), edit.new_len as usize);
    let start = edit.start as usize;
    format!("{}{}{}", &old[..start], text, &old[edit.old_end() as usize..])
}

/// Relex after `edit` and check against lexing the new document from scratch.
fn check_relex(old: &str, edit: TextEdit, text: &str) -> Relexed {
    let new = apply(old, edit, text);
    let mut table = CheckpointTable::build(old);
    let old_tokens = tokenize(old);
    let relexed = table.relex(&new, edit);
    assert_eq!(relexed.splice(&old_tokens, edit), tokenize(&new));
    assert_eq!(table, CheckpointTable::build(&new));
    relexed
}

// === TextEdit ===

#[test]
fn edit_ends_and_delta() {
    let edit = TextEdit::replace(10, 3, 5);
    assert_eq!(edit.old_end(), 13);
    assert_eq!(edit.new_end(), 15);
    assert_eq!(edit.length_delta(), 2);
    assert_eq!(TextEdit::delete(4, 2).length_delta(), -2);
    assert_eq!(TextEdit::insert(4, 2), TextEdit::replace(4, 0, 2));
}

#[test]
fn shift_and_unshift() {
    let edit = TextEdit::replace(10, 3, 5);
    assert_eq!(edit.shift(13), 15);
    assert_eq!(edit.shift(20), 22);
    assert_eq!(edit.unshift(22), 20);
}

// === Building ===

#[test]
fn empty_document_has_start_point() {
    let table = CheckpointTable::build("");
    assert_eq!(table.points(), &[ResumePoint::START]);
}

#[test]
fn one_point_per_line() {
    let table = CheckpointTable::build("a\nb\nc");
    assert_eq!(offsets(&table), vec![0, 2, 4]);
}

#[test]
fn multiline_token_defers_point() {
    // The string spans lines 1 and 2; the next point is after it.
    let table = CheckpointTable::build("\"a\nb\" c\nd");
    assert_eq!(offsets(&table), vec![0, 5, 8]);
}

#[test]
fn points_carry_checkpoints() {
    let table = CheckpointTable::build("<#if\nx>\ny");
    let checkpoints: Vec<LexState> = table.points().iter().map(|p| p.checkpoint.state).collect();
    assert_eq!(
        checkpoints,
        vec![LexState::Normal, LexState::InDirective, LexState::Normal]
    );
    // `\n` is TEXT.
    assert!(table.points()[1].checkpoint.after_text);
}

#[test]
fn reach_covers_lookahead() {
    let table = CheckpointTable::build("ab\ncd");
    // `ab` ends at 2 and `\n` at 3; the newline token looked 4 bytes past its end.
    assert_eq!(table.points()[0].reach, 7);
}

// === Resume Points ===

#[test]
fn resume_point_before_edit() {
    let table = CheckpointTable::build("aaaaaa\nbbbbbb\ncccccc\n");
    assert_eq!(table.resume_point(18).offset, 14);
    // The newline ending line 1 looked up to 18.
    assert_eq!(table.resume_point(17).offset, 7);
    assert_eq!(table.resume_point(0).offset, 0);
}

#[test]
fn resume_point_skips_lines_that_looked_ahead() {
    // Line 0 ends in `\n` at 6, so it looked up to 11; an edit at 8 must
    // resume from the start.
    let table = CheckpointTable::build("aaaaaa\nbb\ncc\n");
    assert_eq!(table.resume_point(8).offset, 0);
    assert_eq!(table.resume_point(11).offset, 7);
}

#[test]
fn todo_probe_across_lines_is_tracked() {
    let table = CheckpointTable::build("<#-- \n\n\n   todo -->");
    // Whitespace from offset 4 runs to `todo` at 11.
    assert_eq!(table.resume_point(12).offset, 0);
}

#[test]
fn empty_table_resumes_at_start() {
    let table = CheckpointTable::default();
    assert_eq!(table.resume_point(50), ResumePoint::START);
}

// === Relexing ===

#[test]
fn relex_insertion_rejoins() {
    let old = "<p>one</p>\n<p>two</p>\n<p>three</p>\n<p>four</p>\n";
    let relexed = check_relex(old, TextEdit::insert(26, 1), "X");
    assert!(relexed.rejoined);
    assert!(relexed.end < 48);
}

#[test]
fn relex_opening_comment_runs_to_end() {
    let old = "a\nb\nc\nd\n";
    let relexed = check_relex(old, TextEdit::insert(2, 4), "<#--");
    assert!(!relexed.rejoined);
    assert_eq!(relexed.end, 12);
}

#[test]
fn relex_deletion() {
    let old = "<#if x>\n  ${a.b}\n</#if>\n<#list xs as x>\n${x}\n</#list>\n";
    check_relex(old, TextEdit::delete(8, 9), "");
}

#[test]
fn relex_append_extends_last_token() {
    let old = "line\nabc";
    let relexed = check_relex(old, TextEdit::insert(8, 1), "d");
    assert_eq!(relexed.tokens.last().map(|t| t.len()), Some(4));
}

#[test]
fn relex_breaking_todo_marker() {
    let old = "<#--\n\n todo\n-->\nx\n";
    check_relex(old, TextEdit::replace(7, 4, 3), "tod");
}

#[test]
fn relex_inside_string_spanning_lines() {
    let old = "<#assign s = \"a\nb\nc\">\nrest\n";
    check_relex(old, TextEdit::replace(16, 1, 1), "\"");
}

#[test]
fn relex_on_empty_table_lexes_everything() {
    let mut table = CheckpointTable::default();
    let relexed = table.relex("a\nb", TextEdit::insert(0, 3));
    assert_eq!(relexed.start, 0);
    assert_eq!(relexed.tokens, tokenize("a\nb"));
    assert_eq!(table, CheckpointTable::build("a\nb"));
}
