use super::*;
use pretty_assertions::assert_eq;

#[test]
fn renders_each_token() {
    let out = render_tokens("<#if x>", 0);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with("DIRECTIVE_START"));
    assert!(lines[0].contains("0..2"));
    assert!(lines[0].contains("IN_DIRECTIVE"));
    assert!(lines[0].ends_with("\"<#\""));
    assert!(lines[2].contains("IN_DIRECTIVE+text"));
    assert!(lines[4].starts_with("DIRECTIVE_END"));
    assert!(lines[4].contains("NORMAL"));
    assert_eq!(lines[5], "5 tokens");
}

#[test]
fn escapes_newlines() {
    let out = render_tokens("\n", 0);
    assert!(out.lines().next().is_some_and(|line| line.ends_with("\"\\n\"")));
}

#[test]
fn honours_initial_state() {
    let out = render_tokens("x-->", 2);
    assert!(out.starts_with("COMMENT_START"));
    assert!(out.contains("COMMENT_END"));
}

#[test]
fn empty_source() {
    assert_eq!(render_tokens("", 0), "0 tokens\n");
}
