use super::*;
use pretty_assertions::assert_eq;
use std::fs;

#[test]
fn discovers_templates_recursively() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("mail/nested")).unwrap();
    fs::create_dir_all(dir.path().join(".hidden")).unwrap();
    fs::write(dir.path().join("page.ftl"), "x").unwrap();
    fs::write(dir.path().join("mail/nested/Welcome.FTL"), "x").unwrap();
    fs::write(dir.path().join("mail/readme.txt"), "x").unwrap();
    fs::write(dir.path().join(".hidden/skip.ftl"), "x").unwrap();

    let found = discover_templates(&[dir.path().to_path_buf()]);
    assert_eq!(
        found,
        vec![
            dir.path().join("mail/nested/Welcome.FTL"),
            dir.path().join("page.ftl"),
        ]
    );
}

#[test]
fn explicit_files_are_kept_whatever_the_extension() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("snippet.html");
    fs::write(&file, "<p>").unwrap();
    assert_eq!(discover_templates(&[file.clone(), file.clone()]), vec![file]);
}

#[test]
fn read_missing_file() {
    let err = read_file(Path::new("/definitely/not/here.ftl")).unwrap_err();
    assert!(matches!(err, CliError::Read { .. }));
}

#[test]
fn escape_control_characters() {
    assert_eq!(escape("a\n\"b\""), "a\\n\\\"b\\\"");
    assert_eq!(escape("\t"), "\\t");
}
