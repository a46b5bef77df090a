use super::*;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn defaults() {
    let (options, positional) = CliOptions::parse(&[]).unwrap();
    assert_eq!(options, CliOptions::default());
    assert!(options.parallel);
    assert!(positional.is_empty());
}

#[test]
fn flags_anywhere() {
    let (options, positional) =
        CliOptions::parse(&args(&["a.ftl", "--no-parallel", "dir", "-v"])).unwrap();
    assert!(!options.parallel);
    assert!(options.verbose);
    assert_eq!(positional, args(&["a.ftl", "dir"]));
}

#[test]
fn state_by_number_or_name() {
    let (options, _) = CliOptions::parse(&args(&["--state=257"])).unwrap();
    assert_eq!(options.initial_state, 257);

    let (options, _) = CliOptions::parse(&args(&["--state=in_comment"])).unwrap();
    assert_eq!(options.initial_state, 2);
}

#[test]
fn invalid_state() {
    let err = CliOptions::parse(&args(&["--state=sideways"])).unwrap_err();
    assert!(matches!(err, CliError::InvalidOption { option: "--state", .. }));
}

#[test]
fn unknown_flag() {
    let err = CliOptions::parse(&args(&["--fast"])).unwrap_err();
    assert!(matches!(err, CliError::UnknownOption(flag) if flag == "--fast"));
}
