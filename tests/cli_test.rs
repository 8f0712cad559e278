use clap::Parser;
use skelgen::cli::Args;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("skelgen")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_basic_args() {
    let args = make_args(&["./config.yaml"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.config_path, PathBuf::from("./config.yaml"));
    assert!(!parsed.verbose);
}

#[test]
fn test_verbose_flag() {
    let args = make_args(&["-v", "./config.yaml"]);
    let parsed = Args::try_parse_from(args).unwrap();
    assert!(parsed.verbose);

    let args = make_args(&["--verbose", "./config.yaml"]);
    let parsed = Args::try_parse_from(args).unwrap();
    assert!(parsed.verbose);
}

#[test]
fn test_missing_args() {
    let args = make_args(&[]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_too_many_args() {
    let args = make_args(&["./config.yaml", "extra"]);
    assert!(Args::try_parse_from(args).is_err());
}
