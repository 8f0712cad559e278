use skelgen::config::parse_config;
use skelgen::verifier::{build_command, run_verification, verify_all};
use std::path::Path;

#[test]
fn test_build_command_placeholders() {
    let cmd = build_command(
        "python <FILE> --dest {dest_dir} --lang {lang}",
        Path::new("out/python/skeleton.py"),
        Path::new("out"),
        "python",
    );
    assert_eq!(cmd, "python out/python/skeleton.py --dest out --lang python");
}

#[test]
fn test_build_command_without_placeholders() {
    let cmd = build_command("true", Path::new("out/f"), Path::new("out"), "python");
    assert_eq!(cmd, "true");
}

#[test]
fn test_repeated_placeholders_are_all_substituted() {
    let cmd =
        build_command("{lang} {lang}", Path::new("out/f"), Path::new("out"), "ruby");
    assert_eq!(cmd, "ruby ruby");
}

#[test]
fn test_run_verification_captures_stdout() {
    let output = run_verification("echo hello").unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "hello");
    assert!(output.stderr.is_empty());
}

#[test]
fn test_run_verification_captures_stderr_and_exit_code() {
    let output = run_verification("echo oops >&2; exit 3").unwrap();
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(3));
    assert_eq!(String::from_utf8_lossy(&output.stderr).trim(), "oops");
}

#[test]
fn test_verify_all_absorbs_failures() {
    let config = parse_config(
        r#"
template_dir: templates
dest_dir: out
languages:
  python:
    filename: skeleton.py
    run_cmd: exit 1
  ruby:
    filename: skeleton.rb
    run_cmd: "true"
  untestable:
    filename: skeleton.sh
  nameless: {}
"#,
    )
    .unwrap();

    // Failing commands and skipped languages must not panic or abort.
    verify_all(&config);
}
