//! Skeleton verification.
//! Runs each language's configured check command against its generated file
//! and logs the captured output.

use crate::config::Config;
use crate::error::{Error, Result};
use log::{debug, error, info, warn};
use std::path::Path;
use std::process::{Command, Output};

/// Placeholder replaced with the generated file's full path
pub const FILE_PLACEHOLDER: &str = "<FILE>";

/// Placeholder replaced with the destination directory
pub const DEST_DIR_PLACEHOLDER: &str = "{dest_dir}";

/// Placeholder replaced with the language name
pub const LANG_PLACEHOLDER: &str = "{lang}";

/// Substitutes the command placeholders for one language.
pub fn build_command(run_cmd: &str, skeleton_path: &Path, dest_dir: &Path, lang: &str) -> String {
    run_cmd
        .replace(FILE_PLACEHOLDER, &skeleton_path.display().to_string())
        .replace(DEST_DIR_PLACEHOLDER, &dest_dir.display().to_string())
        .replace(LANG_PLACEHOLDER, lang)
}

/// Runs one verification command through the shell, blocking until it exits.
///
/// # Errors
/// * `Error::IoError` if the shell cannot be spawned
pub fn run_verification(cmd: &str) -> Result<Output> {
    Command::new("sh").args(["-c", cmd]).output().map_err(Error::IoError)
}

fn stream_or_empty(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        "<EMPTY>".to_string()
    } else {
        String::from_utf8_lossy(bytes).into_owned()
    }
}

/// Verifies every language that has both an output file and a check command.
///
/// Skipped languages are logged. Verification failures, including non-zero
/// exit codes, are logged per language; none of them abort the run or
/// affect the process exit code.
pub fn verify_all(config: &Config) {
    for (lang, spec) in &config.languages {
        let filename = spec.filename.as_deref();
        let run_cmd = spec.run_cmd.as_deref().filter(|cmd| !cmd.is_empty());

        let (Some(filename), Some(run_cmd)) = (filename, run_cmd) else {
            warn!("Skipping verification for language '{}'", lang);
            continue;
        };

        let skeleton_path = config.dest_dir.join(lang).join(filename);
        let cmd = build_command(run_cmd, &skeleton_path, &config.dest_dir, lang);
        debug!("Running verification command: {}", cmd);

        match run_verification(&cmd) {
            Ok(output) => info!(
                "*** {} ***\nSTDOUT: {}\nSTDERR: {}\nRETURN CODE: {}\n{}",
                lang,
                stream_or_empty(&output.stdout),
                stream_or_empty(&output.stderr),
                output.status.code().unwrap_or(-1),
                "-".repeat(50),
            ),
            Err(err) => error!("Verification of '{}' failed to start: {}", lang, err),
        }
    }
}
