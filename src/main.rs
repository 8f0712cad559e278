//! Skelgen's main application entry point and orchestration logic.
//! Handles command-line argument parsing, the rendering pass over all
//! configured languages, and the follow-up verification pass.

use skelgen::{
    cli::{get_args, Args},
    config::load_config,
    error::{default_error_handler, Error, Result},
    logger::init_logger,
    processor::render_all,
    verifier::verify_all,
};
use std::fs;

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads and parses the configuration
/// 2. Ensures the destination root exists
/// 3. Renders every language's skeleton
/// 4. Runs the configured verification commands
fn run(args: Args) -> Result<()> {
    let config = load_config(&args.config_path)?;

    fs::create_dir_all(&config.dest_dir).map_err(Error::IoError)?;

    render_all(&config)?;
    verify_all(&config);

    Ok(())
}
