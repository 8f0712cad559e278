//! Command-line interface implementation for skelgen.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for skelgen.
#[derive(Parser, Debug)]
#[command(author, version, about = "skelgen: generates per-language skeleton files from shared templates", long_about = None)]
pub struct Args {
    /// Path to the yaml or json configuration file
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: PathBuf,

    /// Increases the logging level of the program from INFO to DEBUG.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
