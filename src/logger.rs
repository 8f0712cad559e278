use std::io::Write;

/// Initializes the global logger. Verbose runs log at DEBUG, everything else
/// at INFO.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .format(|buf, record| writeln!(buf, "[{} Message] {}", record.level(), record.args()))
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();
}
