use tracing::Level;

/// Log level for the given `-v` count; `quiet` wins over verbosity.
#[must_use]
pub const fn level(verbosity: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// Initialize structured logging on stderr.
///
/// Only the first call installs a subscriber; later calls are no-ops.
pub fn init(verbosity: u8, quiet: bool) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level(verbosity, quiet))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
