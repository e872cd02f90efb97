use log::LevelFilter;

/// Initialize the logger. `RUST_LOG` still applies to modules the level
/// does not cover.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}
