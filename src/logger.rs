use log::LevelFilter;

/// `RUST_LOG` is read first; `level` overrides its global filter.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
