/// Installs the global logger.
///
/// `filter` uses the `env_logger` syntax (e.g. "concentric_onboarding=debug")
/// and takes precedence over `RUST_LOG`. Without either, `info` and above are
/// shown. Later calls leave the installed logger in place.
pub fn init_logging(filter: Option<&str>) {
    let mut builder = env_logger::Builder::new();
    match filter.map(str::to_owned).or_else(|| std::env::var("RUST_LOG").ok()) {
        Some(filter) => builder.parse_filters(&filter),
        None => builder.filter_level(log::LevelFilter::Info),
    };

    if builder.try_init().is_err() {
        log::debug!("logger already installed, keeping it");
    }
}
