//! Logging bootstrap

/// Initialize the logging system
///
/// `RUST_LOG` wins when set; otherwise `level` (e.g. `"debug"` or
/// `"haunt_engine=trace"`) is used as the filter. Calling this more than once
/// is harmless.
pub fn init_with_level(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::debug!("Logger already initialized");
    }
}
