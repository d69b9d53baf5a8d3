use env_logger::Env;

/// Logs at `info` unless RUST_LOG says otherwise. Safe to call more
/// than once, later calls are ignored.
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .try_init()
        .ok();
}
