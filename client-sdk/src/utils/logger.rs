use std::sync::OnceLock;

use env_logger::Env;

static INIT: OnceLock<()> = OnceLock::new();

/// Install the process-wide logger. Honors `RUST_LOG`, defaults to `info`.
/// Safe to call more than once, and tolerant of a logger installed by the
/// embedding application.
pub fn init_logger() {
    INIT.get_or_init(|| {
        let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info")).try_init();
    });
}
