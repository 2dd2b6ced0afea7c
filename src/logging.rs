//! Logger setup.
//!
//! Diagnostics go through `log` and stay off stdout so the session's console
//! contract is untouched. Verbosity is controlled with `RUST_LOG`.

use env_logger::Env;

pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
}
