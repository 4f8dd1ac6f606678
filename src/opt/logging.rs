// CLASSIFICATION: COMMUNITY
// Filename: logging.rs v0.3
// Author: Lukas Bower
// Date Modified: 2026-10-19

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initialise `env_logger`. `RUST_LOG` is honoured; the default level is
/// `warn`, and `--trace` forces `debug`. Safe to call more than once.
pub fn init(trace: bool) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    builder.format_timestamp(None);
    if trace {
        builder.filter_level(LevelFilter::Debug);
    }
    let _ = builder.try_init();
}
