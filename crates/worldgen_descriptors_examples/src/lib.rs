#![forbid(unsafe_code)]

use tracing_subscriber::{fmt, EnvFilter};

/// Install a console subscriber. `RUST_LOG` overrides the default `info` filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed when examples are chained.
    let _ = fmt().with_env_filter(filter).with_target(true).try_init();
}
