use std::sync::Once;

use tracing_subscriber::{filter::LevelFilter, fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber, writing to stderr.
/// `RUST_LOG` is honoured; `verbose` raises the crate's own level to debug.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let level = if verbose { "debug" } else { "warn" };
        let filter = EnvFilter::builder()
            .with_default_directive(
                format!("budget_tracker={level}")
                    .parse()
                    .unwrap_or_else(|_| LevelFilter::WARN.into()),
            )
            .from_env_lossy();

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}
