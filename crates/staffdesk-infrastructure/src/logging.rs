//! Tracing subscriber setup.

use std::sync::OnceLock;
use tracing_subscriber::{EnvFilter, fmt};

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Installs the global fmt subscriber.
///
/// `RUST_LOG` takes precedence over `level`. Calling this more than once is a
/// no-op, so tests and binaries can both call it freely.
pub fn init_tracing(level: &str) {
    INITIALIZED.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let result = fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();

        if let Err(e) = result {
            // Another subscriber was installed by the host; keep it.
            eprintln!("tracing already initialized: {e}");
        }
    });
}
