//! Logging bootstrap.
//!
//! Installs a `tracing-subscriber` registry filtered by `RUST_LOG`
//! (default `info`). Idempotent: hosts and tests may call it freely, and a
//! subscriber installed by the host wins.

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static INIT: OnceCell<()> = OnceCell::new();

pub fn init() {
    INIT.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        // try_init: keep whatever subscriber the host already set.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init();
    });
}
