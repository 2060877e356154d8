//! Test logging initialization shared by every backend test binary.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Default filter when neither `TEST_LOG` nor `RUST_LOG` is set. sqlx logs
/// every statement at info, which drowns out service-level output.
const DEFAULT_FILTER: &str = "warn,sqlx=error,sea_orm=warn";

/// Install a quiet, capture-friendly subscriber.
///
/// Idempotent; safe to call from every test and from `ctor` hooks. Level
/// precedence: `TEST_LOG`, then `RUST_LOG`, then [`DEFAULT_FILTER`].
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}
