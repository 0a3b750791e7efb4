use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Log to stderr so conjugation output on stdout stays pipeable.
///
/// Filter defaults to `katachi_core=warn`; override with `RUST_LOG`.
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("katachi_core=warn")),
            )
            .init();
    });
}
