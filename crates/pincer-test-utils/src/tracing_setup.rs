//! Test tracing setup.
//!
//! Tests that want loader or matcher events in their output call
//! [`init_test_tracing`] first; the subscriber writes through the test
//! harness so output stays attached to the owning test.

use tracing_subscriber::EnvFilter;

/// Install a tracing subscriber for the current test process.
///
/// Filters at `info` unless `RUST_LOG` says otherwise. Only the first call
/// installs anything; later calls are no-ops, so every test can call this
/// unconditionally.
///
/// # Example
///
/// ```ignore
/// #[tokio::test]
/// async fn my_test() {
///     pincer_test_utils::tracing_setup::init_test_tracing();
///     tracing::info!("visible when RUST_LOG=info");
/// }
/// ```
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}
