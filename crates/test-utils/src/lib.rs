pub mod fake_backend;
pub mod fake_program;

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt};

pub use fake_backend::{FakeBackend, RecordedCall, fake_dialogs};
#[cfg(unix)]
pub use fake_program::FakeProgram;

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Enable levels with e.g.:
/// `RUST_LOG=zdialog=debug cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}

static PROCESS_LOCK: tokio::sync::Mutex<()> = tokio::sync::Mutex::const_new(());

/// Serialise tests that write and then execute scripts.
///
/// A script still open for writing in one test can be inherited by a child
/// forked in another, and executing it then fails with "text file busy".
pub async fn process_lock() -> tokio::sync::MutexGuard<'static, ()> {
    PROCESS_LOCK.lock().await
}

/// Run a future with a 5-second timeout.
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: std::future::Future<Output = T>,
{
    tokio::time::timeout(std::time::Duration::from_secs(5), f)
        .await
        .expect("Test timed out after 5 seconds")
}
