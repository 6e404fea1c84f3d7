//! Test harness helpers.

use std::io::Write;
use tempfile::NamedTempFile;
use tracing_subscriber::EnvFilter;

/// Set up test logging with the given filter.
///
/// Output goes through the test writer, so it is captured per test. Safe to
/// call from several tests; only the first call installs a subscriber.
///
/// # Example
///
/// ```rust,ignore
/// use beacon_test::setup_test_logging;
///
/// #[test]
/// fn my_test() {
///     setup_test_logging("beacon_events=trace");
///     // ... test code
/// }
/// ```
pub fn setup_test_logging(filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_test_writer()
        .try_init();
    tracing::trace!(filter, "Test logging requested");
}

/// Set up test logging with default filter (warn level).
pub fn setup_test_logging_default() {
    setup_test_logging("warn");
}

/// Create a temporary file with the given content.
///
/// Returns the `NamedTempFile` which will be cleaned up when dropped.
///
/// # Panics
///
/// Panics if the file cannot be created or written.
#[must_use]
pub fn test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file.flush().expect("Failed to flush temp file");
    file
}
