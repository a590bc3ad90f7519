//! Capture log output produced while a test runs.

use observability_deps::tracing::{self, subscriber::DefaultGuard, Level};
use parking_lot::Mutex;
use std::{fmt, io, sync::Arc};

/// Captures the log lines emitted on the current thread for as long as it
/// is alive, so tests can assert on them.
///
/// ```
/// use test_helpers::tracing::TracingCapture;
/// use observability_deps::tracing::info;
///
/// let capture = TracingCapture::new();
/// info!("the answer is 42");
/// assert!(capture.to_string().contains("the answer is 42"));
/// ```
#[derive(Debug)]
pub struct TracingCapture {
    logs: Arc<Mutex<Vec<u8>>>,
    _guard: DefaultGuard,
}

impl TracingCapture {
    /// Install a thread-local subscriber that records every event at
    /// `TRACE` level and above.
    pub fn new() -> Self {
        let logs = Arc::new(Mutex::new(Vec::new()));
        let writer = CaptureWriter {
            logs: Arc::clone(&logs),
        };

        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::TRACE)
            .with_ansi(false)
            .without_time()
            .with_target(false)
            .with_writer(move || writer.clone())
            .finish();

        let guard = tracing::subscriber::set_default(subscriber);

        Self {
            logs,
            _guard: guard,
        }
    }
}

impl Default for TracingCapture {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TracingCapture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let logs = self.logs.lock();
        write!(f, "{}", String::from_utf8_lossy(&logs).trim_end())
    }
}

#[derive(Debug, Clone)]
struct CaptureWriter {
    logs: Arc<Mutex<Vec<u8>>>,
}

impl io::Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.logs.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
