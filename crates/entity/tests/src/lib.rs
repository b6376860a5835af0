//! Shared helpers for the entity integration suites.

use std::io;
use std::sync::{Arc, Mutex};

/// In-memory sink for formatted trace output.
#[derive(Clone, Default)]
pub struct TraceBuffer(Arc<Mutex<Vec<u8>>>);

impl TraceBuffer {
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().map(|b| b.clone()).unwrap_or_default();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for TraceBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Ok(mut inner) = self.0.lock() {
            inner.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` under a thread-local DEBUG subscriber and return what it logged.
///
/// The subscriber is scoped to the calling thread, so tests running in
/// parallel never see each other's output.
pub fn capture_traces<R>(f: impl FnOnce() -> R) -> (R, String) {
    let buffer = TraceBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .without_time()
        .with_writer(move || writer.clone())
        .finish();

    let out = tracing::subscriber::with_default(subscriber, f);
    (out, buffer.contents())
}

/// Count how many lines of `output` carry the given `op` field.
pub fn count_op(output: &str, op: &str) -> usize {
    let needle = format!("op=\"{op}\"");
    output.lines().filter(|l| l.contains(&needle)).count()
}
