//! Routing `tracing` output to a line-oriented sink
//!
//! The browser has no stdout, so formatted events are handed one line at a
//! time to whatever the host provides (the devtools console under wasm).

use std::io;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Receives one formatted event per call
pub trait LineSink: Send + Sync + 'static {
    fn line(&self, level: Level, text: &str);
}

/// Buffers one event and flushes it to the sink on drop
pub struct SinkWriter<'a, S: LineSink> {
    sink: &'a S,
    level: Level,
    buf: Vec<u8>,
}

impl<S: LineSink> io::Write for SinkWriter<'_, S> {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<S: LineSink> Drop for SinkWriter<'_, S> {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let text = String::from_utf8_lossy(&self.buf);
        self.sink.line(self.level, text.trim_end());
    }
}

pub struct SinkMakeWriter<S> {
    sink: S,
}

impl<'a, S: LineSink> MakeWriter<'a> for SinkMakeWriter<S> {
    type Writer = SinkWriter<'a, S>;

    fn make_writer(&'a self) -> Self::Writer {
        SinkWriter {
            sink: &self.sink,
            level: Level::INFO,
            buf: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        SinkWriter {
            sink: &self.sink,
            level: *meta.level(),
            buf: Vec::new(),
        }
    }
}

/// Plain-text fmt subscriber writing to `sink`. No timestamps, since
/// `SystemTime` is unavailable on wasm32.
pub fn subscriber<S: LineSink>(sink: S, max: Level) -> impl tracing::Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_writer(SinkMakeWriter { sink })
        .with_max_level(max)
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .finish()
}
