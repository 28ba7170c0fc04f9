//! Logging configuration for the browser
//!
//! Sets up tracing with a fmt layer whose output goes to the devtools
//! console. Each event becomes one console call at the matching level.

use std::io::{self, Write};
use tracing::{Level, Metadata};
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};
use wasm_bindgen::JsValue;
use web_sys::console;

/// Buffers one formatted event and emits it on flush or drop
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl Write for ConsoleWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        let line = String::from_utf8_lossy(&self.buf);
        let message = JsValue::from_str(line.trim_end());
        match self.level {
            Level::ERROR => console::error_1(&message),
            Level::WARN => console::warn_1(&message),
            Level::INFO => console::info_1(&message),
            _ => console::debug_1(&message),
        }
        self.buf.clear();
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter {
            level: Level::INFO,
            buf: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter {
            level: *meta.level(),
            buf: Vec::new(),
        }
    }
}

/// Initialize logging for the page.
///
/// `filter` uses `EnvFilter` syntax and comes from the portal config; an
/// invalid filter falls back to "info".
pub fn init_logging(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|e| {
        console::warn_1(&format!("Invalid log filter '{}': {}", filter, e).into());
        EnvFilter::new("info")
    });

    // No timestamps: the console adds its own and SystemTime is unavailable
    let console_layer = fmt::layer()
        .with_writer(ConsoleMakeWriter)
        .without_time()
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    if tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init()
        .is_err()
    {
        console::warn_1(&"Logging was already initialized".into());
    }
}
