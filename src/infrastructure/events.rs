//! JSON Event Sink
//!
//! Outputs ledger events as NDJSON for audit trails and automation
//! consumption: one serialized event per line.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{LedgerEvent, LedgerEventSink};

/// Event sink that writes NDJSON events to a writer
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

impl LedgerEventSink for JsonEventSink {
    fn on_event(&self, event: LedgerEvent) {
        // An unserializable event cannot happen for these types; an
        // unwritable sink must not take the registry down with it.
        let Ok(line) = serde_json::to_string(&event) else {
            return;
        };
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{line}");
            let _ = writer.flush();
        }
    }
}
