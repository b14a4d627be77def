//! # Recording Event Sink
//!
//! Captures published events in memory so tests and embedding hosts can
//! assert on what the engine emitted.

use crate::events::ConversionEvent;
use crate::ports::outbound::EventSink;
use parking_lot::RwLock;
use tracing::debug;

/// Event sink that records everything it receives.
#[derive(Debug, Default)]
pub struct RecordingEventSink {
    events: RwLock<Vec<ConversionEvent>>,
}

impl RecordingEventSink {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything published so far, in order.
    pub fn recorded(&self) -> Vec<ConversionEvent> {
        self.events.read().clone()
    }
}

impl EventSink for RecordingEventSink {
    fn publish(&self, event: ConversionEvent) {
        debug!("[events] {:?}", event);
        self.events.write().push(event);
    }
}
