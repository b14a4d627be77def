//! # Adapters
//!
//! In-memory implementations of the outbound ports, used by tests and by
//! hosts that embed the engine without an external ledger.

pub mod event_recorder;
pub mod ledger;

pub use event_recorder::RecordingEventSink;
pub use ledger::InMemoryTokenLedger;
