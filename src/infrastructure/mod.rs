//! Infrastructure Layer
//!
//! Concrete implementations of the domain ports:
//! - `InMemoryBank` - payment gateway backed by an in-process balance table
//! - `JsonEventSink` - NDJSON ledger-event stream
//! - `JsonSnapshotRepository` - versioned on-disk ledger snapshots

mod bank;
mod events;
mod snapshot;

pub use bank::InMemoryBank;
pub use events::JsonEventSink;
pub use snapshot::JsonSnapshotRepository;
