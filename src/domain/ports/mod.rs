//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure (or an embedder) provides concrete implementations.

pub mod ledger_events;
pub mod payment_gateway;
pub mod snapshot_repository;

pub use ledger_events::{LedgerEvent, LedgerEventSink, NoopEventSink};
pub use payment_gateway::{PaymentError, PaymentGateway, PaymentResult};
pub use snapshot_repository::{SnapshotError, SnapshotRepository, SnapshotResult};
