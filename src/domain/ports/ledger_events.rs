//! Ledger Event Port
//!
//! Provides an observable interface for registry transitions. Enables audit
//! trails, NDJSON event streams, and debugging. Only successful transitions
//! emit events; rejected calls are invisible here.

use serde::Serialize;

use crate::domain::value_objects::{AccountId, AssetId, Money};

/// Event emitted after a committed registry transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LedgerEvent {
    /// A star was registered
    StarCreated {
        id: AssetId,
        name: String,
        owner: AccountId,
    },

    /// A star was put up for sale
    StarListed {
        id: AssetId,
        price: Money,
        owner: AccountId,
    },

    /// A listed star was purchased
    StarSold {
        id: AssetId,
        seller: AccountId,
        buyer: AccountId,
        price: Money,
        refund: Money,
    },

    /// A star was handed directly to another account
    StarTransferred {
        id: AssetId,
        from: AccountId,
        to: AccountId,
    },

    /// Two stars swapped owners
    StarsExchanged {
        id_a: AssetId,
        id_b: AssetId,
        owner_a: AccountId,
        owner_b: AccountId,
    },
}

/// Trait for receiving ledger events
///
/// Implementations can be:
/// - JsonEventSink: NDJSON event stream for audit/automation
/// - NoopEventSink: silent operation (the default)
pub trait LedgerEventSink: Send + Sync {
    /// Handle a committed-transition event
    fn on_event(&self, event: LedgerEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl LedgerEventSink for NoopEventSink {
    fn on_event(&self, _event: LedgerEvent) {
        // Do nothing
    }
}
