//! Star Notary - an asset-registry ledger
//!
//! Issues uniquely identified "star" assets to owners, lets an owner list an
//! asset for sale at a fixed price, settles purchases by routing exactly the
//! price to the seller (excess stays with the buyer), and supports direct
//! transfer and pairwise exchange of assets.
//!
//! The crate is layered: `domain` holds the pure state-transition logic,
//! `application` exposes the [`Notary`] use case that couples transitions
//! with payment routing and event emission, and `infrastructure` provides
//! ready-made adapters for the ports (in-memory bank, NDJSON event stream,
//! JSON snapshots).
//!
//! ```
//! use star_notary::{AccountId, AssetId, InMemoryBank, Money, Notary, RegistryInfo};
//!
//! let seller = AccountId::new("user1");
//! let buyer = AccountId::new("user2");
//!
//! let mut bank = InMemoryBank::new();
//! bank.deposit(&buyer, Money::new(50));
//!
//! let mut notary = Notary::new(RegistryInfo::default(), bank);
//! notary.create_star(AssetId::new(1), "Awesome Star!", &seller)?;
//! notary.list_for_sale(AssetId::new(1), Money::new(10), &seller)?;
//!
//! let receipt = notary.purchase(AssetId::new(1), &buyer, Money::new(50))?;
//! assert_eq!(receipt.price, Money::new(10));
//! assert_eq!(notary.owner_of(AssetId::new(1))?, buyer);
//! # Ok::<(), star_notary::NotaryError>(())
//! ```

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{Notary, Receipt};
pub use domain::entities::{Ledger, Star};
pub use domain::ports::{
    LedgerEvent, LedgerEventSink, NoopEventSink, PaymentError, PaymentGateway, PaymentResult,
    SnapshotError, SnapshotRepository, SnapshotResult,
};
pub use domain::services::Settlement;
pub use domain::value_objects::{AccountId, AssetId, Money, RegistryInfo};
pub use error::{NotaryError, NotaryResult};
pub use infrastructure::{InMemoryBank, JsonEventSink, JsonSnapshotRepository};
