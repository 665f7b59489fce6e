//! Domain Layer
//!
//! This is the core of the star notary - pure registry logic without I/O
//! dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (Star, Ledger)
//! - `value_objects/` - Immutable value types (AssetId, AccountId, Money, RegistryInfo)
//! - `services/` - Domain services (Settlement)
//! - `ports/` - Interface definitions for infrastructure (payments, events, snapshots)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Reject before mutate** - Every operation validates all preconditions
//!    first, so any error leaves the ledger exactly as it was
//! 3. **Ports & Adapters** - Value movement, observability, and persistence
//!    go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
