//! Domain Entities
//!
//! Core domain entities with identity and lifecycle.
//! - `Star` - a uniquely identified, named, ownable asset
//! - `Ledger` - the registry's full mutable state (one record per star)

mod ledger;
mod star;

pub use ledger::Ledger;
pub use star::Star;
