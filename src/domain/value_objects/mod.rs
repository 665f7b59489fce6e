//! Domain Value Objects
//!
//! Immutable value types that represent registry concepts: identifiers,
//! monetary amounts, and registry metadata.

mod account;
mod asset_id;
mod money;
mod registry_info;

pub use account::AccountId;
pub use asset_id::AssetId;
pub use money::Money;
pub use registry_info::RegistryInfo;
