//! Asset Identifier Value Object
//!
//! Asset ids are chosen by the caller at creation time, not generated by the
//! registry. The registry's job is only to reject reuse of an existing id.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier of a star asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(u64);

impl AssetId {
    /// Create an asset id from its raw numeric value
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value of the id
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for AssetId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}
