//! Registry metadata - collection name and symbol
//!
//! Fixed at registry construction, analogous to a token collection's
//! name/symbol pair.

use serde::{Deserialize, Serialize};

/// Descriptive metadata for a registry instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryInfo {
    name: String,
    symbol: String,
}

impl RegistryInfo {
    /// Create registry metadata from a collection name and symbol
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
        }
    }

    /// Human-readable collection name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Short ticker-style symbol
    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

impl Default for RegistryInfo {
    fn default() -> Self {
        Self::new("Star Notary", "STAR")
    }
}
