//! Star entity - the uniquely identified, ownable unit the registry manages
//!
//! A star has a descriptive name fixed at creation, exactly one owner at any
//! time, and an optional sale price. It is listed for sale iff a sale price
//! is present; a listing is consumed exactly once, by a successful purchase.

use crate::domain::value_objects::{AccountId, Money};

/// A registered star asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Star {
    /// Descriptive name, immutable after creation
    name: String,
    /// Current owner
    owner: AccountId,
    /// Sale price; present iff the star is listed for sale
    sale_price: Option<Money>,
}

impl Star {
    /// Create an unlisted star owned by `owner`
    pub fn new(name: impl Into<String>, owner: AccountId) -> Self {
        Self {
            name: name.into(),
            owner,
            sale_price: None,
        }
    }

    /// Rebuild a star record from stored parts (snapshot restore path)
    pub(crate) fn from_parts(name: String, owner: AccountId, sale_price: Option<Money>) -> Self {
        Self {
            name,
            owner,
            sale_price,
        }
    }

    /// The star's immutable name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The current owner
    pub fn owner(&self) -> &AccountId {
        &self.owner
    }

    /// The current listing price, if the star is for sale
    pub fn sale_price(&self) -> Option<Money> {
        self.sale_price
    }

    /// Whether the star is currently listed for sale
    pub fn is_listed(&self) -> bool {
        self.sale_price.is_some()
    }

    pub(crate) fn set_owner(&mut self, owner: AccountId) {
        self.owner = owner;
    }

    pub(crate) fn list_at(&mut self, price: Money) {
        self.sale_price = Some(price);
    }

    pub(crate) fn delist(&mut self) {
        self.sale_price = None;
    }
}
