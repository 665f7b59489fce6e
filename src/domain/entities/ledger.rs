//! Ledger entity - the registry's entire mutable state
//!
//! Conceptually three tables keyed by [`AssetId`] (name, owner, listing),
//! stored here as one record per id so the shared-key invariant holds by
//! construction. Every operation validates all preconditions before touching
//! state, so a rejected call is guaranteed to leave the ledger unchanged.
//!
//! The ledger is pure state: it never moves money. Purchase settlement is
//! split into [`Ledger::plan_purchase`] (validate and price the trade) and
//! [`Ledger::settle_purchase`] (reassign ownership and consume the listing),
//! with payment routing between the two handled by the application layer.

use std::collections::BTreeMap;

use crate::domain::services::Settlement;
use crate::domain::value_objects::{AccountId, AssetId, Money, RegistryInfo};
use crate::error::{NotaryError, NotaryResult};

/// All registry state: metadata plus one record per registered star.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    info: RegistryInfo,
    stars: BTreeMap<AssetId, super::Star>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new(info: RegistryInfo) -> Self {
        Self {
            info,
            stars: BTreeMap::new(),
        }
    }

    /// Rebuild a ledger from stored parts (snapshot restore path)
    pub(crate) fn from_parts(info: RegistryInfo, stars: BTreeMap<AssetId, super::Star>) -> Self {
        Self { info, stars }
    }

    /// Registry metadata (collection name and symbol)
    pub fn info(&self) -> &RegistryInfo {
        &self.info
    }

    /// Register a new star named `name`, owned by `owner`, unlisted.
    ///
    /// Ids are caller-chosen; reuse of an existing id is rejected and the
    /// original record is untouched.
    pub fn create_star(
        &mut self,
        id: AssetId,
        name: &str,
        owner: &AccountId,
    ) -> NotaryResult<()> {
        if name.trim().is_empty() {
            return Err(NotaryError::InvalidName);
        }
        if self.stars.contains_key(&id) {
            return Err(NotaryError::DuplicateAsset { id });
        }
        self.stars.insert(id, super::Star::new(name, owner.clone()));
        Ok(())
    }

    /// Put a star up for sale at `price`, overwriting any prior listing.
    ///
    /// Only the current owner may list, and only at a positive price.
    pub fn list_for_sale(
        &mut self,
        id: AssetId,
        price: Money,
        caller: &AccountId,
    ) -> NotaryResult<()> {
        let star = self.stars.get_mut(&id).ok_or(NotaryError::NoSuchAsset { id })?;
        if star.owner() != caller {
            return Err(NotaryError::NotOwner {
                id,
                caller: caller.clone(),
            });
        }
        if price.is_zero() {
            return Err(NotaryError::InvalidPrice { price });
        }
        star.list_at(price);
        Ok(())
    }

    /// Validate a purchase attempt and price the trade.
    ///
    /// Checks, in order: the star exists, is listed, the buyer is not already
    /// the owner, and the offered payment covers the listing price. No state
    /// is modified.
    pub fn plan_purchase(
        &self,
        id: AssetId,
        buyer: &AccountId,
        paid: Money,
    ) -> NotaryResult<Settlement> {
        let star = self.stars.get(&id).ok_or(NotaryError::NoSuchAsset { id })?;
        let price = star.sale_price().ok_or(NotaryError::NotForSale { id })?;
        if star.owner() == buyer {
            return Err(NotaryError::SelfPurchase {
                id,
                caller: buyer.clone(),
            });
        }
        Settlement::plan(star.owner().clone(), price, paid)
    }

    /// Reassign ownership to `buyer` and consume the listing.
    ///
    /// Callers must have validated the trade with [`Ledger::plan_purchase`]
    /// first; under exclusive access nothing can invalidate the plan between
    /// the two calls, so this cannot fail after a successful plan.
    pub fn settle_purchase(&mut self, id: AssetId, buyer: &AccountId) -> NotaryResult<()> {
        let star = self.stars.get_mut(&id).ok_or(NotaryError::NoSuchAsset { id })?;
        if !star.is_listed() {
            return Err(NotaryError::NotForSale { id });
        }
        star.set_owner(buyer.clone());
        star.delist();
        Ok(())
    }

    /// Hand a star directly to `to`.
    ///
    /// Any existing listing is cleared: a star changing hands outside a sale
    /// must not remain listed at the old owner's price.
    pub fn transfer_star(
        &mut self,
        id: AssetId,
        to: &AccountId,
        caller: &AccountId,
    ) -> NotaryResult<()> {
        let star = self.stars.get_mut(&id).ok_or(NotaryError::NoSuchAsset { id })?;
        if star.owner() != caller {
            return Err(NotaryError::NotOwner {
                id,
                caller: caller.clone(),
            });
        }
        star.set_owner(to.clone());
        star.delist();
        Ok(())
    }

    /// Swap ownership of two stars, clearing both listings.
    ///
    /// The caller must own at least one side. Returns the new owners of
    /// `(id_a, id_b)` after the swap.
    pub fn exchange_stars(
        &mut self,
        id_a: AssetId,
        id_b: AssetId,
        caller: &AccountId,
    ) -> NotaryResult<(AccountId, AccountId)> {
        if id_a == id_b {
            return Err(NotaryError::SameAsset { id: id_a });
        }
        let owner_a = self.owner_of(id_a)?.clone();
        let owner_b = self.owner_of(id_b)?.clone();
        if &owner_a != caller && &owner_b != caller {
            return Err(NotaryError::NotOwner {
                id: id_a,
                caller: caller.clone(),
            });
        }

        // Both ids verified present above.
        {
            let star_a = self.stars.get_mut(&id_a).expect("star_a present");
            star_a.set_owner(owner_b.clone());
            star_a.delist();
        }
        {
            let star_b = self.stars.get_mut(&id_b).expect("star_b present");
            star_b.set_owner(owner_a.clone());
            star_b.delist();
        }
        Ok((owner_b, owner_a))
    }

    /// The immutable name recorded at creation
    pub fn look_up(&self, id: AssetId) -> NotaryResult<&str> {
        self.stars
            .get(&id)
            .map(|star| star.name())
            .ok_or(NotaryError::NoSuchAsset { id })
    }

    /// The current owner of a star
    pub fn owner_of(&self, id: AssetId) -> NotaryResult<&AccountId> {
        self.stars
            .get(&id)
            .map(|star| star.owner())
            .ok_or(NotaryError::NoSuchAsset { id })
    }

    /// The current listing price, if any
    pub fn sale_price(&self, id: AssetId) -> Option<Money> {
        self.stars.get(&id).and_then(|star| star.sale_price())
    }

    /// The full record for a star, if it exists
    pub fn star(&self, id: AssetId) -> Option<&super::Star> {
        self.stars.get(&id)
    }

    /// Number of registered stars
    pub fn star_count(&self) -> usize {
        self.stars.len()
    }

    /// All registered stars in id order
    pub fn iter(&self) -> impl Iterator<Item = (AssetId, &super::Star)> {
        self.stars.iter().map(|(id, star)| (*id, star))
    }
}
