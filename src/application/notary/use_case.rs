//! Notary Use Case
//!
//! Orchestrates the registry's six operations:
//! 1. Validate preconditions against the ledger
//! 2. Route any required payment through the gateway
//! 3. Commit the state transition
//! 4. Emit the committed-transition event
//!
//! Each method takes `&mut self`; exclusive access is the critical section
//! the concurrency model requires, so one operation completes fully before
//! the next begins. Embedders that share a notary across threads wrap it in
//! a `Mutex`.
//!
//! The use case is parameterized by its payment gateway, allowing for easy
//! testing and different execution environments.

use crate::domain::entities::Ledger;
use crate::domain::ports::{LedgerEvent, LedgerEventSink, NoopEventSink, PaymentGateway};
use crate::domain::value_objects::{AccountId, AssetId, Money, RegistryInfo};
use crate::error::NotaryResult;

use super::receipt::Receipt;

/// The registry's operating surface: ledger + payment gateway + event sink.
pub struct Notary<G: PaymentGateway> {
    ledger: Ledger,
    gateway: G,
    events: Box<dyn LedgerEventSink>,
}

impl<G: PaymentGateway> Notary<G> {
    /// Create a notary over an empty ledger
    pub fn new(info: RegistryInfo, gateway: G) -> Self {
        Self::with_ledger(Ledger::new(info), gateway)
    }

    /// Resume a notary from an existing ledger (e.g. a loaded snapshot)
    pub fn with_ledger(ledger: Ledger, gateway: G) -> Self {
        Self {
            ledger,
            gateway,
            events: Box::new(NoopEventSink),
        }
    }

    /// Replace the event sink (defaults to [`NoopEventSink`])
    pub fn with_event_sink(mut self, sink: Box<dyn LedgerEventSink>) -> Self {
        self.events = sink;
        self
    }

    /// Read access to the ledger
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Read access to the payment gateway
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Mutable access to the payment gateway (funding test accounts, etc.)
    pub fn gateway_mut(&mut self) -> &mut G {
        &mut self.gateway
    }

    /// Registry metadata (collection name and symbol)
    pub fn info(&self) -> &RegistryInfo {
        self.ledger.info()
    }

    /// Register a new star owned by `caller`. No payment involved.
    pub fn create_star(&mut self, id: AssetId, name: &str, caller: &AccountId) -> NotaryResult<()> {
        self.ledger.create_star(id, name, caller)?;
        self.events.on_event(LedgerEvent::StarCreated {
            id,
            name: name.to_string(),
            owner: caller.clone(),
        });
        Ok(())
    }

    /// Put a star owned by `caller` up for sale at `price`
    pub fn list_for_sale(
        &mut self,
        id: AssetId,
        price: Money,
        caller: &AccountId,
    ) -> NotaryResult<()> {
        self.ledger.list_for_sale(id, price, caller)?;
        self.events.on_event(LedgerEvent::StarListed {
            id,
            price,
            owner: caller.clone(),
        });
        Ok(())
    }

    /// Buy a listed star, attaching `paid`.
    ///
    /// Atomic with respect to any other operation on the same notary: the
    /// trade is validated first, exactly the listing price moves from buyer
    /// to seller (the excess never leaves the buyer), and only then is
    /// ownership reassigned and the listing consumed. A gateway failure
    /// surfaces as an error with the ledger untouched.
    pub fn purchase(
        &mut self,
        id: AssetId,
        caller: &AccountId,
        paid: Money,
    ) -> NotaryResult<Receipt> {
        let settlement = self.ledger.plan_purchase(id, caller, paid)?;
        self.gateway
            .transfer(caller, &settlement.seller, settlement.price)?;
        // Cannot fail after a successful plan: &mut self guarantees nothing
        // touched the listing in between.
        self.ledger.settle_purchase(id, caller)?;

        self.events.on_event(LedgerEvent::StarSold {
            id,
            seller: settlement.seller.clone(),
            buyer: caller.clone(),
            price: settlement.price,
            refund: settlement.refund,
        });
        Ok(Receipt {
            seller: settlement.seller,
            price: settlement.price,
            refund: settlement.refund,
        })
    }

    /// Hand a star owned by `caller` directly to `to`, clearing any listing
    pub fn transfer_star(
        &mut self,
        id: AssetId,
        to: &AccountId,
        caller: &AccountId,
    ) -> NotaryResult<()> {
        self.ledger.transfer_star(id, to, caller)?;
        self.events.on_event(LedgerEvent::StarTransferred {
            id,
            from: caller.clone(),
            to: to.clone(),
        });
        Ok(())
    }

    /// Swap ownership of two stars; `caller` must own at least one side
    pub fn exchange_stars(
        &mut self,
        id_a: AssetId,
        id_b: AssetId,
        caller: &AccountId,
    ) -> NotaryResult<()> {
        let (owner_a, owner_b) = self.ledger.exchange_stars(id_a, id_b, caller)?;
        self.events.on_event(LedgerEvent::StarsExchanged {
            id_a,
            id_b,
            owner_a,
            owner_b,
        });
        Ok(())
    }

    /// The immutable name recorded at creation
    pub fn look_up(&self, id: AssetId) -> NotaryResult<&str> {
        self.ledger.look_up(id)
    }

    /// The current owner of a star
    pub fn owner_of(&self, id: AssetId) -> NotaryResult<AccountId> {
        self.ledger.owner_of(id).cloned()
    }

    /// The current listing price, if the star is for sale
    pub fn sale_price(&self, id: AssetId) -> Option<Money> {
        self.ledger.sale_price(id)
    }
}
