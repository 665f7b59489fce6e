//! Purchase receipt
//!
//! Returned by a successful purchase so callers can reconcile what actually
//! moved: exactly `price` to `seller`, `refund` retained by the buyer.

use crate::domain::value_objects::{AccountId, Money};

/// Outcome of a committed purchase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// Previous owner, who received the proceeds
    pub seller: AccountId,
    /// Amount paid to the seller (the listing price)
    pub price: Money,
    /// Excess payment that never left the buyer
    pub refund: Money,
}

impl Receipt {
    /// Whether the buyer overpaid
    pub fn has_refund(&self) -> bool {
        !self.refund.is_zero()
    }
}
