//! Purchase settlement service
//!
//! Pure pricing logic for a purchase: given the listing price and the payment
//! attached to the call, decide how much goes to the seller and how much is
//! returned to the buyer. No state, no I/O.

use crate::domain::value_objects::{AccountId, Money};
use crate::error::{NotaryError, NotaryResult};

/// How a purchase settles: exactly `price` to `seller`, `refund` back to the
/// buyer. `refund` is zero when the payment matches the price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    /// Account that receives the sale proceeds
    pub seller: AccountId,
    /// Amount routed to the seller (the listing price)
    pub price: Money,
    /// Excess payment returned to the buyer
    pub refund: Money,
}

impl Settlement {
    /// Split `paid` into seller proceeds and buyer refund.
    ///
    /// Fails when `paid` does not cover `price`; the subtraction is checked,
    /// so a refund can never underflow.
    pub fn plan(seller: AccountId, price: Money, paid: Money) -> NotaryResult<Settlement> {
        let refund = paid
            .checked_sub(price)
            .ok_or(NotaryError::InsufficientPayment {
                offered: paid,
                price,
            })?;
        Ok(Settlement {
            seller,
            price,
            refund,
        })
    }
}
