//! In-memory bank
//!
//! A [`PaymentGateway`] backed by a plain balance table. Stands in for the
//! execution environment's value transfer in tests, demos, and embedders
//! that keep accounts in process.

use std::collections::BTreeMap;

use crate::domain::ports::{PaymentError, PaymentGateway, PaymentResult};
use crate::domain::value_objects::{AccountId, Money};

/// Balance table keyed by account; unknown accounts hold zero.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBank {
    balances: BTreeMap<AccountId, Money>,
}

impl InMemoryBank {
    /// Create an empty bank
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to an account's balance, saturating at the largest
    /// representable amount
    pub fn deposit(&mut self, account: &AccountId, amount: Money) {
        let balance = self.balances.entry(account.clone()).or_default();
        *balance = balance.saturating_add(amount);
    }

    /// Current balance; zero for accounts never seen
    pub fn balance_of(&self, account: &AccountId) -> Money {
        self.balances.get(account).copied().unwrap_or(Money::ZERO)
    }

    /// Sum of all balances, saturating (conservation checks in tests)
    pub fn total(&self) -> Money {
        self.balances
            .values()
            .fold(Money::ZERO, |acc, b| acc.saturating_add(*b))
    }
}

impl PaymentGateway for InMemoryBank {
    fn transfer(&mut self, from: &AccountId, to: &AccountId, amount: Money) -> PaymentResult<()> {
        if amount.is_zero() {
            return Ok(());
        }

        let available = self.balance_of(from);
        let remaining =
            available
                .checked_sub(amount)
                .ok_or_else(|| PaymentError::InsufficientFunds {
                    account: from.clone(),
                    needed: amount,
                    available,
                })?;

        if from == to {
            return Ok(());
        }

        let credited = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or_else(|| PaymentError::Rejected {
                message: format!("balance overflow crediting account '{to}'"),
            })?;

        self.balances.insert(from.clone(), remaining);
        self.balances.insert(to.clone(), credited);
        Ok(())
    }
}
