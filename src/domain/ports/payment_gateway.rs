//! PaymentGateway port - abstraction for moving value between accounts
//!
//! The registry never holds balances. During a purchase it instructs the
//! execution environment, through this trait, to move the sale price from
//! buyer to seller. The transfer must be all-or-nothing: the use case only
//! commits the ownership change after the gateway reports success, so a
//! failed delivery leaves the ledger untouched.

use crate::domain::value_objects::{AccountId, Money};

/// Result type for payment operations
pub type PaymentResult<T> = Result<T, PaymentError>;

/// Payment delivery errors raised by the environment
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaymentError {
    /// The paying account cannot cover the amount
    #[error("insufficient funds in account '{account}': need {needed}, have {available}")]
    InsufficientFunds {
        account: AccountId,
        needed: Money,
        available: Money,
    },

    /// The environment refused the transfer for its own reasons
    #[error("payment rejected: {message}")]
    Rejected { message: String },
}

/// Abstract value-transfer collaborator.
///
/// Implemented by infrastructure (`InMemoryBank` for tests and demos) or by
/// an embedder bridging to a real accounts system.
pub trait PaymentGateway {
    /// Move `amount` from `from` to `to`, atomically.
    ///
    /// A zero amount must succeed without side effects.
    fn transfer(&mut self, from: &AccountId, to: &AccountId, amount: Money) -> PaymentResult<()>;
}
