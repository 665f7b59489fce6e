//! Error types for the star notary
//!
//! Uses `thiserror` for library errors. Every error is terminal for the call
//! that raised it: no retry, no partial commit, and the registry's state is
//! guaranteed unchanged on any error path.

use thiserror::Error;

use crate::domain::ports::PaymentError;
use crate::domain::value_objects::{AccountId, AssetId, Money};

/// Result type alias for registry operations
pub type NotaryResult<T> = Result<T, NotaryError>;

/// Main error type for registry operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotaryError {
    /// An asset with this id is already registered
    #[error("asset {id} already exists")]
    DuplicateAsset { id: AssetId },

    /// No asset is registered under this id
    #[error("no such asset: {id}")]
    NoSuchAsset { id: AssetId },

    /// Caller is not the asset's current owner
    #[error("account '{caller}' does not own asset {id}")]
    NotOwner { id: AssetId, caller: AccountId },

    /// The asset has no active listing
    #[error("asset {id} is not for sale")]
    NotForSale { id: AssetId },

    /// Payment attached to the purchase does not cover the listing price
    #[error("insufficient payment: offered {offered}, asking price is {price}")]
    InsufficientPayment { offered: Money, price: Money },

    /// Listing price must be positive
    #[error("invalid sale price: {price}")]
    InvalidPrice { price: Money },

    /// Exchange requires two distinct assets
    #[error("cannot exchange asset {id} with itself")]
    SameAsset { id: AssetId },

    /// Asset names must contain at least one non-whitespace character
    #[error("asset name must not be empty")]
    InvalidName,

    /// Buyer already owns the asset
    #[error("account '{caller}' already owns asset {id}")]
    SelfPurchase { id: AssetId, caller: AccountId },

    /// The payment gateway refused or failed the value transfer
    #[error("payment delivery failed: {0}")]
    Payment(#[from] PaymentError),
}
