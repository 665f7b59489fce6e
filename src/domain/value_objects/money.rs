//! Money Value Object
//!
//! Prices and payments are integer base units (the smallest indivisible
//! denomination, e.g. wei). Arithmetic is checked and exact; there is no
//! floating point anywhere in the payment path.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Non-negative monetary amount in base units.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u128);

impl Money {
    /// Zero amount
    pub const ZERO: Money = Money(0);

    /// Create an amount from base units
    pub const fn new(base_units: u128) -> Self {
        Self(base_units)
    }

    /// The amount in base units
    pub const fn base_units(self) -> u128 {
        self.0
    }

    /// Whether the amount is zero
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Checked addition; `None` on overflow
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Checked subtraction; `None` when `other` exceeds `self`
    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }

    /// Saturating addition; caps at the largest representable amount
    pub fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }
}

// Display is the plain base-unit count; rendering in larger denominations
// is a presentation concern left to embedders.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
