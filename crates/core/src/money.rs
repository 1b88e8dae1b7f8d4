//! Exact-decimal money value object.
//!
//! All monetary arithmetic in the ledger goes through [`Money`], which wraps
//! `rust_decimal::Decimal` and rejects values with more than two fractional
//! digits on every construction path (constructor, parsing, deserialization).
//! Binary floating point never enters the model, so repeated deposits and
//! transfers cannot accumulate rounding drift.

use core::ops::Neg;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum fractional digits a monetary amount may carry (minor units).
pub const MONEY_SCALE: u32 = 2;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// The value carried more than two fractional digits.
    #[error("amount {0} has more than two fractional digits")]
    TooManyDecimals(Decimal),

    /// The value could not be parsed as a decimal at all.
    #[error("malformed amount: {0}")]
    Malformed(String),
}

/// A signed monetary amount with at most two fractional digits.
///
/// `Money` is a value object: compared by value, immutable, `Copy`.
/// Balances additionally enforce non-negativity at the operation layer;
/// transaction-record amounts are signed (negative = funds leaving the
/// owning account).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Validate and wrap a decimal amount.
    pub fn new(value: Decimal) -> Result<Self, MoneyError> {
        if value.scale() > MONEY_SCALE {
            return Err(MoneyError::TooManyDecimals(value));
        }
        Ok(Self(value))
    }

    /// Build from an integer count of minor units (cents).
    pub fn from_minor_units(cents: i64) -> Self {
        Self(Decimal::new(cents, MONEY_SCALE))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Checked addition; `None` on overflow.
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Checked subtraction; `None` on overflow.
    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl From<Money> for Decimal {
    fn from(value: Money) -> Decimal {
        value.0
    }
}

impl TryFrom<Decimal> for Money {
    type Error = MoneyError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Money::new(value)
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value =
            Decimal::from_str(s).map_err(|e| MoneyError::Malformed(format!("{s}: {e}")))?;
        Money::new(value)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
