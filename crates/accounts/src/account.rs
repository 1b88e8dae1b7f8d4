//! The balance-holding account record and its opaque lookup keys.

use core::fmt;

use rand::RngCore;
use serde::{Deserialize, Serialize};

use minibank_core::{BankId, CustomerId, Money};

/// Opaque, externally addressable account identifier.
///
/// Generated once at account creation and immutable thereafter. The value
/// carries no structure callers may rely on.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNumber(String);

/// Opaque debit-card identifier, usable as an alternate lookup key for
/// purchase operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardNumber(String);

fn random_hex(bytes: usize) -> String {
    let mut buf = vec![0u8; bytes];
    rand::thread_rng().fill_bytes(&mut buf);
    buf.iter().map(|b| format!("{b:02x}")).collect()
}

impl AccountNumber {
    /// Generate a fresh account number (10 hex characters).
    pub fn generate() -> Self {
        Self(random_hex(5))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl CardNumber {
    /// Generate a fresh card number (16 hex characters).
    pub fn generate() -> Self {
        Self(random_hex(8))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountNumber {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for AccountNumber {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for CardNumber {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for CardNumber {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One record per account.
///
/// Created atomically alongside the owning customer at registration with a
/// zero balance. The balance is mutated only by ledger-engine operations and
/// is non-negative after any completed operation. Accounts are never deleted
/// while transaction records reference them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub number: AccountNumber,
    pub owner: CustomerId,
    pub bank: BankId,
    pub balance: Money,
    pub card: CardNumber,
}

impl Account {
    /// Open a fresh zero-balance account for `owner`, generating the
    /// account and card numbers.
    pub fn open(owner: CustomerId, bank: BankId) -> Self {
        Self {
            number: AccountNumber::generate(),
            owner,
            bank,
            balance: Money::ZERO,
            card: CardNumber::generate(),
        }
    }
}
