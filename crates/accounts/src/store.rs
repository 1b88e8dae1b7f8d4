//! Storage seam for accounts.

use std::sync::Arc;

use minibank_core::{CustomerId, Money, StoreError};

use crate::account::{Account, AccountNumber, CardNumber};

/// Account storage.
///
/// Implementations must guarantee that a single call is applied atomically,
/// but they do **not** serialize concurrent read-validate-write sequences:
/// `update_balance` must never be reached by two concurrent operations on the
/// same account without external serialization. The ledger engine's
/// per-account lock registry provides it; callers going around the engine
/// are on their own.
pub trait AccountStore: Send + Sync {
    /// Insert a new account. Fails with [`StoreError::Duplicate`] if the
    /// account number or card number is already taken.
    fn create(&self, account: Account) -> Result<Account, StoreError>;

    fn find_by_account_number(
        &self,
        number: &AccountNumber,
    ) -> Result<Option<Account>, StoreError>;

    fn find_by_card(&self, card: &CardNumber) -> Result<Option<Account>, StoreError>;

    /// All accounts held by one owner (one or more per customer).
    fn find_by_owner(&self, owner: CustomerId) -> Result<Vec<Account>, StoreError>;

    /// Overwrite the stored balance. [`StoreError::NotFound`] if the account
    /// does not exist.
    fn update_balance(&self, number: &AccountNumber, balance: Money) -> Result<(), StoreError>;
}

impl<S> AccountStore for Arc<S>
where
    S: AccountStore + ?Sized,
{
    fn create(&self, account: Account) -> Result<Account, StoreError> {
        (**self).create(account)
    }

    fn find_by_account_number(
        &self,
        number: &AccountNumber,
    ) -> Result<Option<Account>, StoreError> {
        (**self).find_by_account_number(number)
    }

    fn find_by_card(&self, card: &CardNumber) -> Result<Option<Account>, StoreError> {
        (**self).find_by_card(card)
    }

    fn find_by_owner(&self, owner: CustomerId) -> Result<Vec<Account>, StoreError> {
        (**self).find_by_owner(owner)
    }

    fn update_balance(&self, number: &AccountNumber, balance: Money) -> Result<(), StoreError> {
        (**self).update_balance(number, balance)
    }
}
