//! In-memory account store.

use std::collections::HashMap;
use std::sync::RwLock;

use minibank_accounts::{Account, AccountNumber, AccountStore, CardNumber};
use minibank_core::{CustomerId, Money, StoreError};

#[derive(Debug, Default)]
struct Inner {
    accounts: HashMap<AccountNumber, Account>,
    by_card: HashMap<CardNumber, AccountNumber>,
}

/// Accounts keyed by account number, with a card-number index for purchase
/// lookups.
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    inner: RwLock<Inner>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AccountStore for InMemoryAccountStore {
    fn create(&self, account: Account) -> Result<Account, StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        if inner.accounts.contains_key(&account.number) {
            return Err(StoreError::Duplicate(account.number.to_string()));
        }
        if inner.by_card.contains_key(&account.card) {
            return Err(StoreError::Duplicate(account.card.to_string()));
        }
        inner
            .by_card
            .insert(account.card.clone(), account.number.clone());
        inner.accounts.insert(account.number.clone(), account.clone());
        tracing::debug!(account = %account.number, owner = %account.owner, "account created");
        Ok(account)
    }

    fn find_by_account_number(
        &self,
        number: &AccountNumber,
    ) -> Result<Option<Account>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(inner.accounts.get(number).cloned())
    }

    fn find_by_card(&self, card: &CardNumber) -> Result<Option<Account>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(inner
            .by_card
            .get(card)
            .and_then(|number| inner.accounts.get(number))
            .cloned())
    }

    fn find_by_owner(&self, owner: CustomerId) -> Result<Vec<Account>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        let mut out: Vec<Account> = inner
            .accounts
            .values()
            .filter(|a| a.owner == owner)
            .cloned()
            .collect();
        out.sort_by(|a, b| a.number.cmp(&b.number));
        Ok(out)
    }

    fn update_balance(&self, number: &AccountNumber, balance: Money) -> Result<(), StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        match inner.accounts.get_mut(number) {
            Some(account) => {
                account.balance = balance;
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use minibank_core::BankId;

    use super::*;

    #[test]
    fn create_then_lookup_by_number_card_and_owner() {
        let store = InMemoryAccountStore::new();
        let owner = CustomerId::new();
        let account = store.create(Account::open(owner, BankId::new())).unwrap();

        assert_eq!(
            store.find_by_account_number(&account.number).unwrap(),
            Some(account.clone())
        );
        assert_eq!(store.find_by_card(&account.card).unwrap(), Some(account.clone()));
        assert_eq!(store.find_by_owner(owner).unwrap(), vec![account]);
    }

    #[test]
    fn duplicate_account_number_is_rejected() {
        let store = InMemoryAccountStore::new();
        let account = store
            .create(Account::open(CustomerId::new(), BankId::new()))
            .unwrap();

        let err = store.create(account).unwrap_err();
        assert!(matches!(err, StoreError::Duplicate(_)));
    }

    #[test]
    fn update_balance_of_missing_account_is_not_found() {
        let store = InMemoryAccountStore::new();
        let err = store
            .update_balance(&"nope".into(), Money::ZERO)
            .unwrap_err();
        assert_eq!(err, StoreError::NotFound);
    }

    #[test]
    fn one_owner_may_hold_several_accounts() {
        let store = InMemoryAccountStore::new();
        let owner = CustomerId::new();
        let bank = BankId::new();
        store.create(Account::open(owner, bank)).unwrap();
        store.create(Account::open(owner, bank)).unwrap();
        assert_eq!(store.find_by_owner(owner).unwrap().len(), 2);
    }
}
