//! The ledger engine: deposit, transfer, card purchase, history.
//!
//! The engine composes the three storage seams (`AccountStore`,
//! `CustomerStore`, `TransactionLog`) and is the only place balances are
//! mutated. Every mutating operation:
//!
//! 1. validates its inputs,
//! 2. takes the per-account lock(s) in the global order,
//! 3. re-reads the account(s) under the lock and re-validates the owner's
//!    lifecycle gate,
//! 4. writes the new balance(s), and
//! 5. appends the corresponding ledger entry.
//!
//! If the append fails, the balance writes are compensated before the error
//! is returned, so callers never observe a half-applied operation.

use chrono::Utc;
use thiserror::Error;

use minibank_accounts::{Account, AccountNumber, AccountStore, CardNumber};
use minibank_core::{Money, StoreError};
use minibank_customers::CustomerStore;

use crate::locks::{AccountLocks, lock_all};
use crate::log::TransactionLog;
use crate::record::{LedgerEntry, TransactionRecord};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("account not found: {0}")]
    AccountNotFound(AccountNumber),

    #[error("card not found: {0}")]
    CardNotFound(CardNumber),

    /// Non-positive or non-representable amount. Scale (two fractional
    /// digits) is already enforced by `Money` construction at the boundary.
    #[error("invalid amount: {0}")]
    InvalidAmount(Money),

    #[error("insufficient funds on {account}: requested {requested}, available {available}")]
    InsufficientFunds {
        account: AccountNumber,
        requested: Money,
        available: Money,
    },

    /// Sender and receiver are the same account.
    #[error("cannot transfer from {0} to itself")]
    SelfTransfer(AccountNumber),

    /// The owning customer has not been approved (or no longer resolves).
    #[error("account {0} does not belong to an active customer")]
    AccountNotActive(AccountNumber),

    /// Lock poisoning by a panicked writer.
    #[error("concurrency conflict: {0}")]
    ConcurrencyConflict(String),

    /// A `TransactionLog` implementation broke its append contract.
    #[error("transaction log violated its append contract: {0}")]
    LogContract(&'static str),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The operations layer over accounts, customers, and the transaction log.
pub struct LedgerEngine<A, C, L> {
    accounts: A,
    customers: C,
    log: L,
    locks: AccountLocks,
}

impl<A, C, L> LedgerEngine<A, C, L>
where
    A: AccountStore,
    C: CustomerStore,
    L: TransactionLog,
{
    pub fn new(accounts: A, customers: C, log: L) -> Self {
        Self {
            accounts,
            customers,
            log,
            locks: AccountLocks::default(),
        }
    }

    /// Credit `amount` to an account on behalf of a bank officer.
    pub fn deposit(
        &self,
        account: &AccountNumber,
        amount: Money,
        teller: &str,
    ) -> Result<TransactionRecord, LedgerError> {
        ensure_positive(amount)?;

        let handles = self.locks.handles(&[account]).ok_or_else(poisoned)?;
        let _held = lock_all(&handles).ok_or_else(poisoned)?;

        let current = self.load(account)?;
        self.ensure_active(&current)?;

        let new_balance = current
            .balance
            .checked_add(amount)
            .ok_or(LedgerError::InvalidAmount(amount))?;
        self.accounts.update_balance(account, new_balance)?;

        let entry = LedgerEntry::deposit(account.clone(), amount, teller, Utc::now());
        let records = match self.log.append(entry) {
            Ok(records) => records,
            Err(e) => {
                // Undo the balance write; the lock is still held, so the
                // intermediate state was never observable.
                let _ = self.accounts.update_balance(account, current.balance);
                return Err(e.into());
            }
        };

        tracing::info!(%account, %amount, teller, "deposit committed");
        single(records)
    }

    /// Move `amount` from `sender` to `receiver` as one atomic unit: both
    /// balance writes plus the matched debit/credit pair in the log.
    pub fn transfer(
        &self,
        sender: &AccountNumber,
        receiver: &AccountNumber,
        amount: Money,
    ) -> Result<(TransactionRecord, TransactionRecord), LedgerError> {
        ensure_positive(amount)?;
        if sender == receiver {
            return Err(LedgerError::SelfTransfer(sender.clone()));
        }

        // Both locks, acquired in the global (lexicographic) order.
        let handles = self.locks.handles(&[sender, receiver]).ok_or_else(poisoned)?;
        let _held = lock_all(&handles).ok_or_else(poisoned)?;

        let sender_account = self.load(sender)?;
        let receiver_account = self.load(receiver)?;
        self.ensure_active(&sender_account)?;
        self.ensure_active(&receiver_account)?;

        if sender_account.balance < amount {
            return Err(LedgerError::InsufficientFunds {
                account: sender.clone(),
                requested: amount,
                available: sender_account.balance,
            });
        }

        let sender_new = sender_account
            .balance
            .checked_sub(amount)
            .ok_or(LedgerError::InvalidAmount(amount))?;
        let receiver_new = receiver_account
            .balance
            .checked_add(amount)
            .ok_or(LedgerError::InvalidAmount(amount))?;

        self.accounts.update_balance(sender, sender_new)?;
        if let Err(e) = self.accounts.update_balance(receiver, receiver_new) {
            let _ = self
                .accounts
                .update_balance(sender, sender_account.balance);
            return Err(e.into());
        }

        let entry = LedgerEntry::transfer(sender.clone(), receiver.clone(), amount, Utc::now());
        let records = match self.log.append(entry) {
            Ok(records) => records,
            Err(e) => {
                let _ = self
                    .accounts
                    .update_balance(sender, sender_account.balance);
                let _ = self
                    .accounts
                    .update_balance(receiver, receiver_account.balance);
                return Err(e.into());
            }
        };

        tracing::info!(%sender, %receiver, %amount, "transfer committed");
        pair(records)
    }

    /// Debit a purchase from the account linked to `card`.
    pub fn card_purchase(
        &self,
        card: &CardNumber,
        amount: Money,
    ) -> Result<TransactionRecord, LedgerError> {
        ensure_positive(amount)?;

        // Resolve the card outside the lock; the card→account binding is
        // immutable, only the balance is not.
        let resolved = self
            .accounts
            .find_by_card(card)?
            .ok_or_else(|| LedgerError::CardNotFound(card.clone()))?;
        let number = resolved.number.clone();

        let handles = self.locks.handles(&[&number]).ok_or_else(poisoned)?;
        let _held = lock_all(&handles).ok_or_else(poisoned)?;

        let current = self.load(&number)?;
        self.ensure_active(&current)?;

        if current.balance < amount {
            return Err(LedgerError::InsufficientFunds {
                account: number,
                requested: amount,
                available: current.balance,
            });
        }

        let new_balance = current
            .balance
            .checked_sub(amount)
            .ok_or(LedgerError::InvalidAmount(amount))?;
        self.accounts.update_balance(&number, new_balance)?;

        let entry = LedgerEntry::card_purchase(number.clone(), amount, Utc::now());
        let records = match self.log.append(entry) {
            Ok(records) => records,
            Err(e) => {
                let _ = self.accounts.update_balance(&number, current.balance);
                return Err(e.into());
            }
        };

        tracing::info!(account = %number, %amount, "card purchase committed");
        single(records)
    }

    /// Transaction history for an account, most-recent-first.
    ///
    /// Pure read: no locks, no side effects, idempotent and order-stable.
    /// An unknown account yields an empty history.
    pub fn history(
        &self,
        account: &AccountNumber,
    ) -> Result<Vec<TransactionRecord>, LedgerError> {
        Ok(self.log.query_by_account(account)?)
    }

    /// Current balance lookup (read-only convenience for dashboards).
    pub fn balance(&self, account: &AccountNumber) -> Result<Money, LedgerError> {
        Ok(self.load(account)?.balance)
    }

    fn load(&self, number: &AccountNumber) -> Result<Account, LedgerError> {
        self.accounts
            .find_by_account_number(number)?
            .ok_or_else(|| LedgerError::AccountNotFound(number.clone()))
    }

    fn ensure_active(&self, account: &Account) -> Result<(), LedgerError> {
        match self.customers.find(account.owner)? {
            Some(owner) if owner.can_transact() => Ok(()),
            _ => Err(LedgerError::AccountNotActive(account.number.clone())),
        }
    }
}

fn ensure_positive(amount: Money) -> Result<(), LedgerError> {
    if amount.is_positive() {
        Ok(())
    } else {
        Err(LedgerError::InvalidAmount(amount))
    }
}

fn poisoned() -> LedgerError {
    LedgerError::ConcurrencyConflict("account lock poisoned".to_string())
}

fn single(records: Vec<TransactionRecord>) -> Result<TransactionRecord, LedgerError> {
    match <[TransactionRecord; 1]>::try_from(records) {
        Ok([record]) => Ok(record),
        Err(_) => Err(LedgerError::LogContract(
            "single-leg append must return exactly one record",
        )),
    }
}

fn pair(
    records: Vec<TransactionRecord>,
) -> Result<(TransactionRecord, TransactionRecord), LedgerError> {
    match <[TransactionRecord; 2]>::try_from(records) {
        Ok([debit, credit]) => Ok((debit, credit)),
        Err(_) => Err(LedgerError::LogContract(
            "pair append must return exactly two records",
        )),
    }
}
