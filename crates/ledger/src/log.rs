//! Storage seam for the append-only transaction log.

use std::sync::Arc;

use minibank_accounts::AccountNumber;
use minibank_core::StoreError;

use crate::record::{LedgerEntry, TransactionRecord};

/// Append-only transaction log.
///
/// No update or delete exists in the model. Corrections, should they ever be
/// needed, are made by appending compensating entries.
pub trait TransactionLog: Send + Sync {
    /// Commit an entry, assigning sequence ids to its leg(s).
    ///
    /// A [`LedgerEntry::Pair`] must be committed atomically: both legs become
    /// visible together or the append fails as a whole. Returns the committed
    /// records in leg order (debit before credit for a pair).
    fn append(&self, entry: LedgerEntry) -> Result<Vec<TransactionRecord>, StoreError>;

    /// Records where `account` is the owning side or the account
    /// counterparty, ordered most-recent-first (timestamp, then sequence id,
    /// descending).
    fn query_by_account(
        &self,
        account: &AccountNumber,
    ) -> Result<Vec<TransactionRecord>, StoreError>;
}

impl<L> TransactionLog for Arc<L>
where
    L: TransactionLog + ?Sized,
{
    fn append(&self, entry: LedgerEntry) -> Result<Vec<TransactionRecord>, StoreError> {
        (**self).append(entry)
    }

    fn query_by_account(
        &self,
        account: &AccountNumber,
    ) -> Result<Vec<TransactionRecord>, StoreError> {
        (**self).query_by_account(account)
    }
}
