//! In-memory append-only transaction log.

use std::sync::RwLock;

use minibank_accounts::AccountNumber;
use minibank_core::StoreError;
use minibank_ledger::{
    Counterparty, LedgerEntry, PendingRecord, RecordId, TransactionLog, TransactionRecord,
};

#[derive(Debug, Default)]
struct Inner {
    next_id: u64,
    records: Vec<TransactionRecord>,
}

/// Append-only record store. A transfer pair is committed under one write
/// guard, so both legs become visible together or not at all.
#[derive(Debug, Default)]
pub struct InMemoryTransactionLog {
    inner: RwLock<Inner>,
}

impl InMemoryTransactionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of committed records (admin dashboards).
    pub fn len(&self) -> usize {
        self.inner.read().map(|i| i.records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Inner {
    fn commit(&mut self, pending: PendingRecord) -> TransactionRecord {
        self.next_id += 1;
        let record = pending.committed(RecordId(self.next_id));
        self.records.push(record.clone());
        record
    }
}

impl TransactionLog for InMemoryTransactionLog {
    fn append(&self, entry: LedgerEntry) -> Result<Vec<TransactionRecord>, StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        let committed = match entry {
            LedgerEntry::Single(leg) => vec![inner.commit(leg)],
            LedgerEntry::Pair { debit, credit } => {
                vec![inner.commit(debit), inner.commit(credit)]
            }
        };
        tracing::debug!(records = committed.len(), total = inner.records.len(), "entry appended");
        Ok(committed)
    }

    fn query_by_account(
        &self,
        account: &AccountNumber,
    ) -> Result<Vec<TransactionRecord>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        let mut out: Vec<TransactionRecord> = inner
            .records
            .iter()
            .filter(|r| {
                r.account == *account
                    || matches!(&r.counterparty, Counterparty::Account(other) if other == account)
            })
            .cloned()
            .collect();
        // Most-recent-first; sequence id breaks timestamp ties (a transfer's
        // two legs share one timestamp).
        out.sort_by(|a, b| (b.timestamp, b.id).cmp(&(a.timestamp, a.id)));
        Ok(out)
    }
}
