//! Per-account serialization for balance mutations.
//!
//! Balance reads and writes are separate store calls, so two concurrent
//! operations on one account could interleave and lose an update. Every
//! mutating engine operation holds the lock(s) of the account(s) it touches
//! for the whole read-validate-write-append sequence. Transfers take both locks in
//! lexicographic account-number order, so two opposite-direction transfers
//! over the same pair cannot deadlock.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use minibank_accounts::AccountNumber;

/// Registry of one mutex per account, created on first use.
///
/// Entries are never removed; accounts are never deleted and the registry
/// grows with the (bounded, single-node) account population.
#[derive(Debug, Default)]
pub(crate) struct AccountLocks {
    inner: Mutex<HashMap<AccountNumber, Arc<Mutex<()>>>>,
}

/// Guard over one or two account locks. Dropping releases in reverse
/// acquisition order.
pub(crate) struct HeldLocks<'a> {
    _guards: Vec<MutexGuard<'a, ()>>,
}

impl AccountLocks {
    /// The mutex for one account, creating it if absent. `None` if the
    /// registry mutex was poisoned.
    fn handle(&self, account: &AccountNumber) -> Option<Arc<Mutex<()>>> {
        let mut map = self.inner.lock().ok()?;
        Some(Arc::clone(
            map.entry(account.clone()).or_default(),
        ))
    }

    /// Handles for the accounts involved in one operation, deduplicated and
    /// sorted into the global acquisition order.
    pub(crate) fn handles(&self, accounts: &[&AccountNumber]) -> Option<Vec<Arc<Mutex<()>>>> {
        let mut ordered: Vec<&AccountNumber> = accounts.to_vec();
        ordered.sort();
        ordered.dedup();
        ordered.into_iter().map(|a| self.handle(a)).collect()
    }
}

/// Lock every handle in order, surfacing poisoning as `None`.
pub(crate) fn lock_all(handles: &[Arc<Mutex<()>>]) -> Option<HeldLocks<'_>> {
    let mut guards = Vec::with_capacity(handles.len());
    for handle in handles {
        guards.push(handle.lock().ok()?);
    }
    Some(HeldLocks { _guards: guards })
}
