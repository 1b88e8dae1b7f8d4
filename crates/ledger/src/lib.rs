//! Ledger module: the append-only record of all money movements plus the
//! operations that keep it consistent with account balances.
//!
//! The `LedgerEngine` is the only component allowed to mutate balances. Each
//! operation (deposit, transfer, card purchase) validates, updates the
//! account store, and appends to the transaction log as one logical unit,
//! serialized per account so concurrent callers cannot produce lost updates
//! or overdraws.

pub mod engine;
pub mod log;
pub mod record;

mod locks;

pub use engine::{LedgerEngine, LedgerError};
pub use log::TransactionLog;
pub use record::{
    Counterparty, LedgerEntry, PendingRecord, RecordId, TransactionKind, TransactionRecord,
    MERCHANT_LABEL,
};
