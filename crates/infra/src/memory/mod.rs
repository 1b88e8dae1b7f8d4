//! In-memory store implementations.
//!
//! Each store is a `RwLock`-guarded map. Single calls are atomic (one write
//! guard per call); cross-call serialization is the ledger engine's job.

mod accounts;
mod customers;
mod transaction_log;

pub use accounts::InMemoryAccountStore;
pub use customers::InMemoryCustomerStore;
pub use transaction_log::InMemoryTransactionLog;
