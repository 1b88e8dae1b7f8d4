//! Storage error model.
//!
//! Every storage trait in the workspace (`AccountStore`, `CustomerStore`,
//! `TransactionLog`) reports failures through [`StoreError`]. Domain layers
//! wrap it in their own error enums; nothing here is fatal to the process.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The keyed record does not exist.
    #[error("record not found")]
    NotFound,

    /// A uniqueness constraint (account number, card number, id) was hit.
    #[error("duplicate key: {0}")]
    Duplicate(String),

    /// A storage lock was poisoned by a panicking writer.
    #[error("storage lock poisoned")]
    LockPoisoned,
}
