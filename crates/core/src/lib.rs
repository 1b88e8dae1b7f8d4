//! `minibank-core` — shared domain primitives.
//!
//! This crate contains **pure domain** building blocks (no storage, no IO):
//! strongly-typed identifiers, the `Money` value object, and the error type
//! shared by storage-trait implementations.

pub mod error;
pub mod id;
pub mod money;

pub use error::StoreError;
pub use id::{BankId, CategoryId, CustomerId, EntryId};
pub use money::{Money, MoneyError};
